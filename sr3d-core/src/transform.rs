/// Object-to-camera space transformation and rotation state
use crate::geometry::Mesh;
use crate::projection::MIN_DEPTH;
use crate::vector::{Rotate3, Vec3};

/// Rotation state around three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    /// Advance by a per-frame delta
    pub fn advance(&mut self, delta: &Vec3) {
        self.rotate(delta.x, delta.y, delta.z);
    }

    pub fn angles(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Per-frame object-to-camera transform.
///
/// A vertex is rotated by `rotation`, then by the fixed `base_rotation`
/// that orients the model, then pushed along +Z by `z_offset` so it sits in
/// front of the projection plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub rotation: Vec3,
    pub base_rotation: Vec3,
    pub z_offset: f32,
}

impl Transform {
    pub fn new(rotation: &RotationState, base_rotation: Vec3, z_offset: f32) -> Self {
        Self {
            rotation: rotation.angles(),
            base_rotation,
            z_offset,
        }
    }

    /// Map an object-space vertex to camera space
    pub fn apply(&self, vertex: &Vec3) -> Vec3 {
        let mut v = vertex.rotate(&self.rotation).rotate(&self.base_rotation);
        v.z += self.z_offset;
        v
    }

    /// Map all three corners of a triangle
    pub fn apply_triangle(&self, corners: &[Vec3; 3]) -> [Vec3; 3] {
        corners.map(|corner| self.apply(&corner))
    }

    /// Whether every vertex of `mesh` stays in front of the projection plane
    /// under any rotation
    pub fn is_safe_for(&self, mesh: &Mesh) -> bool {
        self.z_offset - mesh.bounding_radius() >= MIN_DEPTH
    }
}
