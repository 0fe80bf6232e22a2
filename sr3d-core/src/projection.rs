/// Camera and perspective projection
use crate::vector::{Vec2, Vec3};

/// Closest camera-space depth a vertex may have and still be projected.
///
/// Anything nearer (including points behind the camera) would divide by a
/// value at or around zero.
pub const MIN_DEPTH: f32 = 1e-4;

/// Target surface dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

/// Camera configuration for 3D rendering.
///
/// Projection always assumes a canonical camera at the origin looking down
/// +Z; `position` only feeds the back-face test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Perspective focal factor, in pixels
    pub focal_length: f32,
    /// Added to every projected point after centring
    pub screen_offset: Vec2,
}

impl Camera {
    pub fn new(focal_length: f32) -> Self {
        Self {
            position: Vec3::zeros(),
            focal_length,
            screen_offset: Vec2::zeros(),
        }
    }

    /// Project a camera-space point to screen space.
    ///
    /// Returns `None` when the point is closer than [`MIN_DEPTH`].
    pub fn project_to_screen(&self, point: &Vec3, viewport: &Viewport) -> Option<Vec2> {
        if point.z.is_nan() || point.z < MIN_DEPTH {
            return None;
        }

        let center = viewport.center() + self.screen_offset;
        Some(Vec2::new(
            self.focal_length * point.x / point.z + center.x,
            self.focal_length * point.y / point.z + center.y,
        ))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(640.0)
    }
}

/// A screen-space triangle ready for depth ordering and rasterization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedTriangle {
    pub points: [Vec2; 3],
    /// Mean camera-space depth of the three corners
    pub avg_depth: f32,
    /// Index of the source face in the mesh
    pub face: usize,
}

impl ProjectedTriangle {
    /// Project three camera-space corners, or `None` if any is too close
    pub fn project(
        corners: &[Vec3; 3],
        camera: &Camera,
        viewport: &Viewport,
        face: usize,
    ) -> Option<Self> {
        let a = camera.project_to_screen(&corners[0], viewport)?;
        let b = camera.project_to_screen(&corners[1], viewport)?;
        let c = camera.project_to_screen(&corners[2], viewport)?;

        Some(Self {
            points: [a, b, c],
            avg_depth: (corners[0].z + corners[1].z + corners[2].z) / 3.0,
            face,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_creation() {
        let camera = Camera::default();
        assert_eq!(camera.focal_length, 640.0);
        assert_eq!(camera.position, Vec3::zeros());
    }

    #[test]
    fn test_axis_point_projects_to_center() {
        let camera = Camera::new(640.0);
        let viewport = Viewport::new(800, 600);
        for z in [0.001, 0.5, 1.0, 5.0, 1234.5] {
            let p = camera
                .project_to_screen(&Vec3::new(0.0, 0.0, z), &viewport)
                .unwrap();
            assert_eq!(p, Vec2::new(400.0, 300.0));
        }
    }

    #[test]
    fn test_perspective_divide() {
        let camera = Camera::new(100.0);
        let viewport = Viewport::new(200, 100);
        let p = camera
            .project_to_screen(&Vec3::new(1.0, -2.0, 4.0), &viewport)
            .unwrap();
        assert!((p.x - 125.0).abs() < 1e-4);
        assert!((p.y - 0.0).abs() < 1e-4);
    }

    #[test]
    fn test_screen_offset() {
        let mut camera = Camera::new(640.0);
        camera.screen_offset = Vec2::new(0.0, 200.0);
        let p = camera
            .project_to_screen(&Vec3::new(0.0, 0.0, 2.0), &Viewport::new(100, 100))
            .unwrap();
        assert_eq!(p, Vec2::new(50.0, 250.0));
    }

    #[test]
    fn test_degenerate_depth_is_rejected() {
        let camera = Camera::default();
        let viewport = Viewport::new(800, 600);
        assert!(camera.project_to_screen(&Vec3::new(1.0, 1.0, 0.0), &viewport).is_none());
        assert!(camera.project_to_screen(&Vec3::new(1.0, 1.0, 1e-7), &viewport).is_none());
        assert!(camera.project_to_screen(&Vec3::new(1.0, 1.0, -3.0), &viewport).is_none());
        assert!(camera.project_to_screen(&Vec3::new(1.0, 1.0, f32::NAN), &viewport).is_none());
    }

    #[test]
    fn test_triangle_average_depth() {
        let corners = [
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(1.0, 0.0, 4.0),
            Vec3::new(0.0, 1.0, 6.0),
        ];
        let tri = ProjectedTriangle::project(&corners, &Camera::default(), &Viewport::new(10, 10), 7)
            .unwrap();
        assert!((tri.avg_depth - 4.0).abs() < 1e-6);
        assert_eq!(tri.face, 7);

        let behind = [corners[0], corners[1], Vec3::new(0.0, 0.0, 0.0)];
        assert!(ProjectedTriangle::project(&behind, &Camera::default(), &Viewport::new(10, 10), 0).is_none());
    }
}
