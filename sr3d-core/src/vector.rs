/// Vector math primitives shared by every pipeline stage
use nalgebra::{SVector, Vector2, Vector3};

/// Screen-space point or 2D direction
pub type Vec2 = Vector2<f32>;

/// Object, world or camera space point
pub type Vec3 = Vector3<f32>;

/// Length-guarded operations missing from nalgebra's vectors.
///
/// nalgebra's `normalize` and `/` produce NaN or infinity for a zero input;
/// these variants leave the vector untouched instead.
pub trait VectorExt: Sized {
    /// Unit vector pointing the same way, or the input itself when it has
    /// zero length
    fn unit_vector(&self) -> Self;

    /// Normalize the receiver, leaving a zero-length vector unchanged
    fn normalize_in_place(&mut self) -> &mut Self;

    /// Divide by a scalar, returning the input unchanged for a zero divisor
    fn div_or_self(&self, scalar: f32) -> Self;
}

impl<const D: usize> VectorExt for SVector<f32, D> {
    fn unit_vector(&self) -> Self {
        let length = self.magnitude();
        if length == 0.0 {
            *self
        } else {
            *self / length
        }
    }

    fn normalize_in_place(&mut self) -> &mut Self {
        let length = self.magnitude();
        if length != 0.0 {
            *self /= length;
        }
        self
    }

    fn div_or_self(&self, scalar: f32) -> Self {
        if scalar == 0.0 {
            *self
        } else {
            *self * (1.0 / scalar)
        }
    }
}

/// Axis rotations for 3D vectors (angles in radians)
pub trait Rotate3 {
    fn rotate_x(&self, angle: f32) -> Self;
    fn rotate_y(&self, angle: f32) -> Self;
    fn rotate_z(&self, angle: f32) -> Self;

    /// Rotate about X, then Y, then Z by the components of `angles`.
    ///
    /// The order is fixed; changing it changes the rendered orientation.
    fn rotate(&self, angles: &Vec3) -> Self;
}

impl Rotate3 for Vec3 {
    fn rotate_x(&self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Vec3::new(
            self.x,
            self.y * cos - self.z * sin,
            self.y * sin + self.z * cos,
        )
    }

    fn rotate_y(&self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Vec3::new(
            self.x * cos - self.z * sin,
            self.y,
            self.x * sin + self.z * cos,
        )
    }

    fn rotate_z(&self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Vec3::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
            self.z,
        )
    }

    fn rotate(&self, angles: &Vec3) -> Self {
        self.rotate_x(angles.x)
            .rotate_y(angles.y)
            .rotate_z(angles.z)
    }
}

/// Rotation in the plane for 2D vectors
pub trait Rotate2 {
    fn rotate(&self, angle: f32) -> Self;
}

impl Rotate2 for Vec2 {
    fn rotate(&self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}
