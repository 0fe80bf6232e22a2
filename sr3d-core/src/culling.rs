/// Back-face culling in camera space
use crate::vector::Vec3;

/// Unnormalized face normal of a camera-space triangle, `(c - a) x (b - a)`
pub fn face_normal(corners: &[Vec3; 3]) -> Vec3 {
    let [a, b, c] = corners;
    (c - a).cross(&(b - a))
}

/// Whether a triangle faces away from the camera and should be skipped.
///
/// Must run before the perspective divide. Grazing triangles (normal
/// perpendicular to the view ray) are kept.
pub fn is_back_face(corners: &[Vec3; 3], camera_position: &Vec3) -> bool {
    let normal = face_normal(corners);
    let view = camera_position - corners[0];
    view.dot(&normal) < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Triangle in the plane z = 5 whose normal points back at the origin
    fn facing_camera() -> [Vec3; 3] {
        [
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(1.0, 0.0, 5.0),
            Vec3::new(0.0, 1.0, 5.0),
        ]
    }

    #[test]
    fn test_normal_direction() {
        let normal = face_normal(&facing_camera());
        assert_eq!(normal, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_facing_triangle_is_kept() {
        assert!(!is_back_face(&facing_camera(), &Vec3::zeros()));
    }

    #[test]
    fn test_facing_away_is_culled() {
        let [a, b, c] = facing_camera();
        assert!(is_back_face(&[a, c, b], &Vec3::zeros()));
    }

    #[test]
    fn test_grazing_triangle_is_kept() {
        // the plane x = 0 contains the camera, so the view ray lies in it
        let grazing = [
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 1.0, 5.0),
            Vec3::new(0.0, 0.0, 6.0),
        ];
        let normal = face_normal(&grazing);
        assert_eq!((Vec3::zeros() - grazing[0]).dot(&normal), 0.0);
        assert!(!is_back_face(&grazing, &Vec3::zeros()));

        let [a, b, c] = grazing;
        assert!(!is_back_face(&[a, c, b], &Vec3::zeros()));
    }

    #[test]
    fn test_camera_position_matters() {
        // seen from behind the plane the same triangle faces away
        assert!(is_back_face(&facing_camera(), &Vec3::new(0.0, 0.0, 10.0)));
    }
}
