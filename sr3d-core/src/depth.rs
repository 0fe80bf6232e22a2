/// Painter's algorithm depth ordering
use crate::projection::ProjectedTriangle;

/// Sort triangles farthest-first by average depth.
///
/// The sort is stable, so triangles at equal depth keep their face order and
/// do not flicker between frames. This replaces a depth buffer only
/// approximately: interpenetrating or cyclically overlapping triangles can
/// still be drawn in the wrong order. NaN depths sort as farthest.
pub fn sort_by_depth(triangles: &mut [ProjectedTriangle]) {
    triangles.sort_by(|a, b| b.avg_depth.total_cmp(&a.avg_depth));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vec2;

    fn tri(face: usize, avg_depth: f32) -> ProjectedTriangle {
        ProjectedTriangle {
            points: [Vec2::zeros(); 3],
            avg_depth,
            face,
        }
    }

    fn faces(triangles: &[ProjectedTriangle]) -> Vec<usize> {
        triangles.iter().map(|t| t.face).collect()
    }

    #[test]
    fn test_farthest_first() {
        let mut tris = vec![tri(0, 1.0), tri(1, 3.0), tri(2, 2.0)];
        sort_by_depth(&mut tris);
        assert_eq!(faces(&tris), vec![1, 2, 0]);
    }

    #[test]
    fn test_equal_depths_keep_face_order() {
        let mut tris = vec![
            tri(0, 2.0),
            tri(1, 5.0),
            tri(2, 2.0),
            tri(3, 5.0),
            tri(4, 2.0),
        ];
        sort_by_depth(&mut tris);
        assert_eq!(faces(&tris), vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn test_nan_depth_does_not_panic() {
        let mut tris = vec![tri(0, 1.0), tri(1, f32::NAN), tri(2, 4.0)];
        sort_by_depth(&mut tris);
        assert_eq!(faces(&tris), vec![1, 2, 0]);
    }
}
