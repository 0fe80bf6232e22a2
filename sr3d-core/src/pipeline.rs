/// Transform, cull and project a whole mesh for one frame
use crate::culling::is_back_face;
use crate::geometry::Mesh;
use crate::projection::{Camera, ProjectedTriangle, Viewport};
use crate::transform::Transform;

/// Per-frame counters for the geometry stages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Faces in the mesh
    pub faces: usize,
    /// Faces dropped by back-face culling
    pub culled: usize,
    /// Faces dropped because a corner was too close to project
    pub skipped: usize,
    /// Triangles handed on to depth ordering
    pub projected: usize,
}

/// Build this frame's screen-space triangles in face order.
///
/// `out` is cleared first so its allocation can be reused across frames.
/// A triangle that cannot be projected is skipped; it never aborts the
/// frame.
pub fn project_mesh(
    mesh: &Mesh,
    transform: &Transform,
    camera: &Camera,
    viewport: &Viewport,
    cull_backfaces: bool,
    out: &mut Vec<ProjectedTriangle>,
) -> FrameStats {
    out.clear();
    let mut stats = FrameStats {
        faces: mesh.faces().len(),
        ..FrameStats::default()
    };

    for (index, face) in mesh.faces().iter().enumerate() {
        let corners = transform.apply_triangle(&mesh.face_vertices(face));

        if cull_backfaces && is_back_face(&corners, &camera.position) {
            stats.culled += 1;
            continue;
        }

        match ProjectedTriangle::project(&corners, camera, viewport, index) {
            Some(triangle) => out.push(triangle),
            None => stats.skipped += 1,
        }
    }

    stats.projected = out.len();
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Face;
    use crate::transform::RotationState;
    use crate::vector::Vec3;

    fn setup(z_offset: f32) -> (Transform, Camera, Viewport) {
        (
            Transform::new(&RotationState::zero(), Vec3::zeros(), z_offset),
            Camera::new(640.0),
            Viewport::new(800, 600),
        )
    }

    #[test]
    fn test_cube_face_on() {
        let cube = Mesh::cube(2.0);
        let (transform, camera, viewport) = setup(5.0);
        let mut out = Vec::new();

        let stats = project_mesh(&cube, &transform, &camera, &viewport, false, &mut out);
        assert_eq!(stats.projected, 12);
        assert_eq!(stats.culled, 0);

        let stats = project_mesh(&cube, &transform, &camera, &viewport, true, &mut out);
        assert_eq!(stats.faces, 12);
        assert_eq!(stats.culled, 10);
        assert_eq!(stats.projected, 2);
        // the two front triangles, in face order
        assert_eq!(out.iter().map(|t| t.face).collect::<Vec<_>>(), vec![0, 1]);
        assert!(out.iter().all(|t| (t.avg_depth - 4.0).abs() < 1e-6));
    }

    #[test]
    fn test_out_is_reused() {
        let cube = Mesh::cube(2.0);
        let (transform, camera, viewport) = setup(5.0);
        let mut out = Vec::new();
        project_mesh(&cube, &transform, &camera, &viewport, false, &mut out);
        project_mesh(&cube, &transform, &camera, &viewport, false, &mut out);
        assert_eq!(out.len(), 12);
    }

    #[test]
    fn test_triangle_through_camera_plane_is_skipped() {
        let mesh = Mesh::new(
            vec![
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(1.0, 0.0, 1.0),
                Vec3::new(0.0, 1.0, -3.0),
                Vec3::new(0.0, 1.0, 1.0),
            ],
            vec![Face::new(1, 2, 3), Face::new(1, 2, 4)],
        )
        .unwrap();
        let (transform, camera, viewport) = setup(1.0);
        let mut out = Vec::new();

        let stats = project_mesh(&mesh, &transform, &camera, &viewport, false, &mut out);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.projected, 1);
        assert_eq!(out[0].face, 1);
    }
}
