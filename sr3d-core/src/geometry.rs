/// Indexed triangle meshes
use thiserror::Error;

use crate::vector::Vec3;

/// Errors raised while building or loading a mesh
#[derive(Error, Debug)]
pub enum MeshError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: malformed `{record}` record: {message}")]
    Malformed {
        line: usize,
        record: &'static str,
        message: String,
    },

    #[error("line {line}: face has {count} corners, at least 3 are required")]
    TooFewCorners { line: usize, count: usize },

    #[error("face {face}: vertex index {index} is outside 1..={vertex_count}")]
    IndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },
}

/// A triangle given as three 1-based indices into the vertex list, wound a -> b -> c
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Face {
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    pub fn indices(&self) -> [u32; 3] {
        [self.a, self.b, self.c]
    }
}

/// A 3D mesh: vertex positions plus the faces that reference them.
///
/// Construction validates every face index, so the rendering stages can
/// index the vertex list without further checks.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Face>) -> Result<Self, MeshError> {
        let vertex_count = vertices.len();
        for (face, indices) in faces.iter().map(Face::indices).enumerate() {
            if let Some(&index) = indices
                .iter()
                .find(|&&i| i == 0 || i as usize > vertex_count)
            {
                return Err(MeshError::IndexOutOfRange {
                    face,
                    index,
                    vertex_count,
                });
            }
        }

        Ok(Self { vertices, faces })
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// The three object-space corners of a face
    pub fn face_vertices(&self, face: &Face) -> [Vec3; 3] {
        face.indices().map(|i| self.vertices[i as usize - 1])
    }

    /// Distance from the origin to the farthest vertex.
    ///
    /// Rotation about the origin never moves a vertex farther than this.
    pub fn bounding_radius(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| v.magnitude())
            .fold(0.0, f32::max)
    }

    /// Axis-aligned cube centred on the origin.
    ///
    /// Faces are wound so that `(c - a) x (b - a)` points out of the cube.
    pub fn cube(size: f32) -> Self {
        let half = size / 2.0;
        let vertices = [
            (-1.0, -1.0, -1.0),
            (-1.0, 1.0, -1.0),
            (1.0, 1.0, -1.0),
            (1.0, -1.0, -1.0),
            (1.0, 1.0, 1.0),
            (1.0, -1.0, 1.0),
            (-1.0, 1.0, 1.0),
            (-1.0, -1.0, 1.0),
        ]
        .into_iter()
        .map(|(x, y, z)| Vec3::new(x, y, z) * half)
        .collect();

        let faces = [
            // front (-z)
            (1, 3, 2),
            (1, 4, 3),
            // right
            (4, 5, 3),
            (4, 6, 5),
            // back
            (6, 7, 5),
            (6, 8, 7),
            // left
            (8, 2, 7),
            (8, 1, 2),
            // top (+y)
            (2, 5, 7),
            (2, 3, 5),
            // bottom
            (6, 1, 8),
            (6, 4, 1),
        ]
        .into_iter()
        .map(|(a, b, c)| Face::new(a, b, c))
        .collect();

        Self { vertices, faces }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Vec3> {
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_valid_mesh() {
        let mesh = Mesh::new(triangle(), vec![Face::new(1, 2, 3)]).unwrap();
        assert_eq!(mesh.vertices().len(), 3);
        assert_eq!(mesh.faces().len(), 1);

        let [a, b, c] = mesh.face_vertices(&mesh.faces()[0]);
        assert_eq!(a, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(b, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(c, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_index_past_end_is_rejected() {
        let err = Mesh::new(triangle(), vec![Face::new(1, 2, 3), Face::new(2, 4, 3)]).unwrap_err();
        match err {
            MeshError::IndexOutOfRange {
                face,
                index,
                vertex_count,
            } => {
                assert_eq!(face, 1);
                assert_eq!(index, 4);
                assert_eq!(vertex_count, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_index_is_rejected() {
        let err = Mesh::new(triangle(), vec![Face::new(0, 1, 2)]).unwrap_err();
        assert!(matches!(err, MeshError::IndexOutOfRange { index: 0, .. }));
    }

    #[test]
    fn test_cube() {
        let cube = Mesh::cube(2.0);
        assert_eq!(cube.vertices().len(), 8);
        assert_eq!(cube.faces().len(), 12);
        assert!((cube.bounding_radius() - 3.0_f32.sqrt()).abs() < 1e-6);

        // every face normal points away from the centre
        for face in cube.faces() {
            let [a, b, c] = cube.face_vertices(face);
            let normal = (c - a).cross(&(b - a));
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(&centroid) > 0.0, "face {face:?} is wound inwards");
        }
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = Mesh::default();
        assert_eq!(mesh.bounding_radius(), 0.0);
        assert!(mesh.faces().is_empty());
    }
}
