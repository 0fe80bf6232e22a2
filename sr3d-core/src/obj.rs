/// Wavefront OBJ mesh loader
use nom::{
    bytes::complete::take_till,
    character::complete::{char, space0, space1, u32 as index},
    combinator::{all_consuming, opt},
    multi::many1,
    number::complete::float,
    sequence::{preceded, terminated},
    IResult,
};
use std::path::Path;

use crate::geometry::{Face, Mesh, MeshError};
use crate::vector::Vec3;

/// Load an OBJ file from disk
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Mesh, MeshError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let mesh = parse_obj(&text)?;
    log::debug!(
        "Loaded {}: {} vertices, {} faces",
        path.display(),
        mesh.vertices().len(),
        mesh.faces().len()
    );
    Ok(mesh)
}

/// Parse OBJ text into a validated mesh.
///
/// Only `v` and `f` records are read. Faces with more than three corners are
/// split into a triangle fan around their first corner; texture and normal
/// indices are dropped.
pub fn parse_obj(input: &str) -> Result<Mesh, MeshError> {
    let mut vertices = Vec::new();
    let mut faces = Vec::new();

    for (number, raw) in input.lines().enumerate() {
        let line = number + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        let Some((keyword, body)) = split_keyword(content) else {
            continue;
        };

        match keyword {
            "v" => {
                let (_, vertex) = all_consuming(vertex_record)(body)
                    .map_err(|e| malformed(line, "v", e))?;
                vertices.push(vertex);
            }
            "f" => {
                let (_, corners) = all_consuming(face_record)(body)
                    .map_err(|e| malformed(line, "f", e))?;
                if corners.len() < 3 {
                    return Err(MeshError::TooFewCorners {
                        line,
                        count: corners.len(),
                    });
                }
                faces.extend(
                    corners
                        .windows(2)
                        .skip(1)
                        .map(|pair| Face::new(corners[0], pair[0], pair[1])),
                );
            }
            _ => {}
        }
    }

    Mesh::new(vertices, faces)
}

fn split_keyword(line: &str) -> Option<(&str, &str)> {
    if line.is_empty() {
        return None;
    }
    match line.find(|c: char| c.is_whitespace()) {
        Some(at) => Some((&line[..at], &line[at..])),
        None => Some((line, "")),
    }
}

fn malformed(line: usize, record: &'static str, err: nom::Err<nom::error::Error<&str>>) -> MeshError {
    MeshError::Malformed {
        line,
        record,
        message: err.to_string(),
    }
}

/// `x y z [w]`, the optional weight is ignored
fn vertex_record(input: &str) -> IResult<&str, Vec3> {
    let (input, x) = preceded(space1, float)(input)?;
    let (input, y) = preceded(space1, float)(input)?;
    let (input, z) = preceded(space1, float)(input)?;
    let (input, _) = opt(preceded(space1, float))(input)?;
    let (input, _) = space0(input)?;
    Ok((input, Vec3::new(x, y, z)))
}

/// One or more `v`, `v/vt`, `v//vn` or `v/vt/vn` corners
fn face_record(input: &str) -> IResult<&str, Vec<u32>> {
    terminated(many1(preceded(space1, corner)), space0)(input)
}

fn corner(input: &str) -> IResult<&str, u32> {
    terminated(
        index,
        opt(preceded(char('/'), take_till(|c: char| c.is_whitespace()))),
    )(input)
}
