//! OBJ (Wavefront) file format support.
//!
//! ASCII only. The subset this engine reads and writes:
//!
//! ```text
//! v 1.0 -1.0 0.5      # vertex position
//! f 1 2 3             # triangle, 1-based vertex indices
//! f 1/4 2/5 3/6       # attribute references after '/' are ignored
//! ```
//!
//! Comments (`#`) and unrecognized record types (`vn`, `vt`, `o`, ...) are
//! skipped on load.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use mesh_types::{Point3, Shape};
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Save a shape to an OBJ file.
///
/// Writes one `v` line per vertex and one `f` line per triangle with
/// 1-based indices. Positions only.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
///
/// # Example
///
/// ```no_run
/// use mesh_io::save_obj;
/// use mesh_types::seeds;
///
/// save_obj(&seeds::cube(), "cube.obj").unwrap();
/// ```
pub fn save_obj<P: AsRef<Path>>(shape: &Shape, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_obj(shape, &mut writer)?;
    writer.flush()?;

    debug!(
        path = %path.display(),
        vertices = shape.vertex_count(),
        faces = shape.face_count(),
        "saved OBJ"
    );
    Ok(())
}

/// Load a shape from an OBJ file.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist ([`IoError::FileNotFound`])
/// - A `v` or `f` record is malformed
/// - A face is not a triangle, or references a vertex that does not exist
pub fn load_obj<P: AsRef<Path>>(path: P) -> IoResult<Shape> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;

    let shape = read_obj(BufReader::new(file))?;

    debug!(
        path = %path.display(),
        vertices = shape.vertex_count(),
        faces = shape.face_count(),
        "loaded OBJ"
    );
    Ok(shape)
}

fn write_obj<W: Write>(shape: &Shape, writer: &mut W) -> IoResult<()> {
    for v in &shape.vertices {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for &[i0, i1, i2] in &shape.faces {
        writeln!(writer, "f {} {} {}", i0 + 1, i1 + 1, i2 + 1)?;
    }
    Ok(())
}

fn read_obj<R: BufRead>(reader: R) -> IoResult<Shape> {
    let mut shape = Shape::new();

    for line in reader.lines() {
        let line = line?;
        let mut fields = line.split_whitespace();

        match fields.next() {
            Some("v") => {
                let v = parse_vertex(&mut fields)?;
                shape.vertices.push(v);
            }
            Some("f") => {
                let face = parse_face(&mut fields, shape.vertex_count())?;
                shape.faces.push(face);
            }
            // Comments, groups, normals, texture coords, ...
            _ => {}
        }
    }

    Ok(shape)
}

fn parse_vertex<'a, I>(fields: &mut I) -> IoResult<Point3<f64>>
where
    I: Iterator<Item = &'a str>,
{
    let mut coords = [0.0_f64; 3];
    for c in &mut coords {
        let field = fields
            .next()
            .ok_or_else(|| IoError::invalid_content("vertex record with fewer than 3 coordinates"))?;
        *c = field.parse()?;
    }
    Ok(Point3::new(coords[0], coords[1], coords[2]))
}

fn parse_face<'a, I>(fields: &mut I, vertex_count: usize) -> IoResult<[u32; 3]>
where
    I: Iterator<Item = &'a str>,
{
    let mut indices = [0_u32; 3];
    for i in &mut indices {
        let field = fields
            .next()
            .ok_or_else(|| IoError::invalid_content("face record with fewer than 3 vertices"))?;
        // "1/2/3" style attribute references: only the vertex index matters
        let vertex_ref = field.split('/').next().unwrap_or(field);
        let one_based: u32 = vertex_ref.parse()?;
        if one_based == 0 || one_based as usize > vertex_count {
            return Err(IoError::invalid_content(format!(
                "face references vertex {one_based} of {vertex_count}"
            )));
        }
        *i = one_based - 1;
    }

    if fields.next().is_some() {
        return Err(IoError::invalid_content("non-triangular face"));
    }

    Ok(indices)
}
