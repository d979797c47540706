//! Core subdivision algorithms.

// Vertex indices are u32 by mesh convention; counts stay far below 4B
#![allow(clippy::cast_possible_truncation)]

use hashbrown::HashMap;
use mesh_types::{midpoint, Point3, Shape, Triangle};
use tracing::debug;

use crate::error::{SubdivideError, SubdivideResult};

/// Exact vertex identity: the bit patterns of the three coordinates.
///
/// Dedup is by exact component-wise equality, so two vertices are the same
/// iff their coordinate bits are the same (this keeps -0.0 and 0.0
/// distinct, and never merges nearly-equal midpoints).
type CoordKey = [u64; 3];

fn coord_key(p: &Point3<f64>) -> CoordKey {
    [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()]
}

/// The growing vertex buffer of one subdivision pass, with a
/// coordinate-keyed index over every vertex inserted so far.
struct VertexPool {
    vertices: Vec<Point3<f64>>,
    index: HashMap<CoordKey, u32>,
}

impl VertexPool {
    /// Seed the pool with a shape's vertices, preserving their indices.
    ///
    /// When the input contains coordinate-identical vertices, the first
    /// occurrence claims the key; later midpoints landing on that
    /// coordinate resolve to it.
    fn seeded(shape: &Shape, extra_capacity: usize) -> Self {
        let capacity = shape.vertex_count() + extra_capacity;
        let mut vertices = Vec::with_capacity(capacity);
        let mut index = HashMap::with_capacity(capacity);

        for v in &shape.vertices {
            let idx = vertices.len() as u32;
            vertices.push(*v);
            index.entry(coord_key(v)).or_insert(idx);
        }

        Self { vertices, index }
    }

    /// Return the index of a vertex with exactly these coordinates,
    /// appending it if no such vertex exists yet.
    fn dedup_or_append(&mut self, p: Point3<f64>) -> u32 {
        let next = self.vertices.len() as u32;
        let idx = *self.index.entry(coord_key(&p)).or_insert(next);
        if idx == next {
            self.vertices.push(p);
        }
        idx
    }

    fn position(&self, i: u32) -> Point3<f64> {
        self.vertices[i as usize]
    }
}

/// Split one face into its four children, inserting edge midpoints through
/// the pool.
fn split_face(pool: &mut VertexPool, faces: &mut Vec<[u32; 3]>, face: [u32; 3]) {
    let [i0, i1, i2] = face;
    let v0 = pool.position(i0);
    let v1 = pool.position(i1);
    let v2 = pool.position(i2);

    let m01 = pool.dedup_or_append(midpoint(&v0, &v1));
    let m12 = pool.dedup_or_append(midpoint(&v1, &v2));
    let m20 = pool.dedup_or_append(midpoint(&v2, &v0));

    // Corner triangles, then the center triangle
    faces.push([i0, m01, m20]);
    faces.push([m01, i1, m12]);
    faces.push([m20, m12, i2]);
    faces.push([m01, m12, m20]);
}

/// Subdivide a shape uniformly: every triangle becomes four.
///
/// Triangle count is exactly ×4; vertex count grows by at most three per
/// original triangle, fewer wherever edges are shared. Zero-area triangles
/// still produce four (degenerate) children — no triangle is ever dropped.
///
/// Output buffers are pre-sized at 4× so the pass reallocates at most once.
///
/// # Examples
///
/// ```
/// use mesh_subdivide::subdivide;
/// use mesh_types::seeds;
///
/// let cube = seeds::cube();
/// let refined = subdivide(&cube);
///
/// assert_eq!(refined.face_count(), 48);
/// // 8 original vertices + 18 unique edge midpoints
/// assert_eq!(refined.vertex_count(), 26);
/// ```
#[must_use]
pub fn subdivide(shape: &Shape) -> Shape {
    let mut pool = VertexPool::seeded(shape, shape.face_count() * 3);
    let mut faces = Vec::with_capacity(shape.face_count() * 4);

    for &face in &shape.faces {
        split_face(&mut pool, &mut faces, face);
    }

    debug!(
        faces_in = shape.face_count(),
        faces_out = faces.len(),
        vertices_in = shape.vertex_count(),
        vertices_out = pool.vertices.len(),
        "uniform subdivision pass"
    );

    Shape::from_parts(pool.vertices, faces)
}

/// Subdivide selectively: triangle `i` splits only when its current area
/// exceeds `thresholds[i]`; under-threshold triangles are copied through
/// unchanged.
///
/// The thresholds are indexed by original triangle position and are the
/// caller's area-tracking state, maintained in parallel with the mesh
/// across passes.
///
/// # Errors
///
/// Returns [`SubdivideError::ThresholdCountMismatch`] when the threshold
/// slice is shorter than the face count.
///
/// # Examples
///
/// ```
/// use mesh_subdivide::subdivide_by_areas;
/// use mesh_types::{Point3, Shape};
///
/// let mut shape = Shape::new();
/// shape.vertices.push(Point3::new(0.0, 0.0, 0.0));
/// shape.vertices.push(Point3::new(1.0, 0.0, 0.0));
/// shape.vertices.push(Point3::new(0.0, 1.0, 0.0));
/// shape.faces.push([0, 1, 2]);
///
/// // Area 0.5 is under the threshold: copied through unchanged
/// let out = subdivide_by_areas(&shape, &[1.0])?;
/// assert_eq!(out.face_count(), 1);
///
/// // Over the threshold: split into four
/// let out = subdivide_by_areas(&shape, &[0.1])?;
/// assert_eq!(out.face_count(), 4);
/// # Ok::<(), mesh_subdivide::SubdivideError>(())
/// ```
pub fn subdivide_by_areas(shape: &Shape, thresholds: &[f64]) -> SubdivideResult<Shape> {
    if thresholds.len() < shape.face_count() {
        return Err(SubdivideError::ThresholdCountMismatch {
            expected: shape.face_count(),
            got: thresholds.len(),
        });
    }

    let mut pool = VertexPool::seeded(shape, shape.face_count() * 3);
    let mut faces = Vec::with_capacity(shape.face_count() * 4);
    let mut split = 0usize;

    for (fi, &face) in shape.faces.iter().enumerate() {
        let [i0, i1, i2] = face;
        let area = Triangle::new(pool.position(i0), pool.position(i1), pool.position(i2)).area();

        if area > thresholds[fi] {
            split_face(&mut pool, &mut faces, face);
            split += 1;
        } else {
            faces.push(face);
        }
    }

    debug!(
        faces_in = shape.face_count(),
        split,
        faces_out = faces.len(),
        "selective subdivision pass"
    );

    Ok(Shape::from_parts(pool.vertices, faces))
}
