//! Indexed triangle mesh.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Triangle;

/// An indexed triangle mesh.
///
/// This is the engine's mesh type. It stores vertex positions and faces
/// separately, with faces referencing vertices by positional index.
///
/// # Memory Layout
///
/// - `vertices`: `Vec<Point3<f64>>` - Vertex positions
/// - `faces`: `Vec<[u32; 3]>` - Triangle faces as vertex indices
///
/// # Ownership
///
/// The engine exclusively owns a shape's buffers. Structural mutations
/// (subdivision) build fresh buffers and install them with [`Shape::replace`]
/// so the vertex and index buffers are never observably out of sync.
/// Geometric mutations (sculpt, spherize) rewrite positions in place and
/// leave the index buffer untouched.
///
/// # Example
///
/// ```
/// use mesh_types::{Shape, Point3};
///
/// let mut shape = Shape::new();
/// shape.vertices.push(Point3::new(0.0, 0.0, 0.0));
/// shape.vertices.push(Point3::new(1.0, 0.0, 0.0));
/// shape.vertices.push(Point3::new(0.0, 1.0, 0.0));
/// shape.faces.push([0, 1, 2]);
///
/// assert_eq!(shape.vertex_count(), 3);
/// assert_eq!(shape.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shape {
    /// Vertex positions.
    pub vertices: Vec<Point3<f64>>,

    /// Triangle faces as indices into the vertex array.
    /// Each face is `[v0, v1, v2]`; every value lies in `[0, vertices.len())`.
    pub faces: Vec<[u32; 3]>,
}

impl Shape {
    /// Create a new empty shape.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::Shape;
    ///
    /// let shape = Shape::new();
    /// assert!(shape.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a shape with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `vertex_count` - Expected number of vertices
    /// * `face_count` - Expected number of faces
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a shape from vertex and face buffers.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Create a shape from raw parallel coordinate and index data.
    ///
    /// This is the construction path for bundled dense mesh assets supplied
    /// as flat arrays.
    ///
    /// # Arguments
    ///
    /// * `positions` - Flat vertex positions `[x0, y0, z0, x1, y1, z1, ...]`
    /// * `indices` - Flat face indices `[v0a, v1a, v2a, v0b, v1b, v2b, ...]`
    ///
    /// Returns an empty shape if either slice length is not a multiple of 3.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::Shape;
    ///
    /// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    /// let indices = [0, 1, 2];
    ///
    /// let shape = Shape::from_raw(&positions, &indices);
    /// assert_eq!(shape.vertex_count(), 3);
    /// assert_eq!(shape.face_count(), 1);
    /// ```
    #[must_use]
    pub fn from_raw(positions: &[f64], indices: &[u32]) -> Self {
        if positions.len() % 3 != 0 || indices.len() % 3 != 0 {
            return Self::new();
        }

        let vertices = positions
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();

        let faces = indices.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect();

        Self { vertices, faces }
    }

    /// Atomically install new vertex and face buffers.
    ///
    /// Both buffers are swapped in together; the previous buffers are
    /// dropped once the swap completes. Mutating operations that rebuild
    /// the mesh (subdivision) go through this so callers never observe a
    /// half-updated shape.
    #[inline]
    pub fn replace(&mut self, vertices: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) {
        self.vertices = vertices;
        self.faces = faces;
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangle faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check whether the shape has no renderable geometry.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Get the triangle at `face_index` with concrete vertex positions.
    ///
    /// Returns `None` if the index is out of range.
    #[must_use]
    pub fn triangle(&self, face_index: usize) -> Option<Triangle> {
        self.faces.get(face_index).map(|&[i0, i1, i2]| Triangle {
            v0: self.vertices[i0 as usize],
            v1: self.vertices[i1 as usize],
            v2: self.vertices[i2 as usize],
        })
    }

    /// Iterate over all triangles with concrete vertex positions.
    ///
    /// This is the read-only snapshot view consumed by collaborators
    /// (renderers, pickers) and by the engine's own whole-mesh scans.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.faces.iter().map(|&[i0, i1, i2]| Triangle {
            v0: self.vertices[i0 as usize],
            v1: self.vertices[i1 as usize],
            v2: self.vertices[i2 as usize],
        })
    }

    /// Compute the total surface area of the shape.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles().map(|tri| tri.area()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_is_empty() {
        let shape = Shape::new();
        assert!(shape.is_empty());

        let mut shape2 = Shape::new();
        shape2.vertices.push(Point3::new(0.0, 0.0, 0.0));
        assert!(shape2.is_empty()); // no faces

        shape2.faces.push([0, 0, 0]);
        assert!(!shape2.is_empty());
    }

    #[test]
    fn shape_from_raw() {
        let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let indices = [0, 1, 2];

        let shape = Shape::from_raw(&positions, &indices);
        assert_eq!(shape.vertex_count(), 3);
        assert_eq!(shape.face_count(), 1);
    }

    #[test]
    fn shape_from_raw_misaligned() {
        let shape = Shape::from_raw(&[0.0, 1.0], &[0, 1, 2]);
        assert!(shape.is_empty());

        let shape = Shape::from_raw(&[0.0, 1.0, 2.0], &[0, 1]);
        assert!(shape.is_empty());
    }

    #[test]
    fn shape_replace_swaps_both_buffers() {
        let mut shape = Shape::from_raw(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0], &[0, 1, 2]);

        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
        ];
        let faces = vec![[0, 1, 2], [1, 3, 2]];
        shape.replace(vertices, faces);

        assert_eq!(shape.vertex_count(), 4);
        assert_eq!(shape.face_count(), 2);
    }

    #[test]
    fn shape_triangle_lookup() {
        let shape = Shape::from_raw(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0], &[0, 1, 2]);

        let tri = shape.triangle(0);
        assert!(tri.is_some());
        assert!(shape.triangle(1).is_none());
    }

    #[test]
    fn shape_surface_area() {
        // Two unit right triangles forming a unit square
        let shape = Shape::from_raw(
            &[
                0.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, //
                1.0, 1.0, 0.0, //
                0.0, 1.0, 0.0,
            ],
            &[0, 1, 2, 0, 2, 3],
        );
        assert!((shape.surface_area() - 1.0).abs() < 1e-12);
    }
}
