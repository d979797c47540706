//! Built-in seed meshes.
//!
//! The engine is always initialized from a seed shape: either one of the
//! small built-ins here, or a bundled dense asset fed through
//! [`Shape::from_raw`]. Both are just alternative construction paths into
//! the same [`Shape`] type.

use crate::Shape;

/// A cube spanning `[-1, 1]` on each axis: 8 vertices, 12 triangles.
///
/// Winding is mixed by construction and is intentionally left as-is.
///
/// # Example
///
/// ```
/// use mesh_types::seeds;
///
/// let cube = seeds::cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.face_count(), 12);
/// ```
#[must_use]
pub fn cube() -> Shape {
    let positions = [
        1.0, -1.0, -1.0, //
        1.0, -1.0, 1.0, //
        -1.0, -1.0, 1.0, //
        -1.0, -1.0, -1.0, //
        1.0, 1.0, -1.0, //
        1.0, 1.0, 1.0, //
        -1.0, 1.0, 1.0, //
        -1.0, 1.0, -1.0,
    ];

    let indices = [
        1, 2, 3, //
        7, 6, 5, //
        4, 5, 1, //
        5, 6, 2, //
        2, 6, 7, //
        0, 3, 7, //
        0, 1, 3, //
        4, 7, 5, //
        0, 4, 1, //
        1, 5, 2, //
        3, 2, 7, //
        4, 0, 7,
    ];

    Shape::from_raw(&positions, &indices)
}

/// A tetrahedron with vertices at alternating corners of the cube
/// `[-s, s]^3`: 4 vertices, 4 triangles.
///
/// # Example
///
/// ```
/// use mesh_types::seeds;
///
/// let tet = seeds::tetrahedron(0.5);
/// assert_eq!(tet.vertex_count(), 4);
/// assert_eq!(tet.face_count(), 4);
/// ```
#[must_use]
pub fn tetrahedron(s: f64) -> Shape {
    let positions = [
        s, s, s, //
        -s, -s, s, //
        s, -s, -s, //
        -s, s, -s,
    ];

    let indices = [
        0, 1, 2, //
        0, 2, 3, //
        0, 1, 3, //
        2, 3, 1,
    ];

    Shape::from_raw(&positions, &indices)
}
