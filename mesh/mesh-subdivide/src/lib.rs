//! Midpoint subdivision for ChiselForge.
//!
//! Subdivision replaces each triangle with four children by inserting edge
//! midpoints. Midpoints are deduplicated against every vertex present so
//! far in the pass — original vertices and already-inserted midpoints — so
//! triangles sharing an edge reference the same new vertex and the mesh
//! never cracks.
//!
//! Two entry points:
//!
//! - [`subdivide`] - uniform: every triangle splits (count ×4)
//! - [`subdivide_by_areas`] - selective: a triangle splits only when its
//!   area exceeds a caller-supplied per-triangle threshold
//!
//! # Examples
//!
//! ```
//! use mesh_subdivide::subdivide;
//! use mesh_types::{Point3, Shape};
//!
//! let mut shape = Shape::new();
//! shape.vertices.push(Point3::new(0.0, 0.0, 0.0));
//! shape.vertices.push(Point3::new(1.0, 0.0, 0.0));
//! shape.vertices.push(Point3::new(0.5, 1.0, 0.0));
//! shape.faces.push([0, 1, 2]);
//!
//! let refined = subdivide(&shape);
//! assert_eq!(refined.face_count(), 4);
//! assert_eq!(refined.vertex_count(), 6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod subdivide;

pub use error::{SubdivideError, SubdivideResult};
pub use subdivide::{subdivide, subdivide_by_areas};
