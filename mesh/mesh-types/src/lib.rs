//! Core mesh types for ChiselForge.
//!
//! This crate provides the foundational types for the mesh-editing engine:
//!
//! - [`Shape`] - A triangle mesh with indexed vertices
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`seeds`] - Built-in starting meshes (cube, tetrahedron)
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//!
//! # Winding
//!
//! Face winding is whatever the seed mesh or subdivision produced; it is
//! never normalized. Downstream geometric tests (intersection, area) are
//! correct regardless of winding sign.
//!
//! # Example
//!
//! ```
//! use mesh_types::{Shape, Point3};
//!
//! // Create a simple triangle mesh
//! let mut shape = Shape::new();
//! shape.vertices.push(Point3::new(0.0, 0.0, 0.0));
//! shape.vertices.push(Point3::new(1.0, 0.0, 0.0));
//! shape.vertices.push(Point3::new(0.5, 1.0, 0.0));
//! shape.faces.push([0, 1, 2]);
//!
//! assert_eq!(shape.face_count(), 1);
//! assert!(!shape.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod seeds;
mod shape;
mod triangle;

pub use shape::Shape;
pub use triangle::{midpoint, Triangle};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
