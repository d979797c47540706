//! Line/triangle intersection queries for ChiselForge.
//!
//! This crate answers the engine's picking question: given a [`Shape`] and
//! a directed probe line (the [`Instrument`]), which triangle does the line
//! pierce, and where?
//!
//! The per-triangle test is a signed-area (signed tetra volume) test: the
//! line hits a triangle when all three edges fall on the same side of the
//! plane family spanned by the line. The whole-shape query is a brute-force
//! scan — queries arrive once per script command, not per frame, so no
//! acceleration structure is used.
//!
//! "No intersection" is a first-class outcome ([`Option::None`]), never an
//! error.
//!
//! # Example
//!
//! ```
//! use mesh_intersect::{find_intersection, Instrument};
//! use mesh_types::{seeds, Point3, Vector3};
//!
//! let cube = seeds::cube();
//! let probe = Instrument::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Vector3::new(0.0, 0.0, 1.0),
//!     1,
//! );
//!
//! let hit = find_intersection(&cube, &probe);
//! assert!(hit.is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod instrument;
mod intersect;

pub use instrument::Instrument;
pub use intersect::{find_intersection, signed_area, triangle_line_intersection};

// Re-export the shape type queries operate on
pub use mesh_types::Shape;
