//! Mesh file I/O for ChiselForge.
//!
//! The engine serializes shapes as Wavefront OBJ text: one `v x y z` line
//! per vertex and one `f i j k` line per triangle with **1-based** indices.
//! Only positions are written — no normals, texture coordinates, or
//! per-attribute data.
//!
//! Loading is the mirror path and doubles as the seed route for bundled
//! dense mesh assets: `v`/`f` records are consumed, `f` entries may carry
//! `/`-separated attribute references (the leading vertex index is used),
//! and all other records are skipped.
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::{load_obj, save_obj};
//! use mesh_types::seeds;
//!
//! let cube = seeds::cube();
//! save_obj(&cube, "cube.obj").unwrap();
//!
//! let reloaded = load_obj("cube.obj").unwrap();
//! assert_eq!(reloaded.face_count(), 12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod obj;

pub use error::{IoError, IoResult};
pub use obj::{load_obj, save_obj};
