//! Sculpt and spherize deformation for ChiselForge.
//!
//! Two geometric mutations over a [`Shape`](mesh_types::Shape):
//!
//! - **Sculpt**: localized radial displacement along the instrument's slope,
//!   scaled by a cosine-bump [`falloff`] of distance from a contact point.
//!   [`sculpt_on_intersection`] first picks the contact point by intersecting
//!   the instrument with the shape; no intersection means no-op.
//! - **Spherize**: global radial rescale of every vertex toward a target
//!   radius.
//!
//! Both rewrite vertex positions in place; the index buffer is untouched, so
//! the shape's buffers never disagree. Degenerate inputs (zero-length slope,
//! non-positive brush radius) produce `None` rather than errors or panics.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod falloff;
mod sculpt;
mod spherize;
mod stats;

pub use falloff::falloff;
pub use sculpt::{sculpt, sculpt_on_intersection};
pub use spherize::spherize;
pub use stats::DeformStats;
