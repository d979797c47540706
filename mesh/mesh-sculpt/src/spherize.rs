//! Global radial rescale toward a target radius.

use tracing::debug;

use mesh_types::Shape;

use crate::stats::DeformStats;

/// Blend factor per application: each pass moves a vertex's radial
/// distance half-way toward the target.
const BLEND: f64 = 0.5;

/// Spherize the shape: rescale every vertex so its distance from the
/// origin moves toward `target_radius`.
///
/// Each vertex at radial distance `r` is scaled by `r'/r` where
/// `r' = r + 0.5 * (target_radius - r)`. A vertex already at the target
/// radius is a fixed point and stays put; repeated passes converge on the
/// sphere. Vertices at (or within `f64::EPSILON` of) the origin have no
/// radial direction and are left untouched.
///
/// # Example
///
/// ```
/// use mesh_sculpt::spherize;
/// use mesh_types::seeds;
///
/// let mut cube = seeds::cube();
/// spherize(&mut cube, 1.0);
///
/// // Corners started at radius sqrt(3) and moved half-way to 1
/// let r = cube.vertices[0].coords.norm();
/// let expected = 3.0_f64.sqrt() * 0.5 + 0.5;
/// assert!((r - expected).abs() < 1e-10);
/// ```
pub fn spherize(shape: &mut Shape, target_radius: f64) -> DeformStats {
    let mut stats = DeformStats::default();

    for vertex in &mut shape.vertices {
        let r = vertex.coords.norm();
        if r < f64::EPSILON {
            continue;
        }

        let r_new = r + BLEND * (target_radius - r);
        vertex.coords *= r_new / r;
        stats.record((r_new - r).abs());
    }

    debug!(
        vertices = stats.vertices_displaced,
        max_displacement = stats.max_displacement,
        target_radius,
        "spherize pass"
    );

    stats
}
