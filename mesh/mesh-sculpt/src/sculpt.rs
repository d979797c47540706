//! Localized sculpt displacement.

use nalgebra::Point3;
use tracing::debug;

use mesh_intersect::{find_intersection, Instrument};
use mesh_types::Shape;

use crate::falloff::falloff;
use crate::stats::DeformStats;

/// Sculpt the shape around a contact point.
///
/// Every vertex is displaced by `normalize(slope) * falloff(d)` where `d`
/// is its distance to the contact point — vertices far outside the brush
/// receive the clamped tail of the [`falloff`] curve, not zero.
///
/// Returns `None` without touching the shape when the instrument's slope
/// has zero length or the brush radius is not positive (degenerate
/// geometry is "no result", not an error).
///
/// # Example
///
/// ```
/// use mesh_intersect::Instrument;
/// use mesh_sculpt::sculpt;
/// use mesh_types::{seeds, Point3, Vector3};
///
/// let mut cube = seeds::cube();
/// let probe = Instrument::new(Point3::origin(), Vector3::z(), 1);
///
/// let stats = sculpt(&mut cube, &probe, &Point3::new(0.0, 0.0, 1.0), 0.5, 0.2);
/// assert!(stats.is_some());
/// ```
pub fn sculpt(
    shape: &mut Shape,
    instrument: &Instrument,
    contact: &Point3<f64>,
    radius: f64,
    amount: f64,
) -> Option<DeformStats> {
    let direction = instrument.slope_normalized()?;
    if radius.is_nan() || radius <= 0.0 {
        return None;
    }

    let mut stats = DeformStats::default();
    for vertex in &mut shape.vertices {
        let distance = (*vertex - *contact).norm();
        let magnitude = falloff(distance, radius, amount);
        *vertex += direction * magnitude;
        stats.record(magnitude.abs());
    }

    debug!(
        vertices = stats.vertices_displaced,
        max_displacement = stats.max_displacement,
        radius,
        amount,
        "sculpt pass"
    );

    Some(stats)
}

/// Sculpt at the instrument's current intersection with the shape.
///
/// Finds the intersection first (see
/// [`find_intersection`](mesh_intersect::find_intersection)); when the
/// instrument misses the shape this is a no-op returning `None`.
pub fn sculpt_on_intersection(
    shape: &mut Shape,
    instrument: &Instrument,
    radius: f64,
    amount: f64,
) -> Option<DeformStats> {
    let contact = find_intersection(shape, instrument)?;
    sculpt(shape, instrument, &contact, radius, amount)
}
