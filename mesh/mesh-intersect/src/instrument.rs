//! The instrument: a directed probe line.

use nalgebra::{Point3, Vector3};

/// A directed probe line used to pick a location on a shape.
///
/// The slope does not need to be normalized. The direction sign (+1 or -1)
/// does not change which triangles the line passes through; it only biases
/// which side of the line counts as "forward" when ranking candidate hits
/// (see [`find_intersection`](crate::find_intersection)).
///
/// # Example
///
/// ```
/// use mesh_intersect::Instrument;
/// use mesh_types::{Point3, Vector3};
///
/// let probe = Instrument::new(Point3::origin(), Vector3::z(), 1);
/// assert_eq!(probe.direction, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instrument {
    /// Origin of the probe.
    pub point: Point3<f64>,
    /// Direction vector (not necessarily normalized).
    pub slope: Vector3<f64>,
    /// Forward-direction sign, +1 or -1.
    pub direction: i32,
}

impl Instrument {
    /// Create a new instrument.
    #[must_use]
    pub const fn new(point: Point3<f64>, slope: Vector3<f64>, direction: i32) -> Self {
        Self {
            point,
            slope,
            direction,
        }
    }

    /// The reference point far along the instrument's declared forward
    /// direction: `point + slope * (direction * 10)`.
    ///
    /// Candidate intersections are ranked by distance to this point, so the
    /// winner is the hit consistent with the declared direction rather than
    /// simply the hit nearest the origin.
    #[must_use]
    pub fn forward_reference(&self) -> Point3<f64> {
        self.point + self.slope * (f64::from(self.direction) * 10.0)
    }

    /// The slope normalized to unit length.
    ///
    /// Returns `None` for a zero-length slope (degenerate instrument).
    #[must_use]
    pub fn slope_normalized(&self) -> Option<Vector3<f64>> {
        let norm = self.slope.norm();
        if norm < f64::EPSILON {
            return None;
        }
        Some(self.slope / norm)
    }
}

impl Default for Instrument {
    /// An instrument at the origin probing along +Z, forward positive.
    fn default() -> Self {
        Self::new(Point3::origin(), Vector3::z(), 1)
    }
}
