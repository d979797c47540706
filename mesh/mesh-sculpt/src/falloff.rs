//! The sculpt falloff curve.

use std::f64::consts::FRAC_PI_2;

/// Displacement magnitude at `distance` from the contact point for a brush
/// of the given `radius` and `amount`.
///
/// `falloff(d) = sin(π/2 + clamp(d/radius, 0, π/2)) * amount`
///
/// The curve is `amount` at `d = 0`, decays like a cosine bump, and the
/// input clamp holds it at `sin(π) * amount` for every `d` beyond
/// `radius * π/2`. In `f64`, `sin(π)` is ~1.2e-16, not exactly zero, so the
/// far tail is a constant sub-epsilon displacement rather than none; this
/// is the engine's defined behavior, applied to every vertex.
///
/// # Example
///
/// ```
/// use mesh_sculpt::falloff;
///
/// // Full amount at the contact point
/// assert_eq!(falloff(0.0, 0.5, 0.2), 0.2);
///
/// // Decayed partway out
/// assert!(falloff(0.3, 0.5, 0.2) < 0.2);
/// ```
#[inline]
#[must_use]
pub fn falloff(distance: f64, radius: f64, amount: f64) -> f64 {
    (FRAC_PI_2 + (distance / radius).clamp(0.0, FRAC_PI_2)).sin() * amount
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn full_amount_at_contact() {
        assert_eq!(falloff(0.0, 0.5, 0.2), 0.2);
        assert_eq!(falloff(0.0, 2.0, -0.7), -0.7);
    }

    #[test]
    fn non_increasing_up_to_clamp_boundary() {
        let radius = 0.5;
        let amount = 1.0;
        let boundary = radius * FRAC_PI_2;

        let mut previous = falloff(0.0, radius, amount);
        for step in 1..=100 {
            let d = boundary * f64::from(step) / 100.0;
            let value = falloff(d, radius, amount);
            assert!(value <= previous, "falloff increased at d = {d}");
            previous = value;
        }
    }

    #[test]
    fn tail_is_constant_sin_pi() {
        let radius = 0.5;
        let amount = 0.2;
        let tail = PI.sin() * amount;

        assert_eq!(falloff(radius * FRAC_PI_2, radius, amount), tail);
        assert_eq!(falloff(10.0, radius, amount), tail);
        assert_eq!(falloff(1e9, radius, amount), tail);

        // The tail is sub-epsilon but not exactly zero
        assert!(tail > 0.0);
        assert!(tail < 1e-15);
    }
}
