//! The script command grammar.

use nalgebra::{Point3, Vector3};

/// Target radius used by `sm` when the script supplies none.
pub const DEFAULT_SPHERIZE_RADIUS: f64 = 1.0;

/// One parsed script command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// `sd` — subdivide the shape uniformly.
    Subdivide,
    /// `ip x y z` — set the instrument point.
    SetPoint(Point3<f64>),
    /// `is x y z` — set the instrument slope.
    SetSlope(Vector3<f64>),
    /// `id d` — set the instrument direction sign.
    SetDirection(i32),
    /// `sc radius amount` — sculpt at the current intersection.
    Sculpt {
        /// Brush radius.
        radius: f64,
        /// Displacement at the contact point.
        amount: f64,
    },
    /// `si` — snap the instrument point to the current intersection.
    SnapToIntersection,
    /// `sm [radius]` — spherize toward the target radius.
    Spherize {
        /// Target radius.
        radius: f64,
    },
}

impl Command {
    /// Parse one script line.
    ///
    /// The first two characters are the opcode; the remainder is split on
    /// whitespace and parsed positionally, with extra fields ignored.
    /// Returns `None` — the line is skipped, not an error — for lines
    /// shorter than an opcode, unknown opcodes, and missing or unparsable
    /// parameters.
    ///
    /// # Example
    ///
    /// ```
    /// use chisel_script::Command;
    ///
    /// assert_eq!(Command::parse("sd"), Some(Command::Subdivide));
    /// assert_eq!(Command::parse("id -1"), Some(Command::SetDirection(-1)));
    /// assert_eq!(Command::parse("nope"), None);
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let opcode = line.get(0..2)?;
        let mut params = line.get(2..).unwrap_or("").split_whitespace();

        match opcode {
            "sd" => Some(Self::Subdivide),
            "ip" => {
                let [x, y, z] = take_floats(&mut params)?;
                Some(Self::SetPoint(Point3::new(x, y, z)))
            }
            "is" => {
                let [x, y, z] = take_floats(&mut params)?;
                Some(Self::SetSlope(Vector3::new(x, y, z)))
            }
            "id" => {
                let d = params.next()?.parse().ok()?;
                Some(Self::SetDirection(d))
            }
            "sc" => {
                let [radius, amount] = take_floats(&mut params)?;
                Some(Self::Sculpt { radius, amount })
            }
            "si" => Some(Self::SnapToIntersection),
            "sm" => {
                let radius = match params.next() {
                    Some(field) => field.parse().ok()?,
                    None => DEFAULT_SPHERIZE_RADIUS,
                };
                Some(Self::Spherize { radius })
            }
            _ => None,
        }
    }
}

/// Take the next `N` whitespace fields as floats, left to right.
fn take_floats<'a, const N: usize>(
    params: &mut impl Iterator<Item = &'a str>,
) -> Option<[f64; N]> {
    let mut out = [0.0_f64; N];
    for value in &mut out {
        *value = params.next()?.parse().ok()?;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_subdivide() {
        assert_eq!(Command::parse("sd"), Some(Command::Subdivide));
    }

    #[test]
    fn parse_instrument_point() {
        assert_eq!(
            Command::parse("ip 1 2.5 -3"),
            Some(Command::SetPoint(Point3::new(1.0, 2.5, -3.0)))
        );
    }

    #[test]
    fn parse_instrument_slope() {
        assert_eq!(
            Command::parse("is 0 0 1"),
            Some(Command::SetSlope(Vector3::new(0.0, 0.0, 1.0)))
        );
    }

    #[test]
    fn parse_direction_sign() {
        assert_eq!(Command::parse("id 1"), Some(Command::SetDirection(1)));
        assert_eq!(Command::parse("id -1"), Some(Command::SetDirection(-1)));
    }

    #[test]
    fn parse_sculpt() {
        assert_eq!(
            Command::parse("sc 0.5 0.2"),
            Some(Command::Sculpt {
                radius: 0.5,
                amount: 0.2
            })
        );
    }

    #[test]
    fn parse_snap_and_spherize() {
        assert_eq!(Command::parse("si"), Some(Command::SnapToIntersection));
        assert_eq!(
            Command::parse("sm"),
            Some(Command::Spherize {
                radius: DEFAULT_SPHERIZE_RADIUS
            })
        );
        assert_eq!(
            Command::parse("sm 2.5"),
            Some(Command::Spherize { radius: 2.5 })
        );
    }

    #[test]
    fn extra_fields_are_ignored() {
        assert_eq!(Command::parse("sd and then some"), Some(Command::Subdivide));
        assert_eq!(
            Command::parse("ip 1 2 3 4 5"),
            Some(Command::SetPoint(Point3::new(1.0, 2.0, 3.0)))
        );
    }

    #[test]
    fn unknown_opcode_is_skipped() {
        assert_eq!(Command::parse("xx 1 2 3"), None);
        assert_eq!(Command::parse("zz"), None);
    }

    #[test]
    fn short_line_is_skipped() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("s"), None);
    }

    #[test]
    fn truncated_params_are_skipped() {
        assert_eq!(Command::parse("ip 1 2"), None);
        assert_eq!(Command::parse("sc 0.5"), None);
        assert_eq!(Command::parse("id"), None);
    }

    #[test]
    fn unparsable_params_are_skipped() {
        assert_eq!(Command::parse("ip one two three"), None);
        assert_eq!(Command::parse("sm huge"), None);
        assert_eq!(Command::parse("id 1.5"), None);
    }
}
