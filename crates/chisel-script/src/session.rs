//! The interpreter session: instrument state plus the shared shape.

use std::io::BufRead;

use tracing::debug;

use mesh_intersect::{find_intersection, Instrument};
use mesh_sculpt::{sculpt_on_intersection, spherize};
use mesh_subdivide::subdivide;
use mesh_types::Shape;

use crate::command::Command;
use crate::error::ScriptResult;

/// Counts from one script replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptStats {
    /// Commands parsed and executed.
    pub executed: usize,
    /// Non-blank lines skipped (unknown opcode or malformed parameters).
    pub skipped: usize,
}

/// The interpreter's mutable state: the shape being edited and the
/// instrument used to aim at it.
///
/// A session is created from a seed shape, driven by zero or more scripted
/// commands, and then read out (typically for export). All state the
/// command stream touches lives here — there are no ambient globals.
///
/// # Example
///
/// ```
/// use chisel_script::Session;
/// use mesh_types::seeds;
///
/// let mut session = Session::new(seeds::cube());
/// session.run("ip 0 0 0\nis 0 0 1\nid 1\nsi\n".as_bytes())?;
///
/// // `si` snapped the instrument point onto the +z face
/// assert!((session.instrument.point.z - 1.0).abs() < 1e-10);
/// # Ok::<(), chisel_script::ScriptError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    /// The shape being edited.
    pub shape: Shape,
    /// The probe the script aims and fires.
    pub instrument: Instrument,
}

impl Session {
    /// Create a session over a seed shape, with the default instrument.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            instrument: Instrument::default(),
        }
    }

    /// Apply a single command to the session.
    ///
    /// Commands that need an intersection (`sc`, `si`) are no-ops when the
    /// instrument misses the shape.
    pub fn apply(&mut self, command: &Command) {
        match *command {
            Command::Subdivide => {
                let refined = subdivide(&self.shape);
                self.shape.replace(refined.vertices, refined.faces);
            }
            Command::SetPoint(point) => {
                self.instrument.point = point;
            }
            Command::SetSlope(slope) => {
                self.instrument.slope = slope;
            }
            Command::SetDirection(direction) => {
                self.instrument.direction = direction;
            }
            Command::Sculpt { radius, amount } => {
                let stats = sculpt_on_intersection(&mut self.shape, &self.instrument, radius, amount);
                if stats.is_none() {
                    debug!("sculpt skipped: no intersection");
                }
            }
            Command::SnapToIntersection => {
                if let Some(point) = find_intersection(&self.shape, &self.instrument) {
                    self.instrument.point = point;
                } else {
                    debug!("snap skipped: no intersection");
                }
            }
            Command::Spherize { radius } => {
                spherize(&mut self.shape, radius);
            }
        }
    }

    /// Replay a command stream against the session, strictly in order.
    ///
    /// Each line is parsed with [`Command::parse`]; lines that do not parse
    /// are skipped and counted, blank lines are ignored outright. Every
    /// command runs to completion before the next line is read.
    ///
    /// # Errors
    ///
    /// Only I/O failure from the reader aborts a replay.
    pub fn run<R: BufRead>(&mut self, reader: R) -> ScriptResult<ScriptStats> {
        let mut stats = ScriptStats::default();

        for line in reader.lines() {
            let line = line?;
            match Command::parse(&line) {
                Some(command) => {
                    debug!(?command, "execute");
                    self.apply(&command);
                    stats.executed += 1;
                }
                None => {
                    if !line.trim().is_empty() {
                        debug!(line = %line, "skip unrecognized line");
                        stats.skipped += 1;
                    }
                }
            }
        }

        debug!(
            executed = stats.executed,
            skipped = stats.skipped,
            "script replay finished"
        );
        Ok(stats)
    }
}
