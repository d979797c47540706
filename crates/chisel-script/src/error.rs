//! Error types for script replay.

use thiserror::Error;

/// Errors that can occur while replaying a script.
///
/// Malformed script lines are *not* errors — they are skipped and counted
/// (see [`ScriptStats`](crate::ScriptStats)). Only the underlying reader
/// can fail a replay.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// I/O error while reading the command stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for script replay.
pub type ScriptResult<T> = std::result::Result<T, ScriptError>;
