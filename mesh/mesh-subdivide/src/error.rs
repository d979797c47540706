//! Error types for subdivision operations.

use thiserror::Error;

/// Errors that can occur during subdivision operations.
///
/// Uniform subdivision is infallible (no triangle is ever dropped, and an
/// empty shape subdivides to an empty shape); only the selective variant
/// can fail, when the caller's threshold array does not cover the mesh.
#[derive(Debug, Error)]
pub enum SubdivideError {
    /// The per-triangle threshold slice is shorter than the face count.
    #[error("threshold count mismatch: shape has {expected} faces, got {got} thresholds")]
    ThresholdCountMismatch {
        /// Number of faces in the shape.
        expected: usize,
        /// Number of thresholds supplied.
        got: usize,
    },
}

/// Result type for subdivision operations.
pub type SubdivideResult<T> = std::result::Result<T, SubdivideError>;
