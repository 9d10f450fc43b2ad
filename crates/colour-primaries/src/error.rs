//! Error types for primaries and colourspace construction.

use thiserror::Error;

/// Colourspace construction error.
#[derive(Debug, Error)]
pub enum PrimariesError {
    /// The primaries do not span XYZ, so no RGB <-> XYZ matrix exists.
    #[error("primaries of {name} are colinear; the primary matrix is singular")]
    Singular {
        /// Colourspace name.
        name: &'static str,
    },
}

/// Result type for colourspace construction.
pub type PrimariesResult<T> = Result<T, PrimariesError>;
