//! Error types for the library boundary.
//!
//! Rasterization itself is total; only values coming from outside (command
//! line, user input) can be rejected.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Algorithm name outside the supported set.
    #[error("unknown algorithm `{0}` (expected one of: dda, bresenham, wu)")]
    UnknownAlgorithm(String),

    /// Grid pitch must be a positive number of dots.
    #[error("invalid grid pitch {0}: must be at least 1")]
    InvalidPitch(i32),
}
