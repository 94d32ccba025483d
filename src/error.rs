//! Error types for sketchmath operations

use thiserror::Error;

/// Main error type for sketchmath operations
#[derive(Debug, Error, PartialEq)]
pub enum VectorError {
    /// Angle requested on a vector with a nonzero z component
    #[error("Can't compute the angle for a 3D vector.")]
    Angle3D,

    /// Negative value assigned as a squared magnitude
    #[error("Can't take the square root of negative squared magnitude {0}")]
    NegativeMagnitudeSq(f64),
}

/// Result type alias for sketchmath operations
pub type Result<T> = std::result::Result<T, VectorError>;
