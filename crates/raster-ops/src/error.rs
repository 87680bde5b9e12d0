//! Error types for blend and apply operations.

use thiserror::Error;

/// Error type for blend and apply operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Buffers have unusable dimensions for this operation.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Error surfaced from the core traversal machinery or a per-pixel
    /// action.
    #[error(transparent)]
    Core(#[from] raster_core::Error),
}

/// Result type for blend and apply operations.
pub type OpsResult<T> = Result<T, OpsError>;
