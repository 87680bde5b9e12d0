//! Error types for pixel-buffer operations.
//!
//! This module provides the unified error type shared by the raster-rs
//! crates. It covers:
//!
//! - Buffer construction and bounds checking
//! - Traversal failures reported by per-pixel actions
//!
//! # Usage
//!
//! ```rust
//! use raster_core::{Error, Result};
//!
//! fn check_pixel(x: u32, y: u32, width: u32, height: u32) -> Result<()> {
//!     if x >= width || y >= height {
//!         return Err(Error::out_of_bounds(x, y, width, height));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::buffer::ArgbBuffer`] - Construction validation
//! - [`crate::range::SplitRange`] - Action error propagation
//! - `raster-ops` - Blend and apply-engine errors

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during pixel-buffer processing.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
///
/// # Categories
///
/// - **Bounds errors**: [`OutOfBounds`](Error::OutOfBounds)
/// - **Dimension errors**: [`InvalidDimensions`](Error::InvalidDimensions),
///   [`SizeMismatch`](Error::SizeMismatch)
/// - **Traversal errors**: [`Action`](Error::Action)
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel coordinates are outside buffer bounds.
    ///
    /// Returned when attempting to access a pixel at (x, y) where
    /// `x >= width` or `y >= height`.
    #[error("pixel ({x}, {y}) out of bounds for buffer {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Buffer width
        width: u32,
        /// Buffer height
        height: u32,
    },

    /// Invalid buffer dimensions.
    ///
    /// Returned when dimensions would overflow the backing storage size
    /// calculation, or are otherwise unusable for the requested operation.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Provided pixel data does not match the buffer dimensions.
    #[error("size mismatch: expected {expected} pixels, got {got}")]
    SizeMismatch {
        /// Expected pixel count (`width * height`)
        expected: usize,
        /// Actual length of the provided data
        got: usize,
    },

    /// A per-pixel action failed during traversal.
    ///
    /// The apply engine captures the first action failure and surfaces it
    /// once the traversal has joined; errors are never silently dropped.
    #[error("action failed: {0}")]
    Action(String),

    /// Generic error with custom message.
    ///
    /// Catch-all for errors that don't fit other categories.
    /// Prefer specific error variants when possible.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::SizeMismatch`] error.
    #[inline]
    pub fn size_mismatch(expected: usize, got: usize) -> Self {
        Self::SizeMismatch { expected, got }
    }

    /// Creates an [`Error::Action`] error.
    #[inline]
    pub fn action(msg: impl Into<String>) -> Self {
        Self::Action(msg.into())
    }

    /// Creates an [`Error::Other`] error.
    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    /// Returns `true` if this error originated in a per-pixel action.
    #[inline]
    pub fn is_action_error(&self) -> bool {
        matches!(self, Self::Action(_))
    }
}
