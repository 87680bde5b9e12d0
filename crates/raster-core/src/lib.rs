//! # raster-core
//!
//! Core types for pixel-buffer processing.
//!
//! This crate provides the foundational types used throughout the raster-rs
//! crates:
//!
//! - [`pixel`] - Packed-ARGB channel pack/unpack math
//! - [`PixelBuffer`], [`ArgbBuffer`] - The opaque 2-D buffer contract and an
//!   owned, thread-safe implementation
//! - [`SplitRange`], [`PixelRange`], [`PixelHandle`] - Splittable traversal
//!   ranges over pixel coordinates
//! - [`ElementRange`] - Allocation-free adaptation of a pixel range to a
//!   richer element type
//! - [`Error`], [`Result`] - The shared error type
//!
//! ## Design Philosophy
//!
//! The buffer is an external collaborator: the core never owns pixel
//! storage, it only consumes the [`PixelBuffer`] trait. Traversal is
//! expressed as splittable ranges whose halves are disjoint and
//! union-complete, which is what lets the parallel apply engine in
//! `raster-ops` mutate a shared buffer without locking.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of raster-rs and has no internal
//! dependencies:
//!
//! ```text
//! raster-core (this crate)
//!    ^
//!    |
//!    +-- raster-ops (blend library, compositor, apply engine)
//!    +-- raster-tests (integration tests)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod adapter;
pub mod buffer;
pub mod error;
pub mod pixel;
pub mod range;

// Re-exports for convenience
pub use adapter::ElementRange;
pub use buffer::{ArgbBuffer, PixelBuffer};
pub use error::{Error, Result};
pub use range::{PixelHandle, PixelRange, SplitRange, DEFAULT_MIN_SPLIT};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use raster_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adapter::ElementRange;
    pub use crate::buffer::{ArgbBuffer, PixelBuffer};
    pub use crate::error::{Error, Result};
    pub use crate::pixel::{alpha, argb, blue, green, red, with_alpha};
    pub use crate::range::{PixelHandle, PixelRange, SplitRange};
}
