//! # raster-ops
//!
//! Blend algorithms, compositing, and the parallel per-pixel apply engine
//! for pixel buffers.
//!
//! This crate provides the operations half of raster-rs, on top of the
//! buffer and traversal types in `raster-core`.
//!
//! # Modules
//!
//! - [`blend`] - The 14-variant per-channel blend function library
//! - [`composite`] - Whole-pixel RGB and alpha-aware composition, plus the
//!   image-over-image blend action
//! - [`apply`] - The divide-and-conquer parallel apply engine
//!
//! # Example
//!
//! ```rust
//! use raster_core::{ArgbBuffer, PixelBuffer};
//! use raster_ops::{blend_images, BlendMode, BlendOp};
//!
//! let bottom = ArgbBuffer::new(2, 2).unwrap();
//! let top = ArgbBuffer::from_vec(1, 1, vec![0xffffffff]).unwrap();
//!
//! // Composite the 1x1 top buffer over the bottom buffer at (1, 1).
//! blend_images(
//!     &bottom,
//!     &top,
//!     1,
//!     1,
//!     BlendOp::Alpha { mode: BlendMode::Normal, opacity: 1.0 },
//!     false,
//! )
//! .unwrap();
//! assert_eq!(bottom.value(1, 1), 0xffffffff);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - Fork/join traversal on the rayon worker pool;
//!   without it, [`apply::apply`] runs sequentially regardless of the flag.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;

pub mod apply;
pub mod blend;
pub mod composite;

pub use apply::{apply, apply_sequential};
pub use blend::{blend_channel, BlendMode};
pub use composite::{blend_action, blend_alpha, blend_images, blend_pixel, blend_rgb, BlendOp};
pub use error::{OpsError, OpsResult};

#[cfg(feature = "parallel")]
pub use apply::apply_parallel;
