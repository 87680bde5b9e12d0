//! Pixel-buffer abstraction and the owned ARGB buffer.
//!
//! This module provides:
//! - [`PixelBuffer`] - The opaque addressable 2-D buffer the processing
//!   core operates on. Buffer storage itself is an external collaborator;
//!   the core only consumes this trait.
//! - [`ArgbBuffer`] - An owned, thread-safe implementation backed by
//!   per-pixel atomics, used by the bundled operations and tests.
//!
//! # Memory Layout
//!
//! [`ArgbBuffer`] stores packed ARGB pixels in **row-major** order,
//! top-to-bottom:
//!
//! ```text
//! Memory: [px px px px ...]  ← Row 0
//!         [px px px px ...]  ← Row 1
//!         ...
//! ```
//!
//! # Concurrency Contract
//!
//! [`PixelBuffer::set_value`] takes `&self`: implementations must guarantee
//! torn-free reads and race-free writes to *disjoint* coordinates under
//! concurrent access. The parallel apply engine only ever writes through the
//! coordinate currently held by a pixel handle, and traversal ranges cover
//! disjoint coordinate sets, so no two tasks write the same location.
//! [`ArgbBuffer`] satisfies the contract with a relaxed atomic per pixel.
//!
//! # Usage
//!
//! ```rust
//! use raster_core::ArgbBuffer;
//! use raster_core::buffer::PixelBuffer;
//!
//! let buf = ArgbBuffer::new(64, 48).unwrap();
//! buf.set_value(10, 20, 0xff336699);
//! assert_eq!(buf.value(10, 20), 0xff336699);
//! ```
//!
//! # Dependencies
//!
//! - [`crate::error::Error`] - Construction validation
//! - [`crate::range::PixelRange`] - Whole-buffer traversal factory
//!
//! # Used By
//!
//! - `raster-ops` - Blend actions and the apply engine

use crate::range::PixelRange;
use crate::{Error, Result};
use std::sync::atomic::{AtomicU32, Ordering};

/// An opaque addressable 2-D pixel buffer holding packed ARGB values.
///
/// This is the external collaborator the processing core consumes: it only
/// needs dimensions, random get/set access, and the [`pixels`](Self::pixels)
/// factory producing a traversal range over `[0, width) x [0, height)`.
///
/// Implementations must be [`Sync`] and must tolerate concurrent reads plus
/// concurrent writes to disjoint coordinates (see the module docs).
pub trait PixelBuffer: Sync {
    /// Buffer width in pixels.
    fn width(&self) -> u32;

    /// Buffer height in pixels.
    fn height(&self) -> u32;

    /// Reads the packed ARGB value at `(x, y)`.
    fn value(&self, x: u32, y: u32) -> u32;

    /// Writes the packed ARGB value at `(x, y)`.
    ///
    /// Writes land immediately in the backing storage; there is no
    /// buffering or batching.
    fn set_value(&self, x: u32, y: u32, value: u32);

    /// Total number of pixels (`width * height`).
    #[inline]
    fn len(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Returns `true` if the buffer contains no pixels.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if signed coordinates fall inside the buffer.
    #[inline]
    fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width() as i64 && y < self.height() as i64
    }

    /// Produces a row-major traversal range covering every `(x, y)` in
    /// `[0, width) x [0, height)`.
    #[inline]
    fn pixels(&self) -> PixelRange<'_, Self>
    where
        Self: Sized,
    {
        PixelRange::new(self)
    }
}

/// Owned pixel buffer of packed ARGB values.
///
/// The backing storage is one [`AtomicU32`] per pixel, which makes the
/// buffer freely shareable across the worker threads of the parallel apply
/// engine without locking: disjoint writes are race-free and reads are
/// never torn.
///
/// # Example
///
/// ```rust
/// use raster_core::ArgbBuffer;
/// use raster_core::buffer::PixelBuffer;
///
/// let buf = ArgbBuffer::new(2, 2).unwrap();
/// buf.fill(0xff000000);
/// assert_eq!(buf.snapshot(), vec![0xff000000; 4]);
/// ```
#[derive(Debug)]
pub struct ArgbBuffer {
    /// Pixel data, row-major
    data: Vec<AtomicU32>,
    /// Buffer width in pixels
    width: u32,
    /// Buffer height in pixels
    height: u32,
}

impl ArgbBuffer {
    /// Creates a buffer of the given dimensions, filled with `0x00000000`.
    ///
    /// Zero-sized buffers are permitted and simply yield empty traversal
    /// ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] when `width * height` overflows
    /// the backing storage size calculation.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| Error::invalid_dimensions(width, height, "pixel count overflow"))?;
        let data = (0..len).map(|_| AtomicU32::new(0)).collect();
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a buffer from existing row-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] when `data.len() != width * height`,
    /// or [`Error::InvalidDimensions`] on overflow.
    pub fn from_vec(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| Error::invalid_dimensions(width, height, "pixel count overflow"))?;
        if data.len() != len {
            return Err(Error::size_mismatch(len, data.len()));
        }
        Ok(Self {
            data: data.into_iter().map(AtomicU32::new).collect(),
            width,
            height,
        })
    }

    /// Overwrites every pixel with `value`.
    pub fn fill(&self, value: u32) {
        for px in &self.data {
            px.store(value, Ordering::Relaxed);
        }
    }

    /// Copies the current pixel contents into a plain `Vec`, row-major.
    pub fn snapshot(&self) -> Vec<u32> {
        self.data
            .iter()
            .map(|px| px.load(Ordering::Relaxed))
            .collect()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }
}

impl PixelBuffer for ArgbBuffer {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn value(&self, x: u32, y: u32) -> u32 {
        self.data[self.index(x, y)].load(Ordering::Relaxed)
    }

    #[inline]
    fn set_value(&self, x: u32, y: u32, value: u32) {
        self.data[self.index(x, y)].store(value, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_zeroed() {
        let buf = ArgbBuffer::new(3, 2).unwrap();
        assert_eq!(buf.len(), 6);
        assert_eq!(buf.snapshot(), vec![0; 6]);
    }

    #[test]
    fn zero_sized_buffer_is_empty() {
        let buf = ArgbBuffer::new(0, 5).unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf.snapshot(), Vec::<u32>::new());
    }

    #[test]
    fn from_vec_checks_length() {
        let err = ArgbBuffer::from_vec(2, 2, vec![0; 3]).unwrap_err();
        assert!(matches!(err, Error::SizeMismatch { expected: 4, got: 3 }));

        let buf = ArgbBuffer::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(buf.value(0, 0), 1);
        assert_eq!(buf.value(1, 1), 4);
    }

    #[test]
    fn set_and_get_row_major() {
        let buf = ArgbBuffer::new(4, 3).unwrap();
        buf.set_value(2, 1, 0xdeadbeef);
        let snap = buf.snapshot();
        assert_eq!(snap[1 * 4 + 2], 0xdeadbeef);
        assert_eq!(buf.value(2, 1), 0xdeadbeef);
    }

    #[test]
    fn fill_overwrites_all() {
        let buf = ArgbBuffer::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        buf.fill(0xff00ff00);
        assert_eq!(buf.snapshot(), vec![0xff00ff00; 4]);
    }

    #[test]
    fn contains_signed_bounds() {
        let buf = ArgbBuffer::new(4, 3).unwrap();
        assert!(buf.contains(0, 0));
        assert!(buf.contains(3, 2));
        assert!(!buf.contains(4, 0));
        assert!(!buf.contains(0, 3));
        assert!(!buf.contains(-1, 0));
    }
}
