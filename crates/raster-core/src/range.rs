//! Splittable traversal ranges over pixel coordinates.
//!
//! This module provides the divide-and-conquer traversal primitives:
//!
//! - [`SplitRange`] - A splittable, exhaustive, disjoint-covering enumerator
//!   of items. Splitting a range produces two ranges whose item sets are
//!   disjoint and whose union equals the original.
//! - [`PixelHandle`] - A cursor bound to one `(x, y)` of a buffer. Identity
//!   is positional: a single handle instance is reused for every coordinate
//!   a range visits, and writes through it land directly in the buffer.
//! - [`PixelRange`] - The concrete row-major range over a whole buffer.
//!
//! # Traversal Order
//!
//! [`PixelRange`] visits coordinates in **row-major** order (left to right,
//! top to bottom) and is order-stable across repeated sequential runs. Other
//! [`SplitRange`] implementations may choose a different order; callers must
//! not rely on one across implementations.
//!
//! # Usage
//!
//! ```rust
//! use raster_core::{ArgbBuffer, SplitRange};
//! use raster_core::buffer::PixelBuffer;
//!
//! let buf = ArgbBuffer::new(4, 4).unwrap();
//! let mut range = buf.pixels();
//! range.for_each_remaining(&mut |px| {
//!     px.set_value(0xff000000 | px.x() | (px.y() << 8));
//!     Ok(())
//! }).unwrap();
//! ```
//!
//! # Dependencies
//!
//! - [`crate::buffer::PixelBuffer`] - Backing storage access
//! - [`crate::error::Result`] - Action error propagation
//!
//! # Used By
//!
//! - [`crate::adapter::ElementRange`] - Element-typed traversal
//! - `raster-ops` - The parallel apply engine

use crate::buffer::PixelBuffer;
use crate::Result;

/// Default minimum number of pixels below which a [`PixelRange`] refuses
/// to split further.
///
/// Purely a performance tuning knob, not part of the traversal contract.
pub const DEFAULT_MIN_SPLIT: usize = 4096;

/// A splittable, exhaustive enumerator of traversal items.
///
/// # Invariants
///
/// - [`split`](Self::split) yields a non-empty prefix whose item set is
///   disjoint from what remains in `self`, and the union of both equals the
///   range before the split.
/// - A range never re-issues items already consumed by itself or split off
///   to a sibling.
/// - [`remaining`](Self::remaining) is an approximate size usable for split
///   heuristics.
pub trait SplitRange {
    /// The item handed to the per-item action during traversal.
    type Item;

    /// Splits off a non-empty prefix of this range, or returns `None` when
    /// the range is too small to divide further.
    fn split(&mut self) -> Option<Self>
    where
        Self: Sized;

    /// Approximate number of items left in this range.
    fn remaining(&self) -> usize;

    /// Drains the remaining items in the range's own traversal order,
    /// invoking `f` on each.
    ///
    /// Consumed items are never re-issued, even if `f` fails partway:
    /// a subsequent call resumes where the failed one stopped.
    ///
    /// # Errors
    ///
    /// Stops at and propagates the first error returned by `f`.
    fn for_each_remaining<F>(&mut self, f: &mut F) -> Result<()>
    where
        F: FnMut(&mut Self::Item) -> Result<()>;
}

/// A cursor bound to one `(x, y)` coordinate of a pixel buffer.
///
/// The handle's identity is positional, not object identity: traversal
/// reuses a single handle instance across every coordinate of a range.
/// Reads and writes go immediately and directly to the backing buffer.
pub struct PixelHandle<'a, B: PixelBuffer> {
    buffer: &'a B,
    x: u32,
    y: u32,
}

impl<'a, B: PixelBuffer> PixelHandle<'a, B> {
    #[inline]
    pub(crate) fn new(buffer: &'a B, x: u32, y: u32) -> Self {
        Self { buffer, x, y }
    }

    /// Rebinds the handle to another coordinate.
    #[inline]
    pub(crate) fn move_to(&mut self, x: u32, y: u32) {
        self.x = x;
        self.y = y;
    }

    /// The X coordinate this handle currently denotes.
    #[inline]
    pub fn x(&self) -> u32 {
        self.x
    }

    /// The Y coordinate this handle currently denotes.
    #[inline]
    pub fn y(&self) -> u32 {
        self.y
    }

    /// Reads the packed ARGB value at the current coordinate.
    #[inline]
    pub fn value(&self) -> u32 {
        self.buffer.value(self.x, self.y)
    }

    /// Writes a packed ARGB value at the current coordinate.
    ///
    /// The write lands in the backing buffer immediately; there is no
    /// buffering or batching.
    #[inline]
    pub fn set_value(&self, value: u32) {
        self.buffer.set_value(self.x, self.y, value);
    }
}

/// Row-major [`SplitRange`] over a contiguous span of a buffer's pixels.
///
/// Created through [`PixelBuffer::pixels`], covering the whole coordinate
/// space `[0, width) x [0, height)`. Internally the span is a half-open
/// interval of linear indices; splitting hands off the front half and keeps
/// the back half, so both sides stay contiguous and row-major.
///
/// # Example
///
/// ```rust
/// use raster_core::{ArgbBuffer, SplitRange};
/// use raster_core::buffer::PixelBuffer;
///
/// let buf = ArgbBuffer::new(8, 8).unwrap();
/// let mut back = buf.pixels().with_min_split(16);
/// let front = back.split().unwrap();
/// assert_eq!(front.remaining() + back.remaining(), 64);
/// ```
pub struct PixelRange<'a, B: PixelBuffer> {
    buffer: &'a B,
    /// Next linear index to issue (row-major)
    start: usize,
    /// One past the last linear index of this range
    end: usize,
    min_split: usize,
}

impl<'a, B: PixelBuffer> PixelRange<'a, B> {
    /// Creates a range covering every pixel of `buffer`.
    pub fn new(buffer: &'a B) -> Self {
        Self {
            buffer,
            start: 0,
            end: buffer.len(),
            min_split: DEFAULT_MIN_SPLIT,
        }
    }

    /// Overrides the minimum size below which the range refuses to split.
    ///
    /// Values below 1 are clamped to 1. This only tunes task granularity;
    /// the disjoint/union-complete split invariants hold for any setting.
    #[must_use]
    pub fn with_min_split(mut self, min_split: usize) -> Self {
        self.min_split = min_split.max(1);
        self
    }

    /// Returns `true` if no pixels remain.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl<'a, B: PixelBuffer> SplitRange for PixelRange<'a, B> {
    type Item = PixelHandle<'a, B>;

    fn split(&mut self) -> Option<Self> {
        let len = self.end - self.start;
        if len <= self.min_split {
            return None;
        }
        let mid = self.start + len / 2;
        let front = Self {
            buffer: self.buffer,
            start: self.start,
            end: mid,
            min_split: self.min_split,
        };
        self.start = mid;
        Some(front)
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.end - self.start
    }

    fn for_each_remaining<F>(&mut self, f: &mut F) -> Result<()>
    where
        F: FnMut(&mut Self::Item) -> Result<()>,
    {
        if self.start >= self.end {
            return Ok(());
        }
        let width = self.buffer.width() as usize;
        let mut handle = PixelHandle::new(self.buffer, 0, 0);
        while self.start < self.end {
            let i = self.start;
            // A coordinate counts as consumed once issued, so a failed
            // action is not replayed on resume.
            self.start += 1;
            handle.move_to((i % width) as u32, (i / width) as u32);
            f(&mut handle)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::ArgbBuffer;
    use crate::Error;

    fn visit_order<B: PixelBuffer>(range: &mut PixelRange<'_, B>) -> Vec<(u32, u32)> {
        let mut seen = Vec::new();
        range
            .for_each_remaining(&mut |px| {
                seen.push((px.x(), px.y()));
                Ok(())
            })
            .unwrap();
        seen
    }

    #[test]
    fn covers_all_pixels_row_major() {
        let buf = ArgbBuffer::new(3, 2).unwrap();
        let seen = visit_order(&mut buf.pixels());
        assert_eq!(
            seen,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
    }

    #[test]
    fn empty_range_invokes_nothing() {
        let buf = ArgbBuffer::new(0, 4).unwrap();
        let seen = visit_order(&mut buf.pixels());
        assert!(seen.is_empty());
    }

    #[test]
    fn split_is_disjoint_and_union_complete() {
        let buf = ArgbBuffer::new(8, 8).unwrap();
        let mut back = buf.pixels().with_min_split(4);
        let mut front = back.split().unwrap();

        let mut seen = visit_order(&mut front);
        seen.extend(visit_order(&mut back));

        assert_eq!(seen.len(), 64);
        let mut sorted = seen.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 64, "split ranges overlapped");
    }

    #[test]
    fn split_below_threshold_returns_none() {
        let buf = ArgbBuffer::new(4, 1).unwrap();
        let mut range = buf.pixels().with_min_split(4);
        assert!(range.split().is_none());

        let mut range = buf.pixels().with_min_split(2);
        assert!(range.split().is_some());
    }

    #[test]
    fn consumed_pixels_are_not_reissued() {
        let buf = ArgbBuffer::new(4, 1).unwrap();
        let mut range = buf.pixels();

        // Fail after the second pixel, then resume.
        let mut count = 0;
        let err = range
            .for_each_remaining(&mut |_px| {
                count += 1;
                if count == 2 {
                    Err(Error::action("stop"))
                } else {
                    Ok(())
                }
            })
            .unwrap_err();
        assert!(err.is_action_error());

        // The failed pixel was consumed; two remain.
        let seen = visit_order(&mut range);
        assert_eq!(seen, vec![(2, 0), (3, 0)]);
    }

    #[test]
    fn handle_writes_land_in_buffer() {
        let buf = ArgbBuffer::new(2, 2).unwrap();
        buf.pixels()
            .for_each_remaining(&mut |px| {
                px.set_value(crate::pixel::argb(0xff, px.x() as u8, px.y() as u8, 0));
                Ok(())
            })
            .unwrap();
        assert_eq!(buf.value(1, 0), 0xff010000);
        assert_eq!(buf.value(0, 1), 0xff000100);
    }
}
