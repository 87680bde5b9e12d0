//! Element-typed traversal over a pixel range.
//!
//! [`ElementRange`] wraps a [`SplitRange`] of pixel handles into a
//! [`SplitRange`] of an arbitrary richer element type `T`, without any
//! per-pixel allocation: one scratch `T` is allocated per range, reused
//! for every coordinate that range visits.
//!
//! # Ownership
//!
//! The scratch element is exclusively owned by its range. When the range is
//! split, the new sub-range allocates its own scratch through the shared
//! allocator, so no two ranges (and hence no two worker tasks) ever share a
//! scratch instance. The per-element action borrows the scratch only for
//! the duration of its call and cannot retain it.
//!
//! # Round Trip
//!
//! Every step converts the current pixel into the scratch, runs the action,
//! then converts the scratch back onto the pixel — even when the action
//! made no change. Either converter may be a no-op, which yields write-only
//! or read-only adapters.
//!
//! # Usage
//!
//! ```rust
//! use raster_core::{ArgbBuffer, ElementRange, SplitRange, pixel};
//! use raster_core::buffer::PixelBuffer;
//!
//! let buf = ArgbBuffer::from_vec(2, 1, vec![0xff102030, 0xff405060]).unwrap();
//!
//! // Traverse as [a, r, g, b] arrays instead of packed words.
//! let mut range = ElementRange::new(
//!     buf.pixels(),
//!     || [0u8; 4],
//!     |px, e: &mut [u8; 4]| {
//!         let v = px.value();
//!         *e = [pixel::alpha(v), pixel::red(v), pixel::green(v), pixel::blue(v)];
//!     },
//!     |e, px| px.set_value(pixel::argb(e[0], e[1], e[2], e[3])),
//! );
//! range.for_each_remaining(&mut |e| {
//!     e.swap(1, 3); // swap red and blue
//!     Ok(())
//! }).unwrap();
//! assert_eq!(buf.value(0, 0), 0xff302010);
//! ```
//!
//! # Dependencies
//!
//! - [`crate::range::SplitRange`] - The wrapped traversal
//!
//! # Used By
//!
//! - `raster-ops` - Element-typed parallel apply

use crate::range::SplitRange;
use crate::Result;

/// Adapts a range of pixel-like items into a range of elements of type `T`.
///
/// Constructed from an allocator producing one scratch `T`, an item-to-
/// element converter, and an element-to-item converter. See the module docs
/// for the scratch ownership and round-trip rules.
pub struct ElementRange<R, T, A, In, Out> {
    inner: R,
    scratch: T,
    alloc: A,
    to_element: In,
    to_item: Out,
}

impl<R, T, A, In, Out> ElementRange<R, T, A, In, Out>
where
    R: SplitRange,
    A: Fn() -> T,
    In: Fn(&R::Item, &mut T),
    Out: Fn(&T, &mut R::Item),
{
    /// Wraps `inner`, allocating this range's scratch element immediately.
    ///
    /// `to_element` fills the scratch from the current item before the
    /// action runs; `to_item` writes the (possibly mutated) scratch back
    /// afterwards.
    pub fn new(inner: R, alloc: A, to_element: In, to_item: Out) -> Self {
        let scratch = alloc();
        Self {
            inner,
            scratch,
            alloc,
            to_element,
            to_item,
        }
    }

    /// Returns `true` if no items remain in the wrapped range.
    pub fn is_empty(&self) -> bool {
        self.inner.remaining() == 0
    }
}

impl<R, T, A, In, Out> SplitRange for ElementRange<R, T, A, In, Out>
where
    R: SplitRange,
    A: Fn() -> T + Clone,
    In: Fn(&R::Item, &mut T) + Clone,
    Out: Fn(&T, &mut R::Item) + Clone,
{
    type Item = T;

    /// Splits the wrapped range, allocating exactly one fresh scratch for
    /// the split-off sub-range. One allocation per split, never per pixel.
    fn split(&mut self) -> Option<Self> {
        let inner = self.inner.split()?;
        Some(Self {
            inner,
            scratch: (self.alloc)(),
            alloc: self.alloc.clone(),
            to_element: self.to_element.clone(),
            to_item: self.to_item.clone(),
        })
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.inner.remaining()
    }

    fn for_each_remaining<F>(&mut self, f: &mut F) -> Result<()>
    where
        F: FnMut(&mut Self::Item) -> Result<()>,
    {
        let scratch = &mut self.scratch;
        let to_element = &self.to_element;
        let to_item = &self.to_item;
        self.inner.for_each_remaining(&mut |item| {
            to_element(item, scratch);
            f(scratch)?;
            to_item(scratch, item);
            Ok(())
        })
    }
}
