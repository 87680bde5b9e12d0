//! Whole-pixel compositing on packed ARGB values.
//!
//! Combines the per-channel formulas of [`crate::blend`] into whole-pixel
//! composition:
//!
//! - [`blend_rgb`] - RGB-only blend; the bottom pixel's alpha is preserved
//!   unchanged and the top pixel's alpha is ignored entirely
//! - [`blend_alpha`] - Alpha-aware blend with an opacity factor; the more
//!   transparent the top pixel, the less it occludes the bottom,
//!   independent of the chosen blend formula
//! - [`blend_action`] - Builds the per-pixel action that composites a top
//!   buffer over a bottom buffer at an offset, for use with
//!   [`apply`](crate::apply::apply)
//! - [`blend_images`] - Validated whole-image convenience entry point
//!
//! # Rounding
//!
//! Alpha-aware channel results are computed in `f32` and **truncated** to
//! the integer channel range, not rounded to nearest. Exact-value tests
//! depend on this truncation.
//!
//! # Example
//!
//! ```rust
//! use raster_ops::{blend_rgb, BlendMode};
//!
//! // RGB-only blend keeps the bottom alpha.
//! let out = blend_rgb(0x80ffffff, 0xff000000, BlendMode::Multiply);
//! assert_eq!(out, 0x80000000);
//! ```

use crate::apply::apply;
use crate::blend::{blend_channel, BlendMode};
use crate::{OpsError, OpsResult};
use raster_core::buffer::PixelBuffer;
use raster_core::pixel::{alpha, argb, blue, green, red};
use raster_core::range::PixelHandle;
use tracing::debug;

/// Composition mode for image-over-image blending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlendOp {
    /// RGB-only blend: per-channel formula on R, G, B; bottom alpha kept.
    Rgb(BlendMode),
    /// Alpha-aware blend weighted by the top pixel's alpha and a scalar
    /// opacity in `[0, 1]` (un-validated, caller responsibility).
    Alpha {
        /// Per-channel blend formula.
        mode: BlendMode,
        /// Blend-strength factor applied on top of the top pixel's alpha.
        opacity: f32,
    },
}

/// Blends the RGB channels of two packed colors.
///
/// Applies the per-channel function independently to R, G, B. The alpha
/// channel of the *bottom* value is preserved unchanged in the result; the
/// top value's alpha is ignored entirely.
#[inline]
pub fn blend_rgb(bottom: u32, top: u32, mode: BlendMode) -> u32 {
    argb(
        alpha(bottom),
        blend_channel(red(bottom), red(top), mode),
        blend_channel(green(bottom), green(top), mode),
        blend_channel(blue(bottom), blue(top), mode),
    )
}

/// Alpha-aware blend of two packed colors with an opacity factor.
///
/// - `result_alpha = min(opacity * top_alpha + bottom_alpha, 255)`
/// - `effective = opacity * top_alpha / 255`
/// - per channel: `effective * blend(bottom_c, top_c) + (1 - effective) * bottom_c`,
///   computed in `f32` and truncated into the integer channel range.
///
/// `opacity` is expected in `[0, 1]` but is not validated; out-of-range
/// intermediates are truncated into `[0, 255]` rather than erroring.
///
/// # Example
///
/// ```rust
/// use raster_ops::{blend_alpha, BlendMode};
///
/// // Opacity zero leaves the bottom pixel exactly unchanged.
/// assert_eq!(blend_alpha(0x80aabbcc, 0xffffffff, 0.0, BlendMode::Normal), 0x80aabbcc);
/// ```
pub fn blend_alpha(bottom: u32, top: u32, opacity: f32, mode: BlendMode) -> u32 {
    let top_a = alpha(top) as f32;
    // `f32 as u8` saturates into [0, 255] and truncates toward zero,
    // which is exactly the contract for both alpha and channels.
    let result_a = (opacity * top_a + alpha(bottom) as f32) as u8;
    let effective = opacity * top_a / 255.0;

    let channel = |bc: u8, tc: u8| -> u8 {
        let blended = blend_channel(bc, tc, mode) as f32;
        (effective * blended + (1.0 - effective) * bc as f32) as u8
    };

    argb(
        result_a,
        channel(red(bottom), red(top)),
        channel(green(bottom), green(top)),
        channel(blue(bottom), blue(top)),
    )
}

/// Composites one packed bottom value with one top value per `op`.
#[inline]
pub fn blend_pixel(bottom: u32, top: u32, op: BlendOp) -> u32 {
    match op {
        BlendOp::Rgb(mode) => blend_rgb(bottom, top, mode),
        BlendOp::Alpha { mode, opacity } => blend_alpha(bottom, top, opacity, mode),
    }
}

/// Builds the per-pixel action that composites `top` over the traversed
/// buffer at an integer offset.
///
/// For a bottom pixel at `(x, y)` the action computes
/// `top_x = x - x_offset`, `top_y = y - y_offset`; when `(top_x, top_y)`
/// lies inside `top`'s bounds the bottom pixel is overwritten with the
/// composite of its current value and the top value, otherwise the pixel is
/// left untouched. Out-of-bounds top coordinates are a no-op, never an
/// error.
///
/// This is the default action supplied to [`apply`](crate::apply::apply)
/// for image-over-image blending; `top` is only ever read during the
/// traversal, so concurrent leaves may share it freely.
pub fn blend_action<'b, 't, T, B>(
    top: &'t T,
    x_offset: i64,
    y_offset: i64,
    op: BlendOp,
) -> impl Fn(&mut PixelHandle<'b, B>) -> raster_core::Result<()> + Send + Sync + 't
where
    T: PixelBuffer,
    B: PixelBuffer + 'b,
{
    move |px: &mut PixelHandle<'b, B>| {
        let top_x = px.x() as i64 - x_offset;
        let top_y = px.y() as i64 - y_offset;
        if top.contains(top_x, top_y) {
            let t = top.value(top_x as u32, top_y as u32);
            px.set_value(blend_pixel(px.value(), t, op));
        }
        Ok(())
    }
}

/// Composites `top` over every pixel of `bottom` at the given offset.
///
/// Convenience wrapper building [`blend_action`] and running it through
/// [`apply`](crate::apply::apply), sequentially or in parallel.
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimensions`] when either buffer has no
/// pixels; fails fast before any traversal begins.
pub fn blend_images<B, T>(
    bottom: &B,
    top: &T,
    x_offset: i64,
    y_offset: i64,
    op: BlendOp,
    parallel: bool,
) -> OpsResult<()>
where
    B: PixelBuffer,
    T: PixelBuffer,
{
    if bottom.is_empty() {
        return Err(OpsError::InvalidDimensions(format!(
            "bottom buffer is empty: {}x{}",
            bottom.width(),
            bottom.height()
        )));
    }
    if top.is_empty() {
        return Err(OpsError::InvalidDimensions(format!(
            "top buffer is empty: {}x{}",
            top.width(),
            top.height()
        )));
    }

    debug!(
        bottom_width = bottom.width(),
        bottom_height = bottom.height(),
        top_width = top.width(),
        top_height = top.height(),
        x_offset,
        y_offset,
        parallel,
        "blend_images"
    );

    let action = blend_action(top, x_offset, y_offset, op);
    apply(bottom.pixels(), &action, parallel)?;
    Ok(())
}
