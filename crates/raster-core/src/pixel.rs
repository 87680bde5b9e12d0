//! Packed ARGB channel math.
//!
//! A pixel value is a single `u32` encoding alpha, red, green, blue as
//! 8 bits each, alpha in the most significant byte:
//!
//! ```text
//! 0xAARRGGBB
//!   ││└┬┘└┬┘
//!   ││ │  └─ blue
//!   ││ └──── green / red
//!   └┴────── alpha
//! ```
//!
//! This module provides the unpack accessors and the packing constructor
//! used throughout the raster-rs crates. All channel math elsewhere is
//! straight 8-bit integer arithmetic on these components.
//!
//! # Usage
//!
//! ```rust
//! use raster_core::pixel;
//!
//! let px = pixel::argb(0xff, 0x80, 0x40, 0x20);
//! assert_eq!(px, 0xff804020);
//! assert_eq!(pixel::alpha(px), 0xff);
//! assert_eq!(pixel::red(px), 0x80);
//! assert_eq!(pixel::green(px), 0x40);
//! assert_eq!(pixel::blue(px), 0x20);
//! ```
//!
//! # Dependencies
//!
//! None (pure Rust)
//!
//! # Used By
//!
//! - [`crate::buffer`] - Pixel storage
//! - `raster-ops` - Blend and composite channel math

/// Maximum value of an 8-bit channel.
pub const CHANNEL_MAX: u8 = 0xff;

/// Extracts the alpha channel of a packed ARGB value.
#[inline]
pub const fn alpha(argb: u32) -> u8 {
    (argb >> 24) as u8
}

/// Extracts the red channel of a packed ARGB value.
#[inline]
pub const fn red(argb: u32) -> u8 {
    (argb >> 16) as u8
}

/// Extracts the green channel of a packed ARGB value.
#[inline]
pub const fn green(argb: u32) -> u8 {
    (argb >> 8) as u8
}

/// Extracts the blue channel of a packed ARGB value.
#[inline]
pub const fn blue(argb: u32) -> u8 {
    argb as u8
}

/// Packs four 8-bit channels into a single ARGB value.
#[inline]
pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Replaces the alpha channel of a packed ARGB value, keeping RGB intact.
///
/// ```rust
/// use raster_core::pixel::with_alpha;
///
/// assert_eq!(with_alpha(0x00804020, 0xff), 0xff804020);
/// ```
#[inline]
pub const fn with_alpha(argb: u32, a: u8) -> u32 {
    (argb & 0x00ff_ffff) | ((a as u32) << 24)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_unpack_roundtrip() {
        let px = argb(0x12, 0x34, 0x56, 0x78);
        assert_eq!(px, 0x12345678);
        assert_eq!(alpha(px), 0x12);
        assert_eq!(red(px), 0x34);
        assert_eq!(green(px), 0x56);
        assert_eq!(blue(px), 0x78);
    }

    #[test]
    fn unpack_extremes() {
        assert_eq!(alpha(0xffffffff), 0xff);
        assert_eq!(blue(0x00000000), 0x00);
        assert_eq!(argb(0xff, 0xff, 0xff, 0xff), 0xffffffff);
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        let px = argb(0x00, 0xaa, 0xbb, 0xcc);
        let opaque = with_alpha(px, 0xff);
        assert_eq!(alpha(opaque), 0xff);
        assert_eq!(red(opaque), 0xaa);
        assert_eq!(green(opaque), 0xbb);
        assert_eq!(blue(opaque), 0xcc);
    }
}
