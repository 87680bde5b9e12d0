//! Per-channel blend algorithms.
//!
//! Provides the closed set of channel-wise compositing formulas used by the
//! [`composite`](crate::composite) module. Each variant is a total, pure
//! function on a pair of 8-bit channel values (bottom `a`, top `b`) with no
//! side effects and no error cases.
//!
//! # Arithmetic Contract
//!
//! The formulas are exact fixed-point integer arithmetic and are relied on
//! bit-for-bit by downstream tests:
//!
//! - intermediates are computed at 32-bit precision, so no product of two
//!   channels can overflow before shifting
//! - right shift is floor division by the shift's power of two
//! - `/` is integer truncating division
//!
//! # Variants
//!
//! | Variant | Formula |
//! |---|---|
//! | [`Normal`](BlendMode::Normal) | `b` |
//! | [`Average`](BlendMode::Average) | `(a+b) >> 1` |
//! | [`Multiply`](BlendMode::Multiply) | `(a*b) >> 8` |
//! | [`Screen`](BlendMode::Screen) | `0xff - (((0xff-a)*(0xff-b)) >> 8)` |
//! | [`Darken`](BlendMode::Darken) | `min(a,b)` |
//! | [`Brighten`](BlendMode::Brighten) | `max(a,b)` |
//! | [`Difference`](BlendMode::Difference) | `abs(a-b)` |
//! | [`Addition`](BlendMode::Addition) | `min(a+b, 0xff)` |
//! | [`Subtraction`](BlendMode::Subtraction) | `max(a+b-0xff, 0)` |
//! | [`Reflect`](BlendMode::Reflect) | `min(a*a / max(0xff-b,1), 0xff)` |
//! | [`Overlay`](BlendMode::Overlay) | `a<128 ? (a*b)>>7 : 0xff-(((0xff-a)*(0xff-b))>>7)` |
//! | [`HardLight`](BlendMode::HardLight) | `b<128 ? (a*b)>>7 : 0xff-(((0xff-a)*(0xff-b))>>7)` |
//! | [`SoftLight`](BlendMode::SoftLight) | `c=(a*b)>>8; c + (a*(0xff-(((0xff-a)*(0xff-b))>>8)-c) >> 8)` |
//! | [`Dodge`](BlendMode::Dodge) | `min((a<<8) / max(0xff-b,1), 0xff)` |
//!
//! # Example
//!
//! ```rust
//! use raster_ops::{blend_channel, BlendMode};
//!
//! assert_eq!(blend_channel(100, 50, BlendMode::Multiply), 19); // (100*50)>>8
//! assert_eq!(blend_channel(100, 50, BlendMode::Normal), 50);
//! ```

use crate::{OpsError, OpsResult};
use std::fmt;
use std::str::FromStr;

/// Blend variant: a named per-channel compositing function.
///
/// The set is closed and dispatched exhaustively by `match`; every variant
/// is stateless and total over the 8-bit domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    /// Top value replaces bottom.
    #[default]
    Normal,
    /// Arithmetic mean of bottom and top.
    Average,
    /// Multiply (darkens).
    Multiply,
    /// Screen (inverse multiply, lightens).
    Screen,
    /// Channel-wise minimum.
    Darken,
    /// Channel-wise maximum.
    Brighten,
    /// Absolute difference.
    Difference,
    /// Saturating addition.
    Addition,
    /// Inverse-saturating addition (`max(a+b-255, 0)`).
    Subtraction,
    /// Reflect dodge (`a*a / (255-b)`).
    Reflect,
    /// Overlay (contrast, pivots on the bottom value).
    Overlay,
    /// Hard light (overlay pivoting on the top value).
    HardLight,
    /// Soft light.
    SoftLight,
    /// Color dodge.
    Dodge,
}

impl BlendMode {
    /// All variants, in declaration order.
    pub const ALL: [BlendMode; 14] = [
        BlendMode::Normal,
        BlendMode::Average,
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::Darken,
        BlendMode::Brighten,
        BlendMode::Difference,
        BlendMode::Addition,
        BlendMode::Subtraction,
        BlendMode::Reflect,
        BlendMode::Overlay,
        BlendMode::HardLight,
        BlendMode::SoftLight,
        BlendMode::Dodge,
    ];

    /// Canonical lower-case name of the variant.
    pub fn name(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Average => "average",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Darken => "darken",
            BlendMode::Brighten => "brighten",
            BlendMode::Difference => "difference",
            BlendMode::Addition => "addition",
            BlendMode::Subtraction => "subtraction",
            BlendMode::Reflect => "reflect",
            BlendMode::Overlay => "overlay",
            BlendMode::HardLight => "hardlight",
            BlendMode::SoftLight => "softlight",
            BlendMode::Dodge => "dodge",
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendMode {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        BlendMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| OpsError::InvalidParameter(format!("unknown blend mode: {s:?}")))
    }
}

/// Blends two 8-bit channel values (bottom `a`, top `b`).
///
/// Total over the full 8-bit domain; see the module docs for the exact
/// per-variant formulas.
///
/// # Example
///
/// ```rust
/// use raster_ops::{blend_channel, BlendMode};
///
/// // Screen is symmetric in its arguments.
/// assert_eq!(
///     blend_channel(100, 50, BlendMode::Screen),
///     blend_channel(50, 100, BlendMode::Screen),
/// );
/// ```
#[inline]
pub fn blend_channel(bottom: u8, top: u8, mode: BlendMode) -> u8 {
    let a = bottom as u32;
    let b = top as u32;
    let v = match mode {
        BlendMode::Normal => b,
        BlendMode::Average => (a + b) >> 1,
        BlendMode::Multiply => (a * b) >> 8,
        BlendMode::Screen => 0xff - (((0xff - a) * (0xff - b)) >> 8),
        BlendMode::Darken => a.min(b),
        BlendMode::Brighten => a.max(b),
        BlendMode::Difference => a.abs_diff(b),
        BlendMode::Addition => (a + b).min(0xff),
        BlendMode::Subtraction => (a + b).saturating_sub(0xff),
        BlendMode::Reflect => (a * a / (0xff - b).max(1)).min(0xff),
        BlendMode::Overlay => {
            if a < 0x80 {
                (a * b) >> 7
            } else {
                0xff - (((0xff - a) * (0xff - b)) >> 7)
            }
        }
        BlendMode::HardLight => {
            if b < 0x80 {
                (a * b) >> 7
            } else {
                0xff - (((0xff - a) * (0xff - b)) >> 7)
            }
        }
        BlendMode::SoftLight => {
            let c = (a * b) >> 8;
            let screen = 0xff - (((0xff - a) * (0xff - b)) >> 8);
            c + ((a * (screen - c)) >> 8)
        }
        BlendMode::Dodge => ((a << 8) / (0xff - b).max(1)).min(0xff),
    };
    v as u8
}
