//! Channel bounds and codec constants shared by every color type.

/// Degrees in a full hue rotation. Hues live in `0..HUE_PERIOD`.
pub const HUE_PERIOD: i32 = 360;

/// Width of one hue sector in the HSL/HSV piecewise formulas.
pub const HUE_SECTOR: f64 = 60.0;

/// Smallest legal red/green/blue channel value.
pub const BYTE_MIN: i32 = 0;

/// Largest legal red/green/blue channel value.
pub const BYTE_MAX: i32 = 255;

/// Scale between a normalized channel and its 8 bit form.
pub const BYTE_SCALE: f64 = 255.0;

/// Lower bound of saturation, lightness, value and alpha.
pub const PERCENT_MIN: f64 = 0.0;

/// Upper bound of saturation, lightness, value and alpha.
pub const PERCENT_MAX: f64 = 1.0;

/// Alpha used when none is given.
pub const OPAQUE: f64 = 1.0;

/// Prefix required on color hex strings.
pub const HEX_PREFIX: &str = "#";

/// Accepted color hex string lengths, prefix included.
pub const HEX_LENGTHS: [usize; 4] = [4, 5, 7, 9];

/// Most hex digits [`crate::hex::hex_to_int`] will accept.
pub const MAX_INT_HEX_DIGITS: usize = 16;

/// Decimal places kept when percent channels are displayed.
pub const DISPLAY_PRECISION: i32 = 2;
