//! Channel validation and normalization helpers.
//!
//! Constructors and setters go through the `require_*` functions, which reject
//! out-of-range input. Arithmetic and interpolation go through the `clamp_*`
//! functions, which never fail.

use crate::constants::{BYTE_MAX, BYTE_MIN, HUE_PERIOD, PERCENT_MAX, PERCENT_MIN};
use crate::error::{ColorError, Result};

/// Require `value` to lie in `[0.0, 1.0]`.
pub fn require_percent(name: &'static str, value: f64) -> Result<f64> {
    if (PERCENT_MIN..=PERCENT_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::domain(name, value, PERCENT_MIN, PERCENT_MAX))
    }
}

/// Require `value` to lie in `[0, 255]`.
pub fn require_byte(name: &'static str, value: i32) -> Result<u8> {
    u8::try_from(value)
        .map_err(|_| ColorError::domain(name, value as f64, BYTE_MIN as f64, BYTE_MAX as f64))
}

/// Clamp to `[0.0, 1.0]`. NaN collapses to `0.0`.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        PERCENT_MIN
    } else {
        value.clamp(PERCENT_MIN, PERCENT_MAX)
    }
}

/// Clamp to `[0, 255]`.
pub fn clamp_byte(value: i32) -> u8 {
    value.clamp(BYTE_MIN, BYTE_MAX) as u8
}

/// Wrap a hue in degrees into `[0, 360)`.
pub fn normalize_hue(hue: i32) -> i32 {
    hue.rem_euclid(HUE_PERIOD)
}

/// Linear blend. Exact at both ends and when `from == to`.
pub(crate) fn lerp(from: f64, to: f64, fraction: f64) -> f64 {
    if fraction >= 1.0 {
        to
    } else {
        from + (to - from) * fraction
    }
}

/// Linear blend of two integer channels, truncated toward zero.
pub(crate) fn lerp_int(from: i32, to: i32, fraction: f64) -> i32 {
    lerp(from as f64, to as f64, fraction) as i32
}
