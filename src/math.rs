//! Color math: channel-space conversions between RGB, HSL and HSV.
//!
//! Hues are integer degrees in `[0, 360)`, percents are `f64` in `0.0–1.0`,
//! bytes are `u8`. Alpha never takes part in a conversion and is carried by
//! the callers. Every function here is total: results are rounded and
//! clamped into their channel domains.

use crate::constants::{BYTE_SCALE, HUE_SECTOR};
use crate::validate::{clamp_byte, clamp_percent, normalize_hue};

/// Round a fractional hue to whole degrees and wrap it into `[0, 360)`.
fn round_hue(degrees: f64) -> i32 {
    normalize_hue(degrees.round_ties_even() as i32)
}

/// Scale a normalized channel to a byte, rounding half to even.
fn to_byte(normalized: f64) -> u8 {
    clamp_byte((normalized * BYTE_SCALE).round_ties_even() as i32)
}

fn normalized(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    (
        r as f64 / BYTE_SCALE,
        g as f64 / BYTE_SCALE,
        b as f64 / BYTE_SCALE,
    )
}

/// RGB → HSV. Returns `(hue, saturation, value)`.
pub(crate) fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (i32, f64, f64) {
    let (r, g, b) = normalized(r, g, b);
    let v = r.max(g).max(b);
    let chroma = v - r.min(g).min(b);

    let h = if chroma == 0.0 {
        0.0
    } else if v == r {
        (g - b) / chroma
    } else if v == g {
        2.0 + (b - r) / chroma
    } else {
        4.0 + (r - g) / chroma
    };
    let h = HUE_SECTOR * if h < 0.0 { h + 6.0 } else { h };

    let s = if v != 0.0 { chroma / v } else { 0.0 };
    (round_hue(h), s, v)
}

/// RGB → HSL. Returns `(hue, saturation, lightness)`.
pub(crate) fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (i32, f64, f64) {
    let (r, g, b) = normalized(r, g, b);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let delta = max - min;

    let s = if delta != 0.0 {
        clamp_percent(delta / (1.0 - (2.0 * l - 1.0).abs()))
    } else {
        0.0
    };

    let h = if delta > 0.0 {
        if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        }
    } else {
        0.0
    };

    (round_hue(h * HUE_SECTOR), s, l)
}

/// HSL → RGB using the chroma / hue-sector formula.
pub(crate) fn hsl_to_rgb(h: i32, s: f64, l: f64) -> (u8, u8, u8) {
    let h = normalize_hue(h) as f64;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / HUE_SECTOR) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h / HUE_SECTOR) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (to_byte(r + m), to_byte(g + m), to_byte(b + m))
}

/// HSL → HSV. Returns `(hue, saturation, value)`.
pub(crate) fn hsl_to_hsv(h: i32, s: f64, l: f64) -> (i32, f64, f64) {
    let v = clamp_percent(s * l.min(1.0 - l) + l);
    let s = if v != 0.0 {
        clamp_percent(2.0 - 2.0 * l / v)
    } else {
        0.0
    };
    (normalize_hue(h), s, v)
}

/// HSV → RGB, closed form per channel.
pub(crate) fn hsv_to_rgb(h: i32, s: f64, v: f64) -> (u8, u8, u8) {
    let h = normalize_hue(h) as f64;
    let f = |n: f64| {
        let k = (n + h / HUE_SECTOR).rem_euclid(6.0);
        to_byte(v - v * s * k.min(4.0 - k).min(1.0).max(0.0))
    };
    (f(5.0), f(3.0), f(1.0))
}

/// HSV → HSL. Returns `(hue, saturation, lightness)`.
pub(crate) fn hsv_to_hsl(h: i32, s: f64, v: f64) -> (i32, f64, f64) {
    let l = clamp_percent(v - v * s / 2.0);
    let m = l.min(1.0 - l);
    let s = if m != 0.0 {
        clamp_percent((v - l) / m)
    } else {
        0.0
    };
    (normalize_hue(h), s, l)
}
