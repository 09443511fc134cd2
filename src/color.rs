//! The shared color contract and the tagged [`ColorValue`] union.
//!
//! [`Color`] is implemented by [`Rgb`], [`Hsl`] and [`Hsv`]. Each supplies its
//! native channels and conversions; hex encoding, interpolation and percent
//! rotation are provided on top of those.

use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use crate::constants::{BYTE_SCALE, DISPLAY_PRECISION, HEX_PREFIX, HUE_PERIOD, OPAQUE};
use crate::error::{ColorError, ColorKind, Result};
use crate::hex::ubytes_to_hex;
use crate::hsl::Hsl;
use crate::hsv::Hsv;
use crate::parse::parse_hex;
use crate::rgb::Rgb;
use crate::validate::{clamp_byte, clamp_percent, lerp, lerp_int, normalize_hue, require_percent};

/// Capabilities shared by every color representation.
pub trait Color: Sized {
    /// Native channel triple, e.g. `(red, green, blue)` for [`Rgb`].
    type Channels: Copy + fmt::Debug + PartialEq;

    /// Which representation this is.
    fn kind(&self) -> ColorKind;

    /// Native channel triple.
    fn channels(&self) -> Self::Channels;

    /// Native channel triple and alpha.
    fn channels_with_alpha(&self) -> (Self::Channels, f64) {
        (self.channels(), self.alpha())
    }

    /// Alpha in `0.0–1.0`.
    fn alpha(&self) -> f64;

    /// Replace alpha. Fails, leaving the color untouched, unless `alpha` is in `0.0–1.0`.
    fn set_alpha(&mut self, alpha: f64) -> Result<()>;

    /// Same color as [`Rgb`], alpha kept.
    fn to_rgb(&self) -> Rgb;
    /// Same color as [`Hsl`], alpha kept.
    fn to_hsl(&self) -> Hsl;
    /// Same color as [`Hsv`], alpha kept.
    fn to_hsv(&self) -> Hsv;

    /// Same color with the hue advanced by `degrees`, which may be negative or
    /// exceed a full turn.
    fn rotate_hue_by_degrees(&self, degrees: i32) -> Self;

    /// Mix with black in this color's own space. `1.0` keeps the color, `0.0`
    /// gives black. Alpha is kept.
    fn shade(&self, fraction: f64) -> Result<Self>;

    /// Mix with white in this color's own space. `1.0` keeps the color, `0.0`
    /// gives white. Alpha is kept.
    fn tint(&self, fraction: f64) -> Result<Self>;

    /// Rotate the hue by a fraction of a full turn.
    fn rotate_hue_by_percent(&self, percent: f64) -> Result<Self> {
        let percent = require_percent("percent", percent)?;
        let degrees = (HUE_PERIOD as f64 * percent).round_ties_even() as i32;
        Ok(self.rotate_hue_by_degrees(degrees))
    }

    /// `(red, green, blue)`.
    fn rgb(&self) -> (u8, u8, u8) {
        self.to_rgb().channels()
    }

    /// `(hue, saturation, lightness)`.
    fn hsl(&self) -> (i32, f64, f64) {
        self.to_hsl().channels()
    }

    /// `(hue, saturation, value)`.
    fn hsv(&self) -> (i32, f64, f64) {
        self.to_hsv().channels()
    }

    /// `(red, green, blue, alpha)`.
    fn rgba(&self) -> (u8, u8, u8, f64) {
        let (r, g, b) = self.to_rgb().channels();
        (r, g, b, self.alpha())
    }

    /// `(hue, saturation, lightness, alpha)`.
    fn hsla(&self) -> (i32, f64, f64, f64) {
        let (h, s, l) = self.to_hsl().channels();
        (h, s, l, self.alpha())
    }

    /// `(hue, saturation, value, alpha)`.
    fn hsva(&self) -> (i32, f64, f64, f64) {
        let (h, s, v) = self.to_hsv().channels();
        (h, s, v, self.alpha())
    }

    /// `#rrggbb`, or `#rrggbbaa` when `include_alpha` is set and the color is
    /// not fully opaque. Digits are lowercase.
    fn to_hex(&self, include_alpha: bool) -> String {
        let (r, g, b, a) = self.rgba();
        if a >= OPAQUE || !include_alpha {
            ubytes_to_hex(&[r, g, b], HEX_PREFIX, false)
        } else {
            let a = clamp_byte((a * BYTE_SCALE).round() as i32);
            ubytes_to_hex(&[r, g, b, a], HEX_PREFIX, false)
        }
    }

    /// Blend toward `other` in RGB space. `0.0` gives this color, `1.0` gives `other`.
    fn interpolate_rgb<C: Color>(&self, other: &C, fraction: f64) -> Result<Rgb> {
        let t = require_percent("fraction", fraction)?;
        let (r1, g1, b1, a1) = self.rgba();
        let (r2, g2, b2, a2) = other.rgba();
        Ok(Rgb::from_parts(
            clamp_byte(lerp_int(r1 as i32, r2 as i32, t)),
            clamp_byte(lerp_int(g1 as i32, g2 as i32, t)),
            clamp_byte(lerp_int(b1 as i32, b2 as i32, t)),
            clamp_percent(lerp(a1, a2, t)),
        ))
    }

    /// Blend toward `other` in HSL space.
    ///
    /// Hue is blended as a plain number, so 350° toward 10° passes through 180°.
    fn interpolate_hsl<C: Color>(&self, other: &C, fraction: f64) -> Result<Hsl> {
        let t = require_percent("fraction", fraction)?;
        let (h1, s1, l1, a1) = self.hsla();
        let (h2, s2, l2, a2) = other.hsla();
        Ok(Hsl::from_parts(
            normalize_hue(lerp_int(h1, h2, t)),
            clamp_percent(lerp(s1, s2, t)),
            clamp_percent(lerp(l1, l2, t)),
            clamp_percent(lerp(a1, a2, t)),
        ))
    }

    /// Blend toward `other` in HSV space, with the same linear hue as
    /// [`Color::interpolate_hsl`].
    fn interpolate_hsv<C: Color>(&self, other: &C, fraction: f64) -> Result<Hsv> {
        let t = require_percent("fraction", fraction)?;
        let (h1, s1, v1, a1) = self.hsva();
        let (h2, s2, v2, a2) = other.hsva();
        Ok(Hsv::from_parts(
            normalize_hue(lerp_int(h1, h2, t)),
            clamp_percent(lerp(s1, s2, t)),
            clamp_percent(lerp(v1, v2, t)),
            clamp_percent(lerp(a1, a2, t)),
        ))
    }
}

/// Round a percent channel for display.
pub(crate) fn display_percent(value: f64) -> f64 {
    let scale = 10f64.powi(DISPLAY_PRECISION);
    (value * scale).round() / scale
}

/// Native channels of whichever representation a [`ColorValue`] holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorChannels {
    Rgb(u8, u8, u8),
    Hsl(i32, f64, f64),
    Hsv(i32, f64, f64),
}

/// A color in any of the three representations.
///
/// Values of different representations are never equal, and arithmetic
/// between them fails with [`ColorError::TypeMismatch`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ColorValue {
    Rgb(Rgb),
    Hsl(Hsl),
    Hsv(Hsv),
}

impl Default for ColorValue {
    fn default() -> Self {
        ColorValue::Rgb(Rgb::default())
    }
}

impl ColorValue {
    /// The held [`Rgb`], if that is the representation.
    pub fn as_rgb(&self) -> Option<&Rgb> {
        match self {
            ColorValue::Rgb(c) => Some(c),
            _ => None,
        }
    }

    /// The held [`Hsl`], if that is the representation.
    pub fn as_hsl(&self) -> Option<&Hsl> {
        match self {
            ColorValue::Hsl(c) => Some(c),
            _ => None,
        }
    }

    /// The held [`Hsv`], if that is the representation.
    pub fn as_hsv(&self) -> Option<&Hsv> {
        match self {
            ColorValue::Hsv(c) => Some(c),
            _ => None,
        }
    }

    /// Convert into the representation named by `kind`.
    pub fn convert(&self, kind: ColorKind) -> ColorValue {
        if self.kind() == kind {
            return *self;
        }
        tracing::trace!(from = %self.kind(), to = %kind, "converting color value");
        match kind {
            ColorKind::Rgb => ColorValue::Rgb(self.to_rgb()),
            ColorKind::Hsl => ColorValue::Hsl(self.to_hsl()),
            ColorKind::Hsv => ColorValue::Hsv(self.to_hsv()),
        }
    }

    fn combine(
        self,
        other: ColorValue,
        rgb: fn(Rgb, Rgb) -> Rgb,
        hsl: fn(Hsl, Hsl) -> Hsl,
        hsv: fn(Hsv, Hsv) -> Hsv,
    ) -> Result<ColorValue> {
        match (self, other) {
            (ColorValue::Rgb(a), ColorValue::Rgb(b)) => Ok(ColorValue::Rgb(rgb(a, b))),
            (ColorValue::Hsl(a), ColorValue::Hsl(b)) => Ok(ColorValue::Hsl(hsl(a, b))),
            (ColorValue::Hsv(a), ColorValue::Hsv(b)) => Ok(ColorValue::Hsv(hsv(a, b))),
            (a, b) => Err(ColorError::TypeMismatch {
                left: a.kind(),
                right: b.kind(),
            }),
        }
    }
}

impl Color for ColorValue {
    type Channels = ColorChannels;

    fn kind(&self) -> ColorKind {
        match self {
            ColorValue::Rgb(_) => ColorKind::Rgb,
            ColorValue::Hsl(_) => ColorKind::Hsl,
            ColorValue::Hsv(_) => ColorKind::Hsv,
        }
    }

    fn channels(&self) -> ColorChannels {
        match self {
            ColorValue::Rgb(c) => {
                let (r, g, b) = c.channels();
                ColorChannels::Rgb(r, g, b)
            }
            ColorValue::Hsl(c) => {
                let (h, s, l) = c.channels();
                ColorChannels::Hsl(h, s, l)
            }
            ColorValue::Hsv(c) => {
                let (h, s, v) = c.channels();
                ColorChannels::Hsv(h, s, v)
            }
        }
    }

    fn alpha(&self) -> f64 {
        match self {
            ColorValue::Rgb(c) => c.alpha(),
            ColorValue::Hsl(c) => c.alpha(),
            ColorValue::Hsv(c) => c.alpha(),
        }
    }

    fn set_alpha(&mut self, alpha: f64) -> Result<()> {
        match self {
            ColorValue::Rgb(c) => c.set_alpha(alpha),
            ColorValue::Hsl(c) => c.set_alpha(alpha),
            ColorValue::Hsv(c) => c.set_alpha(alpha),
        }
    }

    fn to_rgb(&self) -> Rgb {
        match self {
            ColorValue::Rgb(c) => c.to_rgb(),
            ColorValue::Hsl(c) => c.to_rgb(),
            ColorValue::Hsv(c) => c.to_rgb(),
        }
    }

    fn to_hsl(&self) -> Hsl {
        match self {
            ColorValue::Rgb(c) => c.to_hsl(),
            ColorValue::Hsl(c) => c.to_hsl(),
            ColorValue::Hsv(c) => c.to_hsl(),
        }
    }

    fn to_hsv(&self) -> Hsv {
        match self {
            ColorValue::Rgb(c) => c.to_hsv(),
            ColorValue::Hsl(c) => c.to_hsv(),
            ColorValue::Hsv(c) => c.to_hsv(),
        }
    }

    fn rotate_hue_by_degrees(&self, degrees: i32) -> Self {
        match self {
            ColorValue::Rgb(c) => ColorValue::Rgb(c.rotate_hue_by_degrees(degrees)),
            ColorValue::Hsl(c) => ColorValue::Hsl(c.rotate_hue_by_degrees(degrees)),
            ColorValue::Hsv(c) => ColorValue::Hsv(c.rotate_hue_by_degrees(degrees)),
        }
    }

    fn shade(&self, fraction: f64) -> Result<Self> {
        Ok(match self {
            ColorValue::Rgb(c) => ColorValue::Rgb(c.shade(fraction)?),
            ColorValue::Hsl(c) => ColorValue::Hsl(c.shade(fraction)?),
            ColorValue::Hsv(c) => ColorValue::Hsv(c.shade(fraction)?),
        })
    }

    fn tint(&self, fraction: f64) -> Result<Self> {
        Ok(match self {
            ColorValue::Rgb(c) => ColorValue::Rgb(c.tint(fraction)?),
            ColorValue::Hsl(c) => ColorValue::Hsl(c.tint(fraction)?),
            ColorValue::Hsv(c) => ColorValue::Hsv(c.tint(fraction)?),
        })
    }
}

impl Add for ColorValue {
    type Output = Result<ColorValue>;

    fn add(self, other: ColorValue) -> Self::Output {
        self.combine(other, <Rgb as Add>::add, <Hsl as Add>::add, <Hsv as Add>::add)
    }
}

impl Sub for ColorValue {
    type Output = Result<ColorValue>;

    fn sub(self, other: ColorValue) -> Self::Output {
        self.combine(other, <Rgb as Sub>::sub, <Hsl as Sub>::sub, <Hsv as Sub>::sub)
    }
}

impl Mul for ColorValue {
    type Output = Result<ColorValue>;

    fn mul(self, other: ColorValue) -> Self::Output {
        self.combine(other, <Rgb as Mul>::mul, <Hsl as Mul>::mul, <Hsv as Mul>::mul)
    }
}

impl From<Rgb> for ColorValue {
    fn from(c: Rgb) -> Self {
        ColorValue::Rgb(c)
    }
}

impl From<Hsl> for ColorValue {
    fn from(c: Hsl) -> Self {
        ColorValue::Hsl(c)
    }
}

impl From<Hsv> for ColorValue {
    fn from(c: Hsv) -> Self {
        ColorValue::Hsv(c)
    }
}

impl FromStr for ColorValue {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        parse_hex(s).map(ColorValue::Rgb)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Rgb(c) => fmt::Display::fmt(c, f),
            ColorValue::Hsl(c) => fmt::Display::fmt(c, f),
            ColorValue::Hsv(c) => fmt::Display::fmt(c, f),
        }
    }
}
