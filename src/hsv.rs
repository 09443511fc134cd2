//! Hsv: hue, saturation and value plus alpha.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::color::{display_percent, Color};
use crate::constants::OPAQUE;
use crate::error::{ColorKind, Result};
use crate::hsl::Hsl;
use crate::math;
use crate::rgb::Rgb;
use crate::validate::{clamp_percent, normalize_hue, require_percent};

/// Color stored as a hue in degrees and saturation, value and alpha in `0.0–1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "HsvFields")
)]
pub struct Hsv {
    hue: i32,
    saturation: f64,
    value: f64,
    alpha: f64,
}

impl Hsv {
    /// Create from channel values. Hue wraps; the rest must lie in `0.0–1.0`.
    pub fn new(hue: i32, saturation: f64, value: f64, alpha: f64) -> Result<Self> {
        Ok(Self {
            hue: normalize_hue(hue),
            saturation: require_percent("saturation", saturation)?,
            value: require_percent("value", value)?,
            alpha: require_percent("alpha", alpha)?,
        })
    }

    /// Create a fully opaque color.
    pub fn opaque(hue: i32, saturation: f64, value: f64) -> Result<Self> {
        Self::new(hue, saturation, value, OPAQUE)
    }

    pub(crate) fn from_parts(hue: i32, saturation: f64, value: f64, alpha: f64) -> Self {
        Self {
            hue: normalize_hue(hue),
            saturation,
            value,
            alpha,
        }
    }

    /// Black with the given alpha.
    pub fn black(alpha: f64) -> Result<Self> {
        Self::new(0, 0.0, 0.0, alpha)
    }

    /// White with the given alpha.
    pub fn white(alpha: f64) -> Result<Self> {
        Self::new(0, 0.0, 1.0, alpha)
    }

    /// Hue in degrees (0–359).
    pub fn hue(&self) -> i32 {
        self.hue
    }

    /// Saturation (0.0–1.0).
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Value, the brightness channel (0.0–1.0).
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Never fails; the hue is wrapped into `0..360`.
    pub fn set_hue(&mut self, hue: i32) {
        self.hue = normalize_hue(hue);
    }

    /// Replace saturation. Fails, leaving the color untouched, outside `0.0–1.0`.
    pub fn set_saturation(&mut self, saturation: f64) -> Result<()> {
        self.saturation = require_percent("saturation", saturation)?;
        Ok(())
    }

    /// Replace value. Fails, leaving the color untouched, outside `0.0–1.0`.
    pub fn set_value(&mut self, value: f64) -> Result<()> {
        self.value = require_percent("value", value)?;
        Ok(())
    }

    /// Copy with the hue replaced and wrapped.
    pub fn with_hue(&self, hue: i32) -> Self {
        Self::from_parts(hue, self.saturation, self.value, self.alpha)
    }

    /// Copy with saturation replaced.
    pub fn with_saturation(&self, saturation: f64) -> Result<Self> {
        self.with_values(None, Some(saturation), None, None)
    }

    /// Copy with value replaced.
    pub fn with_value(&self, value: f64) -> Result<Self> {
        self.with_values(None, None, Some(value), None)
    }

    /// Copy with alpha replaced.
    pub fn with_alpha(&self, alpha: f64) -> Result<Self> {
        self.with_values(None, None, None, Some(alpha))
    }

    /// Copy of this color with any of the given channels replaced.
    pub fn with_values(
        &self,
        hue: Option<i32>,
        saturation: Option<f64>,
        value: Option<f64>,
        alpha: Option<f64>,
    ) -> Result<Self> {
        Self::new(
            hue.unwrap_or(self.hue),
            saturation.unwrap_or(self.saturation),
            value.unwrap_or(self.value),
            alpha.unwrap_or(self.alpha),
        )
    }

    fn combine(self, other: Hsv, hue: fn(i32, i32) -> i32, op: fn(f64, f64) -> f64) -> Hsv {
        Hsv {
            hue: normalize_hue(hue(self.hue, other.hue)),
            saturation: clamp_percent(op(self.saturation, other.saturation)),
            value: clamp_percent(op(self.value, other.value)),
            alpha: clamp_percent(op(self.alpha, other.alpha)),
        }
    }
}

impl Default for Hsv {
    fn default() -> Self {
        Self::from_parts(0, 0.0, 0.0, OPAQUE)
    }
}

impl Color for Hsv {
    type Channels = (i32, f64, f64);

    fn kind(&self) -> ColorKind {
        ColorKind::Hsv
    }

    fn channels(&self) -> (i32, f64, f64) {
        (self.hue, self.saturation, self.value)
    }

    fn alpha(&self) -> f64 {
        self.alpha
    }

    fn set_alpha(&mut self, alpha: f64) -> Result<()> {
        self.alpha = require_percent("alpha", alpha)?;
        Ok(())
    }

    fn to_rgb(&self) -> Rgb {
        let (r, g, b) = math::hsv_to_rgb(self.hue, self.saturation, self.value);
        Rgb::from_parts(r, g, b, self.alpha)
    }

    fn to_hsl(&self) -> Hsl {
        let (h, s, l) = math::hsv_to_hsl(self.hue, self.saturation, self.value);
        Hsl::from_parts(h, s, l, self.alpha)
    }

    fn to_hsv(&self) -> Hsv {
        *self
    }

    fn rotate_hue_by_degrees(&self, degrees: i32) -> Self {
        self.with_hue(self.hue + normalize_hue(degrees))
    }

    fn shade(&self, fraction: f64) -> Result<Self> {
        let fraction = require_percent("fraction", fraction)?;
        self.interpolate_hsv(&Hsv::from_parts(0, 0.0, 0.0, self.alpha), 1.0 - fraction)
    }

    fn tint(&self, fraction: f64) -> Result<Self> {
        let fraction = require_percent("fraction", fraction)?;
        self.interpolate_hsv(&Hsv::from_parts(0, 0.0, 1.0, self.alpha), 1.0 - fraction)
    }
}

impl Add for Hsv {
    type Output = Hsv;

    fn add(self, other: Hsv) -> Hsv {
        self.combine(other, |a, b| a + b, |a, b| a + b)
    }
}

impl Sub for Hsv {
    type Output = Hsv;

    fn sub(self, other: Hsv) -> Hsv {
        self.combine(other, |a, b| a - b, |a, b| a - b)
    }
}

impl Mul for Hsv {
    type Output = Hsv;

    fn mul(self, other: Hsv) -> Hsv {
        self.combine(other, |a, b| a * b, |a, b| a * b)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = display_percent(self.saturation);
        let v = display_percent(self.value);
        if self.alpha >= OPAQUE {
            write!(f, "hsv({}, {s}, {v})", self.hue)
        } else {
            let a = display_percent(self.alpha);
            write!(f, "hsva({}, {s}, {v}, {a})", self.hue)
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct HsvFields {
    hue: i32,
    saturation: f64,
    value: f64,
    #[serde(default = "opaque")]
    alpha: f64,
}

#[cfg(feature = "serde")]
fn opaque() -> f64 {
    OPAQUE
}

#[cfg(feature = "serde")]
impl TryFrom<HsvFields> for Hsv {
    type Error = crate::error::ColorError;

    fn try_from(fields: HsvFields) -> Result<Self> {
        Hsv::new(fields.hue, fields.saturation, fields.value, fields.alpha)
    }
}
