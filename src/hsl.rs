//! Hsl: hue, saturation and lightness plus alpha.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::color::{display_percent, Color};
use crate::constants::OPAQUE;
use crate::error::{ColorKind, Result};
use crate::hsv::Hsv;
use crate::math;
use crate::rgb::Rgb;
use crate::validate::{clamp_percent, normalize_hue, require_percent};

/// Color stored as a hue in degrees and saturation, lightness and alpha in `0.0–1.0`.
///
/// Hues outside `0..360` are wrapped rather than rejected, so `-30` becomes `330`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "HslFields")
)]
pub struct Hsl {
    hue: i32,
    saturation: f64,
    lightness: f64,
    alpha: f64,
}

impl Hsl {
    /// Create from channel values. Hue wraps; the rest must lie in `0.0–1.0`.
    pub fn new(hue: i32, saturation: f64, lightness: f64, alpha: f64) -> Result<Self> {
        Ok(Self {
            hue: normalize_hue(hue),
            saturation: require_percent("saturation", saturation)?,
            lightness: require_percent("lightness", lightness)?,
            alpha: require_percent("alpha", alpha)?,
        })
    }

    /// Create a fully opaque color.
    pub fn opaque(hue: i32, saturation: f64, lightness: f64) -> Result<Self> {
        Self::new(hue, saturation, lightness, OPAQUE)
    }

    pub(crate) fn from_parts(hue: i32, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self {
            hue: normalize_hue(hue),
            saturation,
            lightness,
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

    /// Lightness (0.0–1.0).
    pub fn lightness(&self) -> f64 {
        self.lightness
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

    /// Replace lightness. Fails, leaving the color untouched, outside `0.0–1.0`.
    pub fn set_lightness(&mut self, lightness: f64) -> Result<()> {
        self.lightness = require_percent("lightness", lightness)?;
        Ok(())
    }

    /// Copy with the hue replaced and wrapped.
    pub fn with_hue(&self, hue: i32) -> Self {
        Self::from_parts(hue, self.saturation, self.lightness, self.alpha)
    }

    /// Copy with saturation replaced.
    pub fn with_saturation(&self, saturation: f64) -> Result<Self> {
        self.with_values(None, Some(saturation), None, None)
    }

    /// Copy with lightness replaced.
    pub fn with_lightness(&self, lightness: f64) -> Result<Self> {
        self.with_values(None, None, Some(lightness), None)
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
        lightness: Option<f64>,
        alpha: Option<f64>,
    ) -> Result<Self> {
        Self::new(
            hue.unwrap_or(self.hue),
            saturation.unwrap_or(self.saturation),
            lightness.unwrap_or(self.lightness),
            alpha.unwrap_or(self.alpha),
        )
    }

    fn combine(self, other: Hsl, hue: fn(i32, i32) -> i32, op: fn(f64, f64) -> f64) -> Hsl {
        Hsl {
            hue: normalize_hue(hue(self.hue, other.hue)),
            saturation: clamp_percent(op(self.saturation, other.saturation)),
            lightness: clamp_percent(op(self.lightness, other.lightness)),
            alpha: clamp_percent(op(self.alpha, other.alpha)),
        }
    }
}

impl Default for Hsl {
    fn default() -> Self {
        Self::from_parts(0, 0.0, 0.0, OPAQUE)
    }
}

impl Color for Hsl {
    type Channels = (i32, f64, f64);

    fn kind(&self) -> ColorKind {
        ColorKind::Hsl
    }

    fn channels(&self) -> (i32, f64, f64) {
        (self.hue, self.saturation, self.lightness)
    }

    fn alpha(&self) -> f64 {
        self.alpha
    }

    fn set_alpha(&mut self, alpha: f64) -> Result<()> {
        self.alpha = require_percent("alpha", alpha)?;
        Ok(())
    }

    fn to_rgb(&self) -> Rgb {
        let (r, g, b) = math::hsl_to_rgb(self.hue, self.saturation, self.lightness);
        Rgb::from_parts(r, g, b, self.alpha)
    }

    fn to_hsl(&self) -> Hsl {
        *self
    }

    fn to_hsv(&self) -> Hsv {
        let (h, s, v) = math::hsl_to_hsv(self.hue, self.saturation, self.lightness);
        Hsv::from_parts(h, s, v, self.alpha)
    }

    fn rotate_hue_by_degrees(&self, degrees: i32) -> Self {
        self.with_hue(self.hue + normalize_hue(degrees))
    }

    fn shade(&self, fraction: f64) -> Result<Self> {
        let fraction = require_percent("fraction", fraction)?;
        self.interpolate_hsl(&Hsl::from_parts(0, 0.0, 0.0, self.alpha), 1.0 - fraction)
    }

    fn tint(&self, fraction: f64) -> Result<Self> {
        let fraction = require_percent("fraction", fraction)?;
        self.interpolate_hsl(&Hsl::from_parts(0, 0.0, 1.0, self.alpha), 1.0 - fraction)
    }
}

impl Add for Hsl {
    type Output = Hsl;

    fn add(self, other: Hsl) -> Hsl {
        self.combine(other, |a, b| a + b, |a, b| a + b)
    }
}

impl Sub for Hsl {
    type Output = Hsl;

    fn sub(self, other: Hsl) -> Hsl {
        self.combine(other, |a, b| a - b, |a, b| a - b)
    }
}

impl Mul for Hsl {
    type Output = Hsl;

    fn mul(self, other: Hsl) -> Hsl {
        self.combine(other, |a, b| a * b, |a, b| a * b)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = display_percent(self.saturation);
        let l = display_percent(self.lightness);
        if self.alpha >= OPAQUE {
            write!(f, "hsl({}, {s}, {l})", self.hue)
        } else {
            let a = display_percent(self.alpha);
            write!(f, "hsla({}, {s}, {l}, {a})", self.hue)
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct HslFields {
    hue: i32,
    saturation: f64,
    lightness: f64,
    #[serde(default = "opaque")]
    alpha: f64,
}

#[cfg(feature = "serde")]
fn opaque() -> f64 {
    OPAQUE
}

#[cfg(feature = "serde")]
impl TryFrom<HslFields> for Hsl {
    type Error = crate::error::ColorError;

    fn try_from(fields: HslFields) -> Result<Self> {
        Hsl::new(fields.hue, fields.saturation, fields.lightness, fields.alpha)
    }
}
