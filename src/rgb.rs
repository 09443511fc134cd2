//! Rgb: red, green and blue bytes plus alpha.

use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use crate::color::{display_percent, Color};
use crate::constants::{BYTE_MAX, OPAQUE};
use crate::error::{ColorError, ColorKind, Result};
use crate::hsl::Hsl;
use crate::hsv::Hsv;
use crate::math;
use crate::parse::parse_hex;
use crate::validate::{clamp_byte, clamp_percent, require_byte, require_percent};

/// Color stored as red, green and blue channels in `0–255` and alpha in `0.0–1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
    alpha: f64,
}

impl Rgb {
    /// Create from channel values, rejecting any outside `0–255` or an alpha
    /// outside `0.0–1.0`.
    pub fn new(red: i32, green: i32, blue: i32, alpha: f64) -> Result<Self> {
        Ok(Self {
            red: require_byte("red", red)?,
            green: require_byte("green", green)?,
            blue: require_byte("blue", blue)?,
            alpha: require_percent("alpha", alpha)?,
        })
    }

    /// Create a fully opaque color.
    pub fn opaque(red: i32, green: i32, blue: i32) -> Result<Self> {
        Self::new(red, green, blue, OPAQUE)
    }

    /// Create a fully opaque color from bytes. Cannot fail.
    pub const fn from_bytes(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: OPAQUE,
        }
    }

    /// Channels already known to be in range.
    pub(crate) fn from_parts(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&alpha));
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Black with the given alpha.
    pub fn black(alpha: f64) -> Result<Self> {
        Self::new(0, 0, 0, alpha)
    }

    /// White with the given alpha.
    pub fn white(alpha: f64) -> Result<Self> {
        Self::new(BYTE_MAX, BYTE_MAX, BYTE_MAX, alpha)
    }

    /// Red channel (0–255).
    pub fn red(&self) -> u8 {
        self.red
    }

    /// Green channel (0–255).
    pub fn green(&self) -> u8 {
        self.green
    }

    /// Blue channel (0–255).
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Replace red. Fails, leaving the color untouched, outside `0–255`.
    pub fn set_red(&mut self, red: i32) -> Result<()> {
        self.red = require_byte("red", red)?;
        Ok(())
    }

    /// Replace green. Fails, leaving the color untouched, outside `0–255`.
    pub fn set_green(&mut self, green: i32) -> Result<()> {
        self.green = require_byte("green", green)?;
        Ok(())
    }

    /// Replace blue. Fails, leaving the color untouched, outside `0–255`.
    pub fn set_blue(&mut self, blue: i32) -> Result<()> {
        self.blue = require_byte("blue", blue)?;
        Ok(())
    }

    /// Copy with red replaced.
    pub fn with_red(&self, red: i32) -> Result<Self> {
        self.with_values(Some(red), None, None, None)
    }

    /// Copy with green replaced.
    pub fn with_green(&self, green: i32) -> Result<Self> {
        self.with_values(None, Some(green), None, None)
    }

    /// Copy with blue replaced.
    pub fn with_blue(&self, blue: i32) -> Result<Self> {
        self.with_values(None, None, Some(blue), None)
    }

    /// Copy with alpha replaced.
    pub fn with_alpha(&self, alpha: f64) -> Result<Self> {
        self.with_values(None, None, None, Some(alpha))
    }

    /// Copy of this color with any of the given channels replaced.
    pub fn with_values(
        &self,
        red: Option<i32>,
        green: Option<i32>,
        blue: Option<i32>,
        alpha: Option<f64>,
    ) -> Result<Self> {
        Self::new(
            red.unwrap_or(self.red as i32),
            green.unwrap_or(self.green as i32),
            blue.unwrap_or(self.blue as i32),
            alpha.unwrap_or(self.alpha),
        )
    }

    fn combine(self, other: Rgb, op: impl Fn(i32, i32) -> i32, alpha: impl Fn(f64, f64) -> f64) -> Rgb {
        Rgb {
            red: clamp_byte(op(self.red as i32, other.red as i32)),
            green: clamp_byte(op(self.green as i32, other.green as i32)),
            blue: clamp_byte(op(self.blue as i32, other.blue as i32)),
            alpha: clamp_percent(alpha(self.alpha, other.alpha)),
        }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::from_bytes(0, 0, 0)
    }
}

impl Color for Rgb {
    type Channels = (u8, u8, u8);

    fn kind(&self) -> ColorKind {
        ColorKind::Rgb
    }

    fn channels(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    fn alpha(&self) -> f64 {
        self.alpha
    }

    fn set_alpha(&mut self, alpha: f64) -> Result<()> {
        self.alpha = require_percent("alpha", alpha)?;
        Ok(())
    }

    fn to_rgb(&self) -> Rgb {
        *self
    }

    fn to_hsl(&self) -> Hsl {
        let (h, s, l) = math::rgb_to_hsl(self.red, self.green, self.blue);
        Hsl::from_parts(h, s, l, self.alpha)
    }

    fn to_hsv(&self) -> Hsv {
        let (h, s, v) = math::rgb_to_hsv(self.red, self.green, self.blue);
        Hsv::from_parts(h, s, v, self.alpha)
    }

    /// RGB has no hue of its own, so this rotates through HSL.
    fn rotate_hue_by_degrees(&self, degrees: i32) -> Self {
        tracing::trace!(degrees, "rotating rgb hue through hsl");
        self.to_hsl().rotate_hue_by_degrees(degrees).to_rgb()
    }

    fn shade(&self, fraction: f64) -> Result<Self> {
        let fraction = require_percent("fraction", fraction)?;
        self.interpolate_rgb(&Rgb::from_parts(0, 0, 0, self.alpha), 1.0 - fraction)
    }

    fn tint(&self, fraction: f64) -> Result<Self> {
        let fraction = require_percent("fraction", fraction)?;
        self.interpolate_rgb(&Rgb::from_parts(255, 255, 255, self.alpha), 1.0 - fraction)
    }
}

impl Add for Rgb {
    type Output = Rgb;

    fn add(self, other: Rgb) -> Rgb {
        self.combine(other, |a, b| a + b, |a, b| a + b)
    }
}

impl Sub for Rgb {
    type Output = Rgb;

    fn sub(self, other: Rgb) -> Rgb {
        self.combine(other, |a, b| a - b, |a, b| a - b)
    }
}

impl Mul for Rgb {
    type Output = Rgb;

    fn mul(self, other: Rgb) -> Rgb {
        self.combine(other, |a, b| a * b, |a, b| a * b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::from_bytes(red, green, blue)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        parse_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha >= OPAQUE {
            write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
        } else {
            write!(
                f,
                "rgba({}, {}, {}, {})",
                self.red,
                self.green,
                self.blue,
                display_percent(self.alpha)
            )
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex(true))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        parse_hex(&s).map_err(serde::de::Error::custom)
    }
}
