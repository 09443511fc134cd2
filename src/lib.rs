//! # fox-color
//!
//! RGB, HSL and HSV color values with alpha.
//!
//! Every representation implements [`Color`], which provides conversion
//! between the three spaces, hex encoding, hue rotation, shading, tinting and
//! interpolation. [`ColorValue`] holds any one of them when the representation
//! is only known at runtime.
//!
//! ## Usage
//!
//! ```rust
//! use fox_color::{parse_hex, Color, Hsv};
//!
//! let red = parse_hex("#f00").unwrap();
//! assert_eq!(red.to_hsv(), Hsv::opaque(0, 1.0, 1.0).unwrap());
//! assert_eq!(red.rotate_hue_by_degrees(120).to_hex(false), "#00ff00");
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for every color type. [`Rgb`] uses its
//!   hex string; [`Hsl`] and [`Hsv`] use their named channels.

mod color;
pub mod constants;
mod error;
pub mod hex;
mod hsl;
mod hsv;
mod math;
mod parse;
mod rgb;
mod validate;

pub use color::{Color, ColorChannels, ColorValue};
pub use error::{ColorError, ColorKind, HexFormatError, Result};
pub use hex::{hex_to_int, hex_to_ubytes, int_to_hex, is_hex_digit, is_valid_hex, ubyte_to_hex, ubytes_to_hex};
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use parse::{expand_short_hex, format_hex, hex_to_channel_bytes, parse_hex, validate_hex};
pub use rgb::Rgb;
pub use validate::{clamp_byte, clamp_percent, normalize_hue, require_byte, require_percent};
