//! Color hex strings: `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`.
//!
//! Short forms are expanded by doubling each digit before decoding, so
//! `#f80` and `#ff8800` are the same color. Digits are case-insensitive.
//! The `#` is mandatory here, unlike the bare utilities in [`crate::hex`].

use crate::constants::{BYTE_SCALE, HEX_LENGTHS, HEX_PREFIX};
use crate::error::{ColorError, HexFormatError, Result};
use crate::hex::{self, ubytes_to_hex};
use crate::rgb::Rgb;

/// Check that `input` is a well-formed color hex string.
///
/// The length check runs first, then the prefix, then each digit. The first
/// bad digit is reported with its character position in `input`.
pub fn validate_hex(input: &str) -> Result<()> {
    let len = input.chars().count();
    if !HEX_LENGTHS.contains(&len) {
        return Err(ColorError::format(input, HexFormatError::Length(len)));
    }
    if !input.starts_with(HEX_PREFIX) {
        return Err(ColorError::format(input, HexFormatError::MissingPrefix));
    }
    if let Some((position, digit)) = input
        .chars()
        .enumerate()
        .skip(1)
        .find(|&(_, c)| !hex::is_hex_digit(c))
    {
        return Err(ColorError::format(
            input,
            HexFormatError::InvalidDigit { digit, position },
        ));
    }
    Ok(())
}

/// Double every digit of a short hex body: `"f80"` becomes `"ff8800"`.
pub fn expand_short_hex(digits: &str) -> String {
    digits.chars().flat_map(|c| [c, c]).collect()
}

/// Decode a color hex string into its big-endian channel bytes: three for
/// RGB, four when an alpha byte is present.
pub fn hex_to_channel_bytes(input: &str) -> Result<Vec<u8>> {
    validate_hex(input)?;
    let digits = &input[HEX_PREFIX.len()..];
    if digits.len() <= 4 {
        tracing::trace!(input, "expanding short hex color");
        hex::hex_to_ubytes(&expand_short_hex(digits), "")
    } else {
        hex::hex_to_ubytes(digits, "")
    }
}

/// Parse a color hex string into an [`Rgb`] value.
///
/// A missing alpha byte means fully opaque; otherwise alpha is `byte / 255`.
pub fn parse_hex(input: &str) -> Result<Rgb> {
    let bytes = hex_to_channel_bytes(input)?;
    let alpha = match bytes.get(3) {
        Some(&a) => a as f64 / BYTE_SCALE,
        None => 1.0,
    };
    Rgb::new(bytes[0] as i32, bytes[1] as i32, bytes[2] as i32, alpha)
}

/// Format channel bytes as `prefix` followed by two digits per byte.
pub fn format_hex(bytes: &[u8], prefix: &str, upper: bool) -> String {
    ubytes_to_hex(bytes, prefix, upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn short_forms_expand() {
        assert_eq!(expand_short_hex("f80"), "ff8800");
        assert_eq!(expand_short_hex("1234"), "11223344");
        assert_eq!(hex_to_channel_bytes("#fff").unwrap(), vec![255, 255, 255]);
        assert_eq!(
            hex_to_channel_bytes("#0f08").unwrap(),
            vec![0x00, 0xff, 0x00, 0x88]
        );
    }

    #[test]
    fn long_forms_decode_directly() {
        assert_eq!(
            hex_to_channel_bytes("#FF8000").unwrap(),
            vec![255, 128, 0]
        );
        assert_eq!(
            hex_to_channel_bytes("#ff800040").unwrap(),
            vec![255, 128, 0, 64]
        );
    }

    #[test]
    fn parse_hex_sets_alpha_from_fourth_byte() {
        let c = parse_hex("#ff000080").unwrap();
        assert_eq!(c.channels(), (255, 0, 0));
        assert_eq!(c.alpha(), 128.0 / 255.0);
        assert_eq!(parse_hex("#fff").unwrap().alpha(), 1.0);
    }

    #[test]
    fn rejects_bad_lengths() {
        for input in ["", "#", "#ff", "#fffff", "#fffffff", "#fffffffff0"] {
            let err = validate_hex(input).unwrap_err();
            assert!(
                matches!(
                    err,
                    ColorError::Format {
                        reason: HexFormatError::Length(_),
                        ..
                    }
                ),
                "{input:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn rejects_missing_prefix() {
        let err = parse_hex("ffffff0").unwrap_err();
        assert_eq!(
            err,
            ColorError::Format {
                input: "ffffff0".to_string(),
                reason: HexFormatError::MissingPrefix,
            }
        );
    }

    #[test]
    fn rejects_non_hex_digit_with_position() {
        let err = parse_hex("#12x456").unwrap_err();
        assert_eq!(
            err,
            ColorError::Format {
                input: "#12x456".to_string(),
                reason: HexFormatError::InvalidDigit {
                    digit: 'x',
                    position: 3
                },
            }
        );
    }

    #[test]
    fn rejects_multibyte_characters_without_panicking() {
        assert!(parse_hex("#ffé").unwrap_err().is_format());
    }

    #[test]
    fn format_hex_pads_each_byte() {
        assert_eq!(format_hex(&[1, 2, 255], "#", false), "#0102ff");
        assert_eq!(format_hex(&[171, 205], "0x", true), "0xABCD");
        assert_eq!(format_hex(&[], "#", false), "#");
    }
}
