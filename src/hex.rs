//! Hex digit and byte primitives.
//!
//! These work on bare digit strings with an optional, caller-chosen prefix
//! (`"0x"`, `"#"`, or none). Full color strings are handled by
//! [`crate::parse`].

use crate::constants::MAX_INT_HEX_DIGITS;
use crate::error::{ColorError, HexFormatError, Result};

const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";
const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// True for `0-9`, `a-f` and `A-F`.
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// True if every character of `s` is a hex digit. Prefixes must already be removed.
pub fn is_valid_hex(s: &str) -> bool {
    s.chars().all(is_hex_digit)
}

fn nibble_char(n: u8, upper: bool) -> char {
    let table = if upper { UPPER_DIGITS } else { LOWER_DIGITS };
    table[(n & 0x0f) as usize] as char
}

/// Format one byte as exactly two hex digits.
pub fn ubyte_to_hex(byte: u8, upper: bool) -> String {
    let mut out = String::with_capacity(2);
    push_ubyte(&mut out, byte, upper);
    out
}

fn push_ubyte(out: &mut String, byte: u8, upper: bool) {
    out.push(nibble_char(byte >> 4, upper));
    out.push(nibble_char(byte & 0x0f, upper));
}

/// Format big-endian bytes as one hex string, two digits per byte, after `prefix`.
///
/// No bytes gives just `prefix`.
pub fn ubytes_to_hex(bytes: &[u8], prefix: &str, upper: bool) -> String {
    let mut out = String::with_capacity(prefix.len() + bytes.len() * 2);
    out.push_str(prefix);
    for &byte in bytes {
        push_ubyte(&mut out, byte, upper);
    }
    out
}

/// Format `value` as big-endian hex in whole bytes, left-padded with zeros to
/// at least `min_width` digits.
///
/// Zero renders as `min_width` zeros.
pub fn int_to_hex(value: u64, min_width: usize, prefix: &str, upper: bool) -> String {
    let mut digits = String::new();
    let mut rest = value;
    let mut bytes = Vec::new();
    while rest > 0 {
        bytes.push((rest & 0xff) as u8);
        rest >>= 8;
    }
    for &byte in bytes.iter().rev() {
        push_ubyte(&mut digits, byte, upper);
    }

    let pad = min_width.saturating_sub(digits.len());
    let mut out = String::with_capacity(prefix.len() + pad + digits.len());
    out.push_str(prefix);
    out.extend(std::iter::repeat('0').take(pad));
    out.push_str(&digits);
    out
}

/// Strip `prefix` if present, check every digit, and left-pad odd lengths with `0`.
fn trim_and_validate<'a>(value: &'a str, prefix: &str) -> Result<std::borrow::Cow<'a, str>> {
    let digits = if prefix.is_empty() {
        value
    } else {
        value.strip_prefix(prefix).unwrap_or(value)
    };
    let offset = value.chars().count() - digits.chars().count();

    if let Some((position, digit)) = digits.chars().enumerate().find(|&(_, c)| !is_hex_digit(c)) {
        return Err(ColorError::format(
            value,
            HexFormatError::InvalidDigit {
                digit,
                position: offset + position,
            },
        ));
    }

    if digits.len() % 2 == 1 {
        Ok(std::borrow::Cow::Owned(format!("0{digits}")))
    } else {
        Ok(std::borrow::Cow::Borrowed(digits))
    }
}

/// Decode a hex string into big-endian bytes, stripping `prefix` when present.
///
/// An odd number of digits is treated as if a leading `0` were present. An
/// empty digit string decodes to no bytes.
pub fn hex_to_ubytes(value: &str, prefix: &str) -> Result<Vec<u8>> {
    let digits = trim_and_validate(value, prefix)?;
    // validated above, so every pair is two ASCII hex digits
    Ok(digits
        .as_bytes()
        .chunks_exact(2)
        .map(|pair| (hex_value(pair[0]) << 4) | hex_value(pair[1]))
        .collect())
}

/// Decode a big-endian hex string into an integer, stripping `prefix` when present.
pub fn hex_to_int(value: &str, prefix: &str) -> Result<u64> {
    let digits = trim_and_validate(value, prefix)?;
    if digits.is_empty() {
        return Err(ColorError::format(value, HexFormatError::Empty));
    }
    let significant = digits.trim_start_matches('0');
    if significant.len() > MAX_INT_HEX_DIGITS {
        return Err(ColorError::format(
            value,
            HexFormatError::TooLong(significant.len()),
        ));
    }
    Ok(significant
        .bytes()
        .fold(0u64, |acc, digit| (acc << 4) | hex_value(digit) as u64))
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ubyte_to_hex_pads_and_cases() {
        assert_eq!(ubyte_to_hex(0, false), "00");
        assert_eq!(ubyte_to_hex(15, false), "0f");
        assert_eq!(ubyte_to_hex(240, false), "f0");
        assert_eq!(ubyte_to_hex(255, false), "ff");
        assert_eq!(ubyte_to_hex(171, true), "AB");
    }

    #[test]
    fn ubytes_to_hex_keeps_order_and_prefix() {
        assert_eq!(
            ubytes_to_hex(&[0, 15, 240, 255], "0x", true),
            "0x000FF0FF"
        );
        assert_eq!(ubytes_to_hex(&[18, 52], "", false), "1234");
    }

    #[test]
    fn ubytes_to_hex_of_no_bytes_is_just_the_prefix() {
        assert_eq!(ubytes_to_hex(&[], "#", false), "#");
        assert_eq!(ubytes_to_hex(&hex_to_ubytes("", "").unwrap(), "", false), "");
    }

    #[test]
    fn int_to_hex_uses_whole_bytes() {
        assert_eq!(int_to_hex(255, 2, "", false), "ff");
        assert_eq!(int_to_hex(255, 6, "#", true), "#0000FF");
        assert_eq!(int_to_hex(65535, 2, "", false), "ffff");
        assert_eq!(int_to_hex(4_294_967_295, 2, "", false), "ffffffff");
        assert_eq!(int_to_hex(0x123, 0, "", false), "0123");
    }

    #[test]
    fn int_to_hex_zero_is_all_padding() {
        assert_eq!(int_to_hex(0, 4, "0x", false), "0x0000");
        assert_eq!(int_to_hex(0, 0, "", false), "");
    }

    #[test]
    fn hex_to_ubytes_decodes_mixed_case() {
        assert_eq!(hex_to_ubytes("FFffFF", "").unwrap(), vec![255, 255, 255]);
        assert_eq!(
            hex_to_ubytes("#FFf00F00", "#").unwrap(),
            vec![255, 240, 15, 0]
        );
    }

    #[test]
    fn hex_to_ubytes_pads_odd_lengths() {
        assert_eq!(hex_to_ubytes("fff", "").unwrap(), vec![0x0f, 0xff]);
        assert_eq!(hex_to_ubytes("0x1", "0x").unwrap(), vec![1]);
        assert!(hex_to_ubytes("", "").unwrap().is_empty());
    }

    #[test]
    fn hex_to_ubytes_reports_bad_digit_position() {
        let err = hex_to_ubytes("0xfz", "0x").unwrap_err();
        assert_eq!(
            err,
            ColorError::Format {
                input: "0xfz".to_string(),
                reason: HexFormatError::InvalidDigit {
                    digit: 'z',
                    position: 3
                },
            }
        );
    }

    #[test]
    fn bad_digit_position_counts_characters_not_bytes() {
        let err = hex_to_ubytes("§fz", "§").unwrap_err();
        assert_eq!(
            err,
            ColorError::Format {
                input: "§fz".to_string(),
                reason: HexFormatError::InvalidDigit {
                    digit: 'z',
                    position: 2
                },
            }
        );
    }

    #[test]
    fn hex_to_int_is_big_endian() {
        assert_eq!(hex_to_int("0xFFffFFff", "0x").unwrap(), 4_294_967_295);
        assert_eq!(hex_to_int("100", "").unwrap(), 256);
        assert_eq!(hex_to_int("00000000000000000001", "").unwrap(), 1);
    }

    #[test]
    fn hex_to_int_rejects_empty_and_overflow() {
        assert!(hex_to_int("0x", "0x").unwrap_err().is_format());
        assert!(hex_to_int("1ffffffffffffffff", "").unwrap_err().is_format());
    }

    #[test]
    fn digit_predicates() {
        assert!(is_valid_hex("09afAF"));
        assert!(!is_valid_hex("12g4"));
        assert!(is_valid_hex(""));
        assert!(!is_hex_digit('#'));
        assert!(is_hex_digit('c'));
    }
}
