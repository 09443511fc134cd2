//! Error types returned by every fallible color operation.

use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ColorError>;

/// Which of the three color representations a value uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKind {
    Rgb,
    Hsl,
    Hsv,
}

impl fmt::Display for ColorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorKind::Rgb => "RGB",
            ColorKind::Hsl => "HSL",
            ColorKind::Hsv => "HSV",
        };
        f.write_str(name)
    }
}

/// Reason a hex string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexFormatError {
    #[error("must be 4, 5, 7, or 9 characters in length, got {0}")]
    Length(usize),

    #[error("must start with a '#' character")]
    MissingPrefix,

    #[error("character {position} ({digit:?}) is not a valid hex digit")]
    InvalidDigit { digit: char, position: usize },

    #[error("no hex digits to convert")]
    Empty,

    #[error("{0} hex digits do not fit in 64 bits")]
    TooLong(usize),
}

/// Color error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    /// A channel or fraction argument fell outside its legal range.
    #[error("{name} must be between {min} and {max} (inclusive), got {value}")]
    Domain {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A hex string was malformed.
    #[error("invalid hex string {input:?}: {reason}")]
    Format {
        input: String,
        reason: HexFormatError,
    },

    /// Arithmetic was attempted between two different color representations.
    #[error("cannot combine {left} and {right} color values")]
    TypeMismatch { left: ColorKind, right: ColorKind },
}

impl ColorError {
    pub(crate) fn domain(name: &'static str, value: f64, min: f64, max: f64) -> Self {
        ColorError::Domain {
            name,
            value,
            min,
            max,
        }
    }

    pub(crate) fn format(input: &str, reason: HexFormatError) -> Self {
        ColorError::Format {
            input: input.to_string(),
            reason,
        }
    }

    /// True for [`ColorError::Domain`].
    pub fn is_domain(&self) -> bool {
        matches!(self, ColorError::Domain { .. })
    }

    /// True for [`ColorError::Format`].
    pub fn is_format(&self) -> bool {
        matches!(self, ColorError::Format { .. })
    }

    /// True for [`ColorError::TypeMismatch`].
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, ColorError::TypeMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_message_names_channel_and_bounds() {
        let err = ColorError::domain("alpha", 1.5, 0.0, 1.0);
        assert_eq!(
            err.to_string(),
            "alpha must be between 0 and 1 (inclusive), got 1.5"
        );
        assert!(err.is_domain());
    }

    #[test]
    fn format_message_reports_offending_digit() {
        let err = ColorError::format(
            "#ffg",
            HexFormatError::InvalidDigit {
                digit: 'g',
                position: 3,
            },
        );
        assert_eq!(
            err.to_string(),
            "invalid hex string \"#ffg\": character 3 ('g') is not a valid hex digit"
        );
        assert!(err.is_format());
    }

    #[test]
    fn type_mismatch_names_both_kinds() {
        let err = ColorError::TypeMismatch {
            left: ColorKind::Rgb,
            right: ColorKind::Hsv,
        };
        assert_eq!(err.to_string(), "cannot combine RGB and HSV color values");
        assert!(err.is_type_mismatch());
    }
}
