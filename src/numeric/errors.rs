// ============================================================================
// Conversion Errors
// Error types for numeral conversion
// ============================================================================

use std::fmt;

/// Errors that can occur while converting a number to numeral text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionError {
    /// Input text was empty
    EmptyInput,
    /// Digit text contained something other than an ASCII decimal digit
    InvalidDigit {
        /// The offending character
        character: char,
        /// Char offset of the offending character
        position: usize,
    },
    /// Magnitude needs more significant digits than the numeral system covers
    MagnitudeOutOfRange {
        /// Number of significant digits in the rejected magnitude
        digits: usize,
    },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::EmptyInput => write!(f, "empty input: no digits to convert"),
            ConversionError::InvalidDigit {
                character,
                position,
            } => write!(
                f,
                "invalid digit: {:?} at position {} is not a decimal digit",
                character, position
            ),
            ConversionError::MagnitudeOutOfRange { digits } => write!(
                f,
                "magnitude out of range: {} significant digits exceed the maximum of {}",
                digits,
                crate::numeric::MAX_DIGITS
            ),
        }
    }
}

impl std::error::Error for ConversionError {}

/// Result type alias for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConversionError::MagnitudeOutOfRange { digits: 17 }.to_string(),
            "magnitude out of range: 17 significant digits exceed the maximum of 16"
        );
        assert_eq!(
            ConversionError::InvalidDigit {
                character: 'x',
                position: 3
            }
            .to_string(),
            "invalid digit: 'x' at position 3 is not a decimal digit"
        );
        assert_eq!(
            ConversionError::EmptyInput.to_string(),
            "empty input: no digits to convert"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            ConversionError::MagnitudeOutOfRange { digits: 17 },
            ConversionError::MagnitudeOutOfRange { digits: 17 }
        );
        assert_ne!(
            ConversionError::MagnitudeOutOfRange { digits: 17 },
            ConversionError::MagnitudeOutOfRange { digits: 18 }
        );
        assert_ne!(ConversionError::EmptyInput, ConversionError::MagnitudeOutOfRange { digits: 0 });
    }
}
