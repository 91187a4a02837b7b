// ============================================================================
// Digit Strings and Segmentation
// Validated decimal magnitudes split into four-digit groups
// ============================================================================

use super::errors::{ConversionError, ConversionResult};
use crate::domain::OverflowPolicy;
use arrayvec::ArrayVec;
use std::fmt;
use std::str::FromStr;

/// Maximum number of significant digits the numeral system can express.
///
/// The largest carry is the trillion-scale glyph (10^12), which can take a
/// four-digit multiplier, so the ceiling is 10^16 - 1.
pub const MAX_DIGITS: usize = 16;

/// Number of digits verbalized together before a large-scale carry applies.
pub const GROUP_WIDTH: usize = 4;

/// Maximum number of digit groups (MAX_DIGITS / GROUP_WIDTH).
pub const MAX_GROUPS: usize = MAX_DIGITS / GROUP_WIDTH;

/// Digit groups, most significant first. Only the first group may be shorter
/// than [`GROUP_WIDTH`].
pub type GroupSequence<'a> = ArrayVec<&'a str, MAX_GROUPS>;

/// Decimal digit representation of an absolute value.
///
/// Invariants:
/// - 1 to [`MAX_DIGITS`] ASCII decimal digits
/// - no leading zero unless the value is exactly `"0"`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitString(String);

impl DigitString {
    /// Build from an absolute value.
    ///
    /// # Errors
    /// Returns `MagnitudeOutOfRange` for 17+ digit values under
    /// [`OverflowPolicy::Reject`].
    pub fn from_magnitude(value: u64, overflow: OverflowPolicy) -> ConversionResult<Self> {
        Self::parse_with(&value.to_string(), overflow)
    }

    /// Parse unsigned digit text, stripping leading zeros.
    ///
    /// # Errors
    /// - `EmptyInput` if `text` is empty
    /// - `InvalidDigit` on the first non-decimal character
    /// - `MagnitudeOutOfRange` for 17+ significant digits under
    ///   [`OverflowPolicy::Reject`]
    pub fn parse_with(text: &str, overflow: OverflowPolicy) -> ConversionResult<Self> {
        if text.is_empty() {
            return Err(ConversionError::EmptyInput);
        }

        if let Some((position, character)) = text
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_digit())
        {
            return Err(ConversionError::InvalidDigit {
                character,
                position,
            });
        }

        let significant = text.trim_start_matches('0');
        if significant.is_empty() {
            return Ok(Self("0".to_string()));
        }

        if significant.len() > MAX_DIGITS {
            match overflow {
                OverflowPolicy::Reject => {
                    return Err(ConversionError::MagnitudeOutOfRange {
                        digits: significant.len(),
                    });
                }
                OverflowPolicy::Truncate => {
                    tracing::warn!(
                        digits = significant.len(),
                        "truncating magnitude to its leftmost {} digits",
                        MAX_DIGITS
                    );
                    return Ok(Self(significant[..MAX_DIGITS].to_string()));
                }
            }
        }

        Ok(Self(significant.to_string()))
    }

    /// The digit text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a digit string holds at least one digit.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    /// Split into four-digit groups, most significant first.
    pub fn groups(&self) -> GroupSequence<'_> {
        chunk(&self.0)
    }
}

impl FromStr for DigitString {
    type Err = ConversionError;

    /// Parse with [`OverflowPolicy::Reject`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, OverflowPolicy::Reject)
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Segmenter
// ============================================================================

/// Split raw digit text into groups of at most four digits.
///
/// Chunks are peeled from the right, so the last group always holds the
/// final four digits and only the first group can be short.
///
/// # Errors
/// - `EmptyInput` if `digits` is empty
/// - `InvalidDigit` on any non-decimal character
/// - `MagnitudeOutOfRange` if `digits` is longer than [`MAX_DIGITS`]
pub fn segment(digits: &str) -> ConversionResult<GroupSequence<'_>> {
    if digits.is_empty() {
        return Err(ConversionError::EmptyInput);
    }
    if let Some((position, character)) = digits
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_digit())
    {
        return Err(ConversionError::InvalidDigit {
            character,
            position,
        });
    }
    if digits.len() > MAX_DIGITS {
        return Err(ConversionError::MagnitudeOutOfRange {
            digits: digits.len(),
        });
    }
    Ok(chunk(digits))
}

/// Caller guarantees 1..=MAX_DIGITS ASCII digits.
fn chunk(digits: &str) -> GroupSequence<'_> {
    let mut groups = GroupSequence::new();
    let head = match digits.len() % GROUP_WIDTH {
        0 => GROUP_WIDTH,
        rem => rem,
    };

    let mut start = 0;
    let mut end = head.min(digits.len());
    while start < digits.len() {
        groups.push(&digits[start..end]);
        start = end;
        end = (end + GROUP_WIDTH).min(digits.len());
    }
    groups
}
