// ============================================================================
// Group Verbalizer
// Renders one digit group (up to four digits) into glyphs
// ============================================================================

use crate::domain::{Carry, Variant};
use crate::numeric::{ConversionError, ConversionResult, GROUP_WIDTH};

/// Verbalize a single digit group.
///
/// Every non-zero digit is followed by the carry for its place in the group
/// (thousand, hundred, ten; the units digit gets none). Zero digits emit the
/// zero glyph alone.
///
/// The output is deliberately raw: runs of zero glyphs and a leading
/// "one-ten" are left for the assembler and the zero collapser.
///
/// # Example
/// ```text
/// "1010" -> 一千零一十零
/// "0012" -> 零零一十二
/// ```
///
/// # Errors
/// - `InvalidDigit` if the group contains a non-decimal character
/// - `MagnitudeOutOfRange` if the group is wider than four digits
pub fn verbalize_group(group: &str, variant: &Variant) -> ConversionResult<String> {
    let width = group.chars().count();
    if width > GROUP_WIDTH {
        return Err(ConversionError::MagnitudeOutOfRange { digits: width });
    }

    let mut out = String::with_capacity(width * 2 * 3);
    for (position, character) in group.chars().enumerate() {
        let value = character
            .to_digit(10)
            .ok_or(ConversionError::InvalidDigit {
                character,
                position,
            })? as u8;

        if value == 0 {
            out.push(variant.zero());
            continue;
        }

        out.push(variant.digit(value));
        if let Some(carry) = Carry::in_group(width - 1 - position) {
            out.push(variant.carry(carry));
        }
    }

    tracing::trace!(group, glyphs = %out, "verbalized digit group");
    Ok(out)
}
