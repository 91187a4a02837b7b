// ============================================================================
// Numeral Converter Interface
// Defines the contract for integer to numeral text conversion
// ============================================================================

use crate::domain::ConversionOptions;
use crate::numeric::ConversionResult;

/// Converts integers into written numeral text in one glyph set.
pub trait NumeralConverter: Send + Sync {
    /// Convert a signed integer
    ///
    /// # Arguments
    /// * `value` - The integer to convert
    /// * `options` - Oral-two and overflow handling
    ///
    /// # Returns
    /// Non-empty numeral text, or an error for magnitudes the numeral system
    /// cannot express
    fn itoa(&self, value: i64, options: ConversionOptions) -> ConversionResult<String>;

    /// Get the glyph set label for logging
    fn name(&self) -> &str;

    /// Convert with default options
    fn itoa_default(&self, value: i64) -> ConversionResult<String> {
        self.itoa(value, ConversionOptions::default())
    }
}
