// ============================================================================
// Converter
// Top-level conversion pipeline for one glyph variant
// ============================================================================

use super::assembler::assemble;
use super::oral_two::OralTwoRewriter;
use super::zero_collapser::collapse_zeros;
use crate::domain::{ConversionOptions, Variant, VariantTag};
use crate::interfaces::NumeralConverter;
use crate::numeric::{ConversionResult, DigitString};

/// Integer to numeral converter bound to one glyph variant.
///
/// Pipeline: sign extraction -> digit string -> segmenter -> group verbalizer
/// -> group assembler -> zero collapser -> oral-two rewriter (optional) ->
/// sign prefix.
///
/// Immutable after construction; a single instance can serve any number of
/// threads.
///
/// # Example
/// ```
/// use chinese_numeral::prelude::*;
///
/// let converter = Converter::new(VariantTag::Plain);
/// let text = converter.convert(12_000_001, ConversionOptions::default()).unwrap();
/// assert_eq!(text, "一千二百万零一");
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    tag: VariantTag,
    variant: &'static Variant,
    oral_two: OralTwoRewriter,
}

impl Converter {
    pub fn new(tag: VariantTag) -> Self {
        let variant = tag.variant();
        Self {
            tag,
            variant,
            oral_two: OralTwoRewriter::new(variant),
        }
    }

    #[inline]
    pub fn tag(&self) -> VariantTag {
        self.tag
    }

    #[inline]
    pub fn variant(&self) -> &'static Variant {
        self.variant
    }

    /// Convert a signed integer.
    ///
    /// With `use_oral_two`, exactly `2` renders as the oral two alone;
    /// other values are rewritten after assembly, negative ones included
    /// (`-200` -> 负两百, but `-2` -> 负二).
    ///
    /// # Errors
    /// Returns `MagnitudeOutOfRange` if `|value|` needs more than 16 digits
    /// and `options.overflow` is [`OverflowPolicy::Reject`](crate::domain::OverflowPolicy::Reject).
    pub fn convert(&self, value: i64, options: ConversionOptions) -> ConversionResult<String> {
        if value == 0 {
            return Ok(self.variant.zero().to_string());
        }
        if options.use_oral_two && value == 2 {
            return Ok(self.variant.oral_two().to_string());
        }

        let digits = DigitString::from_magnitude(value.unsigned_abs(), options.overflow)?;
        self.render(&digits, value < 0, options)
    }

    /// Convert an unsigned decimal digit string. Leading zeros are ignored.
    ///
    /// # Errors
    /// - `EmptyInput` for an empty string
    /// - `InvalidDigit` for any character other than `0`-`9`
    /// - `MagnitudeOutOfRange` as for [`convert`](Self::convert)
    pub fn convert_digits(
        &self,
        digits: &str,
        options: ConversionOptions,
    ) -> ConversionResult<String> {
        let digits = DigitString::parse_with(digits, options.overflow)?;
        if digits.is_zero() {
            return Ok(self.variant.zero().to_string());
        }
        if options.use_oral_two && digits.as_str() == "2" {
            return Ok(self.variant.oral_two().to_string());
        }
        self.render(&digits, false, options)
    }

    fn render(
        &self,
        digits: &DigitString,
        negative: bool,
        options: ConversionOptions,
    ) -> ConversionResult<String> {
        let assembled = assemble(&digits.groups(), self.variant)?;
        let mut text = collapse_zeros(&assembled, self.variant.zero());

        if options.use_oral_two {
            text = self.oral_two.rewrite(&text);
        }
        if negative {
            text.insert(0, self.variant.negative());
        }
        Ok(text)
    }
}

impl NumeralConverter for Converter {
    fn itoa(&self, value: i64, options: ConversionOptions) -> ConversionResult<String> {
        self.convert(value, options)
    }

    fn name(&self) -> &str {
        self.variant.name()
    }
}
