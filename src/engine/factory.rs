// ============================================================================
// Converter Registry
// Shared, lazily built converters keyed by variant tag
// ============================================================================

use crate::domain::{ConversionOptions, VariantTag};
use crate::engine::Converter;
use crate::numeric::ConversionResult;
use std::sync::LazyLock;

static PLAIN: LazyLock<Converter> = LazyLock::new(|| build(VariantTag::Plain));
static FINANCIAL: LazyLock<Converter> = LazyLock::new(|| build(VariantTag::Financial));

fn build(tag: VariantTag) -> Converter {
    tracing::debug!(variant = %tag, "building numeral converter");
    Converter::new(tag)
}

// ============================================================================
// Factory Functions
// ============================================================================

/// Get the shared converter for a variant
///
/// Each converter (glyph table plus its oral-two rule sets) is built on first
/// use and reused by every later call, from any thread.
///
/// # Example
/// ```
/// use chinese_numeral::prelude::*;
///
/// let text = converter(VariantTag::Financial)
///     .convert(2019, ConversionOptions::default())
///     .unwrap();
/// assert_eq!(text, "贰仟零壹拾玖");
/// ```
pub fn converter(tag: VariantTag) -> &'static Converter {
    match tag {
        VariantTag::Plain => &*PLAIN,
        VariantTag::Financial => &*FINANCIAL,
    }
}

/// Get the shared converter for a language label (`zh-Hans`,
/// `zh-Hans_upper`); unknown labels get the plain converter.
pub fn converter_for_label(label: &str) -> &'static Converter {
    converter(VariantTag::from_label(label))
}

/// Convert with the shared converter for `tag`
///
/// # Example
/// ```
/// use chinese_numeral::prelude::*;
///
/// assert_eq!(convert(12, VariantTag::Plain, ConversionOptions::default()).unwrap(), "十二");
/// assert_eq!(convert(200, VariantTag::Plain, ConversionOptions::oral()).unwrap(), "两百");
/// ```
pub fn convert(value: i64, tag: VariantTag, options: ConversionOptions) -> ConversionResult<String> {
    converter(tag).convert(value, options)
}
