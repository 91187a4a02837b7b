// ============================================================================
// Chinese Numeral Library
// Integer to written Chinese numeral conversion
// ============================================================================

//! # Chinese Numeral
//!
//! Converts integers into written Chinese numerals, where every power of ten
//! has its own carry glyph instead of a position.
//!
//! ## Features
//!
//! - **Two glyph sets**: everyday (一二三, 十百千万亿兆) and financial
//!   (壹贰叁, 拾佰仟萬億兆) for cheques and contracts
//! - **Correct zero handling** across four-digit groups (一千二百万零一)
//! - **Oral two** (两) before hundred, thousand and the large-scale carries
//! - **Explicit range errors** instead of silent truncation beyond 16 digits
//! - **Lock-free sharing**: converters are immutable and built once
//!
//! ## Example
//!
//! ```rust
//! use chinese_numeral::prelude::*;
//!
//! let plain = converter(VariantTag::Plain);
//! assert_eq!(plain.convert(123, ConversionOptions::default()).unwrap(), "一百二十三");
//! assert_eq!(plain.convert(-10_010, ConversionOptions::default()).unwrap(), "负一万零一十");
//! assert_eq!(plain.convert(2_200, ConversionOptions::oral()).unwrap(), "两千两百");
//!
//! let financial = converter(VariantTag::Financial);
//! assert_eq!(financial.convert(10_000, ConversionOptions::default()).unwrap(), "壹萬");
//!
//! let err = plain.convert(10_000_000_000_000_000, ConversionOptions::default());
//! assert_eq!(err, Err(ConversionError::MagnitudeOutOfRange { digits: 17 }));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Carry, ConversionOptions, OverflowPolicy, Variant, VariantTag};
    pub use crate::engine::{convert, converter, converter_for_label, Converter};
    pub use crate::interfaces::NumeralConverter;
    pub use crate::numeric::{ConversionError, ConversionResult, DigitString};
}
