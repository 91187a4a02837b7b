// ============================================================================
// Numeric Module
// Decimal magnitudes and the errors raised while handling them
// ============================================================================
//
// This module provides:
// - DigitString: validated digit text of an absolute value
// - segment/GroupSequence: four-digit grouping, most significant first
// - ConversionError: error taxonomy for the whole crate
//
// Design principles:
// - All fallible operations return Result (no panics)
// - At most 16 significant digits (four groups of four)

mod digits;
mod errors;

pub use digits::{segment, DigitString, GroupSequence, GROUP_WIDTH, MAX_DIGITS, MAX_GROUPS};
pub use errors::{ConversionError, ConversionResult};
