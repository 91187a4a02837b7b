// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod numeral_converter;

pub use numeral_converter::NumeralConverter;
