// ============================================================================
// Domain Models Module
// Glyph tables and conversion options
// ============================================================================

pub mod config;
pub mod variant;

pub use config::{ConversionOptions, OverflowPolicy};
pub use variant::{Carry, Variant, VariantTag};
