// ============================================================================
// Engine Module
// Numeral assembly pipeline and the shared converter registry
// ============================================================================

mod assembler;
mod converter;
mod oral_two;
mod verbalizer;
mod zero_collapser;

pub mod factory;

pub use assembler::assemble;
pub use converter::Converter;
pub use factory::{convert, converter, converter_for_label};
pub use oral_two::{OralTwoRewriter, Replacer};
pub use verbalizer::verbalize_group;
pub use zero_collapser::collapse_zeros;
