// ============================================================================
// Conversion Configuration
// Per-call options controlling oral-two rewriting and oversized input
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Overflow Policy
// ============================================================================

/// What to do with magnitudes that need more than 16 significant digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OverflowPolicy {
    /// Fail with `MagnitudeOutOfRange`
    #[default]
    Reject,

    /// Keep the leftmost 16 digits and convert those
    /// - Produces a numeral for a different (smaller) value
    /// - Use case: output compatibility with older renderers
    Truncate,
}

// ============================================================================
// Conversion Options
// ============================================================================

/// Options for a single conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConversionOptions {
    /// Use the colloquial "two" glyph (两) before hundred, thousand and the
    /// large-scale carries, and for the bare value 2
    pub use_oral_two: bool,

    /// Handling of magnitudes beyond 16 digits
    pub overflow: OverflowPolicy,
}

impl ConversionOptions {
    /// Default options: ordinary two, oversized input rejected
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Enable or disable oral-two rewriting
    pub fn with_oral_two(mut self, use_oral_two: bool) -> Self {
        self.use_oral_two = use_oral_two;
        self
    }

    /// Builder method: Set the overflow policy
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl ConversionOptions {
    /// Spoken-style output
    /// - Oral two enabled
    /// - Oversized input rejected
    pub fn oral() -> Self {
        Self::new().with_oral_two(true)
    }

    /// Compatibility with older renderers
    /// - Ordinary two
    /// - Oversized input silently truncated to 16 digits
    pub fn legacy() -> Self {
        Self::new().with_overflow(OverflowPolicy::Truncate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConversionOptions::default();
        assert!(!options.use_oral_two);
        assert_eq!(options.overflow, OverflowPolicy::Reject);
        assert_eq!(options, ConversionOptions::new());
    }

    #[test]
    fn test_builder_pattern() {
        let options = ConversionOptions::new()
            .with_oral_two(true)
            .with_overflow(OverflowPolicy::Truncate);

        assert!(options.use_oral_two);
        assert_eq!(options.overflow, OverflowPolicy::Truncate);
    }

    #[test]
    fn test_preset_configs() {
        let oral = ConversionOptions::oral();
        assert!(oral.use_oral_two);
        assert_eq!(oral.overflow, OverflowPolicy::Reject);

        let legacy = ConversionOptions::legacy();
        assert!(!legacy.use_oral_two);
        assert!(matches!(legacy.overflow, OverflowPolicy::Truncate));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_load_from_json() {
        let options: ConversionOptions =
            serde_json::from_str(r#"{ "use_oral_two": true }"#).unwrap();
        assert_eq!(options, ConversionOptions::oral());

        let options: ConversionOptions =
            serde_json::from_str(r#"{ "overflow": "truncate" }"#).unwrap();
        assert_eq!(options, ConversionOptions::legacy());
    }
}
