// ============================================================================
// Basic Usage Example
// ============================================================================

use chinese_numeral::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Chinese Numeral Example ===\n");

    let plain = converter(VariantTag::Plain);
    let financial = converter(VariantTag::Financial);

    println!("Plain and financial numerals:");
    for value in [0i64, 12, 123, 1_000, 10_010, 12_000_001, 100_000_001, -35_000] {
        let options = ConversionOptions::default();
        match (plain.convert(value, options), financial.convert(value, options)) {
            (Ok(p), Ok(f)) => println!("  {:>12} -> {} / {}", value, p, f),
            (Err(e), _) | (_, Err(e)) => println!("  {:>12} -> error: {}", value, e),
        }
    }

    println!("\nOral two:");
    for value in [2i64, 22, 222, 2_222, 120_000, 220_000_000] {
        match plain.convert(value, ConversionOptions::oral()) {
            Ok(text) => println!("  {:>12} -> {}", value, text),
            Err(e) => println!("  {:>12} -> error: {}", value, e),
        }
    }

    println!("\nOut of range:");
    let huge = 12_345_678_901_234_567i64;
    match plain.convert(huge, ConversionOptions::default()) {
        Ok(text) => println!("  {} -> {}", huge, text),
        Err(e) => println!("  {} -> error: {}", huge, e),
    }
    match plain.convert(huge, ConversionOptions::legacy()) {
        Ok(text) => println!("  {} (truncated) -> {}", huge, text),
        Err(e) => println!("  {} -> error: {}", huge, e),
    }

    println!("\nDigit strings:");
    match plain.convert_digits("00020190", ConversionOptions::default()) {
        Ok(text) => println!("  00020190 -> {}", text),
        Err(e) => println!("  00020190 -> error: {}", e),
    }

    println!("\n=== Example Complete ===");
}
