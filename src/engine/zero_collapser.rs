// ============================================================================
// Zero Collapser
// Global pass removing redundant zero glyphs
// ============================================================================

/// Collapse every run of consecutive `zero` glyphs to one, then trim zeros
/// from both ends.
///
/// Idempotent: collapsing an already collapsed string returns it unchanged.
pub fn collapse_zeros(text: &str, zero: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_was_zero = false;

    for c in text.chars() {
        let is_zero = c == zero;
        if is_zero && previous_was_zero {
            continue;
        }
        out.push(c);
        previous_was_zero = is_zero;
    }

    out.trim_matches(zero).to_string()
}
