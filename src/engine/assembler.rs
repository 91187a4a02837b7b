// ============================================================================
// Group Assembler
// Joins verbalized digit groups with large-scale carries and bridging zeros
// ============================================================================

use super::verbalizer::verbalize_group;
use crate::domain::{Carry, Variant};
use crate::numeric::ConversionResult;

/// Verbalize and join a group sequence (most significant group first).
///
/// For every group:
/// 1. Verbalize it and trim zero glyphs from both ends. An all-zero group
///    becomes a single zero placeholder and nothing else.
/// 2. In the leading group, drop the "one" of a leading "one-ten" (12 reads
///    十二, not 一十二).
/// 3. Append the large-scale carry for its position (万, 亿, 兆); the units
///    group gets none.
/// 4. After the first group, prepend a bridging zero when the group's digits
///    start with `0` or the previous group's digits end with `0`.
///
/// The result still contains zero runs; see
/// [`collapse_zeros`](super::zero_collapser::collapse_zeros).
///
/// # Example
/// ```text
/// ["1200", "0001"] -> 一千二百万零一
/// ["1", "0000", "0000"] -> 一亿零零
/// ```
pub fn assemble(groups: &[&str], variant: &Variant) -> ConversionResult<String> {
    let zero = variant.zero();
    let mut joined = String::with_capacity(groups.len() * 10 * 3);

    for (i, group) in groups.iter().enumerate() {
        let verbalized = verbalize_group(group, variant)?;
        let trimmed = verbalized.trim_matches(zero);
        if trimmed.is_empty() {
            joined.push(zero);
            continue;
        }

        if i > 0 && needs_bridging_zero(group, groups[i - 1]) {
            joined.push(zero);
        }

        if i == 0 {
            joined.push_str(elide_leading_one(trimmed, variant));
        } else {
            joined.push_str(trimmed);
        }

        if let Some(carry) = Carry::between_groups(groups.len() - 1 - i) {
            joined.push(variant.carry(carry));
        }
    }

    let assembled = elide_leading_one(&joined, variant).to_string();
    tracing::debug!(?groups, %assembled, "assembled digit groups");
    Ok(assembled)
}

/// A non-leading group needs a spoken zero in front when trimming swallowed
/// its leading zeros, or when the group before it ended in zero.
#[inline]
fn needs_bridging_zero(group: &str, previous: &str) -> bool {
    group.starts_with('0') || previous.ends_with('0')
}

/// Strip the "one" from a leading "one-ten".
fn elide_leading_one<'a>(text: &'a str, variant: &Variant) -> &'a str {
    let one = variant.one();
    let mut chars = text.chars();
    if chars.next() == Some(one) && chars.next() == Some(variant.carry(Carry::Ten)) {
        &text[one.len_utf8()..]
    } else {
        text
    }
}
