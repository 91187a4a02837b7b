// ============================================================================
// Oral-Two Rewriter
// Two-pass contextual substitution of the colloquial "two" glyph
// ============================================================================

use crate::domain::{Carry, Variant};

/// Literal substring replacer.
///
/// Scans left to right; at each position the first rule whose pattern
/// matches is applied and scanning resumes after the match. Text that matches
/// no rule is copied through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacer {
    rules: Vec<(String, String)>,
}

impl Replacer {
    pub fn new(rules: Vec<(String, String)>) -> Self {
        Self { rules }
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn replace(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        'scan: while let Some(c) = rest.chars().next() {
            for (from, to) in &self.rules {
                if !from.is_empty() && rest.starts_with(from.as_str()) {
                    out.push_str(to);
                    rest = &rest[from.len()..];
                    continue 'scan;
                }
            }
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
        out
    }
}

/// Rewrites the digit two as the oral two (两) in front of carries.
///
/// - Eager pass: `二百 二千 二万 二亿 二兆` become `两百 两千 两万 两亿 两兆`.
///   Ten is excluded, 二十 always keeps the ordinary two.
/// - Repair pass: a two directly after 十 is a units digit (十二万 is
///   120000), so `十两万 十两亿 十两兆` go back to `十二万 十二亿 十二兆`.
///
/// Both rule sets are built once per variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OralTwoRewriter {
    eager: Replacer,
    repair: Replacer,
}

impl OralTwoRewriter {
    pub fn new(variant: &Variant) -> Self {
        let two = variant.two();
        let oral = variant.oral_two();
        let ten = variant.carry(Carry::Ten);

        let eager = Carry::ALL
            .iter()
            .filter(|&&carry| carry != Carry::Ten)
            .map(|&carry| {
                let glyph = variant.carry(carry);
                (format!("{two}{glyph}"), format!("{oral}{glyph}"))
            })
            .collect();

        let repair = Carry::LARGE_SCALE
            .iter()
            .map(|&carry| {
                let glyph = variant.carry(carry);
                (format!("{ten}{oral}{glyph}"), format!("{ten}{two}{glyph}"))
            })
            .collect();

        Self {
            eager: Replacer::new(eager),
            repair: Replacer::new(repair),
        }
    }

    /// Apply both passes in order.
    pub fn rewrite(&self, text: &str) -> String {
        self.repair_pass(&self.eager_pass(text))
    }

    /// Two before any carry except ten becomes the oral two.
    pub fn eager_pass(&self, text: &str) -> String {
        self.eager.replace(text)
    }

    /// Undo the eager pass where the two directly follows ten.
    pub fn repair_pass(&self, text: &str) -> String {
        self.repair.replace(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> OralTwoRewriter {
        OralTwoRewriter::new(&Variant::PLAIN)
    }

    #[test]
    fn test_rule_counts() {
        let rewriter = plain();
        assert_eq!(rewriter.eager.len(), 5);
        assert_eq!(rewriter.repair.len(), 3);
    }

    #[test]
    fn test_replacer_first_match_wins() {
        let r = Replacer::new(vec![
            ("ab".to_string(), "X".to_string()),
            ("a".to_string(), "Y".to_string()),
        ]);
        assert_eq!(r.replace("aab"), "YX");
        assert_eq!(r.replace("cab"), "cX");
        assert_eq!(r.replace(""), "");
    }

    #[test]
    fn test_eager_pass() {
        let r = plain();
        assert_eq!(r.eager_pass("二百二十二"), "两百二十二");
        assert_eq!(r.eager_pass("二千二百"), "两千两百");
        assert_eq!(r.eager_pass("二万"), "两万");
        assert_eq!(r.eager_pass("十二万"), "十两万");
    }

    #[test]
    fn test_ten_never_rewritten() {
        let r = plain();
        assert_eq!(r.rewrite("二十二"), "二十二");
        assert_eq!(r.rewrite("二十"), "二十");
    }

    #[test]
    fn test_repair_pass_restores_two_after_ten() {
        let r = plain();
        assert_eq!(r.repair_pass("十两万"), "十二万");
        assert_eq!(r.repair_pass("十两亿"), "十二亿");
        assert_eq!(r.repair_pass("十两兆"), "十二兆");
        // Not produced by the eager pass for hundred/thousand, left alone
        assert_eq!(r.repair_pass("十两百"), "十两百");
    }

    #[test]
    fn test_rewrite_both_passes() {
        let r = plain();
        assert_eq!(r.rewrite("十二万"), "十二万");
        assert_eq!(
            r.rewrite("二千二百二十二万二千二百二十二"),
            "两千两百二十二万两千两百二十二"
        );
        assert_eq!(r.rewrite("二十二亿"), "二十二亿");
        assert_eq!(r.rewrite("二亿二千万"), "两亿两千万");
    }

    #[test]
    fn test_financial_is_noop() {
        let r = OralTwoRewriter::new(&Variant::FINANCIAL);
        assert_eq!(r.rewrite("贰仟贰佰贰拾贰"), "贰仟贰佰贰拾贰");
    }
}
