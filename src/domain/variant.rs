// ============================================================================
// Glyph Variants
// Immutable glyph tables for the plain and financial numeral scripts
// ============================================================================

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Carry glyph positions, ordered by ascending magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Carry {
    /// 10^1
    Ten,
    /// 10^2
    Hundred,
    /// 10^3
    Thousand,
    /// 10^4
    TenThousand,
    /// 10^8
    HundredMillion,
    /// 10^12
    Trillion,
}

impl Carry {
    /// All carries in ascending order.
    pub const ALL: [Carry; 6] = [
        Carry::Ten,
        Carry::Hundred,
        Carry::Thousand,
        Carry::TenThousand,
        Carry::HundredMillion,
        Carry::Trillion,
    ];

    /// Carries placed between digit groups.
    pub const LARGE_SCALE: [Carry; 3] =
        [Carry::TenThousand, Carry::HundredMillion, Carry::Trillion];

    /// Carry for a digit inside a group, counted from the least significant
    /// position (1 = ten, 2 = hundred, 3 = thousand).
    #[inline]
    pub const fn in_group(place: usize) -> Option<Carry> {
        match place {
            1 => Some(Carry::Ten),
            2 => Some(Carry::Hundred),
            3 => Some(Carry::Thousand),
            _ => None,
        }
    }

    /// Carry following a digit group that has `groups_after` groups to its
    /// right (1 = ten-thousand, 2 = hundred-million, 3 = trillion).
    #[inline]
    pub const fn between_groups(groups_after: usize) -> Option<Carry> {
        match groups_after {
            1 => Some(Carry::TenThousand),
            2 => Some(Carry::HundredMillion),
            3 => Some(Carry::Trillion),
            _ => None,
        }
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

/// A complete glyph set for one numeral script.
///
/// Built as a compile-time constant and shared read-only by every
/// conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    name: &'static str,
    digits: [char; 10],
    carries: [char; 6],
    negative: char,
    oral_two: char,
}

impl Variant {
    /// Everyday lowercase numerals.
    pub const PLAIN: Variant = Variant {
        name: "zh-Hans",
        digits: ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'],
        carries: ['十', '百', '千', '万', '亿', '兆'],
        negative: '负',
        oral_two: '两',
    };

    /// Stroke-distinct numerals used on cheques and contracts.
    pub const FINANCIAL: Variant = Variant {
        name: "zh-Hans_upper",
        digits: ['零', '壹', '贰', '叁', '肆', '伍', '陆', '柒', '捌', '玖'],
        carries: ['拾', '佰', '仟', '萬', '億', '兆'],
        negative: '负',
        oral_two: '贰',
    };

    /// Label of this glyph set.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Glyph for a decimal digit. Values above 9 wrap modulo 10.
    #[inline]
    pub fn digit(&self, value: u8) -> char {
        self.digits[(value % 10) as usize]
    }

    /// Glyph for a carry.
    #[inline]
    pub fn carry(&self, carry: Carry) -> char {
        self.carries[carry.index()]
    }

    #[inline]
    pub fn zero(&self) -> char {
        self.digits[0]
    }

    #[inline]
    pub fn one(&self) -> char {
        self.digits[1]
    }

    #[inline]
    pub fn two(&self) -> char {
        self.digits[2]
    }

    #[inline]
    pub fn negative(&self) -> char {
        self.negative
    }

    #[inline]
    pub fn oral_two(&self) -> char {
        self.oral_two
    }
}

// ============================================================================
// Variant Tag
// ============================================================================

/// Selects one of the built-in glyph sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VariantTag {
    /// Everyday glyphs (一二三, 十百千)
    #[default]
    Plain,
    /// Financial glyphs (壹贰叁, 拾佰仟)
    Financial,
}

impl VariantTag {
    /// Every built-in tag.
    pub const ALL: [VariantTag; 2] = [VariantTag::Plain, VariantTag::Financial];

    /// The glyph table this tag selects.
    #[inline]
    pub fn variant(self) -> &'static Variant {
        match self {
            VariantTag::Plain => &Variant::PLAIN,
            VariantTag::Financial => &Variant::FINANCIAL,
        }
    }

    /// Language label of the glyph set (`zh-Hans`, `zh-Hans_upper`).
    #[inline]
    pub fn label(self) -> &'static str {
        self.variant().name()
    }

    /// Resolve a label, falling back to [`VariantTag::Plain`] for anything
    /// unrecognised.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "zh-Hans" | "plain" => VariantTag::Plain,
            "zh-Hans_upper" | "financial" | "upper" => VariantTag::Financial,
            other => {
                tracing::warn!(label = other, "unknown numeral variant, using plain glyphs");
                VariantTag::Plain
            }
        }
    }
}

impl FromStr for VariantTag {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl fmt::Display for VariantTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_glyphs() {
        let v = &Variant::PLAIN;
        assert_eq!(v.zero(), '零');
        assert_eq!(v.digit(9), '九');
        assert_eq!(v.carry(Carry::Ten), '十');
        assert_eq!(v.carry(Carry::Trillion), '兆');
        assert_eq!(v.negative(), '负');
        assert_eq!(v.oral_two(), '两');
    }

    #[test]
    fn test_financial_glyphs() {
        let v = &Variant::FINANCIAL;
        assert_eq!(v.zero(), '零');
        assert_eq!(v.one(), '壹');
        assert_eq!(v.two(), '贰');
        assert_eq!(v.carry(Carry::Thousand), '仟');
        assert_eq!(v.carry(Carry::TenThousand), '萬');
        assert_eq!(v.carry(Carry::HundredMillion), '億');
        assert_eq!(v.oral_two(), v.two());
    }

    #[test]
    fn test_carry_positions() {
        assert_eq!(Carry::in_group(0), None);
        assert_eq!(Carry::in_group(1), Some(Carry::Ten));
        assert_eq!(Carry::in_group(3), Some(Carry::Thousand));
        assert_eq!(Carry::in_group(4), None);

        assert_eq!(Carry::between_groups(0), None);
        assert_eq!(Carry::between_groups(1), Some(Carry::TenThousand));
        assert_eq!(Carry::between_groups(3), Some(Carry::Trillion));
    }

    #[test]
    fn test_tag_labels() {
        assert_eq!(VariantTag::Plain.label(), "zh-Hans");
        assert_eq!(VariantTag::Financial.to_string(), "zh-Hans_upper");
        assert_eq!(VariantTag::default(), VariantTag::Plain);
    }

    #[test]
    fn test_tag_parsing_falls_back_to_plain() {
        assert_eq!("zh-Hans_upper".parse::<VariantTag>(), Ok(VariantTag::Financial));
        assert_eq!("financial".parse::<VariantTag>(), Ok(VariantTag::Financial));
        assert_eq!("zh-Hans".parse::<VariantTag>(), Ok(VariantTag::Plain));
        assert_eq!("zh-Hant".parse::<VariantTag>(), Ok(VariantTag::Plain));
        assert_eq!("".parse::<VariantTag>(), Ok(VariantTag::Plain));
    }
}
