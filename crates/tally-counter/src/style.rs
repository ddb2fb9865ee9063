//! List style types and their marker text
//!
//! [§ 3.1 'list-style-type'](https://www.w3.org/TR/css-lists-3/#list-style-type)

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use tally_common::warning::warn_once;

use crate::roman::{self, Case, to_roman_with_case};

/// Suffix after counter-based markers.
///
/// [§ 3.1.5 suffix](https://www.w3.org/TR/css-counter-styles-3/#counter-style-suffix)
///
/// "The initial value of the suffix descriptor is "\2E\20" ("." followed by a
/// space)."
pub const COUNTER_SUFFIX: &str = ". ";

/// Suffix after bullet markers.
///
/// [§ 6.4 Symbolic: disc, circle, square](https://www.w3.org/TR/css-counter-styles-3/#simple-symbolic)
///
/// "suffix: " ";"
pub const BULLET_SUFFIX: &str = " ";

const LATIN: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// [§ 3.1 'list-style-type'](https://www.w3.org/TR/css-lists-3/#list-style-type)
///
/// "The list-style-type property specifies a counter style or string for
/// the element's marker."
///
/// Values: disc | circle | square | decimal | lower-alpha | upper-alpha |
///         lower-roman | upper-roman | none
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ListStyleType {
    /// No marker at all. Used for the plain list.
    None,
    /// `•`
    #[default]
    Disc,
    /// `◦`
    Circle,
    /// `▪`
    Square,
    /// `1. 2. 3.`
    Decimal,
    /// `a. b. c.` ... `z. aa. ab.`
    LowerAlpha,
    /// `A. B. C.` ... `Z. AA. AB.`
    UpperAlpha,
    /// `i. ii. iii.`
    LowerRoman,
    /// `I. II. III.`
    UpperRoman,
}

impl ListStyleType {
    /// Whether the marker depends on the counter value.
    #[must_use]
    pub const fn is_counter(self) -> bool {
        matches!(
            self,
            Self::Decimal
                | Self::LowerAlpha
                | Self::UpperAlpha
                | Self::LowerRoman
                | Self::UpperRoman
        )
    }

    /// [§ 3.1.6 range](https://www.w3.org/TR/css-counter-styles-3/#counter-style-range)
    ///
    /// Whether this style can represent `value` without falling back.
    #[must_use]
    pub fn in_range(self, value: i64) -> bool {
        match self {
            Self::None | Self::Disc | Self::Circle | Self::Square | Self::Decimal => true,
            Self::LowerAlpha | Self::UpperAlpha => value >= 1,
            Self::LowerRoman | Self::UpperRoman => (roman::MIN..=roman::MAX).contains(&value),
        }
    }

    /// The marker text for `value`, suffix included.
    ///
    /// [§ 3.1.6 range](https://www.w3.org/TR/css-counter-styles-3/#counter-style-range)
    ///
    /// "If a counter style is used to represent a counter value outside of its
    /// ranges, the counter style instead drops down to its fallback counter
    /// style."
    ///
    /// The fallback is `decimal` for every style here, and is reported once
    /// per style through [`warn_once`].
    #[must_use]
    pub fn marker(self, value: i64) -> String {
        match self {
            Self::None => String::new(),
            Self::Disc => format!("•{BULLET_SUFFIX}"),
            Self::Circle => format!("◦{BULLET_SUFFIX}"),
            Self::Square => format!("▪{BULLET_SUFFIX}"),
            _ => {
                let representation = self.representation(value).unwrap_or_else(|| {
                    warn_once("Counter", &self.fallback_message());
                    value.to_string()
                });
                format!("{representation}{COUNTER_SUFFIX}")
            }
        }
    }

    /// Warning text reported when this style falls back to `decimal`.
    #[must_use]
    pub fn fallback_message(self) -> String {
        format!("{self} cannot represent values outside its range, using decimal")
    }

    /// The counter representation of `value` without suffix, or `None` if it
    /// is out of range or this is not a counter style.
    #[must_use]
    pub fn representation(self, value: i64) -> Option<String> {
        if !self.in_range(value) {
            return None;
        }
        match self {
            Self::None | Self::Disc | Self::Circle | Self::Square => None,
            Self::Decimal => Some(value.to_string()),
            Self::LowerAlpha => alphabetic(value),
            Self::UpperAlpha => alphabetic(value).map(|s| s.to_ascii_uppercase()),
            Self::LowerRoman => to_roman_with_case(value, Case::Lower).ok(),
            Self::UpperRoman => to_roman_with_case(value, Case::Upper).ok(),
        }
    }
}

/// [§ 3.1.4 alphabetic](https://www.w3.org/TR/css-counter-styles-3/#alphabetic-system)
///
/// "While value is not equal to 0: Set value to value - 1. Prepend the symbol
/// with index value mod length to S. Set value to floor(value / length)."
fn alphabetic(value: i64) -> Option<String> {
    let mut value = usize::try_from(value).ok().filter(|&v| v >= 1)?;
    let mut symbols = Vec::new();
    while value != 0 {
        value -= 1;
        symbols.push(LATIN[value % LATIN.len()]);
        value /= LATIN.len();
    }
    Some(symbols.iter().rev().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabetic_wraps_bijectively() {
        assert_eq!(alphabetic(1).as_deref(), Some("a"));
        assert_eq!(alphabetic(26).as_deref(), Some("z"));
        assert_eq!(alphabetic(27).as_deref(), Some("aa"));
        assert_eq!(alphabetic(52).as_deref(), Some("az"));
        assert_eq!(alphabetic(53).as_deref(), Some("ba"));
        assert_eq!(alphabetic(702).as_deref(), Some("zz"));
        assert_eq!(alphabetic(703).as_deref(), Some("aaa"));
    }

    #[test]
    fn test_alphabetic_rejects_non_positive() {
        assert_eq!(alphabetic(0), None);
        assert_eq!(alphabetic(-3), None);
    }
}
