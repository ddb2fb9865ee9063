//! Roman numerals
//!
//! [§ 6.1 upper-roman](https://www.w3.org/TR/css-counter-styles-3/#upper-roman)
//!
//! ```text
//! @counter-style upper-roman {
//!   system: additive;
//!   range: 1 3999;
//!   additive-symbols: 1000 M, 900 CM, 500 D, 400 CD, 100 C, 90 XC, 50 L,
//!                     40 XL, 10 X, 9 IX, 5 V, 4 IV, 1 I;
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Smallest value with a Roman numeral.
pub const MIN: i64 = 1;

/// Largest value with a Roman numeral.
pub const MAX: i64 = 3999;

/// Message produced by [`convert`] for values outside [`MIN`]..=[`MAX`].
pub const OUT_OF_RANGE_MESSAGE: &str = "Number must be between 1 and 3999";

/// The additive tuples, heaviest first.
///
/// The subtractive pairs sit between the bases they subtract from, so a single
/// greedy pass never emits four of the same symbol in a row.
const ADDITIVE_SYMBOLS: [(u16, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Length of the longest canonical numeral, `MMMDCCCLXXXVIII` (3888).
const MAX_NUMERAL_LEN: usize = 15;

/// Errors from converting to or from Roman numerals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RomanError {
    /// The value has no Roman numeral.
    #[error("Number must be between 1 and 3999")]
    OutOfRange(i64),
    /// Nothing to decode.
    #[error("empty Roman numeral")]
    Empty,
    /// A character other than `M`, `D`, `C`, `L`, `X`, `V`, `I`.
    #[error("invalid Roman numeral symbol '{0}'")]
    InvalidSymbol(char),
    /// Valid symbols in an order no value produces (`IIII`, `IC`, `VX`).
    #[error("'{0}' is not a canonical Roman numeral")]
    NonCanonical(String),
}

/// Letter case for rendered numerals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Case {
    /// `MCMXCIV`, as used by `upper-roman`.
    #[default]
    Upper,
    /// `mcmxciv`, as used by `lower-roman`.
    Lower,
}

/// Convert `n` to its Roman numeral, or to [`OUT_OF_RANGE_MESSAGE`].
///
/// This keeps the string-sentinel contract for callers that only display the
/// result. Use [`to_roman`] to tell the two apart.
#[must_use]
pub fn convert(n: i64) -> String {
    to_roman(n).unwrap_or_else(|err| err.to_string())
}

/// Convert `n` to its uppercase Roman numeral.
///
/// # Errors
///
/// Returns [`RomanError::OutOfRange`] if `n` is not in `1..=3999`.
pub fn to_roman(n: i64) -> Result<String, RomanError> {
    let value = checked_value(n)?;
    Ok(encode(value))
}

/// Convert `n` to its Roman numeral in the given letter case.
///
/// # Errors
///
/// Returns [`RomanError::OutOfRange`] if `n` is not in `1..=3999`.
pub fn to_roman_with_case(n: i64, case: Case) -> Result<String, RomanError> {
    let numeral = to_roman(n)?;
    Ok(match case {
        Case::Upper => numeral,
        Case::Lower => numeral.to_ascii_lowercase(),
    })
}

/// Decode a canonical Roman numeral in either letter case.
///
/// Surrounding ASCII whitespace is ignored. The numeral must be exactly what
/// [`to_roman`] produces for its value, so `IIII` and `MCMC` are rejected.
///
/// # Errors
///
/// Returns [`RomanError::Empty`] for blank input, [`RomanError::InvalidSymbol`]
/// for characters outside `MDCLXVI`, and [`RomanError::NonCanonical`] for
/// anything else that does not round-trip.
pub fn parse_roman(input: &str) -> Result<u16, RomanError> {
    let trimmed = input.trim_ascii();
    if trimmed.is_empty() {
        return Err(RomanError::Empty);
    }
    if let Some(bad) = trimmed
        .chars()
        .find(|c| !matches!(c.to_ascii_uppercase(), 'M' | 'D' | 'C' | 'L' | 'X' | 'V' | 'I'))
    {
        return Err(RomanError::InvalidSymbol(bad));
    }

    let non_canonical = || RomanError::NonCanonical(trimmed.to_string());
    if trimmed.len() > MAX_NUMERAL_LEN {
        return Err(non_canonical());
    }

    let upper = trimmed.to_ascii_uppercase();
    let mut rest = upper.as_str();
    let mut value: u16 = 0;
    for &(weight, symbol) in &ADDITIVE_SYMBOLS {
        while let Some(tail) = rest.strip_prefix(symbol) {
            value += weight;
            rest = tail;
        }
    }

    // Leftovers mean a symbol appeared after a lighter one (`IC`, `VX`).
    if !rest.is_empty() || i64::from(value) > MAX || encode(value) != upper {
        return Err(non_canonical());
    }
    Ok(value)
}

fn checked_value(n: i64) -> Result<u16, RomanError> {
    if !(MIN..=MAX).contains(&n) {
        return Err(RomanError::OutOfRange(n));
    }
    u16::try_from(n).map_err(|_| RomanError::OutOfRange(n))
}

/// [§ 3.1.7 additive](https://www.w3.org/TR/css-counter-styles-3/#additive-system)
///
/// "For each tuple in symbol list: Let symbol and weight be tuple's symbol and
/// weight. If weight is greater than value, continue. Let reps be
/// floor(value / weight). Append symbol to S reps times. Decrement value by
/// weight * reps."
///
/// `value` must already be in range.
fn encode(value: u16) -> String {
    let mut remaining = value;
    let mut numeral = String::new();
    for &(weight, symbol) in &ADDITIVE_SYMBOLS {
        let reps = remaining / weight;
        numeral.push_str(&symbol.repeat(usize::from(reps)));
        remaining %= weight;
    }
    numeral
}

/// A value known to have a Roman numeral.
///
/// Displays as the uppercase numeral and parses from one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Roman(u16);

impl Roman {
    /// The integer value.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl TryFrom<i64> for Roman {
    type Error = RomanError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        checked_value(n).map(Self)
    }
}

impl fmt::Display for Roman {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self.0))
    }
}

impl FromStr for Roman {
    type Err = RomanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_roman(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_weights_strictly_descend() {
        for pair in ADDITIVE_SYMBOLS.windows(2) {
            assert!(pair[0].0 > pair[1].0, "{:?} before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_longest_numeral_fits_length_guard() {
        let longest = (1..=3999).map(|v| encode(v).len()).max();
        assert_eq!(longest, Some(MAX_NUMERAL_LEN));
        assert_eq!(encode(3888), "MMMDCCCLXXXVIII");
    }

    #[test]
    fn test_checked_value_bounds() {
        assert_eq!(checked_value(1), Ok(1));
        assert_eq!(checked_value(3999), Ok(3999));
        assert_eq!(checked_value(0), Err(RomanError::OutOfRange(0)));
        assert_eq!(checked_value(i64::MAX), Err(RomanError::OutOfRange(i64::MAX)));
    }
}
