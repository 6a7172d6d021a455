//! Exact decimal currency rates
//!
//! Plan rates are monthly premiums with at most two fraction digits. Storing
//! them as integer cents gives exact equality (so set-based deduplication is
//! reliable) and a total numeric order ("9.00" sorts below "10.00", never the
//! lexicographic way around).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error raised when a rate field cannot be read as decimal currency
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseRateError {
    #[error("empty rate field")]
    Empty,
    #[error("invalid rate '{0}': not a decimal number")]
    NotANumber(String),
    #[error("invalid rate '{0}': more than two fraction digits")]
    TooPrecise(String),
}

/// A plan rate in whole cents
///
/// Parsed from decimal strings like `"298.62"` or `"245"`. Ordering and
/// equality are numeric, so a `BTreeSet<Rate>` is exactly the "distinct rates,
/// ascending" container the SLCSP selection needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rate(u64);

impl Rate {
    /// Build a rate from a whole number of cents
    pub fn from_cents(cents: u64) -> Self {
        Rate(cents)
    }

    /// Total cents (dollars * 100 + fraction)
    pub fn cents(&self) -> u64 {
        self.0
    }
}

impl FromStr for Rate {
    type Err = ParseRateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseRateError::Empty);
        }

        let (dollars, fraction) = match trimmed.split_once('.') {
            Some((d, f)) => (d, f),
            None => (trimmed, ""),
        };

        let not_a_number = || ParseRateError::NotANumber(trimmed.to_string());
        if !dollars.chars().all(|c| c.is_ascii_digit()) {
            return Err(not_a_number());
        }
        if !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(not_a_number());
        }
        if fraction.len() > 2 {
            return Err(ParseRateError::TooPrecise(trimmed.to_string()));
        }

        let whole: u64 = dollars.parse().map_err(|_| not_a_number())?;

        // "298.6" means 60 cents, not 6
        let cents = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| not_a_number())? * 10,
            _ => fraction.parse::<u64>().map_err(|_| not_a_number())?,
        };

        Ok(Rate(whole * 100 + cents))
    }
}

impl fmt::Display for Rate {
    /// Fixed two-fraction-digit currency form, e.g. `150.00`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_and_fractional() {
        assert_eq!("298.62".parse::<Rate>().unwrap(), Rate::from_cents(29862));
        assert_eq!("245".parse::<Rate>().unwrap(), Rate::from_cents(24500));
        assert_eq!("298.6".parse::<Rate>().unwrap(), Rate::from_cents(29860));
        assert_eq!("0.99".parse::<Rate>().unwrap(), Rate::from_cents(99));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Rate>(), Err(ParseRateError::Empty));
        assert_eq!(
            "  ".parse::<Rate>(),
            Err(ParseRateError::Empty)
        );
        assert!(matches!(
            "abc".parse::<Rate>(),
            Err(ParseRateError::NotANumber(_))
        ));
        assert!(matches!(
            "12.3.4".parse::<Rate>(),
            Err(ParseRateError::NotANumber(_))
        ));
        assert!(matches!(
            "-10.00".parse::<Rate>(),
            Err(ParseRateError::NotANumber(_))
        ));
        assert!(matches!(
            "1.234".parse::<Rate>(),
            Err(ParseRateError::TooPrecise(_))
        ));
    }

    #[test]
    fn test_ordering_is_numeric() {
        let nine: Rate = "9".parse().unwrap();
        let ten: Rate = "10".parse().unwrap();
        let big: Rate = "99999".parse().unwrap();
        let small: Rate = "100".parse().unwrap();
        assert!(nine < ten);
        assert!(small < big);
    }

    #[test]
    fn test_display_two_fraction_digits() {
        assert_eq!("150".parse::<Rate>().unwrap().to_string(), "150.00");
        assert_eq!("231.48".parse::<Rate>().unwrap().to_string(), "231.48");
        assert_eq!("0.5".parse::<Rate>().unwrap().to_string(), "0.50");
    }
}
