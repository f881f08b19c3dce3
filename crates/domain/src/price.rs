//! Price: a currency amount stored as whole cents.
//!
//! Parsed from decimal text such as `25`, `25.5` or `25.50` (at most two
//! fractional digits, no sign) and always displayed with two decimals.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Non-negative currency amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price {
    cents: u64,
}

/// Why a piece of text is not a [`Price`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePriceError {
    Empty,
    NotANumber,
    TooPrecise,
    Overflow,
}

impl Price {
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    #[must_use]
    pub const fn cents(self) -> u64 {
        self.cents
    }

    /// Render with the currency sign, e.g. `$25.00`.
    #[must_use]
    pub fn with_currency(self) -> String {
        format!("${self}")
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for Price {
    type Err = ParsePriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParsePriceError::Empty);
        }

        let (whole, fraction) = s.split_once('.').unwrap_or((s, ""));
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(ParsePriceError::NotANumber);
        }
        if fraction.len() > 2 {
            return Err(ParsePriceError::TooPrecise);
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| ParsePriceError::Overflow)?
        };
        let mut fraction_cents: u64 = if fraction.is_empty() {
            0
        } else {
            fraction.parse().map_err(|_| ParsePriceError::NotANumber)?
        };
        if fraction.len() == 1 {
            fraction_cents *= 10;
        }

        whole
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(fraction_cents))
            .map(Self::from_cents)
            .ok_or(ParsePriceError::Overflow)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid price {text:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_parse_two_decimal_amount() {
        let price: Price = "25.00".parse().unwrap();
        assert_eq!(price.cents(), 2500);
    }

    #[test]
    fn should_parse_whole_amount() {
        let price: Price = "40".parse().unwrap();
        assert_eq!(price.cents(), 4000);
    }

    #[test]
    fn should_scale_single_fraction_digit_to_tens_of_cents() {
        let price: Price = "12.5".parse().unwrap();
        assert_eq!(price.cents(), 1250);
    }

    #[test]
    fn should_accept_missing_whole_part() {
        let price: Price = ".75".parse().unwrap();
        assert_eq!(price.cents(), 75);
    }

    #[test]
    fn should_trim_surrounding_whitespace() {
        let price: Price = "  9.99 ".parse().unwrap();
        assert_eq!(price.cents(), 999);
    }

    #[test]
    fn should_reject_empty_input() {
        assert_eq!("   ".parse::<Price>(), Err(ParsePriceError::Empty));
    }

    #[test]
    fn should_reject_non_numeric_input() {
        assert_eq!("abc".parse::<Price>(), Err(ParsePriceError::NotANumber));
        assert_eq!("1e3".parse::<Price>(), Err(ParsePriceError::NotANumber));
        assert_eq!(".".parse::<Price>(), Err(ParsePriceError::NotANumber));
    }

    #[test]
    fn should_reject_negative_amount() {
        assert_eq!("-5".parse::<Price>(), Err(ParsePriceError::NotANumber));
    }

    #[test]
    fn should_reject_sub_cent_precision() {
        assert_eq!("1.005".parse::<Price>(), Err(ParsePriceError::TooPrecise));
    }

    #[test]
    fn should_reject_amount_too_large_for_cents() {
        let text = u64::MAX.to_string();
        assert_eq!(text.parse::<Price>(), Err(ParsePriceError::Overflow));
    }

    #[test]
    fn should_display_with_two_decimals() {
        assert_eq!(Price::from_cents(2500).to_string(), "25.00");
        assert_eq!(Price::from_cents(7).to_string(), "0.07");
        assert_eq!(Price::from_cents(2500).with_currency(), "$25.00");
    }

    #[test]
    fn should_serialize_as_decimal_string() {
        let json = serde_json::to_string(&Price::from_cents(1999)).unwrap();
        assert_eq!(json, "\"19.99\"");
        let err = serde_json::from_str::<Price>("\"nope\"");
        assert!(err.is_err());
    }

    proptest! {
        #[test]
        fn should_parse_any_whole_and_cents_pair(whole in 0u32..1_000_000, cents in 0u64..100) {
            let text = format!("{whole}.{cents:02}");
            let price: Price = text.parse().unwrap();
            prop_assert_eq!(price.cents(), u64::from(whole) * 100 + cents);
            prop_assert_eq!(price.to_string(), text);
        }
    }
}
