//! Currency amounts stored as text.
//!
//! Income is recorded as a currency symbol followed by a decimal number, e.g. `"$4.99"`. The
//! symbol is not interpreted: the first character is dropped and the remainder must parse as a
//! finite floating-point value.

use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IncomeParseError {
    /// Nothing follows the currency symbol (or the value is empty)
    #[error("income has no amount after the currency symbol")]
    Empty,

    /// The amount is not a decimal number
    #[error("income amount {raw:?} is not a decimal number")]
    Malformed { raw: String },

    /// The amount parsed, but to an infinity or NaN
    #[error("income amount {raw:?} is not finite")]
    NonFinite { raw: String },
}

/// A parsed currency amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Income(f64);

impl Income {
    /// Parse a symbol-prefixed amount such as `"$4.99"`.
    ///
    /// The first character is dropped whatever it is, so multi-byte symbols like `"€"` work the
    /// same way as `"$"`.
    pub fn parse(raw: &str) -> Result<Self, IncomeParseError> {
        let mut chars = raw.chars();
        chars.next().ok_or(IncomeParseError::Empty)?;

        let amount = chars.as_str();
        if amount.is_empty() {
            return Err(IncomeParseError::Empty);
        }

        let value: f64 = amount.parse().map_err(|_| IncomeParseError::Malformed { raw: amount.to_string() })?;
        if !value.is_finite() {
            return Err(IncomeParseError::NonFinite { raw: amount.to_string() });
        }

        Ok(Self(value))
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

impl FromStr for Income {
    type Err = IncomeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dollar_amount() {
        assert_eq!(Income::parse("$4.99").unwrap().amount(), 4.99);
        assert_eq!(Income::parse("$5.00").unwrap().amount(), 5.0);
        assert_eq!(Income::parse("$100").unwrap().amount(), 100.0);
    }

    #[test]
    fn test_parse_drops_multibyte_symbol() {
        assert_eq!(Income::parse("€12.50").unwrap().amount(), 12.5);
        assert_eq!(Income::parse("¥3").unwrap().amount(), 3.0);
    }

    #[test]
    fn test_first_character_is_always_dropped() {
        // No symbol: the leading digit is consumed as if it were one
        assert_eq!(Income::parse("14.99").unwrap().amount(), 4.99);
    }

    #[test]
    fn test_parse_empty_inputs() {
        assert_eq!(Income::parse(""), Err(IncomeParseError::Empty));
        assert_eq!(Income::parse("$"), Err(IncomeParseError::Empty));
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(
            Income::parse("$abc"),
            Err(IncomeParseError::Malformed { raw: "abc".to_string() })
        );
        assert!(matches!(Income::parse("$ 4.99"), Err(IncomeParseError::Malformed { .. })));
        assert!(matches!(Income::parse("$4,99"), Err(IncomeParseError::Malformed { .. })));
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(matches!(Income::parse("$inf"), Err(IncomeParseError::NonFinite { .. })));
        assert!(matches!(Income::parse("$NaN"), Err(IncomeParseError::NonFinite { .. })));
    }

    #[test]
    fn test_from_str() {
        let income: Income = "$7.5".parse().unwrap();
        assert_eq!(income.amount(), 7.5);
        assert!("$".parse::<Income>().is_err());
    }
}
