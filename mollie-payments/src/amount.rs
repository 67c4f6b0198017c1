//! Monetary amounts

use crate::error::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An amount of money in a given currency.
///
/// `value` is a [`Decimal`] carried on the wire as a JSON string. The scale
/// of the decimal is preserved, so `"10.50"` is sent and read back as
/// `"10.50"` and never passes through binary floating point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amount {
    /// ISO 4217 currency code, e.g. `EUR`
    pub currency: String,
    /// Decimal value, e.g. `10.50`
    pub value: Decimal,
}

impl Amount {
    /// Create a new amount
    pub fn new(currency: impl Into<String>, value: Decimal) -> Self {
        Self {
            currency: currency.into(),
            value,
        }
    }

    /// Parse the value from its decimal string form, e.g. `"10.50"`
    pub fn parse(currency: impl Into<String>, value: &str) -> Result<Self> {
        let value = Decimal::from_str(value)
            .map_err(|e| Error::InvalidAmount(format!("{value:?}: {e}")))?;
        Ok(Self::new(currency, value))
    }

    /// Parse an EUR amount
    pub fn eur(value: &str) -> Result<Self> {
        Self::parse("EUR", value)
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Check if negative (discount lines, gift cards)
    pub fn is_negative(&self) -> bool {
        self.value.is_sign_negative() && !self.value.is_zero()
    }

    /// Add two amounts of the same currency.
    ///
    /// Returns `None` on currency mismatch or overflow.
    pub fn checked_add(&self, other: &Amount) -> Option<Amount> {
        if self.currency != other.currency {
            return None;
        }
        self.value
            .checked_add(other.value)
            .map(|value| Amount::new(self.currency.clone(), value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.value)
    }
}
