//! Money type for representing expense amounts
//!
//! Amounts are kept exactly as they are read from the expenses file and only
//! rounded to two decimals when displayed. Rewriting the file therefore never
//! changes an amount some other record already holds.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

/// Largest magnitude that is written back as a JSON integer
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0; // 2^53

/// A monetary amount in currency units
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Money(f64);

impl Money {
    /// Create a Money amount from a decimal value
    ///
    /// Returns `None` for NaN or infinite values.
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_amount(12.5).unwrap();
    /// assert_eq!(amount.to_string(), "$12.50");
    /// assert!(Money::from_amount(f64::INFINITY).is_none());
    /// ```
    pub fn from_amount(amount: f64) -> Option<Self> {
        amount.is_finite().then_some(Self(amount))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// The stored value, unrounded
    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Add two amounts, or `None` if the sum is no longer a finite number
    pub fn checked_add(self, other: Self) -> Option<Self> {
        Self::from_amount(self.0 + other.0)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "-$10.50", "10", "12.5", "5e3"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        // Exactly one sign; also keeps "inf" and "nan" out
        if !rest.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
            return Err(invalid());
        }

        let value: f64 = rest.parse().map_err(|_| invalid())?;
        let money = Self::from_amount(value).ok_or_else(invalid)?;
        Ok(if negative { -money } else { money })
    }

    /// Format with a currency symbol, rounded to two decimals
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let digits = format!("{:.2}", self.0.abs());
        if self.0 < 0.0 && digits != "0.00" {
            format!("-{}{}", symbol, digits)
        } else {
            format!("{}{}", symbol, digits)
        }
    }

    /// Format with two decimals and no currency symbol
    pub fn format_plain(&self) -> String {
        self.format_with_symbol("")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 && self.0.abs() < MAX_EXACT_INTEGER {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::from_amount(value)
            .ok_or_else(|| serde::de::Error::custom("amount must be a finite number"))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
