//! Fixed-point ledger amounts.
//!
//! CRITICAL: Never use floating-point for amounts.
//! The ledger core stores every amount as a signed 64-bit integer with an
//! implied scale of 10^7. This type keeps that representation and renders it
//! through `rust_decimal::Decimal` so the scale (and trailing zeros) survive.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Number of fractional digits carried by every ledger amount.
pub const AMOUNT_SCALE: u32 = 7;

/// One whole unit (`1.0000000`) in raw ledger representation.
pub const ONE: i64 = 10_000_000;

/// Errors produced when parsing an amount string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// The string is not a decimal number.
    #[error("Invalid amount: {0}")]
    Invalid(String),

    /// The string carries more fractional digits than the ledger scale.
    #[error("Amount {0} has more than 7 fractional digits")]
    TooPrecise(String),

    /// The value does not fit a signed 64-bit raw amount.
    #[error("Amount {0} is out of range")]
    OutOfRange(String),
}

/// A ledger amount: raw `i64` value at scale 10^7.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    /// The zero amount.
    pub const ZERO: Self = Self(0);

    /// Wraps a raw ledger value.
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw ledger value.
    #[must_use]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Returns the amount as a decimal with scale 7.
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, AMOUNT_SCALE)
    }

    /// Converts a decimal into a raw amount.
    ///
    /// # Errors
    ///
    /// Fails if the decimal carries more than 7 fractional digits or
    /// does not fit the raw `i64` range.
    pub fn try_from_decimal(value: Decimal) -> Result<Self, AmountError> {
        if value.scale() > AMOUNT_SCALE {
            return Err(AmountError::TooPrecise(value.to_string()));
        }
        let mut scaled = value;
        scaled.rescale(AMOUNT_SCALE);
        i64::try_from(scaled.mantissa())
            .map(Self)
            .map_err(|_| AmountError::OutOfRange(value.to_string()))
    }

    /// Adds two amounts, returning `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Self(sum)),
            None => None,
        }
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl From<i64> for Amount {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<Amount> for i64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl std::ops::Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, a| acc + a)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // Decimal also accepts exponents and underscores; the wire format does not.
        let well_formed = !trimmed.is_empty()
            && trimmed
                .trim_start_matches(['-', '+'])
                .chars()
                .all(|c| c.is_ascii_digit() || c == '.');
        if !well_formed {
            return Err(AmountError::Invalid(s.to_string()));
        }

        let value = Decimal::from_str(trimmed).map_err(|_| AmountError::Invalid(s.to_string()))?;
        Self::try_from_decimal(value)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
