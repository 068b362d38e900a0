//! Type-safe price representation.
//!
//! The menu API reports prices as integers in the currency's minor unit
//! (paise for INR). A `Price` keeps that integer as the source of truth and
//! only goes through `Decimal` for display, so no float rounding ever touches
//! a cart subtotal.
//!
//! The API only quotes rupees, so INR is the only currency.

use std::fmt;
use std::iter::Sum;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the smallest currency unit (e.g., paise for INR).
    minor: i64,
    /// ISO 4217 currency code.
    currency_code: CurrencyCode,
}

impl Price {
    /// Create a price from an amount in minor units.
    #[must_use]
    pub const fn from_minor(minor: i64, currency_code: CurrencyCode) -> Self {
        Self {
            minor,
            currency_code,
        }
    }

    /// Create an INR price from paise.
    #[must_use]
    pub const fn inr(paise: i64) -> Self {
        Self::from_minor(paise, CurrencyCode::INR)
    }

    /// Amount in minor units.
    #[must_use]
    pub const fn minor(&self) -> i64 {
        self.minor
    }

    /// Currency of this price.
    #[must_use]
    pub const fn currency_code(&self) -> CurrencyCode {
        self.currency_code
    }

    /// Amount in the currency's standard unit, without trailing zeros.
    ///
    /// `24900` paise is `249`, `24950` paise is `249.5`.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        Decimal::new(self.minor, 2).normalize()
    }

    /// Add two prices, returning `None` on overflow.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        Some(Self::from_minor(
            self.minor.checked_add(other.minor)?,
            self.currency_code,
        ))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency_code.symbol(), self.amount())
    }
}

impl Sum for Price {
    /// Sums prices, saturating on overflow.
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::inr(0), |acc, price| {
            acc.checked_add(price).unwrap_or(Self::inr(i64::MAX))
        })
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    INR,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::INR => "₹",
        }
    }
}
