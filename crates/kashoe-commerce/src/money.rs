//! Money type for representing prices and totals.
//!
//! Amounts are held as integer cents so that a cart total is an exact fold
//! over its line items. On the wire a price is a plain decimal number
//! (`3500.0`), which is what the club backend stores.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Symbol shown in front of every amount.
pub const CURRENCY_SYMBOL: &str = "KSh";

/// Number of minor units per major unit.
const CENTS_PER_UNIT: i64 = 100;

/// A monetary amount in the club's single currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal amount, rounding to the nearest cent.
    ///
    /// Non-finite input maps to zero.
    ///
    /// ```
    /// use kashoe_commerce::money::Money;
    /// let price = Money::from_decimal(3499.99);
    /// assert_eq!(price.amount_cents, 349999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        if !amount.is_finite() {
            return Self::zero();
        }
        Self::new((amount * CENTS_PER_UNIT as f64).round() as i64)
    }

    /// Zero.
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Clamp negative amounts to zero.
    pub fn non_negative(self) -> Self {
        Self::new(self.amount_cents.max(0))
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / CENTS_PER_UNIT as f64
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn times(&self, quantity: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(quantity))
    }

    /// Add, saturating at the numeric bounds.
    pub fn saturating_add(&self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_add(other.amount_cents))
    }

    /// Format as a display string (e.g., "KSh 3500.00").
    pub fn display(&self) -> String {
        format!("{} {}", CURRENCY_SYMBOL, self.display_amount())
    }

    /// Format with two decimals and no symbol (e.g., "3500.00").
    pub fn display_amount(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        let unit = CENTS_PER_UNIT as u64;
        format!("{}{}.{:02}", sign, abs / unit, abs % unit)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(other)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, quantity: i64) -> Money {
        self.times(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Money::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Money::from_decimal)
    }
}
