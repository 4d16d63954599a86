//! Money type with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.
//! The system bills in a single currency with whole-unit amounts, so Money
//! carries no currency dimension; amounts are kept at zero decimal places.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use thiserror::Error;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount in the system currency
///
/// Money uses rust_decimal for precise arithmetic without floating-point
/// errors. Amounts are whole currency units (the persisted column type is
/// NUMERIC(12,0)); construction rounds to zero decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new Money value, rounding to whole units
    pub fn new(amount: Decimal) -> Self {
        Self(amount.round_dp(0))
    }

    /// Creates Money from an integer unit count
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::new(units, 0))
    }

    /// A zero amount
    pub fn zero() -> Self {
        Self(dec!(0))
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Checked addition that returns an error on numeric overflow
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Money::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Checked subtraction that returns an error on numeric overflow
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.0
            .checked_sub(other.0)
            .map(Money::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Multiplies by a scalar (e.g., a metered usage count)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.0 * factor)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}", self.0)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Decimal {
        money.0
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(5000000));
        assert_eq!(m.amount(), dec!(5000000));
    }

    #[test]
    fn test_money_rounds_to_whole_units() {
        let m = Money::new(dec!(100.49));
        assert_eq!(m.amount(), dec!(100));
    }

    #[test]
    fn test_money_from_units() {
        let m = Money::from_units(3500);
        assert_eq!(m.amount(), dec!(3500));
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::from_units(100);
        let b = Money::from_units(50);

        assert_eq!((a + b).amount(), dec!(150));
        assert_eq!((a - b).amount(), dec!(50));
    }

    #[test]
    fn test_money_multiply() {
        let rate = Money::from_units(3500);
        assert_eq!(rate.multiply(dec!(100)).amount(), dec!(350000));
    }

    #[test]
    fn test_money_sign_checks() {
        assert!(Money::from_units(1).is_positive());
        assert!(Money::from_units(-1).is_negative());
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_positive());
        assert!(!Money::zero().is_negative());
    }

    #[test]
    fn test_money_ordering() {
        assert!(Money::from_units(100) < Money::from_units(200));
        assert!(Money::from_units(200) >= Money::from_units(200));
    }

    #[test]
    fn test_money_sum() {
        let total: Money = vec![Money::from_units(1), Money::from_units(2), Money::from_units(3)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_units(6));
    }
}
