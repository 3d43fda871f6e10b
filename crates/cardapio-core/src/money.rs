//! # Money Module
//!
//! Monetary values in integer centavos.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Centavos                                     │
//! │    Prices arrive from the backend as decimals and are converted     │
//! │    ONCE at the API boundary. Every total, line sum and display      │
//! │    string is computed from integer centavos after that.             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Display Format
//! Amounts render in the metical convention used across the menu:
//! `.` thousands grouping, `,` decimal separator, two fraction digits,
//! `" MT"` suffix. `Money::zero().format()` is `"0,00 MT"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in centavos (the smallest metical unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: headroom for any realistic order total
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serde as plain integer**: the wire/view representation is centavos
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal amount (as the backend serializes prices) into
    /// centavos, rounding half away from zero.
    ///
    /// This is the ONLY place floating point touches money; it runs once
    /// per price at the API boundary.
    pub fn from_decimal(amount: f64) -> Self {
        Money((amount * 100.0).round() as i64)
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies a unit price by a line quantity.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Formats the amount in the metical display convention.
    ///
    /// ## Example
    /// ```rust
    /// use cardapio_core::Money;
    ///
    /// assert_eq!(Money::from_cents(123_456).format(), "1.234,56 MT");
    /// assert_eq!(Money::zero().format(), "0,00 MT");
    /// ```
    pub fn format(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let whole = (self.0 / 100).abs();
        let frac = (self.0 % 100).abs();

        // Group the whole part in threes, separated by '.'
        let digits = whole.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }

        format!("{sign}{grouped},{frac:02} MT")
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
    }

    #[test]
    fn test_from_decimal() {
        assert_eq!(Money::from_decimal(10.99).cents(), 1099);
        assert_eq!(Money::from_decimal(150.0).cents(), 15000);
        // Half-cent rounds away from zero
        assert_eq!(Money::from_decimal(0.005).cents(), 1);
        assert_eq!(Money::from_decimal(0.0).cents(), 0);
    }

    #[test]
    fn test_format() {
        assert_eq!(Money::from_cents(0).format(), "0,00 MT");
        assert_eq!(Money::from_cents(500).format(), "5,00 MT");
        assert_eq!(Money::from_cents(1099).format(), "10,99 MT");
        assert_eq!(Money::from_cents(123_456).format(), "1.234,56 MT");
        assert_eq!(Money::from_cents(100_000_000).format(), "1.000.000,00 MT");
    }

    #[test]
    fn test_display_matches_format() {
        let money = Money::from_cents(2550);
        assert_eq!(money.to_string(), money.format());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.cents(), 1500);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    }

    #[test]
    fn test_sum_iterator() {
        let total: Money = [100, 200, 300].iter().map(|c| Money::from_cents(*c)).sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serde_as_plain_integer() {
        let money = Money::from_cents(1234);
        assert_eq!(serde_json::to_string(&money).unwrap(), "1234");
        let back: Money = serde_json::from_str("1234").unwrap();
        assert_eq!(back, money);
    }
}
