//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floats:                                                    │
//! │    12.50 + 12.50 + 4.99 = 29.990000000000002  ❌                        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1250 + 1250 + 499 = 2999 cents = $29.99  ✅                          │
//! │                                                                         │
//! │  Dollars only appear when a value is formatted for the terminal.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizzeria_core::money::Money;
//!
//! let price = Money::from_major_minor(12, 50); // $12.50
//! let line = price * 2;                         // $25.00
//! assert_eq!(line.to_string(), "$25.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Where Money is Used
/// ```text
/// MenuItem.price ──► LineItem.line_total ──► Totals.subtotal
///                                                  │
///                               TaxRate ──► Totals.tax
///                                                  │
///                  delivery fee ──► Totals.grand_total ──► "Confirm payment of $37.39?"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ```rust
    /// use pizzeria_core::money::Money;
    ///
    /// let price = Money::from_cents(499); // $4.99
    /// assert_eq!(price.cents(), 499);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from dollars and cents.
    ///
    /// For negative amounts, only the major unit should be negative:
    /// `from_major_minor(-5, 50)` is -$5.50.
    ///
    /// ```rust
    /// use pizzeria_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(15, 75).cents(), 1575);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Calculates tax, rounding half-up to whole cents.
    ///
    /// ## Implementation
    /// Integer math only: `(amount_cents * bps + 5000) / 10000`.
    /// The +5000 is half of the 10000 divisor, so exactly half a cent rounds up.
    ///
    /// ```rust
    /// use pizzeria_core::money::Money;
    /// use pizzeria_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(2999);  // $29.99
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(800));
    /// // $29.99 × 8% = $2.3992 → $2.40
    /// assert_eq!(tax.cents(), 240);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 so that large subtotals times bps cannot overflow
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ```rust
    /// use pizzeria_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1250);
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 2500);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Formats as `$D.CC`, the only currency layout the terminal uses.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let text = format!("{}${}.{:02}", sign, self.dollars().abs(), self.cents_part());
        // pad() so callers can right-align amounts with `{:>8}`
        f.pad(&text)
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

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
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
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(12, 50).cents(), 1250);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1250)), "$12.50");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(7)), "$0.07");
    }

    #[test]
    fn test_display_honors_width() {
        assert_eq!(format!("{:>8}", Money::from_cents(499)), "   $4.99");
        assert_eq!(format!("{:<7}|", Money::from_cents(150)), "$1.50  |");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 1500);
    }

    #[test]
    fn test_sum_has_no_float_drift() {
        // 0.10 added ten times is exactly 1.00
        let dime = Money::from_cents(10);
        let total: Money = std::iter::repeat(dime).take(10).sum();
        assert_eq!(total, Money::from_cents(100));

        let prices = [Money::from_cents(1250), Money::from_cents(1250), Money::from_cents(499)];
        let total: Money = prices.iter().sum();
        assert_eq!(total.to_string(), "$29.99");
    }

    #[test]
    fn test_tax_calculation_basic() {
        let amount = Money::from_cents(1000);
        let tax = amount.calculate_tax(TaxRate::from_bps(1000));
        assert_eq!(tax.cents(), 100);
    }

    #[test]
    fn test_tax_rounds_half_up() {
        // $0.50 at 1% = 0.5 cent → 1 cent
        let tax = Money::from_cents(50).calculate_tax(TaxRate::from_bps(100));
        assert_eq!(tax.cents(), 1);

        // $0.49 at 1% = 0.49 cent → 0 cents
        let tax = Money::from_cents(49).calculate_tax(TaxRate::from_bps(100));
        assert_eq!(tax.cents(), 0);
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::from_cents(1).is_zero());
        assert_eq!(Money::default(), Money::zero());
    }
}
