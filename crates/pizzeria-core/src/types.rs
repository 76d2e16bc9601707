//! # Domain Types
//!
//! Core domain types used throughout Rust Pizzeria.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │    MenuItem     │   │    TaxRate      │                              │
//! │  │  ─────────────  │   │  ─────────────  │                              │
//! │  │  code (unique)  │   │  bps (u32)      │                              │
//! │  │  name           │   │  800 = 8%       │                              │
//! │  │  price (Money)  │   └─────────────────┘                              │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so 800 bps = 8% and 825 bps = 8.25%.
/// Integer bps keeps tax math in integers from end to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

/// Percentage without trailing zeros: `8%`, `8.5%`, `8.25%`.
impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{whole}%")
        } else if frac % 10 == 0 {
            write!(f, "{whole}.{}%", frac / 10)
        } else {
            write!(f, "{whole}.{frac:02}%")
        }
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A dish or drink that can be ordered.
///
/// Immutable once the catalog is built; carts hold `&MenuItem` references
/// into the catalog rather than copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Code typed at the main prompt. Unique across the whole catalog.
    pub code: String,

    /// Display name shown on the menu and receipt.
    pub name: String,

    /// Unit price.
    pub price: Money,
}

impl MenuItem {
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        MenuItem {
            code: code.into(),
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(825);
        assert_eq!(rate.bps(), 825);
        assert!(!rate.is_zero());
        assert!(TaxRate::default().is_zero());
    }

    #[test]
    fn test_tax_rate_display() {
        assert_eq!(TaxRate::from_bps(800).to_string(), "8%");
        assert_eq!(TaxRate::from_bps(850).to_string(), "8.5%");
        assert_eq!(TaxRate::from_bps(825).to_string(), "8.25%");
        assert_eq!(TaxRate::from_bps(5).to_string(), "0.05%");
        assert_eq!(TaxRate::zero().to_string(), "0%");
    }

    #[test]
    fn test_menu_item_new() {
        let item = MenuItem::new("6", "Cola", Money::from_cents(200));
        assert_eq!(item.code, "6");
        assert_eq!(item.name, "Cola");
        assert_eq!(item.price.cents(), 200);
    }
}
