//! # Pricing
//!
//! Turns a cart into the three numbers the customer pays attention to.
//!
//! ## Rounding Policy
//! ```text
//! subtotal    = Σ unit prices                     (exact, integer cents)
//! tax         = round_half_up(subtotal × bps / 10000)   (one rounding, on the whole order)
//! grand_total = subtotal + tax + delivery_fee     (exact, integer cents)
//! ```
//! Tax is never rounded per line, so the receipt total always equals the sum
//! of the printed subtotal, tax and delivery lines.

use serde::Serialize;

use crate::cart::Cart;
use crate::money::Money;
use crate::types::TaxRate;
use crate::{DEFAULT_DELIVERY_FEE_CENTS, DEFAULT_TAX_RATE_BPS};

/// Tax rate and delivery fee applied at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    pub tax_rate: TaxRate,
    pub delivery_fee: Money,
}

/// Derived order totals. Recomputed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub subtotal: Money,
    pub tax: Money,
    pub delivery_fee: Money,
    pub grand_total: Money,
}

impl PricingPolicy {
    pub const fn new(tax_rate: TaxRate, delivery_fee: Money) -> Self {
        PricingPolicy {
            tax_rate,
            delivery_fee,
        }
    }

    /// Prices a cart.
    ///
    /// An empty cart yields a zero subtotal and zero tax, but checkout never
    /// asks for it: it stops at "nothing to process" first.
    pub fn compute(&self, cart: &Cart<'_>) -> Totals {
        self.totals_for(cart.subtotal())
    }

    /// Prices an already-summed subtotal.
    pub fn totals_for(&self, subtotal: Money) -> Totals {
        let tax = subtotal.calculate_tax(self.tax_rate);
        Totals {
            subtotal,
            tax,
            delivery_fee: self.delivery_fee,
            grand_total: subtotal + tax + self.delivery_fee,
        }
    }
}

impl Default for PricingPolicy {
    /// 8% tax, $5.00 delivery.
    fn default() -> Self {
        PricingPolicy::new(
            TaxRate::from_bps(DEFAULT_TAX_RATE_BPS),
            Money::from_cents(DEFAULT_DELIVERY_FEE_CENTS),
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
