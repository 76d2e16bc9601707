//! # Receipt
//!
//! Grouped line items plus totals, ready to print before payment.
//!
//! ```text
//! ==================================================
//!                 -- Your Receipt --
//! --------------------------------------------------
//! Order #3F2A9C01              2026-10-19 18:42 UTC
//! --------------------------------------------------
//! 2 x Margherita           @ $12.50 = $25.00
//! 1 x Garlic Bread         @ $4.99 = $4.99
//! --------------------------------------------------
//! Subtotal:                                   $29.99
//! Tax (8%):                                    $2.40
//! Delivery Fee:                                $5.00
//! --------------------------------------------------
//! GRAND TOTAL:                                $37.39
//! ==================================================
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::cart::{Cart, LineItem};
use crate::catalog::{NAME_WIDTH, RULE_WIDTH};
use crate::pricing::{PricingPolicy, Totals};
use crate::types::TaxRate;

/// Width of the amount column in the totals block.
const AMOUNT_WIDTH: usize = 12;

#[derive(Debug, Clone, Serialize)]
pub struct Receipt<'c> {
    /// Short human-facing order number.
    pub order_ref: String,
    pub issued_at: DateTime<Utc>,
    pub lines: Vec<LineItem<'c>>,
    pub tax_rate: TaxRate,
    pub totals: Totals,
}

impl<'c> Receipt<'c> {
    /// Builds the receipt for a cart, or `None` when there is nothing to bill.
    ///
    /// An empty cart is never priced.
    pub fn build(cart: &Cart<'c>, policy: &PricingPolicy) -> Option<Self> {
        if cart.is_empty() {
            return None;
        }

        Some(Receipt {
            order_ref: new_order_ref(),
            issued_at: Utc::now(),
            lines: cart.grouped_lines(),
            tax_rate: policy.tax_rate,
            totals: policy.compute(cart),
        })
    }

    /// Total number of units across all lines.
    pub fn unit_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

/// First 8 hex digits of a v4 UUID, upper-cased.
fn new_order_ref() -> String {
    let id = Uuid::new_v4().simple().to_string();
    id[..8].to_ascii_uppercase()
}

impl fmt::Display for Receipt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);
        let label_width = RULE_WIDTH - AMOUNT_WIDTH;

        writeln!(f, "{heavy}")?;
        writeln!(f, "{:^width$}", "-- Your Receipt --", width = RULE_WIDTH)?;
        writeln!(f, "{light}")?;

        let order = format!("Order #{}", self.order_ref);
        let stamp = self.issued_at.format("%Y-%m-%d %H:%M UTC").to_string();
        writeln!(f, "{order}{stamp:>width$}", width = RULE_WIDTH - order.len())?;
        writeln!(f, "{light}")?;

        for line in &self.lines {
            writeln!(
                f,
                "{} x {:<width$.width$} @ {} = {}",
                line.quantity,
                line.name,
                line.unit_price,
                line.line_total(),
                width = NAME_WIDTH
            )?;
        }

        writeln!(f, "{light}")?;
        let tax_label = format!("Tax ({}):", self.tax_rate);
        let rows = [
            ("Subtotal:", self.totals.subtotal),
            (tax_label.as_str(), self.totals.tax),
            ("Delivery Fee:", self.totals.delivery_fee),
        ];
        for (label, amount) in rows {
            writeln!(f, "{label:<label_width$}{amount:>AMOUNT_WIDTH$}")?;
        }
        writeln!(f, "{light}")?;
        writeln!(
            f,
            "{:<label_width$}{:>AMOUNT_WIDTH$}",
            "GRAND TOTAL:", self.totals.grand_total
        )?;
        writeln!(f, "{heavy}")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Catalog, Money};

    fn sample_receipt(catalog: &Catalog) -> Receipt<'_> {
        let mut cart = Cart::new();
        cart.add(catalog.lookup("1").unwrap(), 2).unwrap();
        cart.add(catalog.lookup("4").unwrap(), 1).unwrap();
        Receipt::build(&cart, &PricingPolicy::default()).unwrap()
    }

    #[test]
    fn test_empty_cart_has_no_receipt() {
        assert!(Receipt::build(&Cart::new(), &PricingPolicy::default()).is_none());
    }

    #[test]
    fn test_receipt_contents() {
        let catalog = Catalog::default_menu();
        let receipt = sample_receipt(&catalog);

        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.unit_count(), 3);
        assert_eq!(receipt.totals.grand_total, Money::from_cents(3739));
        assert_eq!(receipt.order_ref.len(), 8);
        assert!(receipt
            .order_ref
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_receipt_render() {
        let catalog = Catalog::default_menu();
        let text = sample_receipt(&catalog).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[1].contains("-- Your Receipt --"));
        assert!(lines[3].starts_with("Order #"));
        assert!(lines[3].ends_with("UTC"));
        assert_eq!(lines[3].len(), RULE_WIDTH);

        assert!(lines.contains(&"2 x Margherita           @ $12.50 = $25.00"));
        assert!(lines.contains(&"1 x Garlic Bread         @ $4.99 = $4.99"));

        let subtotal = format!("{:<38}{:>12}", "Subtotal:", "$29.99");
        let tax = format!("{:<38}{:>12}", "Tax (8%):", "$2.40");
        let delivery = format!("{:<38}{:>12}", "Delivery Fee:", "$5.00");
        let grand = format!("{:<38}{:>12}", "GRAND TOTAL:", "$37.39");
        assert!(lines.contains(&subtotal.as_str()));
        assert!(lines.contains(&tax.as_str()));
        assert!(lines.contains(&delivery.as_str()));
        assert!(lines.contains(&grand.as_str()));

        // Totals appear in a fixed order
        let pos = |needle: &str| text.find(needle).unwrap();
        assert!(pos("Subtotal:") < pos("Tax (8%):"));
        assert!(pos("Tax (8%):") < pos("Delivery Fee:"));
        assert!(pos("Delivery Fee:") < pos("GRAND TOTAL:"));
    }

    #[test]
    fn test_receipt_serializes_for_audit_log() {
        let catalog = Catalog::default_menu();
        let json = serde_json::to_value(sample_receipt(&catalog)).unwrap();
        assert_eq!(json["lines"][0]["name"], "Margherita");
        assert_eq!(json["lines"][0]["quantity"], 2);
        assert_eq!(json["totals"]["grand_total"], 3739);
        assert_eq!(json["tax_rate"], 800);
    }
}
