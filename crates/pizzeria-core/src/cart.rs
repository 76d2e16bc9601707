//! # Cart
//!
//! The customer's selections for the current session.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Session Action             Cart Method          Cart State Change      │
//! │  ──────────────             ───────────          ─────────────────      │
//! │                                                                         │
//! │  "1" then "2" ────────────► add(item, 2) ──────► push &item twice       │
//! │                                                                         │
//! │  "C" ─────────────────────► is_empty() ────────► (read only)            │
//! │                                                                         │
//! │  Receipt ─────────────────► grouped_lines() ───► (read only)            │
//! │                                                                         │
//! │  NOTE: there is no remove or update; the cart only grows until it is    │
//! │        consumed by checkout or dropped on exit.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::collections::HashMap;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::MenuItem;
use crate::validation::validate_quantity;
use crate::MAX_ITEM_QUANTITY;

/// One receipt row: all units of the same dish collapsed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem<'c> {
    pub name: &'c str,
    pub unit_price: Money,
    pub quantity: i64,
}

impl LineItem<'_> {
    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - One entry per unit ordered; ordering 3 Colas stores 3 references
/// - Entries borrow from the catalog, which outlives the session
/// - Entries keep insertion order
#[derive(Debug, Clone)]
pub struct Cart<'c> {
    items: Vec<&'c MenuItem>,
}

impl<'c> Cart<'c> {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Appends `quantity` units of `item`.
    ///
    /// ## Errors
    /// - [`CoreError::QuantityTooLarge`] above [`MAX_ITEM_QUANTITY`]
    /// - [`CoreError::Validation`] for zero or negative quantities
    ///
    /// The cart is unchanged on error.
    pub fn add(&mut self, item: &'c MenuItem, quantity: i64) -> CoreResult<()> {
        if let Err(err) = validate_quantity(quantity) {
            return Err(match err {
                ValidationError::OutOfRange { .. } => CoreError::QuantityTooLarge {
                    requested: quantity,
                    max: MAX_ITEM_QUANTITY,
                },
                other => CoreError::Validation(other),
            });
        }

        // validate_quantity guarantees 1..=999
        let units = quantity as usize;
        self.items.extend(std::iter::repeat(item).take(units));
        Ok(())
    }

    /// Every unit in insertion order.
    pub fn items(&self) -> &[&'c MenuItem] {
        &self.items
    }

    /// Number of units (not distinct dishes).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the unit prices of every entry.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Collapses units into receipt rows.
    ///
    /// Rows are keyed by dish name and appear in the order each name was
    /// first added.
    ///
    /// ```rust
    /// use pizzeria_core::{Cart, Catalog};
    ///
    /// let catalog = Catalog::default_menu();
    /// let mut cart = Cart::new();
    /// cart.add(catalog.lookup("6").unwrap(), 1).unwrap();
    /// cart.add(catalog.lookup("1").unwrap(), 2).unwrap();
    /// cart.add(catalog.lookup("6").unwrap(), 2).unwrap();
    ///
    /// let lines = cart.grouped_lines();
    /// assert_eq!(lines[0].name, "Cola");
    /// assert_eq!(lines[0].quantity, 3);
    /// assert_eq!(lines[1].name, "Margherita");
    /// ```
    pub fn grouped_lines(&self) -> Vec<LineItem<'c>> {
        let mut lines: Vec<LineItem<'c>> = Vec::new();
        let mut positions: HashMap<&'c str, usize> = HashMap::new();

        for &item in &self.items {
            let name: &'c str = item.name.as_str();
            match positions.get(name) {
                Some(&pos) => lines[pos].quantity += 1,
                None => {
                    positions.insert(name, lines.len());
                    lines.push(LineItem {
                        name,
                        unit_price: item.price,
                        quantity: 1,
                    });
                }
            }
        }

        lines
    }
}

impl Default for Cart<'_> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
