//! # pizzeria-core: Pure Ordering Logic for Rust Pizzeria
//!
//! This crate holds everything about an order that can be computed without
//! touching a terminal: the menu, the cart, tax and totals, and the receipt.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Rust Pizzeria Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  pizzeria-cli (terminal)                        │   │
//! │  │    Menu prompt ──► Quantity prompt ──► Receipt ──► Y/N prompt   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ pizzeria-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │ catalog │ │  cart   │ │ pricing │ │ receipt │ │  money  │  │   │
//! │  │   │ lookup  │ │ units   │ │ Totals  │ │ grouped │ │  cents  │  │   │
//! │  │   │ render  │ │ groups  │ │ TaxRate │ │ lines   │ │  $D.CC  │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SLEEPING • NO PROCESS EXIT • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, TaxRate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The immutable menu, code lookup and menu rendering
//! - [`cart`] - The session cart (one entry per unit ordered)
//! - [`pricing`] - Subtotal, tax, delivery fee and grand total
//! - [`receipt`] - Grouped receipt lines and receipt rendering
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use pizzeria_core::{Cart, Catalog, PricingPolicy};
//!
//! let catalog = Catalog::default_menu();
//! let mut cart = Cart::new();
//!
//! cart.add(catalog.lookup("1").unwrap(), 2).unwrap(); // 2 x Margherita
//! cart.add(catalog.lookup("4").unwrap(), 1).unwrap(); // 1 x Garlic Bread
//!
//! let totals = PricingPolicy::default().compute(&cart);
//! assert_eq!(totals.subtotal.to_string(), "$29.99");
//! assert_eq!(totals.tax.to_string(), "$2.40");
//! assert_eq!(totals.grand_total.to_string(), "$37.39");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, LineItem};
pub use catalog::{Catalog, CategoryDef, ItemDef, MenuScreen};
pub use error::{CatalogError, CoreError, ValidationError};
pub use money::Money;
pub use pricing::{PricingPolicy, Totals};
pub use receipt::Receipt;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity accepted in a single add-to-cart action.
///
/// The cart stores one entry per unit, so this also bounds how fast the cart
/// can grow from one mistyped number (e.g. 1000000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Highest accepted menu price or delivery fee, in cents ($1,000,000.00).
///
/// A subtotal grows by at most this much per cart entry, so `i64` cents
/// cannot overflow before the cart holds about 9 × 10^10 entries, far more
/// than fit in memory.
pub const MAX_PRICE_CENTS: i64 = 100_000_000;

/// Default sales tax: 800 bps = 8%.
pub const DEFAULT_TAX_RATE_BPS: u32 = 800;

/// Default flat delivery fee in cents ($5.00).
pub const DEFAULT_DELIVERY_FEE_CENTS: i64 = 500;

/// Default store name shown in the menu banner and success message.
pub const DEFAULT_STORE_NAME: &str = "Rust Pizzeria";

/// Main-prompt command letter for checkout.
pub const CHECKOUT_COMMAND: &str = "C";

/// Main-prompt command letter for leaving without ordering.
pub const EXIT_COMMAND: &str = "X";
