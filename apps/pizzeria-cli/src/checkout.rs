//! # Checkout
//!
//! Prints the receipt and runs the payment confirmation.
//!
//! ## Payment Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  cart empty? ──yes──► "No order to process." ──► NothingToProcess       │
//! │      │ no                                                               │
//! │      ▼                                                                  │
//! │  Receipt (grouped lines, subtotal, tax, delivery, grand total)          │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  "Processing payment..." + fixed pause                                  │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  Confirm payment of $X? (Y/N) ◄── anything else: "Please enter Y or N." │
//! │      │                                                                  │
//! │      ├── Y ──► success messages ──► Paid                                │
//! │      └── N ──► cancellation    ──► Cancelled                            │
//! │                                                                         │
//! │  Both decisions are final; there is no second payment attempt.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use pizzeria_core::validation::parse_confirmation;
use pizzeria_core::{Cart, PricingPolicy, Receipt};
use tracing::{info, warn};

use crate::console::Console;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The cart was empty; nothing was priced or prompted.
    NothingToProcess,
    /// Payment confirmed.
    Paid { order_ref: String },
    /// Customer answered N.
    Cancelled,
    /// Input ended before a decision.
    Interrupted,
}

/// Checkout settings for one run of the terminal.
#[derive(Debug, Clone)]
pub struct Checkout<'a> {
    pub policy: PricingPolicy,
    pub store_name: &'a str,
    /// Cosmetic "processing" pause; `Duration::ZERO` in tests.
    pub delay: Duration,
}

impl<'a> Checkout<'a> {
    pub fn new(policy: PricingPolicy, store_name: &'a str, delay: Duration) -> Self {
        Checkout {
            policy,
            store_name,
            delay,
        }
    }

    pub fn run<R: BufRead, W: Write>(
        &self,
        cart: &Cart<'_>,
        console: &mut Console<R, W>,
    ) -> io::Result<CheckoutOutcome> {
        let Some(receipt) = Receipt::build(cart, &self.policy) else {
            console.say("\nYour cart is empty. No order to process.")?;
            return Ok(CheckoutOutcome::NothingToProcess);
        };

        console.show(&receipt)?;

        console.say("\nProcessing payment...")?;
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        let prompt = format!(
            "Confirm payment of {}? (Y/N): ",
            receipt.totals.grand_total
        );
        let Some(confirmed) = console.prompt_until(&prompt, parse_confirmation)? else {
            warn!(order_ref = %receipt.order_ref, "Input closed before payment decision");
            return Ok(CheckoutOutcome::Interrupted);
        };

        if confirmed {
            match serde_json::to_string(&receipt) {
                Ok(json) => info!(
                    order_ref = %receipt.order_ref,
                    units = receipt.unit_count(),
                    receipt = %json,
                    "Payment confirmed"
                ),
                Err(err) => warn!(
                    order_ref = %receipt.order_ref,
                    units = receipt.unit_count(),
                    %err,
                    "Payment confirmed; receipt not serializable"
                ),
            }
            console.say("\n*** Payment successful! ***")?;
            console.say("Your order is being prepared and will be delivered shortly.")?;
            console.say(format!("Order reference: #{}", receipt.order_ref))?;
            console.say(format!("Thank you for choosing {}!", self.store_name))?;
            Ok(CheckoutOutcome::Paid {
                order_ref: receipt.order_ref,
            })
        } else {
            info!(order_ref = %receipt.order_ref, "Payment cancelled");
            console.say("Order cancelled. Thank you, come again!")?;
            Ok(CheckoutOutcome::Cancelled)
        }
    }
}
