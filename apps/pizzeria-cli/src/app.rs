//! # App
//!
//! Wires the session to checkout and prints the closing message.
//!
//! ## Run Sequence
//! ```text
//! OrderSession::run ──► CheckoutReady(cart) ──► Checkout::run ──► Paid / Cancelled
//!        │
//!        ├──► Terminated(UserExit)    ──► "Thank you for visiting! Goodbye."
//!        └──► Terminated(InputClosed) ──► "Application stopped by user. Goodbye!"
//! ```

use std::io::{self, BufRead, Write};
use std::time::Duration;

use pizzeria_core::{Catalog, PricingPolicy};
use tracing::info;

use crate::checkout::{Checkout, CheckoutOutcome};
use crate::config::AppConfig;
use crate::console::Console;
use crate::error::CliResult;
use crate::session::{ExitReason, OrderSession, SessionOutcome};

/// Printed on Ctrl-C and when input ends mid-session.
pub const INTERRUPT_FAREWELL: &str = "\nApplication stopped by user. Goodbye!";

/// Printed when the customer types the exit command.
pub const EXIT_FAREWELL: &str = "\nThank you for visiting! Goodbye.";

/// How the run ended. Every variant maps to exit status 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppExit {
    Paid { order_ref: String },
    Cancelled,
    Exited,
    Interrupted,
}

/// Everything a run needs, built once from configuration.
#[derive(Debug, Clone)]
pub struct App {
    catalog: Catalog,
    policy: PricingPolicy,
    store_name: String,
    payment_delay: Duration,
}

impl App {
    pub fn new(
        catalog: Catalog,
        policy: PricingPolicy,
        store_name: impl Into<String>,
        payment_delay: Duration,
    ) -> Self {
        App {
            catalog,
            policy,
            store_name: store_name.into(),
            payment_delay,
        }
    }

    pub fn from_config(config: &AppConfig) -> CliResult<Self> {
        Ok(App::new(
            config.catalog()?,
            config.pricing(),
            config.store_name.clone(),
            config.payment_delay(),
        ))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Runs one customer session from the first menu to the final message.
    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> io::Result<AppExit> {
        info!(store = %self.store_name, items = self.catalog.len(), "Session started");

        let session = OrderSession::new(&self.catalog, &self.store_name);
        let cart = match session.run(console)? {
            SessionOutcome::CheckoutReady(cart) => cart,
            SessionOutcome::Terminated(ExitReason::UserExit) => {
                console.say(EXIT_FAREWELL)?;
                return Ok(AppExit::Exited);
            }
            SessionOutcome::Terminated(ExitReason::InputClosed) => {
                console.say(INTERRUPT_FAREWELL)?;
                return Ok(AppExit::Interrupted);
            }
        };

        let checkout = Checkout::new(self.policy, &self.store_name, self.payment_delay);
        let exit = match checkout.run(&cart, console)? {
            CheckoutOutcome::Paid { order_ref } => AppExit::Paid { order_ref },
            CheckoutOutcome::Cancelled => AppExit::Cancelled,
            CheckoutOutcome::NothingToProcess => AppExit::Exited,
            CheckoutOutcome::Interrupted => {
                console.say(INTERRUPT_FAREWELL)?;
                AppExit::Interrupted
            }
        };

        info!(?exit, "Session finished");
        Ok(exit)
    }
}
