//! # Order Session
//!
//! The browsing loop: show the menu, read a command, grow the cart.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │        ┌──────────────── item code + valid quantity ───────────┐       │
//! │        │ ┌────────────── unknown code ──────────────────────┐  │       │
//! │        │ │ ┌──────────── "C" with empty cart ──────────┐    │  │       │
//! │        ▼ ▼ ▼                                           │    │  │       │
//! │   ┌──────────┐ ─────────────────────────────────────────┴────┴──┘       │
//! │   │ Browsing │                                                          │
//! │   └──────────┘ ── "C" with items ──► CheckoutReady  (cart handed over)  │
//! │        │                                                                │
//! │        ├──────── "X" ─────────────► Terminated(Exit)                    │
//! │        └──────── end of input ────► Terminated(InputClosed)             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every pass through `Browsing` re-renders the whole menu before prompting.
//! The session never exits the process itself; the caller looks at the
//! returned [`SessionOutcome`] and decides how to shut down.

use std::io::{self, BufRead, Write};

use pizzeria_core::validation::parse_quantity;
use pizzeria_core::{Cart, Catalog, MenuItem, CHECKOUT_COMMAND, EXIT_COMMAND};
use tracing::{debug, info};

use crate::console::Console;

/// What was typed at the main prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'c> {
    /// A known menu code.
    Item(&'c MenuItem),
    Checkout,
    Exit,
    /// Neither a code nor a command (kept for logging).
    Unknown(String),
}

impl<'c> Command<'c> {
    /// Trims the input and matches command letters without case.
    pub fn parse(input: &str, catalog: &'c Catalog) -> Self {
        let input = input.trim();
        if input.eq_ignore_ascii_case(CHECKOUT_COMMAND) {
            Command::Checkout
        } else if input.eq_ignore_ascii_case(EXIT_COMMAND) {
            Command::Exit
        } else if let Some(item) = catalog.lookup(input) {
            Command::Item(item)
        } else {
            Command::Unknown(input.to_string())
        }
    }
}

/// Why a session ended without reaching checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The customer typed the exit command.
    UserExit,
    /// Input ended (Ctrl-D or end of a piped script).
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Browsing,
    CheckoutReady,
    Terminated(ExitReason),
}

/// Result of a finished session.
#[derive(Debug)]
pub enum SessionOutcome<'c> {
    /// A non-empty cart ready for checkout.
    CheckoutReady(Cart<'c>),
    Terminated(ExitReason),
}

pub struct OrderSession<'c> {
    catalog: &'c Catalog,
    store_name: &'c str,
    cart: Cart<'c>,
    state: SessionState,
}

impl<'c> OrderSession<'c> {
    pub fn new(catalog: &'c Catalog, store_name: &'c str) -> Self {
        OrderSession {
            catalog,
            store_name,
            cart: Cart::new(),
            state: SessionState::Browsing,
        }
    }

    pub fn cart(&self) -> &Cart<'c> {
        &self.cart
    }

    /// Runs until the session leaves `Browsing`.
    pub fn run<R: BufRead, W: Write>(
        mut self,
        console: &mut Console<R, W>,
    ) -> io::Result<SessionOutcome<'c>> {
        loop {
            self.state = self.step(console)?;
            match self.state {
                SessionState::Browsing => {}
                SessionState::CheckoutReady => {
                    return Ok(SessionOutcome::CheckoutReady(self.cart));
                }
                SessionState::Terminated(reason) => {
                    return Ok(SessionOutcome::Terminated(reason));
                }
            }
        }
    }

    /// One pass through `Browsing`: menu, prompt, transition.
    pub fn step<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> io::Result<SessionState> {
        console.show(self.catalog.screen(self.store_name))?;

        let prompt = format!(
            "\nEnter item code ({}), [C]heckout, or [X] Exit: ",
            self.catalog.code_hint()
        );
        let Some(line) = console.prompt(&prompt)? else {
            info!(units = self.cart.len(), "Input closed while browsing");
            return Ok(SessionState::Terminated(ExitReason::InputClosed));
        };

        match Command::parse(&line, self.catalog) {
            Command::Exit => {
                info!(units = self.cart.len(), "Customer left without ordering");
                Ok(SessionState::Terminated(ExitReason::UserExit))
            }
            Command::Checkout if self.cart.is_empty() => {
                console.say("Your cart is empty. Please add some items first.")?;
                Ok(SessionState::Browsing)
            }
            Command::Checkout => {
                info!(units = self.cart.len(), "Proceeding to checkout");
                Ok(SessionState::CheckoutReady)
            }
            Command::Item(item) => self.order_item(item, console),
            Command::Unknown(input) => {
                debug!(%input, "Unrecognized command");
                console.say("Invalid code. Please try again.")?;
                Ok(SessionState::Browsing)
            }
        }
    }

    /// Quantity sub-loop for a selected item.
    fn order_item<R: BufRead, W: Write>(
        &mut self,
        item: &'c MenuItem,
        console: &mut Console<R, W>,
    ) -> io::Result<SessionState> {
        let prompt = format!("How many '{}' would you like? (Enter a number): ", item.name);
        let Some(quantity) = console.prompt_until(&prompt, parse_quantity)? else {
            return Ok(SessionState::Terminated(ExitReason::InputClosed));
        };

        // parse_quantity enforces the same bounds as Cart::add
        if let Err(err) = self.cart.add(item, quantity) {
            console.say(err)?;
            return Ok(SessionState::Browsing);
        }

        info!(code = %item.code, item = %item.name, quantity, units = self.cart.len(), "Added to cart");
        console.say(format!("-> Added {quantity} x {} to your cart.", item.name))?;
        Ok(SessionState::Browsing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    fn console(script: &str) -> TestConsole {
        Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(console: TestConsole) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_command_parse() {
        let catalog = Catalog::default_menu();
        assert_eq!(Command::parse(" c ", &catalog), Command::Checkout);
        assert_eq!(Command::parse("C", &catalog), Command::Checkout);
        assert_eq!(Command::parse("x", &catalog), Command::Exit);
        assert_eq!(Command::parse("X\t", &catalog), Command::Exit);
        assert_eq!(
            Command::parse(" 4 ", &catalog),
            Command::Item(catalog.lookup("4").unwrap())
        );
        assert_eq!(
            Command::parse("99", &catalog),
            Command::Unknown("99".to_string())
        );
        assert_eq!(Command::parse("", &catalog), Command::Unknown(String::new()));
    }

    #[test]
    fn test_order_then_checkout() {
        let catalog = Catalog::default_menu();
        let mut console = console("1\n2\n4\n1\nc\n");

        let outcome = OrderSession::new(&catalog, "Rust Pizzeria")
            .run(&mut console)
            .unwrap();

        let SessionOutcome::CheckoutReady(cart) = outcome else {
            panic!("expected checkout");
        };
        assert_eq!(cart.len(), 3);
        assert_eq!(cart.subtotal().to_string(), "$29.99");

        let out = transcript(console);
        assert!(out.contains("-> Added 2 x Margherita to your cart."));
        assert!(out.contains("-> Added 1 x Garlic Bread to your cart."));
    }

    #[test]
    fn test_quantity_retries_until_positive_integer() {
        let catalog = Catalog::default_menu();
        let mut console = console("1\n-3\nabc\n2\nc\n");

        let outcome = OrderSession::new(&catalog, "Rust Pizzeria")
            .run(&mut console)
            .unwrap();

        let SessionOutcome::CheckoutReady(cart) = outcome else {
            panic!("expected checkout");
        };
        assert_eq!(cart.len(), 2);

        let out = transcript(console);
        assert_eq!(out.matches("How many 'Margherita' would you like?").count(), 3);
        assert!(out.contains("Quantity must be a positive number."));
        assert!(out.contains("Invalid input. Please enter a valid number."));
        assert!(out.contains("-> Added 2 x Margherita to your cart."));
    }

    #[test]
    fn test_empty_checkout_keeps_browsing() {
        let catalog = Catalog::default_menu();
        let mut console = console("C\nx\n");

        let outcome = OrderSession::new(&catalog, "Rust Pizzeria")
            .run(&mut console)
            .unwrap();

        assert!(matches!(
            outcome,
            SessionOutcome::Terminated(ExitReason::UserExit)
        ));
        let out = transcript(console);
        assert!(out.contains("Your cart is empty. Please add some items first."));
        // Menu shown once per Browsing pass
        assert_eq!(out.matches("Welcome to Rust Pizzeria!").count(), 2);
    }

    #[test]
    fn test_unknown_code_redisplays_menu() {
        let catalog = Catalog::default_menu();
        let mut console = console("pizza\nX\n");

        let mut session = OrderSession::new(&catalog, "Rust Pizzeria");
        assert_eq!(session.step(&mut console).unwrap(), SessionState::Browsing);
        assert!(session.cart().is_empty());
        assert_eq!(
            session.step(&mut console).unwrap(),
            SessionState::Terminated(ExitReason::UserExit)
        );

        let out = transcript(console);
        assert!(out.contains("Invalid code. Please try again."));
        assert_eq!(out.matches("[C] Checkout | [X] Exit").count(), 2);
        assert!(out.contains("Enter item code (1-8), [C]heckout, or [X] Exit: "));
    }

    #[test]
    fn test_invalid_utf8_is_an_unknown_code() {
        let catalog = Catalog::default_menu();
        let mut console = Console::new(Cursor::new(b"\xff\xfe\nx\n".to_vec()), Vec::new());

        let outcome = OrderSession::new(&catalog, "Rust Pizzeria")
            .run(&mut console)
            .unwrap();

        assert!(matches!(
            outcome,
            SessionOutcome::Terminated(ExitReason::UserExit)
        ));
        let out = transcript(console);
        assert!(out.contains("Invalid code. Please try again."));
    }

    #[test]
    fn test_invalid_utf8_quantity_is_retried() {
        let catalog = Catalog::default_menu();
        let mut console = Console::new(Cursor::new(b"6\n\xc3\x28\n2\nc\n".to_vec()), Vec::new());

        let outcome = OrderSession::new(&catalog, "Rust Pizzeria")
            .run(&mut console)
            .unwrap();

        let SessionOutcome::CheckoutReady(cart) = outcome else {
            panic!("expected checkout");
        };
        assert_eq!(cart.len(), 2);
        let out = transcript(console);
        assert!(out.contains("Invalid input. Please enter a valid number."));
    }

    #[test]
    fn test_exit_discards_cart() {
        let catalog = Catalog::default_menu();
        let mut console = console("6\n3\nx\n");

        let outcome = OrderSession::new(&catalog, "Rust Pizzeria")
            .run(&mut console)
            .unwrap();
        assert!(matches!(
            outcome,
            SessionOutcome::Terminated(ExitReason::UserExit)
        ));
    }

    #[test]
    fn test_end_of_input_is_an_interrupt() {
        let catalog = Catalog::default_menu();

        let outcome = OrderSession::new(&catalog, "Rust Pizzeria")
            .run(&mut console(""))
            .unwrap();
        assert!(matches!(
            outcome,
            SessionOutcome::Terminated(ExitReason::InputClosed)
        ));

        // Closed in the middle of the quantity prompt
        let outcome = OrderSession::new(&catalog, "Rust Pizzeria")
            .run(&mut console("2\nlots\n"))
            .unwrap();
        assert!(matches!(
            outcome,
            SessionOutcome::Terminated(ExitReason::InputClosed)
        ));
    }
}
