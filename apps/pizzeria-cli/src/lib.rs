//! # pizzeria-cli
//!
//! The interactive ordering terminal for Rust Pizzeria.
//!
//! ## Modules
//! - [`config`] - Layered settings (defaults, TOML file, `PIZZERIA_*` env)
//! - [`console`] - Prompt/answer I/O over any reader and writer
//! - [`session`] - The browsing state machine that fills the cart
//! - [`checkout`] - Receipt and payment confirmation
//! - [`app`] - Session → checkout orchestration and closing messages
//! - [`error`] - Startup and terminal I/O errors
//!
//! All pricing and menu logic lives in `pizzeria-core`; this crate only
//! talks to the terminal.

pub mod app;
pub mod checkout;
pub mod config;
pub mod console;
pub mod error;
pub mod session;

pub use app::{App, AppExit, EXIT_FAREWELL, INTERRUPT_FAREWELL};
pub use config::AppConfig;
pub use console::Console;
pub use error::{CliError, CliResult};
