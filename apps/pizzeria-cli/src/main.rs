//! # Rust Pizzeria
//!
//! Order from the menu in a terminal, see the receipt, confirm payment.
//!
//! ## Usage
//! ```bash
//! # Built-in menu, 8% tax, $5.00 delivery
//! pizzeria
//!
//! # Custom menu and no "processing" pause
//! pizzeria --config pizzeria.toml --payment-delay-ms 0
//!
//! # Diagnostics on stderr
//! RUST_LOG=pizzeria_cli=debug pizzeria
//! ```
//!
//! ## Exit Status
//! - 0: paid, cancelled, exit command, Ctrl-C, or end of input
//! - 1: invalid configuration or a broken terminal

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use pizzeria_cli::{App, AppConfig, Console, INTERRUPT_FAREWELL};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Rust Pizzeria ordering terminal.
#[derive(Parser, Debug)]
#[command(name = "pizzeria")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML file with store settings and/or a menu.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Pause before the payment prompt, in milliseconds (0 disables it).
    #[arg(long, value_name = "MS")]
    payment_delay_ms: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    // Ctrl-C ends the session cleanly wherever it is blocked on input.
    ctrlc::set_handler(|| {
        let mut stdout = io::stdout();
        let _ = writeln!(stdout, "{INTERRUPT_FAREWELL}");
        let _ = stdout.flush();
        process::exit(0);
    })
    .context("failed to install Ctrl-C handler")?;

    let mut config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(ms) = cli.payment_delay_ms {
        config.payment_delay_ms = ms;
    }
    info!(
        store = %config.store_name,
        tax_rate_bps = config.tax_rate_bps,
        delivery_fee_cents = config.delivery_fee_cents,
        custom_menu = config.menu.is_some(),
        "Configuration loaded"
    );

    let app = App::from_config(&config).context("failed to build the menu")?;

    // Unlocked stdout: the Ctrl-C handler writes from its own thread.
    let mut console = Console::new(io::stdin().lock(), io::stdout());
    let exit = app.run(&mut console).context("terminal I/O failed")?;

    info!(?exit, "Exiting");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages (rejected inputs, etc.)
/// - `RUST_LOG=pizzeria_cli=info` - Session transitions only
/// - Default: WARN, so the menu on stdout stays uncluttered
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
