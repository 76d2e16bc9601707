//! # Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (applied by `main`)
//! 2. Environment variables (`PIZZERIA_*`, e.g. `PIZZERIA_TAX_RATE_BPS=825`)
//! 3. Config file (`--config pizzeria.toml`)
//! 4. Defaults (this file)
//!
//! ## Example File
//! ```toml
//! store_name = "Luigi's"
//! tax_rate_bps = 825
//! delivery_fee_cents = 399
//!
//! [[menu]]
//! name = "Pizzas"
//!
//! [[menu.items]]
//! code = "1"
//! name = "Margherita"
//! price_cents = 1250
//! ```
//!
//! The menu is replaced as a whole: a file that defines `menu` drops the
//! built-in one entirely.

use std::path::Path;
use std::time::Duration;

use config::{Config, Environment, File, FileFormat};
use pizzeria_core::catalog::default_menu_defs;
use pizzeria_core::validation::{validate_amount_cents, validate_tax_rate_bps};
use pizzeria_core::{
    Catalog, CategoryDef, Money, PricingPolicy, TaxRate, ValidationError,
    DEFAULT_DELIVERY_FEE_CENTS, DEFAULT_STORE_NAME, DEFAULT_TAX_RATE_BPS,
};
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

/// Cosmetic pause between the receipt and the payment prompt.
pub const DEFAULT_PAYMENT_DELAY_MS: u64 = 2000;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "PIZZERIA";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Shown in the menu banner and the payment success message.
    pub store_name: String,

    /// Sales tax in basis points (800 = 8%).
    pub tax_rate_bps: u32,

    /// Flat delivery fee in cents.
    pub delivery_fee_cents: i64,

    /// "Processing payment..." pause; 0 disables it.
    pub payment_delay_ms: u64,

    /// Menu categories; `None` means the built-in menu.
    #[serde(default)]
    pub menu: Option<Vec<CategoryDef>>,
}

impl Default for AppConfig {
    /// Built-in defaults: Rust Pizzeria, 8% tax, $5.00 delivery, 2s pause.
    fn default() -> Self {
        AppConfig {
            store_name: DEFAULT_STORE_NAME.to_string(),
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
            delivery_fee_cents: DEFAULT_DELIVERY_FEE_CENTS,
            payment_delay_ms: DEFAULT_PAYMENT_DELAY_MS,
            menu: None,
        }
    }
}

impl AppConfig {
    /// Loads defaults, then the optional file, then `PIZZERIA_*` variables.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Same as [`AppConfig::load`] with an explicit environment source.
    pub fn load_with_env(path: Option<&Path>, env: Environment) -> CliResult<Self> {
        let defaults = AppConfig::default();
        let mut builder = Config::builder()
            .set_default("store_name", defaults.store_name)?
            .set_default("tax_rate_bps", i64::from(defaults.tax_rate_bps))?
            .set_default("delivery_fee_cents", defaults.delivery_fee_cents)?
            .set_default("payment_delay_ms", defaults.payment_delay_ms as i64)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        let config: AppConfig = builder
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialization alone cannot.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_tax_rate_bps(self.tax_rate_bps)?;

        validate_amount_cents("delivery_fee_cents", self.delivery_fee_cents)?;

        if self.store_name.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "store_name".to_string(),
            });
        }

        Ok(())
    }

    /// Builds the catalog from the configured or built-in menu.
    pub fn catalog(&self) -> CliResult<Catalog> {
        let defs = self.menu.clone().unwrap_or_else(default_menu_defs);
        Ok(Catalog::new(defs)?)
    }

    pub fn pricing(&self) -> PricingPolicy {
        PricingPolicy::new(
            TaxRate::from_bps(self.tax_rate_bps),
            Money::from_cents(self.delivery_fee_cents),
        )
    }

    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }
}
