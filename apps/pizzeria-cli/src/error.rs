//! Error types for the ordering terminal.
//!
//! Only startup problems and broken stdin/stdout end up here. Anything the
//! customer types wrong is handled by re-prompting inside the session.

use pizzeria_core::{CatalogError, ValidationError};

/// Terminal application errors.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    #[error("Invalid menu: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
