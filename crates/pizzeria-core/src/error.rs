//! # Error Types
//!
//! Domain-specific error types for pizzeria-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pizzeria-core errors (this file)                                       │
//! │  ├── CoreError        - Cart and order rule violations                  │
//! │  ├── CatalogError     - Menu definitions that cannot form a catalog     │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  pizzeria-cli errors (app)                                              │
//! │  └── CliError         - Config, catalog and terminal I/O failures       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError / CatalogError → CliError → stderr   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bad keystrokes at a prompt never become a `CliError`: the session prints
//! the `Display` text of the `ValidationError` and asks again.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart and order rule violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A single add-to-cart action asked for more than the cap.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Catalog Error
// =============================================================================

/// Errors raised while building a [`Catalog`](crate::Catalog) from definitions.
///
/// ## When This Occurs
/// Only at startup, when the built-in menu or a menu from a config file is
/// turned into a catalog. A running session never sees these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The same code is used twice (possibly in different categories).
    #[error("Menu code '{code}' is used by both '{first}' and '{second}'")]
    DuplicateCode {
        code: String,
        first: String,
        second: String,
    },

    /// A code collides with a main-prompt command letter.
    #[error("Menu code '{0}' is reserved for a command")]
    ReservedCode(String),

    /// The same category name appears twice.
    #[error("Category '{0}' is defined more than once")]
    DuplicateCategory(String),

    /// There is nothing to order.
    #[error("Menu must contain at least one item")]
    Empty,

    /// A field of an item or category failed validation.
    #[error("Invalid menu entry: {0}")]
    Invalid(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The `Display` text of the prompt-facing variants is exactly what the user
/// sees before being asked again.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be a positive number.")]
    MustBePositive { field: String },

    /// Text that should have been a whole number.
    #[error("Invalid input. Please enter a valid number.")]
    NotANumber { input: String },

    /// Invalid format (e.g. a code with spaces).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("Invalid input. Please enter {}.", allowed.join(" or "))]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
