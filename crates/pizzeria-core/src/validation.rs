//! # Validation Module
//!
//! Input validation for menu definitions and for what the customer types.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Startup: menu definitions (built-in or config file)                    │
//! │  ├── validate_code, validate_item_name, validate_price_cents            │
//! │  └── failure → CatalogError → process refuses to start                  │
//! │                                                                         │
//! │  Session: customer input                                                │
//! │  ├── parse_quantity   (quantity prompt)                                 │
//! │  ├── parse_confirmation (payment prompt)                                │
//! │  └── failure → message printed → same prompt again                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizzeria_core::validation::{parse_quantity, parse_confirmation};
//!
//! assert_eq!(parse_quantity(" 2 ").unwrap(), 2);
//! assert!(parse_quantity("-3").is_err());
//! assert_eq!(parse_confirmation("y").unwrap(), true);
//! ```

use crate::error::ValidationError;
use crate::{MAX_ITEM_QUANTITY, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted item code.
pub const MAX_CODE_LEN: usize = 16;

/// Longest accepted item or category name.
pub const MAX_NAME_LEN: usize = 60;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item code.
///
/// ## Rules
/// - Must not be empty
/// - At most [`MAX_CODE_LEN`] characters
/// - Only letters, digits, hyphens and underscores (no spaces: the main
///   prompt trims input, so a code with spaces could never be typed)
///
/// ```rust
/// use pizzeria_core::validation::validate_code;
///
/// assert!(validate_code("1").is_ok());
/// assert!(validate_code("PZ-1").is_ok());
/// assert!(validate_code("").is_err());
/// assert!(validate_code("two words").is_err());
/// ```
pub fn validate_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.chars().count() > MAX_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: MAX_CODE_LEN,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "code".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates an item or category name.
pub fn validate_item_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed [`MAX_ITEM_QUANTITY`]
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "Quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "Quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in cents. Zero is allowed (free items).
///
/// ```rust
/// use pizzeria_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1250).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    validate_amount_cents("price", cents)
}

/// Validates any configured amount in cents against `0..=MAX_PRICE_CENTS`.
pub fn validate_amount_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points (0% to 100%).
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate_bps".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Prompt Parsers
// =============================================================================

/// Parses the answer to "How many ... would you like?".
///
/// ## User Workflow
/// ```text
/// "-3"  → MustBePositive  → "Quantity must be a positive number."  → ask again
/// "abc" → NotANumber      → "Invalid input. Please enter a valid number." → ask again
/// "2"   → Ok(2)           → two units go into the cart
/// ```
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    let input = input.trim();
    let qty: i64 = input.parse().map_err(|_| ValidationError::NotANumber {
        input: input.to_string(),
    })?;

    validate_quantity(qty)?;
    Ok(qty)
}

/// Parses the answer to "Confirm payment ...? (Y/N)".
///
/// Returns `true` for Y, `false` for N (either case, whitespace ignored).
pub fn parse_confirmation(input: &str) -> ValidationResult<bool> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("y") {
        Ok(true)
    } else if input.eq_ignore_ascii_case("n") {
        Ok(false)
    } else {
        Err(ValidationError::NotAllowed {
            field: "confirmation".to_string(),
            allowed: vec!["Y".to_string(), "N".to_string()],
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
