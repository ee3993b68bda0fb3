//! # Validation Module
//!
//! Boundary validation utilities for Patron.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Transport (external HTTP layer)                              │
//! │  ├── Request shape, customer existence                                 │
//! │  └── Immediate caller feedback                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Service (patron-service)                                     │
//! │  └── THIS MODULE: field validation before the engine runs              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Engine (patron-core)                                         │
//! │  ├── InvalidAmount on the award path                                   │
//! │  └── Tier/points invariants carried by the types                       │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use patron_core::money::Money;
//! use patron_core::validation::{validate_customer_id, validate_purchase_amount};
//!
//! validate_purchase_amount(Money::from_cents(30_000)).unwrap();
//! validate_customer_id("550e8400-e29b-41d4-a716-446655440000").unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::tier::Tier;
use crate::{MAX_NAME_LENGTH, MAX_PURCHASE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Amount Validators
// =============================================================================

/// Validates a purchase amount.
///
/// ## Rules
/// - Must be strictly positive (zero-value purchases earn nothing and are
///   rejected rather than silently accepted)
/// - Must not exceed MAX_PURCHASE_CENTS
pub fn validate_purchase_amount(amount: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "purchase amount".to_string(),
        });
    }

    if amount.cents() > MAX_PURCHASE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "purchase amount".to_string(),
            min: 1,
            max: MAX_PURCHASE_CENTS,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a tier name from external input.
///
/// ## Rules
/// - Must parse (case-insensitively) into the closed tier set
///
/// ## Returns
/// The parsed [`Tier`].
pub fn validate_tier_name(value: &str) -> ValidationResult<Tier> {
    value
        .parse::<Tier>()
        .map_err(|_| ValidationError::NotAllowed {
            field: "tier".to_string(),
            allowed: Tier::ALL.iter().map(|t| t.to_string()).collect(),
        })
}

/// Validates a customer display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most MAX_NAME_LENGTH characters
///
/// ## Returns
/// The trimmed name.
pub fn validate_customer_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a customer id.
///
/// ## Rules
/// - Must be a valid UUID format
/// - 36 characters with hyphens: xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx
pub fn validate_customer_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "customer id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "customer id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_purchase_amount() {
        assert!(validate_purchase_amount(Money::from_cents(1)).is_ok());
        assert!(validate_purchase_amount(Money::from_cents(30_000)).is_ok());
        assert!(validate_purchase_amount(Money::from_cents(MAX_PURCHASE_CENTS)).is_ok());

        assert!(validate_purchase_amount(Money::zero()).is_err());
        assert!(validate_purchase_amount(Money::from_cents(-100)).is_err());
        assert!(validate_purchase_amount(Money::from_cents(MAX_PURCHASE_CENTS + 1)).is_err());
    }

    #[test]
    fn test_validate_tier_name() {
        assert_eq!(validate_tier_name("gold").unwrap(), Tier::Gold);
        assert_eq!(validate_tier_name("BRONZE").unwrap(), Tier::Bronze);

        let err = validate_tier_name("diamond").unwrap_err();
        assert!(matches!(err, ValidationError::NotAllowed { .. }));
    }

    #[test]
    fn test_validate_customer_name() {
        assert_eq!(validate_customer_name("  Ada Lovelace ").unwrap(), "Ada Lovelace");

        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name("   ").is_err());
        assert!(validate_customer_name(&"A".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_validate_customer_id() {
        assert!(validate_customer_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_customer_id("").is_err());
        assert!(validate_customer_id("not-a-uuid").is_err());
        assert!(validate_customer_id("123").is_err());
    }
}
