//! # Error Types
//!
//! Domain-specific error types for patron-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  patron-core errors (this file)                                        │
//! │  ├── CoreError        - Rules engine and configuration errors          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  patron-store errors (separate crate)                                  │
//! │  └── StoreError       - Record store failures                          │
//! │                                                                         │
//! │  patron-service errors (separate crate)                                │
//! │  └── ServiceError     - What callers see (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ServiceError → Caller             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (amount, tier name, etc.)
//! 3. Errors are enum variants, never String
//! 4. The core never recovers or retries - it performs no I/O

use thiserror::Error;

use crate::tier::Tier;

// =============================================================================
// Core Error
// =============================================================================

/// Rules engine errors.
///
/// These errors represent boundary validation failures or malformed engine
/// configuration. They should be caught and translated to caller-facing
/// messages by the service layer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Purchase amount is zero or negative.
    ///
    /// ## When This Occurs
    /// - A purchase event carries a non-positive amount
    /// - Refund flows are routed at the wrong layer (the engine only
    ///   accrues, it never reverses)
    #[error("Invalid purchase amount: {cents} cents (must be positive)")]
    InvalidAmount { cents: i64 },

    /// Tier name is outside the closed tier set.
    ///
    /// ## When This Occurs
    /// - Parsing a tier string from an external request or stored record
    ///
    /// Once a value is a [`Tier`], it is valid by construction - there is
    /// no fallback multiplier and no "unknown tier" path inside the engine.
    #[error("Invalid tier: '{0}' (expected one of: bronze, silver, gold, platinum)")]
    InvalidTier(String),

    /// Earn rate is outside the accepted range.
    ///
    /// ## When This Occurs
    /// - Building a [`MultiplierTable`](crate::points::MultiplierTable)
    ///   with a zero rate or one above the configured ceiling
    #[error("Invalid earn rate for {tier}: {bps} bps")]
    InvalidEarnRate { tier: Tier, bps: u32 },

    /// Promotion threshold table is malformed.
    ///
    /// ## When This Occurs
    /// - Thresholds not strictly increasing with tier privilege
    /// - Duplicate target tier
    /// - A threshold targeting the lowest tier (nothing can promote into it)
    #[error("Invalid promotion policy: {reason}")]
    InvalidPolicy { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before the rules engine runs.
#[derive(Debug, Error)]
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
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidAmount { cents: -500 };
        assert_eq!(
            err.to_string(),
            "Invalid purchase amount: -500 cents (must be positive)"
        );

        let err = CoreError::InvalidTier("diamond".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid tier: 'diamond' (expected one of: bronze, silver, gold, platinum)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "customer id".to_string(),
        };
        assert_eq!(err.to_string(), "customer id is required");

        let err = ValidationError::MustBePositive {
            field: "amount".to_string(),
        };
        assert_eq!(err.to_string(), "amount must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "customer id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
