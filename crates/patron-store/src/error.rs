//! # Store Error Types
//!
//! Error types for customer record store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  StoreError (this module) ← Categorized record-store failures          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ServiceError (patron-service) ← Serialized for callers                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  External transport layer displays user-friendly message               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Customer record store errors.
///
/// A swappable backing implementation maps its native failures onto these
/// variants so the service layer never sees backend-specific errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record not found in the store.
    ///
    /// ## When This Occurs
    /// - `put` against an id that was never enrolled
    /// - A purchase referencing an unknown customer
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A record with this id already exists.
    ///
    /// ## When This Occurs
    /// - `insert` with a duplicate customer id
    #[error("{entity} already exists: {id}")]
    AlreadyExists { entity: String, id: String },

    /// Internal store error.
    ///
    /// ## When This Occurs
    /// - A backing implementation fails in a way that has no dedicated
    ///   variant (connection loss, serialization failure, ...)
    #[error("Internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates an AlreadyExists error.
    pub fn already_exists(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::AlreadyExists {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::not_found("Account", "abc-123");
        assert_eq!(err.to_string(), "Account not found: abc-123");

        let err = StoreError::already_exists("Account", "abc-123");
        assert_eq!(err.to_string(), "Account already exists: abc-123");
    }
}
