//! # Service Error Type
//!
//! Unified error type for service operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Patron                                 │
//! │                                                                         │
//! │  Transport Layer              Service                                   │
//! │  ───────────────              ───────                                   │
//! │                                                                         │
//! │  record_purchase(id, amount)                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Service Method                                                  │  │
//! │  │  Result<T, ServiceError>                                         │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Store Error? ──── StoreError::NotFound ───────────┐            │  │
//! │  │         │                                          ▼            │  │
//! │  │  Core Error? ───── CoreError::InvalidAmount ── ServiceError ───►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The transport serializes { code, message } to its callers and maps     │
//! │  codes onto its own status values.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use patron_core::{CoreError, ValidationError};
use patron_store::StoreError;

/// Service error returned from all service operations.
///
/// ## Serialization
/// This is what the transport layer receives when an operation fails:
/// ```json
/// {
///   "code": "INVALID_AMOUNT",
///   "message": "Invalid purchase amount: -100 cents (must be positive)"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for service responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Account not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Purchase amount rejected by the engine (422)
    InvalidAmount,

    /// Tier value outside the closed set (422)
    InvalidTier,

    /// Record store operation failed (500)
    StoreError,

    /// Internal error, including engine misconfiguration (500)
    Internal,
}

impl ServiceError {
    /// Creates a new service error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ServiceError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ServiceError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ServiceError::new(ErrorCode::Internal, message)
    }
}

/// Converts rules-engine errors to service errors.
impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidAmount { .. } => {
                ServiceError::new(ErrorCode::InvalidAmount, err.to_string())
            }
            CoreError::InvalidTier(_) => ServiceError::new(ErrorCode::InvalidTier, err.to_string()),
            CoreError::InvalidEarnRate { .. } | CoreError::InvalidPolicy { .. } => {
                // Configuration errors are operator mistakes, not caller
                // mistakes: log the detail, return a generic message
                tracing::error!("Engine configuration error: {}", err);
                ServiceError::internal("Engine configuration error")
            }
            CoreError::Validation(e) => ServiceError::validation(e.to_string()),
        }
    }
}

/// Converts validation errors to service errors.
impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::validation(err.to_string())
    }
}

/// Converts store errors to service errors.
impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => ServiceError::not_found(&entity, &id),
            StoreError::AlreadyExists { entity, id } => ServiceError::validation(format!(
                "{} already exists: {}",
                entity, id
            )),
            StoreError::Internal(e) => {
                tracing::error!("Store operation failed: {}", e);
                ServiceError::new(ErrorCode::StoreError, "Store operation failed")
            }
        }
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ServiceError {}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// Unit Tests
// =============================================================================
