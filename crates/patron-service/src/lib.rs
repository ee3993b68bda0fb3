//! # patron-service: Orchestration Layer for Patron
//!
//! The thin layer that sequences the pure rules engine around the record
//! store. No component of the core calls another: this crate reads the
//! current state, runs the engine, applies the outcome, and writes it
//! back - one purchase at a time per customer.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Patron Service Flow                               │
//! │                                                                         │
//! │  External transport (HTTP, out of scope)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 patron-service (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   enroll ──────────► new Bronze/0 account                       │   │
//! │  │   account ─────────► fetch by id                                │   │
//! │  │   record_purchase ─► lock key → get → engine → stamp → put      │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                              │                                  │
//! │       ▼                              ▼                                  │
//! │  patron-core (pure engine)      patron-store (records + locks)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`service`] - `LoyaltyService` and the purchase receipt DTO
//! - [`config`] - Environment-driven engine/tenant configuration
//! - [`error`] - `ServiceError` with machine-readable codes

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod service;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ConfigError, ServiceConfig};
pub use error::{ErrorCode, ServiceError, ServiceResult};
pub use service::{LoyaltyService, PurchaseReceipt};
