//! # patron-core: Pure Loyalty Rules Engine for Patron
//!
//! This crate is the **heart** of Patron. It contains the loyalty rules
//! engine as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Patron Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              External HTTP / Transport Layer                    │   │
//! │  │        (out of scope - consumes patron-service)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 patron-service (Orchestration)                  │   │
//! │  │     enroll, record_purchase, timestamps, per-key locking        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ patron-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   tier    │  │   money   │  │  points   │  │ promotion │  │   │
//! │  │   │   Tier    │  │   Money   │  │ EarnRate  │  │ Policy    │  │   │
//! │  │   │   ladder  │  │  (cents)  │  │  table    │  │ evaluate  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                        ┌───────────┐                            │   │
//! │  │                        │  engine   │  process_purchase          │   │
//! │  │                        └───────────┘                            │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORE • NO CLOCK • PURE FUNCTIONS                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  patron-store (Record Store)                    │   │
//! │  │        CustomerStore trait, MemoryStore, KeyedLock              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`tier`] - The closed, ordered tier set
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Earn rates and the customer loyalty state record
//! - [`points`] - Multiplier table and award math
//! - [`promotion`] - Promotion threshold table and evaluator
//! - [`engine`] - The assembled rules engine
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Store, network, clock access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use patron_core::engine::LoyaltyEngine;
//! use patron_core::money::Money;
//! use patron_core::tier::Tier;
//!
//! let engine = LoyaltyEngine::default();
//!
//! // Gold customer spends $100.00: 10 base points × 1.2 = 12 points
//! let outcome = engine
//!     .process_purchase(Tier::Gold, 0, Money::from_cents(10_000))
//!     .unwrap();
//!
//! assert_eq!(outcome.points_awarded, 12);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod money;
pub mod points;
pub mod promotion;
pub mod tier;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use patron_core::Tier` instead of
// `use patron_core::tier::Tier`

pub use engine::{LoyaltyEngine, PurchaseOutcome};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use points::MultiplierTable;
pub use promotion::{PromotionPolicy, PromotionResult, TierThreshold};
pub use tier::Tier;
pub use types::{EarnRate, LoyaltyAccount};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default tenant ID for v0.1 (single-tenant runtime with multi-tenant schema)
///
/// ## Why a constant?
/// v0.1 serves a single program, but account records carry tenant_id so a
/// multi-tenant rollout needs no schema change. This constant is used
/// throughout the codebase until dynamic tenant resolution lands.
pub const DEFAULT_TENANT_ID: &str = "00000000-0000-0000-0000-000000000001";

/// Cents that earn one base point in the reference configuration
/// (1 point per 10 currency units).
pub const DEFAULT_POINT_VALUE_CENTS: i64 = 1_000;

/// Maximum accepted purchase amount, in cents ($1,000,000.00).
///
/// ## Business Reason
/// Prevents fat-finger amounts (e.g., cents pasted as dollars) from
/// minting enormous point balances. Can be made configurable per-tenant
/// in future versions.
pub const MAX_PURCHASE_CENTS: i64 = 100_000_000;

/// Maximum earn rate in basis points (10.0×).
///
/// ## Business Reason
/// A promotion campaign may boost earn rates, but an order-of-magnitude
/// ceiling catches configuration mistakes before they reach customers.
pub const MAX_EARN_RATE_BPS: u32 = 100_000;

/// Maximum customer display name length.
pub const MAX_NAME_LENGTH: usize = 100;
