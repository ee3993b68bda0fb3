//! # patron-store: Customer Record Store for Patron
//!
//! This crate owns access to customer loyalty records. It is the injected
//! seam between the pure rules engine and whatever actually holds records.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Patron Data Flow                                 │
//! │                                                                         │
//! │  patron-service (record_purchase)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    patron-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ CustomerStore │    │  MemoryStore  │    │  KeyedLock   │  │   │
//! │  │   │   (trait)     │◄───│ RwLock<Map>   │    │ per-customer │  │   │
//! │  │   │  get / put    │    │               │    │   mutexes    │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  LoyaltyAccount records (patron-core types)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `CustomerStore` capability trait
//! - [`memory`] - In-memory implementation
//! - [`lock`] - Per-customer read-modify-write serialization
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use patron_store::{CustomerStore, KeyedLock, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let locks = KeyedLock::new();
//!
//! let _guard = locks.acquire(&account.id).await;
//! store.insert(&account).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod lock;
pub mod memory;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use lock::KeyedLock;
pub use memory::MemoryStore;
pub use store::CustomerStore;
