//! # Customer Store Trait
//!
//! The injected capability seam between the loyalty engine's callers and
//! whatever holds customer records.
//!
//! ## Why a Trait?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Abstraction                                    │
//! │                                                                         │
//! │  patron-service ──► Arc<dyn CustomerStore> ──┬──► MemoryStore          │
//! │                                              │    (this crate)          │
//! │                                              │                           │
//! │                                              └──► SQL/KV-backed store   │
//! │                                                   (external, future)     │
//! │                                                                         │
//! │  The service never knows which implementation it holds, so the          │
//! │  store's concurrency discipline (locking, transactions) is swappable    │
//! │  and independently testable.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;

use patron_core::LoyaltyAccount;

use crate::error::StoreResult;

/// Capability interface over a keyed customer record store.
///
/// ## Contract
/// - `get` returns `Ok(None)` for an unknown id (absence is not an error)
/// - `insert` creates and fails on a duplicate id
/// - `put` replaces an existing record and fails on an unknown id
/// - Implementations must be safe to share across tasks (`Send + Sync`);
///   serializing concurrent read-modify-write cycles for one customer is
///   the *caller's* job, via [`KeyedLock`](crate::lock::KeyedLock) or an
///   equivalent single-writer discipline in the backing store
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Fetches an account by customer id.
    ///
    /// ## Returns
    /// * `Ok(Some(account))` - account found
    /// * `Ok(None)` - no account with this id
    async fn get(&self, id: &str) -> StoreResult<Option<LoyaltyAccount>>;

    /// Creates a new account record.
    ///
    /// ## Errors
    /// [`StoreError::AlreadyExists`](crate::error::StoreError::AlreadyExists)
    /// if the id is taken.
    async fn insert(&self, account: &LoyaltyAccount) -> StoreResult<()>;

    /// Replaces an existing account record.
    ///
    /// ## Errors
    /// [`StoreError::NotFound`](crate::error::StoreError::NotFound) if the
    /// account was never enrolled.
    async fn put(&self, account: &LoyaltyAccount) -> StoreResult<()>;

    /// Lists accounts sorted by display name.
    ///
    /// ## Arguments
    /// * `limit` - maximum records to return
    async fn list(&self, limit: usize) -> StoreResult<Vec<LoyaltyAccount>>;

    /// Counts stored accounts (for diagnostics).
    async fn count(&self) -> StoreResult<usize>;
}
