//! # In-Memory Store
//!
//! The reference `CustomerStore` implementation: a shared, keyed map.
//!
//! ## From Flat List to Keyed Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    MemoryStore Layout                                   │
//! │                                                                         │
//! │   RwLock<HashMap<customer_id, LoyaltyAccount>>                          │
//! │                                                                         │
//! │   get(id)    ──► read lock  ──► clone the record out                   │
//! │   insert(a)  ──► write lock ──► reject duplicate id                    │
//! │   put(a)     ──► write lock ──► reject unknown id                      │
//! │                                                                         │
//! │   The map lock guards the MAP, not a customer's read-modify-write      │
//! │   cycle - that is KeyedLock's job (see lock.rs). Records are cloned    │
//! │   out so no caller ever holds a reference into the map.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use patron_core::LoyaltyAccount;

use crate::error::{StoreError, StoreResult};
use crate::store::CustomerStore;

/// In-memory customer record store.
///
/// ## Usage
/// ```rust,ignore
/// let store = MemoryStore::new();
///
/// store.insert(&account).await?;
/// let found = store.get(&account.id).await?;
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    accounts: RwLock<HashMap<String, LoyaltyAccount>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryStore {
            accounts: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl CustomerStore for MemoryStore {
    async fn get(&self, id: &str) -> StoreResult<Option<LoyaltyAccount>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(id).cloned())
    }

    async fn insert(&self, account: &LoyaltyAccount) -> StoreResult<()> {
        debug!(id = %account.id, name = %account.name, "Inserting account");

        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.id) {
            return Err(StoreError::already_exists("Account", &account.id));
        }

        accounts.insert(account.id.clone(), account.clone());
        Ok(())
    }

    async fn put(&self, account: &LoyaltyAccount) -> StoreResult<()> {
        debug!(id = %account.id, tier = %account.tier, points = account.points_balance, "Updating account");

        let mut accounts = self.accounts.write().await;
        match accounts.get_mut(&account.id) {
            Some(existing) => {
                *existing = account.clone();
                Ok(())
            }
            None => Err(StoreError::not_found("Account", &account.id)),
        }
    }

    async fn list(&self, limit: usize) -> StoreResult<Vec<LoyaltyAccount>> {
        let accounts = self.accounts.read().await;

        let mut records: Vec<LoyaltyAccount> = accounts.values().cloned().collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        records.truncate(limit);

        Ok(records)
    }

    async fn count(&self) -> StoreResult<usize> {
        let accounts = self.accounts.read().await;
        Ok(accounts.len())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
