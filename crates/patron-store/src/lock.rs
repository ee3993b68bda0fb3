//! # Keyed Lock
//!
//! Per-customer async mutexes serializing read-modify-write cycles.
//!
//! ## The Lost-Update Hazard
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │         Two Concurrent Purchases, Same Customer, No Lock                │
//! │                                                                         │
//! │  Task A: get(id) → 450 points                                          │
//! │  Task B: get(id) → 450 points          ← reads the same snapshot       │
//! │  Task A: put(id, 450 + 30 = 480)                                       │
//! │  Task B: put(id, 450 + 50 = 500)       ← A's 30 points are LOST        │
//! │                                                                         │
//! │         With KeyedLock                                                  │
//! │                                                                         │
//! │  Task A: acquire(id) ── get → 450 ── put 480 ── release                │
//! │  Task B:                acquire(id) blocks ──── get → 480 ── put 530   │
//! │                                                                         │
//! │  The engine's purity makes this sufficient: given the serialized        │
//! │  reads, outputs are deterministic and order-independent except for      │
//! │  the accumulation itself.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Purchases for *different* customers never contend: each key gets its
//! own mutex.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

/// A registry of per-key async mutexes.
///
/// ## Thread Safety
/// The registry itself is guarded by a mutex that is held only long enough
/// to look up (or create) a key's lock; the returned guard is then awaited
/// outside the registry lock, so slow purchases for one customer never
/// block lookups for another.
///
/// Entries are never evicted; the map grows with the number of distinct
/// customers seen by this process.
#[derive(Debug, Default)]
pub struct KeyedLock {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl KeyedLock {
    /// Creates an empty registry.
    pub fn new() -> Self {
        KeyedLock {
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Acquires the lock for `key`, waiting if another task holds it.
    ///
    /// The guard is owned, so it can be held across `await` points for the
    /// whole read-modify-write cycle.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let _guard = locks.acquire(&customer_id).await;
    /// let account = store.get(&customer_id).await?;
    /// // ... compute via the engine, then:
    /// store.put(&updated).await?;
    /// // guard drops here, releasing the key
    /// ```
    pub async fn acquire(&self, key: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };

        lock.lock_owned().await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
