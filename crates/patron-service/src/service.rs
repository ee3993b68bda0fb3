//! # Loyalty Service
//!
//! Sequences the two core operations around the record store, one purchase
//! at a time per customer.
//!
//! ## Purchase Orchestration
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    record_purchase(id, amount)                          │
//! │                                                                         │
//! │  validate id + amount                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  acquire per-customer lock ◄── serializes concurrent purchases          │
//! │       │                        for the SAME customer                    │
//! │       ▼                                                                 │
//! │  store.get(id) ──► engine.process_purchase ──► apply to record          │
//! │       │                 (pure, no clock)         stamp timestamps       │
//! │       ▼                                                                 │
//! │  store.put(record) ──► release lock ──► PurchaseReceipt                 │
//! │                                                                         │
//! │  The service is the ONLY clock owner: promoted_at/updated_at are        │
//! │  stamped here, never inside the engine.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use patron_core::validation::{
    validate_customer_id, validate_customer_name, validate_purchase_amount,
};
use patron_core::{LoyaltyAccount, LoyaltyEngine, Money, Tier};
use patron_store::{CustomerStore, KeyedLock};

use crate::config::{ConfigError, ServiceConfig};
use crate::error::{ServiceError, ServiceResult};

// =============================================================================
// Receipt DTO
// =============================================================================

/// What the caller gets back after a recorded purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseReceipt {
    pub customer_id: String,

    /// Points awarded for this purchase.
    pub points_awarded: u64,

    /// Cumulative balance after the award.
    pub points_balance: u64,

    /// Tier after promotion evaluation.
    pub tier: Tier,

    /// Whether this purchase triggered a promotion.
    pub tier_changed: bool,

    /// When the account last crossed a tier threshold, if ever.
    pub promoted_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Loyalty Service
// =============================================================================

/// Orchestrates enrollment and purchase processing against an injected
/// store.
///
/// ## Usage
/// ```rust,ignore
/// let store = Arc::new(MemoryStore::new());
/// let service = LoyaltyService::new(LoyaltyEngine::default(), store);
///
/// let account = service.enroll("Ada Lovelace").await?;
/// let receipt = service
///     .record_purchase(&account.id, Money::from_cents(30_000))
///     .await?;
/// ```
pub struct LoyaltyService {
    engine: LoyaltyEngine,
    store: Arc<dyn CustomerStore>,
    locks: KeyedLock,
    tenant_id: String,
}

impl LoyaltyService {
    /// Creates a service with the default tenant.
    pub fn new(engine: LoyaltyEngine, store: Arc<dyn CustomerStore>) -> Self {
        LoyaltyService {
            engine,
            store,
            locks: KeyedLock::new(),
            tenant_id: patron_core::DEFAULT_TENANT_ID.to_string(),
        }
    }

    /// Creates a service from configuration (engine tables, tenant).
    pub fn from_config(
        config: &ServiceConfig,
        store: Arc<dyn CustomerStore>,
    ) -> Result<Self, ConfigError> {
        let engine = config.engine()?;
        Ok(LoyaltyService {
            engine,
            store,
            locks: KeyedLock::new(),
            tenant_id: config.tenant_id.clone(),
        })
    }

    /// The engine this service runs.
    pub fn engine(&self) -> &LoyaltyEngine {
        &self.engine
    }

    /// Enrolls a new customer at Bronze with zero points.
    pub async fn enroll(&self, name: &str) -> ServiceResult<LoyaltyAccount> {
        debug!(name = %name, "enroll");

        let name = validate_customer_name(name)?;
        let now = Utc::now();

        let account = LoyaltyAccount {
            id: Uuid::new_v4().to_string(),
            tenant_id: self.tenant_id.clone(),
            name,
            tier: Tier::default(),
            points_balance: 0,
            promoted_at: None,
            created_at: now,
            updated_at: now,
        };

        self.store.insert(&account).await?;

        info!(customer_id = %account.id, name = %account.name, "Customer enrolled");
        Ok(account)
    }

    /// Fetches a customer's loyalty account.
    pub async fn account(&self, customer_id: &str) -> ServiceResult<LoyaltyAccount> {
        validate_customer_id(customer_id)?;

        self.store
            .get(customer_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Account", customer_id))
    }

    /// Lists enrolled accounts sorted by name.
    pub async fn accounts(&self, limit: usize) -> ServiceResult<Vec<LoyaltyAccount>> {
        Ok(self.store.list(limit).await?)
    }

    /// Records one purchase: award points, accumulate, evaluate promotion,
    /// and persist the updated record.
    ///
    /// The whole read-modify-write cycle runs under the customer's key
    /// lock, so concurrent purchases for one customer serialize instead of
    /// losing updates. Purchases for different customers do not contend.
    pub async fn record_purchase(
        &self,
        customer_id: &str,
        amount: Money,
    ) -> ServiceResult<PurchaseReceipt> {
        debug!(customer_id = %customer_id, amount = %amount, "record_purchase");

        validate_customer_id(customer_id)?;
        validate_purchase_amount(amount)?;

        let _guard = self.locks.acquire(customer_id).await;

        let mut account = self
            .store
            .get(customer_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Account", customer_id))?;

        let outcome = self
            .engine
            .process_purchase(account.tier, account.points_balance, amount)?;

        let now = Utc::now();
        account.points_balance = outcome.new_balance;
        account.updated_at = now;

        if outcome.tier_changed {
            info!(
                customer_id = %customer_id,
                from = %account.tier,
                to = %outcome.tier,
                balance = outcome.new_balance,
                "Tier promoted"
            );
            account.tier = outcome.tier;
            account.promoted_at = Some(now);
        }

        self.store.put(&account).await?;

        info!(
            customer_id = %customer_id,
            amount = %amount,
            awarded = outcome.points_awarded,
            balance = outcome.new_balance,
            tier = %account.tier,
            "Purchase recorded"
        );

        Ok(PurchaseReceipt {
            customer_id: account.id,
            points_awarded: outcome.points_awarded,
            points_balance: outcome.new_balance,
            tier: account.tier,
            tier_changed: outcome.tier_changed,
            promoted_at: account.promoted_at,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use patron_store::MemoryStore;

    fn test_service() -> Arc<LoyaltyService> {
        Arc::new(LoyaltyService::new(
            LoyaltyEngine::default(),
            Arc::new(MemoryStore::new()),
        ))
    }

    /// Seeds an account in an arbitrary (tier, points) state, which normal
    /// enrollment cannot reach directly.
    async fn seeded_service(tier: Tier, points: u64) -> (Arc<LoyaltyService>, String) {
        let store = Arc::new(MemoryStore::new());
        let now = Utc::now();
        let account = LoyaltyAccount {
            id: Uuid::new_v4().to_string(),
            tenant_id: patron_core::DEFAULT_TENANT_ID.to_string(),
            name: "Seeded".to_string(),
            tier,
            points_balance: points,
            promoted_at: None,
            created_at: now,
            updated_at: now,
        };
        store.insert(&account).await.unwrap();

        let service = Arc::new(LoyaltyService::new(LoyaltyEngine::default(), store));
        (service, account.id)
    }

    #[tokio::test]
    async fn test_enroll_starts_at_bronze_zero() {
        let service = test_service();
        let account = service.enroll("Ada Lovelace").await.unwrap();

        assert_eq!(account.tier, Tier::Bronze);
        assert_eq!(account.points_balance, 0);
        assert!(account.promoted_at.is_none());

        let fetched = service.account(&account.id).await.unwrap();
        assert_eq!(fetched, account);
    }

    #[tokio::test]
    async fn test_enroll_rejects_empty_name() {
        let service = test_service();
        let err = service.enroll("   ").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_purchase_without_promotion() {
        // Silver at 450 points spends $300: +30 points, 480 < 500, stays Silver
        let (service, id) = seeded_service(Tier::Silver, 450).await;

        let receipt = service
            .record_purchase(&id, Money::from_cents(30_000))
            .await
            .unwrap();

        assert_eq!(receipt.points_awarded, 30);
        assert_eq!(receipt.points_balance, 480);
        assert_eq!(receipt.tier, Tier::Silver);
        assert!(!receipt.tier_changed);
        assert!(receipt.promoted_at.is_none());
    }

    #[tokio::test]
    async fn test_gold_purchase_reaches_platinum() {
        // Gold at 990 spends $100: +12 points at 1.2×, crosses 1000
        let (service, id) = seeded_service(Tier::Gold, 990).await;

        let receipt = service
            .record_purchase(&id, Money::from_cents(10_000))
            .await
            .unwrap();

        assert_eq!(receipt.points_awarded, 12);
        assert_eq!(receipt.points_balance, 1_002);
        assert_eq!(receipt.tier, Tier::Platinum);
        assert!(receipt.tier_changed);
    }

    #[tokio::test]
    async fn test_purchase_promotes_and_stamps_timestamp() {
        let service = test_service();
        let account = service.enroll("Grace").await.unwrap();

        // $5,000 at Bronze: 500 points, crosses the Silver threshold
        let receipt = service
            .record_purchase(&account.id, Money::from_cents(500_000))
            .await
            .unwrap();

        assert_eq!(receipt.points_awarded, 500);
        assert_eq!(receipt.tier, Tier::Silver);
        assert!(receipt.tier_changed);
        assert!(receipt.promoted_at.is_some());

        let stored = service.account(&account.id).await.unwrap();
        assert_eq!(stored.tier, Tier::Silver);
        assert_eq!(stored.promoted_at, receipt.promoted_at);
    }

    #[tokio::test]
    async fn test_silver_crossing_silver_threshold_is_noop() {
        let service = test_service();
        let account = service.enroll("Ada").await.unwrap();

        // First purchase: $5,000 → 500 points, Bronze → Silver
        service
            .record_purchase(&account.id, Money::from_cents(500_000))
            .await
            .unwrap();

        // Second purchase: $300 → balance 530, still within Silver
        let receipt = service
            .record_purchase(&account.id, Money::from_cents(30_000))
            .await
            .unwrap();

        assert_eq!(receipt.points_balance, 530);
        assert_eq!(receipt.tier, Tier::Silver);
        assert!(!receipt.tier_changed);
    }

    #[tokio::test]
    async fn test_promotion_timestamp_survives_later_purchases() {
        let service = test_service();
        let account = service.enroll("Ada").await.unwrap();

        let promoted = service
            .record_purchase(&account.id, Money::from_cents(500_000))
            .await
            .unwrap();
        let stamp = promoted.promoted_at.unwrap();

        let later = service
            .record_purchase(&account.id, Money::from_cents(10_000))
            .await
            .unwrap();
        assert!(!later.tier_changed);
        assert_eq!(later.promoted_at, Some(stamp));
    }

    #[tokio::test]
    async fn test_unknown_customer_not_found() {
        let service = test_service();
        let missing = Uuid::new_v4().to_string();

        let err = service
            .record_purchase(&missing, Money::from_cents(1_000))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_invalid_inputs_rejected_before_store_access() {
        let service = test_service();
        let account = service.enroll("Ada").await.unwrap();

        let err = service
            .record_purchase("not-a-uuid", Money::from_cents(1_000))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = service
            .record_purchase(&account.id, Money::zero())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = service
            .record_purchase(&account.id, Money::from_cents(-500))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_concurrent_purchases_lose_no_updates() {
        let service = test_service();
        let account = service.enroll("Ada").await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..10 {
            let service = Arc::clone(&service);
            let id = account.id.clone();
            handles.push(tokio::spawn(async move {
                // $100 at Bronze: 10 points each
                service
                    .record_purchase(&id, Money::from_cents(10_000))
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let stored = service.account(&account.id).await.unwrap();
        assert_eq!(stored.points_balance, 100);
    }

    #[tokio::test]
    async fn test_from_config_applies_tenant_and_tables() {
        let config = ServiceConfig {
            tenant_id: "tenant-42".to_string(),
            silver_min_points: 50,
            ..ServiceConfig::default()
        };
        let service =
            LoyaltyService::from_config(&config, Arc::new(MemoryStore::new())).unwrap();

        let account = service.enroll("Ada").await.unwrap();
        assert_eq!(account.tenant_id, "tenant-42");

        // $600 at Bronze: 60 points, crosses the lowered Silver threshold
        let receipt = service
            .record_purchase(&account.id, Money::from_cents(60_000))
            .await
            .unwrap();
        assert_eq!(receipt.tier, Tier::Silver);
        assert!(receipt.tier_changed);
    }
}
