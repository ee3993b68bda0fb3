//! # Domain Types
//!
//! Core domain types used throughout Patron.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ LoyaltyAccount  │   │      Tier       │   │    EarnRate     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  Bronze         │   │  bps (u32)      │       │
//! │  │  tier           │   │  Silver         │   │  12000 = 1.2×   │       │
//! │  │  points_balance │   │  Gold           │   └─────────────────┘       │
//! │  │  promoted_at    │   │  Platinum       │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Timestamps Are Data, Not Clock Reads
//! `LoyaltyAccount` carries chrono timestamps, but nothing in this crate
//! ever calls `Utc::now()`. The service layer owns the clock; the core only
//! moves timestamp values around. That keeps every function here
//! deterministic and trivially testable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::tier::Tier;

// =============================================================================
// Earn Rate
// =============================================================================

/// Per-tier earn-rate multiplier represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 10000 bps = 1.0× (base rate), 12000 bps = 1.2×, 20000 bps = 2.0×
///
/// Integer bps keep the multiply-then-floor step in pure integer math; the
/// fractional multipliers from the product sheet never touch a float on the
/// award path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EarnRate(u32);

impl EarnRate {
    /// Basis points representing a 1.0× multiplier.
    pub const BASE_BPS: u32 = 10_000;

    /// Creates an earn rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        EarnRate(bps)
    }

    /// Creates an earn rate from a plain multiplier (for convenience).
    ///
    /// ## Example
    /// ```rust
    /// use patron_core::types::EarnRate;
    ///
    /// assert_eq!(EarnRate::from_multiplier(1.2).bps(), 12000);
    /// ```
    pub fn from_multiplier(multiplier: f64) -> Self {
        EarnRate((multiplier * Self::BASE_BPS as f64).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a plain multiplier (for display only).
    #[inline]
    pub fn multiplier(&self) -> f64 {
        self.0 as f64 / Self::BASE_BPS as f64
    }

    /// The 1.0× base rate.
    #[inline]
    pub const fn base() -> Self {
        EarnRate(Self::BASE_BPS)
    }

    /// Checks whether this is the 1.0× base rate.
    #[inline]
    pub const fn is_base(&self) -> bool {
        self.0 == Self::BASE_BPS
    }
}

/// Default earn rate is the 1.0× base rate.
impl Default for EarnRate {
    fn default() -> Self {
        EarnRate::base()
    }
}

// =============================================================================
// Loyalty Account
// =============================================================================

/// The customer loyalty state: the subset of customer data the engine
/// touches.
///
/// ## Lifecycle
/// - Created by the store layer at enrollment (Bronze, zero points)
/// - Mutated only by applying engine outputs (point accrual, promotion)
/// - Never destroyed by the core - deletion is a store concern
///
/// ## Dual-Key Identity Pattern
/// - `id`: UUID v4 - immutable, used as the store key
/// - `name`: human-readable, potentially mutable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyAccount {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Tenant this account belongs to.
    pub tenant_id: String,

    /// Display name shown to the customer and on statements.
    pub name: String,

    /// Current loyalty tier.
    pub tier: Tier,

    /// Cumulative points balance. Never reset by the core; `u64` makes
    /// the non-negativity invariant unrepresentable to violate.
    pub points_balance: u64,

    /// When the account last crossed a tier threshold, if ever.
    /// Stamped by the service layer, never by the engine.
    #[ts(as = "Option<String>")]
    pub promoted_at: Option<DateTime<Utc>>,

    /// When the account was enrolled.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the account was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl LoyaltyAccount {
    /// Checks whether the account sits at the top of the ladder.
    #[inline]
    pub fn is_top_tier(&self) -> bool {
        self.tier == Tier::Platinum
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earn_rate_from_bps() {
        let rate = EarnRate::from_bps(12_000);
        assert_eq!(rate.bps(), 12_000);
        assert!((rate.multiplier() - 1.2).abs() < 0.001);
    }

    #[test]
    fn test_earn_rate_from_multiplier() {
        assert_eq!(EarnRate::from_multiplier(1.0).bps(), 10_000);
        assert_eq!(EarnRate::from_multiplier(1.2).bps(), 12_000);
        assert_eq!(EarnRate::from_multiplier(2.0).bps(), 20_000);
    }

    #[test]
    fn test_earn_rate_base() {
        assert!(EarnRate::base().is_base());
        assert!(!EarnRate::from_bps(12_000).is_base());
        assert_eq!(EarnRate::default(), EarnRate::base());
    }

    #[test]
    fn test_account_serializes_camel_case() {
        let account = LoyaltyAccount {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            tenant_id: "t-1".to_string(),
            name: "Ada".to_string(),
            tier: Tier::Silver,
            points_balance: 480,
            promoted_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&account).unwrap();
        assert!(json.contains("\"pointsBalance\":480"));
        assert!(json.contains("\"tier\":\"silver\""));
        assert!(json.contains("\"promotedAt\":null"));
    }

    #[test]
    fn test_is_top_tier() {
        let mut account = LoyaltyAccount {
            id: "id".to_string(),
            tenant_id: "t-1".to_string(),
            name: "Ada".to_string(),
            tier: Tier::Gold,
            points_balance: 0,
            promoted_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(!account.is_top_tier());

        account.tier = Tier::Platinum;
        assert!(account.is_top_tier());
    }
}
