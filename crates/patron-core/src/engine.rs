//! # Loyalty Engine
//!
//! The two core operations - points calculation and promotion evaluation -
//! plus the purchase-processing contract that sequences them.
//!
//! ## Purchase Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Processing One Purchase                              │
//! │                                                                         │
//! │  (tier, points_before, amount)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  calculate_points(tier, amount) ──► points_awarded                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  new_balance = points_before + points_awarded                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  evaluate_promotion(tier, new_balance) ──► (new_tier, tier_changed)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PurchaseOutcome { points_awarded, new_balance, tier, tier_changed }    │
//! │                                                                         │
//! │  NO I/O, NO CLOCK, NO SHARED STATE. The caller owns the record and     │
//! │  the serialization of concurrent purchases for one customer.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::points::MultiplierTable;
use crate::promotion::{PromotionPolicy, PromotionResult};
use crate::tier::Tier;
use crate::DEFAULT_POINT_VALUE_CENTS;

// =============================================================================
// Purchase Outcome
// =============================================================================

/// Everything the caller needs to apply one purchase to a customer record.
///
/// `new_balance` is `points_before + points_awarded`; it is computed before
/// the promotion evaluation, so `tier` already reflects the new balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOutcome {
    /// Points awarded for this purchase.
    pub points_awarded: u64,

    /// Cumulative points after the award.
    pub new_balance: u64,

    /// Tier after promotion evaluation (unchanged if no rule fired).
    pub tier: Tier,

    /// Whether the tier changed; the caller uses this to stamp a
    /// promotion timestamp.
    pub tier_changed: bool,
}

// =============================================================================
// Loyalty Engine
// =============================================================================

/// The rules engine: earn-rate table, promotion ladder, and point value,
/// all fixed at construction.
///
/// ## Design Decisions
/// - **Values in, values out**: the engine never sees a customer record,
///   only the (tier, points, amount) triple - the store layer owns all
///   mutation and its concurrency discipline
/// - **Configuration, not constants**: both tables and the point value are
///   injected so tuning needs no code change
/// - **Cheap to clone**: the engine is a small value; share or copy freely
///
/// ## Example
/// ```rust
/// use patron_core::engine::LoyaltyEngine;
/// use patron_core::money::Money;
/// use patron_core::tier::Tier;
///
/// let engine = LoyaltyEngine::default();
///
/// let outcome = engine
///     .process_purchase(Tier::Silver, 480, Money::from_cents(50_000))
///     .unwrap();
///
/// assert_eq!(outcome.points_awarded, 50);
/// assert_eq!(outcome.new_balance, 530);
/// // Already Silver: the 500-point rule only fires from Bronze
/// assert_eq!(outcome.tier, Tier::Silver);
/// assert!(!outcome.tier_changed);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LoyaltyEngine {
    multipliers: MultiplierTable,
    policy: PromotionPolicy,
    point_value: Money,
}

impl LoyaltyEngine {
    /// Creates an engine from a multiplier table and promotion policy,
    /// with the reference point value (1 point per 10 currency units).
    pub fn new(multipliers: MultiplierTable, policy: PromotionPolicy) -> Self {
        LoyaltyEngine {
            multipliers,
            policy,
            point_value: Money::from_cents(DEFAULT_POINT_VALUE_CENTS),
        }
    }

    /// Overrides the amount of money that earns one base point.
    ///
    /// ## Errors
    /// [`CoreError::InvalidAmount`] if the point value is not positive.
    pub fn with_point_value(mut self, point_value: Money) -> CoreResult<Self> {
        if !point_value.is_positive() {
            return Err(CoreError::InvalidAmount {
                cents: point_value.cents(),
            });
        }
        self.point_value = point_value;
        Ok(self)
    }

    /// The configured multiplier table.
    pub fn multipliers(&self) -> &MultiplierTable {
        &self.multipliers
    }

    /// The configured promotion policy.
    pub fn policy(&self) -> &PromotionPolicy {
        &self.policy
    }

    /// The amount of money that earns one base point.
    pub fn point_value(&self) -> Money {
        self.point_value
    }

    /// Computes the points awarded for a purchase.
    ///
    /// Floor the base first, then floor again after the tier multiplier -
    /// see [`crate::points`] for why the order matters.
    ///
    /// ## Errors
    /// [`CoreError::InvalidAmount`] when `amount` is zero or negative.
    ///
    /// ## Example
    /// ```rust
    /// use patron_core::engine::LoyaltyEngine;
    /// use patron_core::money::Money;
    /// use patron_core::tier::Tier;
    ///
    /// let engine = LoyaltyEngine::default();
    /// let hundred = Money::from_cents(10_000);
    ///
    /// assert_eq!(engine.calculate_points(Tier::Gold, hundred).unwrap(), 12);
    /// assert_eq!(engine.calculate_points(Tier::Platinum, hundred).unwrap(), 20);
    /// ```
    pub fn calculate_points(&self, tier: Tier, amount: Money) -> CoreResult<u64> {
        if !amount.is_positive() {
            return Err(CoreError::InvalidAmount {
                cents: amount.cents(),
            });
        }

        // Positive amount / positive point value: the floor is non-negative
        let base = amount.base_points(self.point_value) as u64;
        Ok(self.multipliers.apply(tier, base))
    }

    /// Evaluates whether `points` promotes a customer currently at `tier`.
    ///
    /// Pure and infallible; see [`PromotionPolicy::evaluate`].
    pub fn evaluate_promotion(&self, tier: Tier, points: u64) -> PromotionResult {
        self.policy.evaluate(tier, points)
    }

    /// Processes one purchase end to end: award, accumulate, evaluate.
    ///
    /// The balance saturates at `u64::MAX` rather than wrapping.
    ///
    /// ## Errors
    /// [`CoreError::InvalidAmount`] when `amount` is zero or negative.
    pub fn process_purchase(
        &self,
        tier: Tier,
        points_before: u64,
        amount: Money,
    ) -> CoreResult<PurchaseOutcome> {
        let points_awarded = self.calculate_points(tier, amount)?;
        let new_balance = points_before.saturating_add(points_awarded);
        let promotion = self.evaluate_promotion(tier, new_balance);

        Ok(PurchaseOutcome {
            points_awarded,
            new_balance,
            tier: promotion.tier,
            tier_changed: promotion.promoted,
        })
    }
}

/// Default engine carries the reference configuration.
impl Default for LoyaltyEngine {
    fn default() -> Self {
        LoyaltyEngine::new(MultiplierTable::reference(), PromotionPolicy::reference())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
