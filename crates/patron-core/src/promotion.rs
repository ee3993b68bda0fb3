//! # Promotion Module
//!
//! The promotion threshold table and the tier promotion evaluator.
//!
//! ## Rule Evaluation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              Promotion Evaluation (first match wins)                    │
//! │                                                                         │
//! │  points ≥ 1000 AND current below Platinum ──► promote to Platinum      │
//! │       │ else                                                            │
//! │       ▼                                                                 │
//! │  points ≥ 750  AND current below Gold ──────► promote to Gold          │
//! │       │ else                                                            │
//! │       ▼                                                                 │
//! │  points ≥ 500  AND current below Silver ────► promote to Silver        │
//! │       │ else                                                            │
//! │       ▼                                                                 │
//! │  no change (promoted = false)                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Asymmetric Guard Is Deliberate
//! A Gold customer with 800 points is NOT "re-promoted" to Gold: each rule
//! only fires when the current tier is strictly BELOW the rule's target.
//! Do not "fix" this by re-awarding the matching tier - the guard is what
//! makes the evaluator idempotent and monotonic non-decreasing, and it is
//! pinned by tests below. A Bronze customer crossing 750 goes straight to
//! Gold: the walk starts at the highest threshold, so intermediate tiers
//! are never visited.
//!
//! The evaluator is pure: no clock, no side effects. Any promotion
//! timestamp is stamped by the caller.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::tier::Tier;

// =============================================================================
// Tier Threshold
// =============================================================================

/// One row of the promotion table: the minimum cumulative points needed to
/// hold `tier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TierThreshold {
    /// Minimum cumulative points for the target tier.
    pub min_points: u64,

    /// Tier granted when the threshold is met.
    pub tier: Tier,
}

impl TierThreshold {
    /// Creates a threshold row.
    #[inline]
    pub const fn new(min_points: u64, tier: Tier) -> Self {
        TierThreshold { min_points, tier }
    }
}

// =============================================================================
// Promotion Result
// =============================================================================

/// Outcome of a promotion evaluation.
///
/// `tier` equals the input tier when no rule fired; `promoted` tells the
/// caller whether to stamp a promotion timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PromotionResult {
    /// The resulting tier (same as input if no promotion fired).
    pub tier: Tier,

    /// Whether a tier change occurred.
    pub promoted: bool,
}

// =============================================================================
// Promotion Policy
// =============================================================================

/// An ordered promotion threshold table, evaluated from highest threshold
/// to lowest.
///
/// ## Invariants (enforced at construction)
/// - At least one threshold
/// - Thresholds strictly increase with tier privilege
/// - No duplicate target tier
/// - No threshold targets the lowest tier (nothing can promote into it)
///
/// Like the multiplier table, this is configuration: override it at engine
/// construction to tune the ladder without code changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionPolicy {
    /// Thresholds held sorted by `min_points`, highest first.
    thresholds: Vec<TierThreshold>,
}

impl PromotionPolicy {
    /// The reference ladder: Silver at 500, Gold at 750, Platinum at 1000.
    pub fn reference() -> Self {
        PromotionPolicy {
            thresholds: vec![
                TierThreshold::new(1000, Tier::Platinum),
                TierThreshold::new(750, Tier::Gold),
                TierThreshold::new(500, Tier::Silver),
            ],
        }
    }

    /// Builds a policy from threshold rows (any input order).
    ///
    /// ## Errors
    /// [`CoreError::InvalidPolicy`] when the table is empty, targets the
    /// lowest tier, repeats a target, or orders thresholds against tier
    /// privilege.
    pub fn new(mut thresholds: Vec<TierThreshold>) -> CoreResult<Self> {
        if thresholds.is_empty() {
            return Err(CoreError::InvalidPolicy {
                reason: "at least one threshold is required".to_string(),
            });
        }

        thresholds.sort_by(|a, b| b.min_points.cmp(&a.min_points));

        // Walking highest → lowest, both points and tier rank must strictly
        // decrease: equal thresholds or an inverted pair would make rule
        // order (and therefore the promotion outcome) ambiguous.
        for pair in thresholds.windows(2) {
            let (higher, lower) = (pair[0], pair[1]);

            if higher.tier == lower.tier {
                return Err(CoreError::InvalidPolicy {
                    reason: format!("duplicate threshold for tier '{}'", higher.tier),
                });
            }
            if higher.min_points == lower.min_points {
                return Err(CoreError::InvalidPolicy {
                    reason: format!(
                        "tiers '{}' and '{}' share the threshold {}",
                        higher.tier, lower.tier, higher.min_points
                    ),
                });
            }
            if higher.tier.rank() < lower.tier.rank() {
                return Err(CoreError::InvalidPolicy {
                    reason: format!(
                        "tier '{}' has a higher threshold than the more privileged '{}'",
                        higher.tier, lower.tier
                    ),
                });
            }
        }

        if let Some(row) = thresholds.iter().find(|t| t.tier.rank() == 0) {
            return Err(CoreError::InvalidPolicy {
                reason: format!(
                    "threshold for '{}' can never fire: it is the enrollment tier",
                    row.tier
                ),
            });
        }

        Ok(PromotionPolicy { thresholds })
    }

    /// The threshold rows, highest first.
    pub fn thresholds(&self) -> &[TierThreshold] {
        &self.thresholds
    }

    /// Evaluates whether `points` promotes a customer currently at
    /// `current`.
    ///
    /// First match wins, walking from the highest threshold down; a rule
    /// fires only when the current tier is strictly below its target.
    /// Infallible: tier validity is carried by the type and `u64` points
    /// cannot be negative.
    ///
    /// ## Example
    /// ```rust
    /// use patron_core::promotion::PromotionPolicy;
    /// use patron_core::tier::Tier;
    ///
    /// let policy = PromotionPolicy::reference();
    ///
    /// let up = policy.evaluate(Tier::Bronze, 500);
    /// assert_eq!((up.tier, up.promoted), (Tier::Silver, true));
    ///
    /// // Gold at 800 points: no rule fires
    /// let noop = policy.evaluate(Tier::Gold, 800);
    /// assert_eq!((noop.tier, noop.promoted), (Tier::Gold, false));
    /// ```
    pub fn evaluate(&self, current: Tier, points: u64) -> PromotionResult {
        for threshold in &self.thresholds {
            if points >= threshold.min_points && current.rank() < threshold.tier.rank() {
                return PromotionResult {
                    tier: threshold.tier,
                    promoted: true,
                };
            }
        }

        PromotionResult {
            tier: current,
            promoted: false,
        }
    }
}

/// Default policy is the reference ladder.
impl Default for PromotionPolicy {
    fn default() -> Self {
        PromotionPolicy::reference()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_eval(current: Tier, points: u64, expect_tier: Tier, expect_promoted: bool) {
        let result = PromotionPolicy::reference().evaluate(current, points);
        assert_eq!(
            (result.tier, result.promoted),
            (expect_tier, expect_promoted),
            "evaluate({current}, {points})"
        );
    }

    #[test]
    fn test_reference_threshold_rows() {
        let policy = PromotionPolicy::reference();
        let rows = policy.thresholds();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], TierThreshold::new(1000, Tier::Platinum));
        assert_eq!(rows[1], TierThreshold::new(750, Tier::Gold));
        assert_eq!(rows[2], TierThreshold::new(500, Tier::Silver));
    }

    #[test]
    fn test_boundary_promotions() {
        assert_eval(Tier::Bronze, 499, Tier::Bronze, false);
        assert_eval(Tier::Bronze, 500, Tier::Silver, true);
        assert_eval(Tier::Silver, 750, Tier::Gold, true);
        assert_eval(Tier::Gold, 1000, Tier::Platinum, true);
    }

    #[test]
    fn test_no_repromotion_to_current_tier() {
        // Gold at 800: the Gold rule's guard (current below Gold) fails,
        // and the Silver rule never fires from Gold either.
        assert_eval(Tier::Gold, 800, Tier::Gold, false);
        assert_eval(Tier::Silver, 530, Tier::Silver, false);
        assert_eval(Tier::Platinum, 5000, Tier::Platinum, false);
    }

    #[test]
    fn test_bronze_can_skip_intermediate_tiers() {
        assert_eval(Tier::Bronze, 750, Tier::Gold, true);
        assert_eval(Tier::Bronze, 1000, Tier::Platinum, true);
        assert_eval(Tier::Silver, 1000, Tier::Platinum, true);
    }

    #[test]
    fn test_idempotent_fixed_point() {
        let policy = PromotionPolicy::reference();
        for tier in Tier::ALL {
            for points in [0u64, 499, 500, 749, 750, 999, 1000, 2500] {
                let first = policy.evaluate(tier, points);
                let second = policy.evaluate(first.tier, points);
                assert_eq!(second.tier, first.tier);
                assert!(!second.promoted, "second pass must be a no-op");
            }
        }
    }

    #[test]
    fn test_monotonic_never_decreases_tier() {
        let policy = PromotionPolicy::reference();
        for tier in Tier::ALL {
            for points in 0..1500u64 {
                let result = policy.evaluate(tier, points);
                assert!(result.tier.rank() >= tier.rank());
                assert_eq!(result.promoted, result.tier != tier);
            }
        }
    }

    #[test]
    fn test_custom_policy_any_input_order() {
        let policy = PromotionPolicy::new(vec![
            TierThreshold::new(200, Tier::Silver),
            TierThreshold::new(2000, Tier::Platinum),
            TierThreshold::new(900, Tier::Gold),
        ])
        .unwrap();

        let result = policy.evaluate(Tier::Bronze, 950);
        assert_eq!((result.tier, result.promoted), (Tier::Gold, true));
    }

    #[test]
    fn test_empty_policy_rejected() {
        assert!(matches!(
            PromotionPolicy::new(vec![]),
            Err(CoreError::InvalidPolicy { .. })
        ));
    }

    #[test]
    fn test_duplicate_tier_rejected() {
        let result = PromotionPolicy::new(vec![
            TierThreshold::new(500, Tier::Silver),
            TierThreshold::new(800, Tier::Silver),
        ]);
        assert!(matches!(result, Err(CoreError::InvalidPolicy { .. })));
    }

    #[test]
    fn test_inverted_order_rejected() {
        // Platinum cheaper than Gold: privilege and threshold disagree
        let result = PromotionPolicy::new(vec![
            TierThreshold::new(900, Tier::Platinum),
            TierThreshold::new(1000, Tier::Gold),
        ]);
        assert!(matches!(result, Err(CoreError::InvalidPolicy { .. })));
    }

    #[test]
    fn test_shared_threshold_rejected() {
        let result = PromotionPolicy::new(vec![
            TierThreshold::new(750, Tier::Gold),
            TierThreshold::new(750, Tier::Silver),
        ]);
        assert!(matches!(result, Err(CoreError::InvalidPolicy { .. })));
    }

    #[test]
    fn test_enrollment_tier_threshold_rejected() {
        let result = PromotionPolicy::new(vec![
            TierThreshold::new(100, Tier::Bronze),
            TierThreshold::new(500, Tier::Silver),
        ]);
        assert!(matches!(result, Err(CoreError::InvalidPolicy { .. })));
    }
}
