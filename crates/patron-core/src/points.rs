//! # Points Module
//!
//! The earn-rate multiplier table and the award math it drives.
//!
//! ## Award Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Points Are Awarded                               │
//! │                                                                         │
//! │  Purchase: $300.00, tier: Gold                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  base = floor(30000 cents / 1000 cents-per-point) = 30   (money.rs)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  awarded = floor(30 × 12000 bps / 10000) = 36            (THIS FILE)   │
//! │                                                                         │
//! │  BOTH floors are contractual, in that order. Flooring only once at     │
//! │  the end gives different answers: $19 at Platinum (2.0×) awards        │
//! │  floor(floor(1.9) × 2.0) = 2 points, not floor(1.9 × 2.0) = 3.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Totality By Construction
//! The table is a fixed array indexed by [`Tier::rank`]. Every tier has
//! exactly one rate; a missing entry is unrepresentable, so no fallback
//! multiplier exists anywhere in the engine.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::tier::Tier;
use crate::types::EarnRate;
use crate::MAX_EARN_RATE_BPS;

// =============================================================================
// Multiplier Table
// =============================================================================

/// A total mapping from each [`Tier`] to its earn-rate multiplier.
///
/// ## Invariants
/// - Every tier has exactly one rate (enforced by the array layout)
/// - Rates are positive and at most [`MAX_EARN_RATE_BPS`]
///   (enforced at construction)
///
/// This table is configuration, not a hardcoded fact: callers override it
/// at engine construction to tune earn rates without code changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplierTable {
    /// Rates indexed by `Tier::rank()`.
    rates: [EarnRate; Tier::COUNT],
}

impl MultiplierTable {
    /// The reference configuration:
    /// Bronze 1.0×, Silver 1.0×, Gold 1.2×, Platinum 2.0×.
    pub const fn reference() -> Self {
        MultiplierTable {
            rates: [
                EarnRate::from_bps(10_000), // Bronze  1.0×
                EarnRate::from_bps(10_000), // Silver  1.0×
                EarnRate::from_bps(12_000), // Gold    1.2×
                EarnRate::from_bps(20_000), // Platinum 2.0×
            ],
        }
    }

    /// Builds a table from one rate per tier, in ascending tier order.
    ///
    /// ## Errors
    /// [`CoreError::InvalidEarnRate`] if any rate is zero or above
    /// [`MAX_EARN_RATE_BPS`].
    pub fn from_rates(
        bronze: EarnRate,
        silver: EarnRate,
        gold: EarnRate,
        platinum: EarnRate,
    ) -> CoreResult<Self> {
        let rates = [bronze, silver, gold, platinum];
        for (tier, rate) in Tier::ALL.into_iter().zip(rates) {
            check_rate(tier, rate)?;
        }
        Ok(MultiplierTable { rates })
    }

    /// Returns a copy of the table with one tier's rate replaced.
    ///
    /// ## Example
    /// ```rust
    /// use patron_core::points::MultiplierTable;
    /// use patron_core::tier::Tier;
    /// use patron_core::types::EarnRate;
    ///
    /// let table = MultiplierTable::reference()
    ///     .with_rate(Tier::Silver, EarnRate::from_bps(11_000))
    ///     .unwrap();
    /// assert_eq!(table.rate(Tier::Silver).bps(), 11_000);
    /// ```
    pub fn with_rate(mut self, tier: Tier, rate: EarnRate) -> CoreResult<Self> {
        check_rate(tier, rate)?;
        self.rates[tier.rank() as usize] = rate;
        Ok(self)
    }

    /// Looks up the earn rate for a tier. Total: cannot fail.
    #[inline]
    pub const fn rate(&self, tier: Tier) -> EarnRate {
        self.rates[tier.rank() as usize]
    }

    /// Applies a tier's multiplier to a base point count, flooring the
    /// result to an integer.
    ///
    /// The intermediate product is computed in `u128` so no realistic
    /// balance can overflow.
    ///
    /// ## Example
    /// ```rust
    /// use patron_core::points::MultiplierTable;
    /// use patron_core::tier::Tier;
    ///
    /// let table = MultiplierTable::reference();
    /// assert_eq!(table.apply(Tier::Gold, 10), 12);     // 10 × 1.2
    /// assert_eq!(table.apply(Tier::Gold, 1), 1);       // floor(1.2)
    /// assert_eq!(table.apply(Tier::Platinum, 10), 20); // 10 × 2.0
    /// ```
    pub fn apply(&self, tier: Tier, base_points: u64) -> u64 {
        let bps = self.rate(tier).bps() as u128;
        (base_points as u128 * bps / EarnRate::BASE_BPS as u128) as u64
    }
}

/// Default table is the reference configuration.
impl Default for MultiplierTable {
    fn default() -> Self {
        MultiplierTable::reference()
    }
}

fn check_rate(tier: Tier, rate: EarnRate) -> CoreResult<()> {
    if rate.bps() == 0 || rate.bps() > MAX_EARN_RATE_BPS {
        return Err(CoreError::InvalidEarnRate {
            tier,
            bps: rate.bps(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_rates() {
        let table = MultiplierTable::reference();
        assert_eq!(table.rate(Tier::Bronze).bps(), 10_000);
        assert_eq!(table.rate(Tier::Silver).bps(), 10_000);
        assert_eq!(table.rate(Tier::Gold).bps(), 12_000);
        assert_eq!(table.rate(Tier::Platinum).bps(), 20_000);
    }

    #[test]
    fn test_every_tier_has_a_rate() {
        let table = MultiplierTable::default();
        for tier in Tier::ALL {
            assert!(table.rate(tier).bps() > 0);
        }
    }

    #[test]
    fn test_zero_rate_rejected() {
        let err = MultiplierTable::reference()
            .with_rate(Tier::Gold, EarnRate::from_bps(0))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidEarnRate {
                tier: Tier::Gold,
                bps: 0
            }
        ));
    }

    #[test]
    fn test_excessive_rate_rejected() {
        let result = MultiplierTable::reference()
            .with_rate(Tier::Platinum, EarnRate::from_bps(MAX_EARN_RATE_BPS + 1));
        assert!(result.is_err());

        // The ceiling itself is allowed
        assert!(MultiplierTable::reference()
            .with_rate(Tier::Platinum, EarnRate::from_bps(MAX_EARN_RATE_BPS))
            .is_ok());
    }

    #[test]
    fn test_from_rates_override() {
        let table = MultiplierTable::from_rates(
            EarnRate::from_bps(10_000),
            EarnRate::from_bps(11_000),
            EarnRate::from_bps(15_000),
            EarnRate::from_bps(30_000),
        )
        .unwrap();
        assert_eq!(table.rate(Tier::Silver).bps(), 11_000);
        assert_eq!(table.apply(Tier::Gold, 10), 15);
    }

    #[test]
    fn test_apply_floors_after_multiplying() {
        let table = MultiplierTable::reference();

        // 1 base point at 1.2× floors to 1, not 2
        assert_eq!(table.apply(Tier::Gold, 1), 1);
        // 5 base points at 1.2× = 6.0 exactly
        assert_eq!(table.apply(Tier::Gold, 5), 6);
        // 9 base points at 1.2× = 10.8 → 10
        assert_eq!(table.apply(Tier::Gold, 9), 10);
        // Zero base stays zero regardless of multiplier
        assert_eq!(table.apply(Tier::Platinum, 0), 0);
    }

    #[test]
    fn test_apply_handles_large_balances() {
        let table = MultiplierTable::reference();
        // A base count far beyond any real purchase must not overflow
        let base = u64::MAX / 4;
        assert_eq!(table.apply(Tier::Platinum, base), base * 2);
    }
}
