//! # Tier Module
//!
//! The closed, totally ordered set of loyalty tiers.
//!
//! ## Tier Ladder
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tier Progression                                 │
//! │                                                                         │
//! │   Bronze ──► Silver ──► Gold ──► Platinum                               │
//! │   (rank 0)  (rank 1)   (rank 2)  (rank 3)                               │
//! │                                                                         │
//! │   Promotion only moves RIGHT. There is no demotion path anywhere        │
//! │   in the engine - demotion would be a different product decision.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Closed Set Invariant
//! `Tier` is the only representation of a loyalty rank in the system.
//! Any string entering from outside goes through [`FromStr`], which fails
//! with [`CoreError::InvalidTier`] for values outside the set. There is no
//! "unknown tier" value and no default multiplier for one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

// =============================================================================
// Tier
// =============================================================================

/// A customer's loyalty rank, ordered by ascending privilege.
///
/// ## Design Decisions
/// - **Fieldless enum**: the set is closed; invalid ranks are unrepresentable
/// - **Explicit discriminants**: `rank()` is a stable, documented ordering,
///   used by the promotion evaluator's monotonicity guard
/// - **Derived `Ord`**: declaration order IS privilege order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Tier {
    /// Entry tier. Every account is enrolled at Bronze.
    Bronze = 0,
    /// First earned tier (500+ cumulative points).
    Silver = 1,
    /// Elevated earn rate begins here (750+ cumulative points).
    Gold = 2,
    /// Top tier (1000+ cumulative points).
    Platinum = 3,
}

impl Tier {
    /// Number of tiers in the closed set.
    pub const COUNT: usize = 4;

    /// All tiers, in ascending privilege order.
    pub const ALL: [Tier; Tier::COUNT] = [Tier::Bronze, Tier::Silver, Tier::Gold, Tier::Platinum];

    /// Returns the tier's position on the ladder (0 = Bronze, 3 = Platinum).
    ///
    /// ## Example
    /// ```rust
    /// use patron_core::tier::Tier;
    ///
    /// assert!(Tier::Gold.rank() > Tier::Silver.rank());
    /// ```
    #[inline]
    pub const fn rank(&self) -> u8 {
        *self as u8
    }

    /// The canonical lowercase name, matching the serialized form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Tier::Bronze => "bronze",
            Tier::Silver => "silver",
            Tier::Gold => "gold",
            Tier::Platinum => "platinum",
        }
    }
}

/// New accounts start at the bottom of the ladder.
impl Default for Tier {
    fn default() -> Self {
        Tier::Bronze
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse from the closed set.
///
/// This is the single gate where an out-of-set tier value can be observed.
/// It fails explicitly rather than falling back to a default earn rate -
/// see the Open Question resolution in DESIGN.md.
impl FromStr for Tier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bronze" => Ok(Tier::Bronze),
            "silver" => Ok(Tier::Silver),
            "gold" => Ok(Tier::Gold),
            "platinum" => Ok(Tier::Platinum),
            other => Err(CoreError::InvalidTier(other.to_string())),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_follows_privilege() {
        assert!(Tier::Bronze < Tier::Silver);
        assert!(Tier::Silver < Tier::Gold);
        assert!(Tier::Gold < Tier::Platinum);
    }

    #[test]
    fn test_rank_is_ladder_position() {
        assert_eq!(Tier::Bronze.rank(), 0);
        assert_eq!(Tier::Silver.rank(), 1);
        assert_eq!(Tier::Gold.rank(), 2);
        assert_eq!(Tier::Platinum.rank(), 3);
    }

    #[test]
    fn test_all_is_ascending_and_complete() {
        assert_eq!(Tier::ALL.len(), Tier::COUNT);
        for pair in Tier::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_parse_accepts_any_case() {
        assert_eq!("bronze".parse::<Tier>().unwrap(), Tier::Bronze);
        assert_eq!("SILVER".parse::<Tier>().unwrap(), Tier::Silver);
        assert_eq!(" Gold ".parse::<Tier>().unwrap(), Tier::Gold);
        assert_eq!("Platinum".parse::<Tier>().unwrap(), Tier::Platinum);
    }

    #[test]
    fn test_parse_rejects_out_of_set_values() {
        let err = "diamond".parse::<Tier>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidTier(ref v) if v == "diamond"));

        assert!("".parse::<Tier>().is_err());
        assert!("bronz".parse::<Tier>().is_err());
    }

    #[test]
    fn test_default_is_bronze() {
        assert_eq!(Tier::default(), Tier::Bronze);
    }

    #[test]
    fn test_serialized_form_is_lowercase() {
        assert_eq!(serde_json::to_string(&Tier::Gold).unwrap(), "\"gold\"");
        let parsed: Tier = serde_json::from_str("\"platinum\"").unwrap();
        assert_eq!(parsed, Tier::Platinum);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for tier in Tier::ALL {
            assert_eq!(tier.to_string().parse::<Tier>().unwrap(), tier);
        }
    }
}
