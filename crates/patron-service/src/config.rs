//! Service configuration module.
//!
//! Configuration is loaded from environment variables with fallback to the
//! reference defaults, so earn rates, thresholds, and the point value are
//! tunable without code changes.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use patron_core::{
    CoreError, EarnRate, LoyaltyEngine, Money, MultiplierTable, PromotionPolicy, Tier,
    TierThreshold, DEFAULT_POINT_VALUE_CENTS, DEFAULT_TENANT_ID,
};

/// Service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Tenant the service operates for
    pub tenant_id: String,

    /// Cents that earn one base point
    pub point_value_cents: i64,

    /// Earn rates per tier, in basis points (10000 = 1.0×)
    pub bronze_rate_bps: u32,
    pub silver_rate_bps: u32,
    pub gold_rate_bps: u32,
    pub platinum_rate_bps: u32,

    /// Promotion thresholds, in cumulative points
    pub silver_min_points: u64,
    pub gold_min_points: u64,
    pub platinum_min_points: u64,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(ServiceConfig {
            tenant_id: env::var("PATRON_TENANT_ID").unwrap_or_else(|_| DEFAULT_TENANT_ID.to_string()),

            point_value_cents: env_or("PATRON_POINT_VALUE_CENTS", DEFAULT_POINT_VALUE_CENTS)?,

            bronze_rate_bps: env_or("PATRON_BRONZE_RATE_BPS", 10_000)?,
            silver_rate_bps: env_or("PATRON_SILVER_RATE_BPS", 10_000)?,
            gold_rate_bps: env_or("PATRON_GOLD_RATE_BPS", 12_000)?,
            platinum_rate_bps: env_or("PATRON_PLATINUM_RATE_BPS", 20_000)?,

            silver_min_points: env_or("PATRON_SILVER_MIN_POINTS", 500)?,
            gold_min_points: env_or("PATRON_GOLD_MIN_POINTS", 750)?,
            platinum_min_points: env_or("PATRON_PLATINUM_MIN_POINTS", 1_000)?,
        })
    }

    /// Builds the rules engine described by this configuration.
    ///
    /// ## Errors
    /// [`ConfigError::Engine`] when the configured rates or thresholds
    /// violate an engine invariant (zero rate, misordered ladder, ...).
    pub fn engine(&self) -> Result<LoyaltyEngine, ConfigError> {
        let multipliers = MultiplierTable::from_rates(
            EarnRate::from_bps(self.bronze_rate_bps),
            EarnRate::from_bps(self.silver_rate_bps),
            EarnRate::from_bps(self.gold_rate_bps),
            EarnRate::from_bps(self.platinum_rate_bps),
        )?;

        let policy = PromotionPolicy::new(vec![
            TierThreshold::new(self.platinum_min_points, Tier::Platinum),
            TierThreshold::new(self.gold_min_points, Tier::Gold),
            TierThreshold::new(self.silver_min_points, Tier::Silver),
        ])?;

        let engine = LoyaltyEngine::new(multipliers, policy)
            .with_point_value(Money::from_cents(self.point_value_cents))?;

        Ok(engine)
    }
}

/// Default configuration mirrors the reference engine.
impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            tenant_id: DEFAULT_TENANT_ID.to_string(),
            point_value_cents: DEFAULT_POINT_VALUE_CENTS,
            bronze_rate_bps: 10_000,
            silver_rate_bps: 10_000,
            gold_rate_bps: 12_000,
            platinum_rate_bps: 20_000,
            silver_min_points: 500,
            gold_min_points: 750,
            platinum_min_points: 1_000,
        }
    }
}

/// Reads an environment variable, falling back to `default` when unset.
fn env_or<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        Err(_) => Ok(default),
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was set but unparseable.
    #[error("Invalid configuration value for {0}")]
    InvalidValue(String),

    /// The configured values violate an engine invariant.
    #[error("Invalid engine configuration: {0}")]
    Engine(#[from] CoreError),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds_reference_engine() {
        let config = ServiceConfig::default();
        let engine = config.engine().unwrap();

        assert_eq!(engine.point_value(), Money::from_cents(1_000));
        assert_eq!(engine.multipliers().rate(Tier::Gold).bps(), 12_000);
        assert_eq!(engine.policy().thresholds().len(), 3);
    }

    #[test]
    fn test_zero_rate_config_rejected() {
        let config = ServiceConfig {
            gold_rate_bps: 0,
            ..ServiceConfig::default()
        };
        assert!(matches!(config.engine(), Err(ConfigError::Engine(_))));
    }

    #[test]
    fn test_misordered_thresholds_rejected() {
        let config = ServiceConfig {
            // Platinum cheaper than Gold
            platinum_min_points: 600,
            ..ServiceConfig::default()
        };
        assert!(matches!(config.engine(), Err(ConfigError::Engine(_))));
    }

    #[test]
    fn test_nonpositive_point_value_rejected() {
        let config = ServiceConfig {
            point_value_cents: 0,
            ..ServiceConfig::default()
        };
        assert!(matches!(config.engine(), Err(ConfigError::Engine(_))));
    }
}
