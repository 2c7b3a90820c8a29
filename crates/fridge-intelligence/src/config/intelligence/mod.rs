// ABOUTME: Intelligence engine configuration with defaults, environment overrides, and validation
// ABOUTME: Provides the process-wide configuration singleton used by the CLI and services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `expiration` - expiring-soon window
//! - `nutrition` - energy consistency check
//! - `matching` - recipe ingredient match policy
//!
//! Engine functions never read this singleton themselves; callers pass the
//! relevant section explicitly.

pub mod error;
pub mod expiration;
pub mod matching;
pub mod nutrition;

pub use error::ConfigError;
pub use expiration::ExpirationConfig;
pub use matching::{MatchPolicy, MatchingConfig};
pub use nutrition::NutritionConfig;

use fridge_core::constants::{env_vars, expiration::MAX_EXPIRING_SOON_DAYS};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Expiration classifier settings
    pub expiration: ExpirationConfig,
    /// Nutrient aggregator settings
    pub nutrition: NutritionConfig,
    /// Recipe matcher settings
    pub matching: MatchingConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparseable value
    /// or the resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` for an out-of-range window or tolerance
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.expiration.expiring_soon_days > MAX_EXPIRING_SOON_DAYS {
            return Err(ConfigError::InvalidRange(
                "expiring_soon_days must be between 0 and 30",
            ));
        }

        let ratio = self.nutrition.energy_tolerance_ratio;
        if !ratio.is_finite() || ratio < 1.0 {
            return Err(ConfigError::InvalidRange(
                "energy_tolerance_ratio must be a finite number >= 1.0",
            ));
        }

        if !self.nutrition.min_calories_for_energy_check.is_finite()
            || self.nutrition.min_calories_for_energy_check < 0.0
        {
            return Err(ConfigError::InvalidRange(
                "min_calories_for_energy_check must be >= 0",
            ));
        }

        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            env_vars::EXPIRING_SOON_DAYS,
            &mut self.expiration.expiring_soon_days,
        )?;
        Self::apply_env_var(
            env_vars::ENERGY_TOLERANCE_RATIO,
            &mut self.nutrition.energy_tolerance_ratio,
        )?;
        Self::apply_env_var(env_vars::RECIPE_MATCH_POLICY, &mut self.matching.policy)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var(env_vars::EXPIRING_SOON_DAYS);
        env::remove_var(env_vars::ENERGY_TOLERANCE_RATIO);
        env::remove_var(env_vars::RECIPE_MATCH_POLICY);
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = IntelligenceConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.expiration.expiring_soon_days, 3);
        assert_eq!(config.matching.policy, MatchPolicy::Exact);
    }

    #[test]
    #[serial]
    fn test_env_overrides_are_applied() {
        clear_env();
        env::set_var(env_vars::EXPIRING_SOON_DAYS, "5");
        env::set_var(env_vars::RECIPE_MATCH_POLICY, "Substring");
        let config = IntelligenceConfig::load().unwrap();
        clear_env();

        assert_eq!(config.expiration.expiring_soon_days, 5);
        assert_eq!(config.matching.policy, MatchPolicy::Substring);
    }

    #[test]
    #[serial]
    fn test_invalid_env_values_fail_to_load() {
        clear_env();
        env::set_var(env_vars::RECIPE_MATCH_POLICY, "fuzzy");
        assert!(matches!(
            IntelligenceConfig::load(),
            Err(ConfigError::Parse(_))
        ));

        clear_env();
        env::set_var(env_vars::EXPIRING_SOON_DAYS, "45");
        assert!(matches!(
            IntelligenceConfig::load(),
            Err(ConfigError::InvalidRange(_))
        ));

        clear_env();
        env::set_var(env_vars::ENERGY_TOLERANCE_RATIO, "0.5");
        assert!(IntelligenceConfig::load().is_err());
        clear_env();
    }
}
