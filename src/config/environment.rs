// ABOUTME: Environment configuration for the fridge intelligence tools
// ABOUTME: Reads deployment mode, inventory location, and engine settings; defines the shared log level type
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Environment-based configuration

use crate::constants::env_vars;
use anyhow::{anyhow, Context, Result};
use fridge_intelligence::IntelligenceConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Informational messages
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Warn,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Configuration for the command-line tools
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Inventory snapshot file, if configured
    pub inventory_path: Option<PathBuf>,
    /// Engine configuration
    pub intelligence: IntelligenceConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an engine setting cannot be parsed or is out of range
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            environment: Environment::from_str_or_default(
                &env::var(env_vars::ENVIRONMENT).unwrap_or_default(),
            ),
            inventory_path: env::var(env_vars::INVENTORY_PATH)
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            intelligence: IntelligenceConfig::load()
                .context("Invalid intelligence configuration")?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the inventory path points at a directory or the
    /// engine configuration is out of range
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.inventory_path {
            if path.is_dir() {
                return Err(anyhow!(
                    "{} must point to a file, got directory {}",
                    env_vars::INVENTORY_PATH,
                    path.display()
                ));
            }
        }
        self.intelligence
            .validate()
            .context("Invalid intelligence configuration")?;
        Ok(())
    }

    /// Human-readable configuration summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Fridge Intelligence Configuration:\n\
             - Environment: {}\n\
             - Inventory: {}\n\
             - Expiring Soon Window: {} day(s)\n\
             - Recipe Match Policy: {}\n\
             - Energy Tolerance Ratio: {}",
            self.environment,
            self.inventory_path
                .as_ref()
                .map_or_else(|| "not configured".to_owned(), |p| p.display().to_string()),
            self.intelligence.expiration.expiring_soon_days,
            self.intelligence.matching.policy,
            self.intelligence.nutrition.energy_tolerance_ratio,
        )
    }
}
