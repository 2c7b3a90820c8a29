// ABOUTME: Logging configuration and structured logging setup for the fridge intelligence tools
// ABOUTME: Configures log level, formatter, and stderr output so command results stay clean on stdout
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Structured logging configuration

use crate::config::LogLevel;
use crate::constants::service_names;
use anyhow::Result;
use serde_json::json;
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::{
    filter::Directive,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const WORKSPACE_TARGETS: [&str; 4] = [
    "fridge_inventory",
    "fridge_intelligence",
    "fridge_core",
    "fridge_cli",
];

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level for workspace crates
    pub level: LogLevel,
    /// Level was set explicitly and takes precedence over `RUST_LOG`
    pub explicit_level: bool,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Include span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, testing, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals
    Compact,
}

impl LogFormat {
    /// Parse from the `LOG_FORMAT` value, defaulting to compact
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            explicit_level: false,
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::FRIDGE_CLI.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let level = env::var("RUST_LOG")
            .map_or(defaults.level, |value| LogLevel::from_str_or_default(&value));
        let format = env::var("LOG_FORMAT")
            .map_or(defaults.format, |value| LogFormat::from_str_or_default(&value));
        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);

        // In production, use more detailed logging
        let is_production = environment == "production";

        Self {
            level,
            explicit_level: false,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            service_version: defaults.service_version,
            environment,
        }
    }

    /// Override the level, e.g. from a `--verbose` flag
    ///
    /// An explicit level wins over `RUST_LOG` directives.
    #[must_use]
    pub const fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self.explicit_level = true;
        self
    }

    /// Build the filter
    ///
    /// Precedence: an explicit level from [`Self::with_level`], then `RUST_LOG`
    /// verbatim, then the configured level. Level-based filters apply to the
    /// workspace crates and keep `warn` for everything else.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        if !self.explicit_level {
            if let Ok(directives) = env::var("RUST_LOG") {
                return EnvFilter::new(directives);
            }
        }
        WORKSPACE_TARGETS
            .into_iter()
            .fold(EnvFilter::new("warn"), |filter, target| {
                match format!("{target}={}", self.level).parse::<Directive>() {
                    Ok(directive) => filter.add_directive(directive),
                    Err(_) => filter,
                }
            })
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber has already been installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events)
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .pretty()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events);

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE);

                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "fridge intelligence starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread,
                    "spans": self.include_spans
                }
            }
        });

        info!("Configuration loaded: {config_summary}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_str_or_default(" pretty "), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str_or_default("nonsense"), LogFormat::Compact);
    }

    #[test]
    fn test_default_config_targets_cli() {
        let config = LoggingConfig::default().with_level(LogLevel::Debug);
        assert_eq!(config.level, LogLevel::Debug);
        assert!(config.explicit_level);
        assert_eq!(config.service_name, "fridge-cli");
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    #[serial]
    fn test_rust_log_is_used_verbatim_without_explicit_level() {
        env::set_var("RUST_LOG", "error");
        let config = LoggingConfig::from_env();
        let filter = config.env_filter().to_string();
        env::remove_var("RUST_LOG");

        assert_eq!(config.level, LogLevel::Error);
        assert!(!config.explicit_level);
        assert!(filter.contains("error"));
        assert!(!filter.contains("fridge_inventory"));
    }

    #[test]
    #[serial]
    fn test_explicit_level_wins_over_rust_log() {
        env::set_var("RUST_LOG", "error");
        let filter = LoggingConfig::from_env()
            .with_level(LogLevel::Debug)
            .env_filter()
            .to_string();
        env::remove_var("RUST_LOG");

        assert!(filter.contains("fridge_inventory=debug"));
        assert!(filter.contains("fridge_intelligence=debug"));
        assert!(filter.contains("warn"));
    }

    #[test]
    #[serial]
    fn test_default_filter_targets_workspace_crates() {
        env::remove_var("RUST_LOG");
        let filter = LoggingConfig::from_env().env_filter().to_string();
        assert!(filter.contains("fridge_core=warn"));
    }
}
