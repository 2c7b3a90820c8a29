// ABOUTME: Configuration module for the fridge intelligence tools
// ABOUTME: Re-exports environment configuration and the engine configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! - **Environment**: deployment mode, log level, inventory location
//! - **Intelligence**: engine settings (expiring-soon window, energy check, match policy)

/// Environment configuration
pub mod environment;

pub use environment::{AppConfig, Environment, LogLevel};

// Re-export engine configuration types
pub use fridge_intelligence::config::{
    ConfigError, ExpirationConfig, IntelligenceConfig, MatchPolicy, MatchingConfig,
    NutritionConfig,
};
