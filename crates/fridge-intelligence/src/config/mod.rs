// ABOUTME: Configuration module for fridge-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Intelligence engine configuration (expiration window, energy check, match policy)
pub mod intelligence;

pub use intelligence::{
    ConfigError, ExpirationConfig, IntelligenceConfig, MatchPolicy, MatchingConfig,
    NutritionConfig,
};
