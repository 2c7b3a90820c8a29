// ABOUTME: Inventory intelligence engine: expiration risk, nutrient totals, recipe matching, aggregation
// ABOUTME: Pure, synchronous computations over fridge inventory snapshots with explicit inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fridge Intelligence Engine
//!
//! Deterministic computations over the items in one or more fridges. Nothing
//! here reads the clock or ambient configuration: the reference date and the
//! relevant configuration section are always passed in by the caller.
//!
//! ## Modules
//!
//! - **expiration**: expiration status, risk tier and label per item
//! - **`nutrient_aggregator`**: order-independent macro totals for display
//! - **`recipe_matcher`**: matching/missing partitions and ready-recipe filtering
//! - **inventory**: per-fridge lists flattened into the global inventory, name search
//! - **config**: engine configuration with environment overrides

// Re-export fridge-core modules so callers need a single dependency
pub use fridge_core::constants;
pub use fridge_core::errors;
pub use fridge_core::models;

/// Engine configuration
pub mod config;
/// Expiration classification
pub mod expiration;
/// Global inventory composition
pub mod inventory;
/// Nutrition aggregation
pub mod nutrient_aggregator;
/// Recipe to inventory matching
pub mod recipe_matcher;

pub use config::{IntelligenceConfig, MatchPolicy};
pub use expiration::{ExpirationClassifier, ExpirationStatus, ExpiringItem, RiskTier};
pub use inventory::{filter_items_by_name, flatten_global_inventory, InventorySnapshot};
pub use nutrient_aggregator::{NutrientAggregator, NutrientBar, NutritionReport, NutritionTotals};
pub use recipe_matcher::{filter_ready, match_ingredients, IngredientMatch, RecipeMatcher};
