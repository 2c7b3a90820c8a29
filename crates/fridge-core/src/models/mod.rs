// ABOUTME: Core data models for the fridge inventory engine
// ABOUTME: Re-exports Item, Fridge, NutritionSnapshot, RecipeDraft, RecipeCandidate and boundary records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Item` / `Fridge`: validated inventory values the engine computes over
//! - `ItemRecord` / `FridgeRecord`: loosely typed records from the inventory source
//! - `NutritionSnapshot`: per-item macro figures scaled to the stored quantity
//! - `RecipeDraft` / `RecipeCandidate`: recipe before and after inventory matching

mod item;
mod nutrition;
mod recipe;

// Inventory domain
pub use item::{
    convert_items, parse_expiration_date, ConvertedFridge, Fridge, FridgeId, FridgeRecord, Item,
    ItemId, ItemRecord,
};

// Nutrition domain
pub use nutrition::NutritionSnapshot;

// Recipe domain
pub use recipe::{RecipeCandidate, RecipeDraft};
