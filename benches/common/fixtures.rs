// ABOUTME: Benchmark fixtures for generating realistic fridge inventories
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating fridge inventories and recipe drafts.

use chrono::{Days, NaiveDate};
use fridge_inventory::models::{Fridge, FridgeId, Item, ItemId, NutritionSnapshot, RecipeDraft};
use fridge_inventory::InventorySnapshot;

/// Pantry vocabulary used for item names and recipe ingredients
const PANTRY: [&str; 24] = [
    "Milk", "Eggs", "Flour", "Butter", "Cheddar", "Yogurt", "Spinach", "Carrots",
    "Chicken Breast", "Ground Beef", "Salmon", "Tofu", "Rice", "Pasta", "Tomatoes",
    "Onions", "Garlic", "Apples", "Lemons", "Cream", "Bacon", "Ham", "Lettuce", "Peppers",
];

/// Predefined inventory sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum InventorySize {
    /// One fridge with a handful of items
    Small,
    /// A household (a few fridges, ~100 items)
    Medium,
    /// A shared kitchen (many fridges, ~1000 items)
    Large,
}

impl InventorySize {
    #[must_use]
    pub const fn fridges(self) -> usize {
        match self {
            Self::Small => 1,
            Self::Medium => 4,
            Self::Large => 20,
        }
    }

    #[must_use]
    pub const fn items_per_fridge(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 25,
            Self::Large => 50,
        }
    }

    #[must_use]
    pub const fn total_items(self) -> usize {
        self.fridges() * self.items_per_fridge()
    }
}

/// Fixed reference date so runs are comparable
#[must_use]
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 10).unwrap_or_default()
}

#[allow(clippy::cast_possible_wrap, clippy::cast_precision_loss)]
fn generate_item(index: usize, fridge_id: FridgeId) -> Item {
    let today = reference_date();
    let name = PANTRY[index % PANTRY.len()];
    let mut item = Item::new(ItemId(index as i64), fridge_id, name)
        .with_quantity(1.0 + (index % 5) as f64, Some("count"));

    // spread dates from 5 days past to 25 days ahead, one item in seven undated
    if index % 7 != 0 {
        let offset = (index % 31) as u64;
        if let Some(date) = (today - Days::new(5)).checked_add_days(Days::new(offset)) {
            item = item.with_expiration(date);
        }
    }
    if index % 3 != 0 {
        item = item.with_nutrition(
            NutritionSnapshot::with_calories(50.0 + (index * 37 % 900) as f64)
                .protein((index * 7 % 40) as f64)
                .carbs((index * 11 % 90) as f64)
                .fat((index * 5 % 30) as f64)
                .sugar((index * 3 % 25) as f64),
        );
    }
    item
}

/// Generate an inventory snapshot of the given size
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn generate_snapshot(size: InventorySize) -> InventorySnapshot {
    let per_fridge = size.items_per_fridge();
    let fridges = (0..size.fridges())
        .map(|fridge_index| {
            let fridge_id = FridgeId(fridge_index as i64 + 1);
            let items = (0..per_fridge)
                .map(|slot| generate_item(fridge_index * per_fridge + slot, fridge_id))
                .collect();
            Fridge::new(fridge_id, format!("Fridge {}", fridge_index + 1)).with_items(items)
        })
        .collect();
    InventorySnapshot::from_fridges(fridges)
}

/// Generate recipe drafts with 6 to 10 ingredients each
#[must_use]
pub fn generate_recipes(count: usize) -> Vec<RecipeDraft> {
    (0..count)
        .map(|index| {
            let ingredient_count = 6 + index % 5;
            let ingredients = (0..ingredient_count).map(|k| PANTRY[(index * 5 + k * 3) % PANTRY.len()]);
            RecipeDraft::new(format!("Recipe {index}"))
                .with_time("30 min")
                .with_difficulty("Medium")
                .with_ingredients(ingredients)
        })
        .collect()
}
