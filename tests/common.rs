// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, a reference date, and sample fridges in model and record form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fridge_inventory`

use chrono::{Days, NaiveDate};
use fridge_inventory::models::{Fridge, FridgeId, Item, ItemId, NutritionSnapshot};
use serde_json::{json, Value};
use std::env;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar date shorthand
pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Reference date used by the sample inventory
pub fn reference_date() -> NaiveDate {
    day(2025, 6, 10)
}

pub const KITCHEN: FridgeId = FridgeId(1);
pub const GARAGE: FridgeId = FridgeId(2);

/// Kitchen: Milk (+1 day), Eggs (-2 days), Flour (no date)
/// Garage: Beer (+60 days), Butter (+3 days)
pub fn sample_fridges() -> Vec<Fridge> {
    let today = reference_date();
    vec![
        Fridge::new(KITCHEN, "Kitchen").with_items(vec![
            Item::new(ItemId(1), KITCHEN, "Milk")
                .with_quantity(1.0, Some("l"))
                .with_expiration(day(2025, 6, 11))
                .with_nutrition(
                    NutritionSnapshot::with_calories(640.0)
                        .protein(34.0)
                        .carbs(48.0)
                        .fat(36.0)
                        .sugar(48.0),
                ),
            Item::new(ItemId(2), KITCHEN, "Eggs")
                .with_quantity(6.0, Some("count"))
                .with_expiration(day(2025, 6, 8))
                .with_nutrition(NutritionSnapshot::with_calories(420.0).protein(36.0).fat(30.0)),
            Item::new(ItemId(3), KITCHEN, "Flour").with_quantity(1.0, Some("kg")),
        ]),
        Fridge::new(GARAGE, "Garage").with_items(vec![
            Item::new(ItemId(4), GARAGE, "Beer")
                .with_quantity(6.0, Some("cans"))
                .with_expiration(day(2025, 8, 9)),
            Item::new(ItemId(5), GARAGE, "Butter")
                .with_expiration(today + Days::new(3))
                .with_nutrition(NutritionSnapshot::with_calories(717.0).fat(81.0).protein(0.9)),
        ]),
    ]
}

/// The sample inventory in the inventory API's record shape, with one invalid
/// item record and one malformed date
pub fn sample_inventory_json() -> Value {
    json!([
        {
            "id": 1,
            "name": "Kitchen",
            "items": [
                {
                    "id": 1,
                    "name": "Milk",
                    "quantity": 1.0,
                    "unit": "l",
                    "expiration_date": "2025-06-11",
                    "nutritional_info": {
                        "calories": 640,
                        "protein": 34.0,
                        "carbs": 48.0,
                        "fat": 36.0,
                        "sugar": 48.0,
                        "vitamins": ["Calcium", "Vitamin D"]
                    },
                    "fridge_id": 1
                },
                {
                    "id": 2,
                    "name": "Eggs",
                    "quantity": 6,
                    "expiration_date": "2025-06-08",
                    "nutritional_info": { "calories": 420, "protein": 36.0, "fat": 30.0 },
                    "fridge_id": 1
                },
                { "id": 3, "name": "Flour", "quantity": 1, "unit": "kg", "expiration_date": "soon" },
                { "id": 9, "name": "   ", "quantity": 1 }
            ]
        },
        {
            "id": 2,
            "name": "Garage",
            "items": [
                { "id": 4, "name": "Beer", "quantity": 6, "expiration_date": "2025-08-09" },
                {
                    "id": 5,
                    "name": "Butter",
                    "expiration_date": "2025-06-13",
                    "nutritional_info": { "calories": "717", "fat": 81, "protein": -1 }
                }
            ]
        }
    ])
}

/// Ids of `items` in order
pub fn ids(items: &[Item]) -> Vec<i64> {
    items.iter().map(|item| item.id.0).collect()
}
