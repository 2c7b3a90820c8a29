// ABOUTME: Integration tests for nutrient aggregation across the inventory
// ABOUTME: Covers missing snapshots, order independence, energy consistency, and the breakdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, sample_fridges};
use fridge_intelligence::config::NutritionConfig;
use fridge_intelligence::nutrient_aggregator::aggregate;
use fridge_intelligence::{InventorySnapshot, NutrientAggregator, NutritionTotals};
use fridge_inventory::models::{FridgeId, Item, ItemId, NutritionSnapshot};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn item(id: i64, nutrition: Option<NutritionSnapshot>) -> Item {
    let item = Item::new(ItemId(id), FridgeId(1), format!("item {id}"));
    match nutrition {
        Some(snapshot) => item.with_nutrition(snapshot),
        None => item,
    }
}

#[test]
fn test_sums_present_fields_only() {
    let items = vec![
        item(1, Some(NutritionSnapshot::with_calories(150.0).protein(10.0))),
        item(2, None),
        item(3, Some(NutritionSnapshot::with_calories(50.0))),
    ];

    let totals = aggregate(&items);
    assert!((totals.calories - 200.0).abs() < f64::EPSILON);
    assert!((totals.protein - 10.0).abs() < f64::EPSILON);
    assert!(totals.carbs.abs() < f64::EPSILON);
    assert!(totals.fat.abs() < f64::EPSILON);
    assert!(totals.sugar.abs() < f64::EPSILON);
}

#[test]
fn test_items_without_snapshots_produce_zero_totals() {
    let items = vec![item(1, None), item(2, None)];
    assert_eq!(aggregate(&items), NutritionTotals::default());
    assert_eq!(aggregate(&Vec::<Item>::new()), NutritionTotals::default());
}

#[test]
fn test_totals_do_not_depend_on_item_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut items: Vec<Item> = (0..200)
        .map(|id| {
            let snapshot = rng.gen_bool(0.8).then(|| {
                NutritionSnapshot::with_calories(rng.gen_range(0.0..1500.0))
                    .protein(rng.gen_range(0.0..80.0))
                    .carbs(rng.gen_range(0.0..200.0))
                    .fat(rng.gen_range(0.0..90.0))
                    .sugar(rng.gen_range(0.0..50.0))
            });
            item(id, snapshot)
        })
        .collect();

    let expected = aggregate(&items);
    for _ in 0..20 {
        items.shuffle(&mut rng);
        let totals = aggregate(&items);
        assert_eq!(totals.calories.to_bits(), expected.calories.to_bits());
        assert_eq!(totals.protein.to_bits(), expected.protein.to_bits());
        assert_eq!(totals.carbs.to_bits(), expected.carbs.to_bits());
        assert_eq!(totals.fat.to_bits(), expected.fat.to_bits());
        assert_eq!(totals.sugar.to_bits(), expected.sugar.to_bits());
    }
}

#[test]
fn test_report_over_sample_inventory() {
    init_test_logging();
    let snapshot = InventorySnapshot::from_fridges(sample_fridges());
    let items = snapshot.flatten();

    let report = NutrientAggregator::default().report(&items);

    assert_eq!(report.items_with_nutrition, 3);
    assert!(report.inconsistent_items.is_empty());
    assert!((report.totals.calories - 1777.0).abs() < 1e-9);
    assert!((report.totals.fat - 147.0).abs() < 1e-9);
    let labels: Vec<&str> = report.breakdown.iter().map(|bar| bar.label).collect();
    assert_eq!(labels, vec!["Protein (g)", "Carbs (g)", "Sugar (g)", "Fat (g)"]);
}

#[test]
fn test_energy_mismatch_is_reported_but_still_summed() {
    let items = vec![
        // 100 g of macros described as a whole 1 kg package
        item(1, Some(NutritionSnapshot::with_calories(4000.0).protein(10.0).carbs(20.0).fat(5.0))),
        item(2, Some(NutritionSnapshot::with_calories(165.0).protein(10.0).carbs(20.0).fat(5.0))),
    ];

    let report = NutrientAggregator::default().report(&items);
    assert_eq!(report.inconsistent_items, vec![ItemId(1)]);
    assert!((report.totals.calories - 4165.0).abs() < 1e-9);
}

#[test]
fn test_energy_check_skips_small_and_macro_free_snapshots() {
    let aggregator = NutrientAggregator::default();

    assert!(aggregator.is_energy_consistent(&NutritionSnapshot::with_calories(15.0).fat(1.0)));
    assert!(aggregator.is_energy_consistent(&NutritionSnapshot::with_calories(900.0)));
    assert!(!aggregator.is_energy_consistent(&NutritionSnapshot::with_calories(900.0).sugar(5.0).protein(0.0)));
}

#[test]
fn test_small_label_with_large_macro_estimate_is_flagged() {
    let items = vec![
        // 15 kcal per serving paired with the macros of a whole tub
        item(1, Some(NutritionSnapshot::with_calories(15.0).fat(500.0))),
        item(2, Some(NutritionSnapshot::with_calories(12.0).carbs(2.0))),
    ];

    let report = NutrientAggregator::default().report(&items);
    assert_eq!(report.inconsistent_items, vec![ItemId(1)]);
}

#[test]
fn test_energy_tolerance_is_configurable() {
    let snapshot = NutritionSnapshot::with_calories(300.0).carbs(50.0);
    assert!(NutrientAggregator::default().is_energy_consistent(&snapshot));

    let strict = NutrientAggregator::new(NutritionConfig {
        energy_tolerance_ratio: 1.2,
        ..NutritionConfig::default()
    });
    assert!(!strict.is_energy_consistent(&snapshot));
}
