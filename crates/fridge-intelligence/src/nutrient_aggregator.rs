// ABOUTME: Sums per-item nutrition snapshots into display-ready macro-nutrient totals
// ABOUTME: Order-independent aggregation, fixed bar-chart breakdown, and an energy consistency check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrient aggregator
//!
//! Snapshots are taken as already scaled to each item's stored quantity and are
//! never multiplied by it. Items without a snapshot, and absent fields within a
//! snapshot, contribute zero.
//!
//! Floating point addition is not associative, so each field is summed over its
//! values in `total_cmp` order. The result is therefore bit-identical for any
//! permutation of the input.

use crate::config::NutritionConfig;
use fridge_core::constants::nutrition::{CARBS_LABEL, FAT_LABEL, PROTEIN_LABEL, SUGAR_LABEL};
use fridge_core::models::{Item, ItemId, NutritionSnapshot};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Field-wise nutrition totals over a collection of items
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
    /// Sugar in grams
    pub sugar: f64,
}

impl NutritionTotals {
    /// Total energy in kcal, reported separately from the macro bars
    #[must_use]
    pub const fn total_calories(&self) -> f64 {
        self.calories
    }

    /// Display breakdown in fixed order: protein, carbs, sugar, fat
    #[must_use]
    pub fn breakdown(&self) -> Vec<NutrientBar> {
        vec![
            NutrientBar::new(PROTEIN_LABEL, self.protein),
            NutrientBar::new(CARBS_LABEL, self.carbs),
            NutrientBar::new(SUGAR_LABEL, self.sugar),
            NutrientBar::new(FAT_LABEL, self.fat),
        ]
    }
}

/// One labelled bar of the macro breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientBar {
    /// Display label, e.g. `"Protein (g)"`
    pub label: &'static str,
    /// Summed value
    pub value: f64,
}

impl NutrientBar {
    const fn new(label: &'static str, value: f64) -> Self {
        Self { label, value }
    }
}

/// Totals plus bookkeeping useful to dashboards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionReport {
    /// Field-wise totals
    pub totals: NutritionTotals,
    /// Fixed-order macro breakdown
    pub breakdown: Vec<NutrientBar>,
    /// Number of items carrying a snapshot
    pub items_with_nutrition: usize,
    /// Items whose stated calories disagree with their macros
    pub inconsistent_items: Vec<ItemId>,
}

/// Aggregates nutrition snapshots
#[derive(Debug, Clone, Default)]
pub struct NutrientAggregator {
    config: NutritionConfig,
}

#[derive(Default)]
struct FieldValues {
    calories: Vec<f64>,
    protein: Vec<f64>,
    carbs: Vec<f64>,
    fat: Vec<f64>,
    sugar: Vec<f64>,
}

impl FieldValues {
    fn push(&mut self, snapshot: &NutritionSnapshot) {
        let fields = [
            (&mut self.calories, snapshot.calories),
            (&mut self.protein, snapshot.protein),
            (&mut self.carbs, snapshot.carbs),
            (&mut self.fat, snapshot.fat),
            (&mut self.sugar, snapshot.sugar),
        ];
        for (values, field) in fields {
            if let Some(v) = field {
                values.push(v);
            }
        }
    }

    fn totals(self) -> NutritionTotals {
        NutritionTotals {
            calories: canonical_sum(self.calories),
            protein: canonical_sum(self.protein),
            carbs: canonical_sum(self.carbs),
            fat: canonical_sum(self.fat),
            sugar: canonical_sum(self.sugar),
        }
    }
}

fn canonical_sum(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    values.into_iter().sum()
}

impl NutrientAggregator {
    /// Aggregator using the given configuration
    #[must_use]
    pub const fn new(config: NutritionConfig) -> Self {
        Self { config }
    }

    /// Sum every present snapshot field across `items`
    #[must_use]
    pub fn aggregate<'a, I>(&self, items: I) -> NutritionTotals
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let mut values = FieldValues::default();
        for snapshot in items.into_iter().filter_map(|item| item.nutrition.as_ref()) {
            values.push(snapshot);
        }
        values.totals()
    }

    /// Totals, breakdown, and energy consistency findings for `items`
    #[must_use]
    pub fn report<'a, I>(&self, items: I) -> NutritionReport
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let mut values = FieldValues::default();
        let mut items_with_nutrition = 0;
        let mut inconsistent_items = Vec::new();

        for item in items {
            let Some(snapshot) = item.nutrition.as_ref() else {
                continue;
            };
            items_with_nutrition += 1;
            values.push(snapshot);
            if !self.is_energy_consistent(snapshot) {
                warn!(
                    item.id = %item.id,
                    item.name = %item.name,
                    calories = ?snapshot.calories,
                    macro_energy = ?snapshot.energy_from_macros(),
                    "stated calories disagree with macros; snapshot may not be scaled to quantity"
                );
                inconsistent_items.push(item.id);
            }
        }

        let totals = values.totals();
        debug!(
            items_with_nutrition,
            inconsistent = inconsistent_items.len(),
            total_calories = totals.total_calories(),
            "aggregated nutrition"
        );

        NutritionReport {
            breakdown: totals.breakdown(),
            totals,
            items_with_nutrition,
            inconsistent_items,
        }
    }

    /// Compare stated calories with the Atwater estimate from the macro fields
    ///
    /// Snapshots without calories or without any macro are considered
    /// consistent, as are snapshots where both the stated figure and the macro
    /// estimate fall below the configured calorie floor.
    #[must_use]
    pub fn is_energy_consistent(&self, snapshot: &NutritionSnapshot) -> bool {
        let (Some(stated), Some(estimate)) = (snapshot.calories, snapshot.energy_from_macros())
        else {
            return true;
        };
        if stated.max(estimate) < self.config.min_calories_for_energy_check {
            return true;
        }
        if estimate <= 0.0 {
            return false;
        }
        let ratio = stated / estimate;
        let tolerance = self.config.energy_tolerance_ratio;
        ratio <= tolerance && ratio >= tolerance.recip()
    }
}

/// Aggregate with the default configuration
#[must_use]
pub fn aggregate<'a, I>(items: I) -> NutritionTotals
where
    I: IntoIterator<Item = &'a Item>,
{
    NutrientAggregator::default().aggregate(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fridge_core::models::FridgeId;

    fn item(id: i64, nutrition: Option<NutritionSnapshot>) -> Item {
        let item = Item::new(ItemId(id), FridgeId(1), format!("item {id}"));
        match nutrition {
            Some(n) => item.with_nutrition(n),
            None => item,
        }
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let totals = aggregate(&Vec::<Item>::new());
        assert_eq!(totals, NutritionTotals::default());
        assert!(totals.breakdown().iter().all(|bar| bar.value == 0.0));
    }

    #[test]
    fn test_absent_fields_count_as_zero() {
        let items = vec![
            item(1, Some(NutritionSnapshot::with_calories(100.0).protein(5.0))),
            item(2, Some(NutritionSnapshot::default().sugar(3.0).fat(1.5))),
            item(3, None),
        ];
        let totals = aggregate(&items);
        assert_eq!(totals.calories, 100.0);
        assert_eq!(totals.protein, 5.0);
        assert_eq!(totals.carbs, 0.0);
        assert_eq!(totals.fat, 1.5);
        assert_eq!(totals.sugar, 3.0);
        assert_eq!(totals.total_calories(), 100.0);
    }

    #[test]
    fn test_breakdown_order_is_fixed() {
        let labels: Vec<&str> = NutritionTotals::default()
            .breakdown()
            .iter()
            .map(|bar| bar.label)
            .collect();
        assert_eq!(labels, vec!["Protein (g)", "Carbs (g)", "Sugar (g)", "Fat (g)"]);
    }

    #[test]
    fn test_energy_consistency_check() {
        let aggregator = NutrientAggregator::default();
        // 4*10 + 4*20 + 9*5 = 165 kcal
        let consistent = NutritionSnapshot::with_calories(180.0)
            .protein(10.0)
            .carbs(20.0)
            .fat(5.0);
        assert!(aggregator.is_energy_consistent(&consistent));

        // per-unit macros paired with a whole-quantity calorie figure
        let scaled_wrong = NutritionSnapshot::with_calories(1200.0)
            .protein(10.0)
            .carbs(20.0)
            .fat(5.0);
        assert!(!aggregator.is_energy_consistent(&scaled_wrong));

        let no_macro_energy = NutritionSnapshot::with_calories(300.0).protein(0.0);
        assert!(!aggregator.is_energy_consistent(&no_macro_energy));

        assert!(aggregator.is_energy_consistent(&NutritionSnapshot::with_calories(300.0)));
        assert!(aggregator.is_energy_consistent(&NutritionSnapshot::with_calories(5.0).fat(1.0)));
    }

    #[test]
    fn test_energy_floor_uses_larger_of_stated_and_estimate() {
        let aggregator = NutrientAggregator::default();
        // 9*500 = 4500 kcal from macros against a 15 kcal label
        let tiny_label = NutritionSnapshot::with_calories(15.0).fat(500.0);
        assert!(!aggregator.is_energy_consistent(&tiny_label));

        let zero_label = NutritionSnapshot::with_calories(0.0).protein(40.0);
        assert!(!aggregator.is_energy_consistent(&zero_label));
    }

    #[test]
    fn test_report_flags_inconsistent_items_without_changing_totals() {
        let items = vec![
            item(1, Some(NutritionSnapshot::with_calories(1200.0).protein(10.0))),
            item(2, Some(NutritionSnapshot::with_calories(40.0).carbs(10.0))),
            item(3, None),
        ];
        let aggregator = NutrientAggregator::default();
        let report = aggregator.report(&items);

        assert_eq!(report.items_with_nutrition, 2);
        assert_eq!(report.inconsistent_items, vec![ItemId(1)]);
        assert_eq!(report.totals, aggregator.aggregate(&items));
        assert_eq!(report.breakdown.len(), 4);
    }

    #[test]
    fn test_totals_are_bit_identical_under_shuffle() {
        use rand::seq::SliceRandom;
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut items: Vec<Item> = (0..64)
            .map(|id| {
                let snapshot = NutritionSnapshot::with_calories(rng.gen_range(0.0..900.0))
                    .protein(rng.gen_range(0.0..50.0))
                    .carbs(rng.gen_range(0.0..0.3))
                    .fat(rng.gen_range(0.0..1e6));
                item(id, (id % 5 != 0).then_some(snapshot))
            })
            .collect();

        let expected = aggregate(&items);
        for _ in 0..32 {
            items.shuffle(&mut rng);
            let totals = aggregate(&items);
            assert_eq!(totals.calories.to_bits(), expected.calories.to_bits());
            assert_eq!(totals.protein.to_bits(), expected.protein.to_bits());
            assert_eq!(totals.carbs.to_bits(), expected.carbs.to_bits());
            assert_eq!(totals.fat.to_bits(), expected.fat.to_bits());
        }
    }
}
