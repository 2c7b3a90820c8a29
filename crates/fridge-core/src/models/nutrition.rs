// ABOUTME: Per-item nutrition snapshot model supplied by the external nutrition estimator
// ABOUTME: NutritionSnapshot definition plus lenient sanitising construction from raw JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{fields, nutrition};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Macro-nutrient figures for one item, already scaled to the item's stored quantity
///
/// Every field is independently optional. Present fields are finite and `>= 0`;
/// construction through [`NutritionSnapshot::from_json`] drops anything else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionSnapshot {
    /// Energy in kcal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Protein in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    /// Carbohydrates in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    /// Fat in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    /// Sugar in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
}

impl NutritionSnapshot {
    /// Snapshot with only calories set
    #[must_use]
    pub const fn with_calories(calories: f64) -> Self {
        Self {
            calories: Some(calories),
            protein: None,
            carbs: None,
            fat: None,
            sugar: None,
        }
    }

    /// Set protein grams
    #[must_use]
    pub const fn protein(mut self, grams: f64) -> Self {
        self.protein = Some(grams);
        self
    }

    /// Set carbohydrate grams
    #[must_use]
    pub const fn carbs(mut self, grams: f64) -> Self {
        self.carbs = Some(grams);
        self
    }

    /// Set fat grams
    #[must_use]
    pub const fn fat(mut self, grams: f64) -> Self {
        self.fat = Some(grams);
        self
    }

    /// Set sugar grams
    #[must_use]
    pub const fn sugar(mut self, grams: f64) -> Self {
        self.sugar = Some(grams);
        self
    }

    /// True when no field is present
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.calories.is_none()
            && self.protein.is_none()
            && self.carbs.is_none()
            && self.fat.is_none()
            && self.sugar.is_none()
    }

    /// Energy implied by the macro fields (Atwater 4/4/9), if any macro is present
    #[must_use]
    pub fn energy_from_macros(&self) -> Option<f64> {
        if self.protein.is_none() && self.carbs.is_none() && self.fat.is_none() {
            return None;
        }
        Some(
            self.protein.unwrap_or(0.0) * nutrition::KCAL_PER_GRAM_PROTEIN
                + self.carbs.unwrap_or(0.0) * nutrition::KCAL_PER_GRAM_CARBS
                + self.fat.unwrap_or(0.0) * nutrition::KCAL_PER_GRAM_FAT,
        )
    }

    /// Build a snapshot from an arbitrary JSON value produced by the nutrition estimator
    ///
    /// Returns `None` when the value is not a JSON object or carries no usable
    /// field. Individual fields that are negative, non-finite, or non-numeric are
    /// dropped with a warning; unknown keys (e.g. `vitamins`) are ignored.
    /// `context` identifies the owning record in log output.
    #[must_use]
    pub fn from_json(value: &Value, context: &str) -> Option<Self> {
        let Value::Object(map) = value else {
            if !value.is_null() {
                warn!(record = %context, "nutrition info is not a JSON object, ignoring it");
            }
            return None;
        };

        let field = |key: &str| -> Option<f64> {
            let raw = map.get(key)?;
            let parsed = match raw {
                Value::Null => return None,
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            };
            match parsed {
                Some(v) if v.is_finite() && v >= 0.0 => Some(v),
                _ => {
                    warn!(record = %context, field = key, value = %raw, "dropping invalid nutrient value");
                    None
                }
            }
        };

        let snapshot = Self {
            calories: field(fields::CALORIES),
            protein: field(fields::PROTEIN),
            carbs: field(fields::CARBS),
            fat: field(fields::FAT),
            sugar: field(fields::SUGAR),
        };

        if snapshot.is_empty() {
            None
        } else {
            Some(snapshot)
        }
    }
}
