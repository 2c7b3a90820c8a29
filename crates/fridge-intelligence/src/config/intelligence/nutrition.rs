// ABOUTME: Nutrient aggregation configuration
// ABOUTME: Tolerance for the stated-versus-macro energy consistency check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fridge_core::constants::nutrition::{
    DEFAULT_ENERGY_TOLERANCE_RATIO, MIN_CALORIES_FOR_ENERGY_CHECK,
};
use serde::{Deserialize, Serialize};

/// Nutrient aggregation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Max ratio (either direction) between stated calories and the Atwater estimate
    pub energy_tolerance_ratio: f64,
    /// Snapshots stating fewer kcal than this skip the energy check
    pub min_calories_for_energy_check: f64,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            energy_tolerance_ratio: DEFAULT_ENERGY_TOLERANCE_RATIO,
            min_calories_for_energy_check: MIN_CALORIES_FOR_ENERGY_CHECK,
        }
    }
}
