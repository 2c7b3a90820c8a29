// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Expiration windows, nutrient labels, energy factors, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by domain.

/// Expiration classification constants
pub mod expiration {
    /// Items expiring within this many days (inclusive) are "expiring soon"
    pub const DEFAULT_EXPIRING_SOON_DAYS: u32 = 3;
    /// Upper bound accepted for a configured expiring-soon window
    pub const MAX_EXPIRING_SOON_DAYS: u32 = 30;
    /// Accepted calendar date format for expiration dates
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Nutrient display labels and energy conversion factors
pub mod nutrition {
    /// Display label for protein
    pub const PROTEIN_LABEL: &str = "Protein (g)";
    /// Display label for carbohydrates
    pub const CARBS_LABEL: &str = "Carbs (g)";
    /// Display label for sugar
    pub const SUGAR_LABEL: &str = "Sugar (g)";
    /// Display label for fat
    pub const FAT_LABEL: &str = "Fat (g)";

    /// Atwater factor: kcal per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Atwater factor: kcal per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Atwater factor: kcal per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

    /// Default max ratio between stated and macro-derived calories
    pub const DEFAULT_ENERGY_TOLERANCE_RATIO: f64 = 2.0;
    /// Below this many stated kcal the energy check is skipped
    pub const MIN_CALORIES_FOR_ENERGY_CHECK: f64 = 20.0;
}

/// JSON keys used by the inventory source and the AI collaborator
pub mod fields {
    /// Calories key
    pub const CALORIES: &str = "calories";
    /// Protein key
    pub const PROTEIN: &str = "protein";
    /// Carbohydrates key
    pub const CARBS: &str = "carbs";
    /// Fat key
    pub const FAT: &str = "fat";
    /// Sugar key
    pub const SUGAR: &str = "sugar";
}

/// Environment variable names
pub mod env_vars {
    /// Expiring-soon window in days
    pub const EXPIRING_SOON_DAYS: &str = "FRIDGE_EXPIRING_SOON_DAYS";
    /// Recipe ingredient match policy (`exact` or `substring`)
    pub const RECIPE_MATCH_POLICY: &str = "FRIDGE_RECIPE_MATCH_POLICY";
    /// Energy consistency tolerance ratio
    pub const ENERGY_TOLERANCE_RATIO: &str = "FRIDGE_ENERGY_TOLERANCE_RATIO";
    /// Default inventory snapshot path for the CLI
    pub const INVENTORY_PATH: &str = "FRIDGE_INVENTORY_PATH";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name of the CLI service
    pub const FRIDGE_CLI: &str = "fridge-cli";
}
