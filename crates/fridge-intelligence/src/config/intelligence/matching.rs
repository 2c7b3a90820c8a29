// ABOUTME: Recipe matcher configuration
// ABOUTME: Selects the ingredient-to-inventory name matching policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a recipe ingredient is compared against inventory item names
///
/// Both sides are normalized (trimmed, lowercased) before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Normalized names must be equal
    #[default]
    Exact,
    /// Either normalized name may contain the other ("chicken" ~ "chicken breast")
    Substring,
}

impl FromStr for MatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "substring" => Ok(Self::Substring),
            other => Err(format!("unknown match policy `{other}`")),
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Substring => write!(f, "substring"),
        }
    }
}

/// Recipe matcher configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Ingredient match policy
    pub policy: MatchPolicy,
}
