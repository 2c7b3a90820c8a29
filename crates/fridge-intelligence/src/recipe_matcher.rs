// ABOUTME: Matches recipe ingredients against the flattened inventory and filters ready-to-cook recipes
// ABOUTME: Partitions ingredients into matching/missing in original order using normalized names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe matcher
//!
//! Names are normalized (trimmed, lowercased) identically on both sides. Output
//! lists keep the recipe's original strings, order, and duplicates; each entry
//! lands on exactly one side.

use crate::config::{MatchPolicy, MatchingConfig};
use fridge_core::models::{Item, RecipeCandidate, RecipeDraft};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Partition of a recipe's ingredient list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngredientMatch {
    /// Ingredients found in the inventory
    pub matching: Vec<String>,
    /// Ingredients not found in the inventory
    pub missing: Vec<String>,
}

/// Normalize a name for comparison
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Normalized inventory names for one inventory snapshot
#[derive(Debug, Clone, Default)]
pub struct InventoryNames {
    names: HashSet<String>,
}

impl InventoryNames {
    /// Build the lookup set from items, skipping names that normalize to empty
    #[must_use]
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let names = items
            .into_iter()
            .map(|item| normalize_name(&item.name))
            .filter(|name| !name.is_empty())
            .collect();
        Self { names }
    }

    /// Number of distinct normalized names
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the inventory has no usable names
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn contains(&self, ingredient: &str, policy: MatchPolicy) -> bool {
        let normalized = normalize_name(ingredient);
        if normalized.is_empty() {
            return false;
        }
        match policy {
            MatchPolicy::Exact => self.names.contains(&normalized),
            MatchPolicy::Substring => self.names.iter().any(|name| {
                name.contains(normalized.as_str()) || normalized.contains(name.as_str())
            }),
        }
    }
}

/// Matches recipes against an inventory
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeMatcher {
    policy: MatchPolicy,
}

impl RecipeMatcher {
    /// Matcher with an explicit policy
    #[must_use]
    pub const fn with_policy(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    /// Matcher built from configuration
    #[must_use]
    pub const fn from_config(config: &MatchingConfig) -> Self {
        Self::with_policy(config.policy)
    }

    /// Active policy
    #[must_use]
    pub const fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Partition `recipe_ingredients` against a prepared name set
    #[must_use]
    pub fn partition<S: AsRef<str>>(
        &self,
        recipe_ingredients: &[S],
        inventory: &InventoryNames,
    ) -> IngredientMatch {
        let (matching, missing): (Vec<String>, Vec<String>) = recipe_ingredients
            .iter()
            .map(|ingredient| ingredient.as_ref().to_owned())
            .partition(|ingredient| inventory.contains(ingredient, self.policy));
        IngredientMatch { matching, missing }
    }

    /// Partition `recipe_ingredients` against the items of `inventory`
    #[must_use]
    pub fn match_ingredients<'a, S, I>(&self, recipe_ingredients: &[S], inventory: I) -> IngredientMatch
    where
        S: AsRef<str>,
        I: IntoIterator<Item = &'a Item>,
    {
        self.partition(recipe_ingredients, &InventoryNames::from_items(inventory))
    }

    /// Derive a candidate from a draft; partitions are always computed here
    #[must_use]
    pub fn evaluate(&self, draft: RecipeDraft, inventory: &InventoryNames) -> RecipeCandidate {
        let IngredientMatch { matching, missing } = self.partition(&draft.ingredients, inventory);
        debug!(
            recipe = %draft.title,
            matching = matching.len(),
            missing = missing.len(),
            policy = %self.policy,
            "matched recipe against inventory"
        );
        RecipeCandidate::from_draft(draft, matching, missing)
    }

    /// Evaluate every draft against the same inventory, preserving draft order
    #[must_use]
    pub fn evaluate_all<'a, D, I>(&self, drafts: D, inventory: I) -> Vec<RecipeCandidate>
    where
        D: IntoIterator<Item = RecipeDraft>,
        I: IntoIterator<Item = &'a Item>,
    {
        let names = InventoryNames::from_items(inventory);
        drafts
            .into_iter()
            .map(|draft| self.evaluate(draft, &names))
            .collect()
    }
}

/// Partition with the default exact policy
#[must_use]
pub fn match_ingredients<'a, S, I>(recipe_ingredients: &[S], inventory: I) -> IngredientMatch
where
    S: AsRef<str>,
    I: IntoIterator<Item = &'a Item>,
{
    RecipeMatcher::default().match_ingredients(recipe_ingredients, inventory)
}

/// Keep only recipes with nothing missing, in input order
#[must_use]
pub fn filter_ready<I>(recipes: I) -> Vec<RecipeCandidate>
where
    I: IntoIterator<Item = RecipeCandidate>,
{
    recipes.into_iter().filter(RecipeCandidate::is_ready).collect()
}
