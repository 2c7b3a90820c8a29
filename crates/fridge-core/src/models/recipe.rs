// ABOUTME: Recipe draft and candidate models for inventory-aware recipe suggestions
// ABOUTME: Drafts come from the recipe source; candidates carry locally derived matching/missing partitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A recipe as supplied by the recipe source, before inventory matching
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDraft {
    /// Recipe title
    pub title: String,
    /// Estimated time as free text ("30 mins")
    #[serde(default)]
    pub time: String,
    /// Difficulty as free text ("Easy", "Medium", "Hard")
    #[serde(default)]
    pub difficulty: String,
    /// Ordered instruction steps
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Full ingredient list
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl RecipeDraft {
    /// Create a draft with a title and nothing else
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            time: String::new(),
            difficulty: String::new(),
            instructions: Vec::new(),
            ingredients: Vec::new(),
        }
    }

    /// Set estimated time
    #[must_use]
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    /// Set difficulty
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    /// Add an instruction step
    #[must_use]
    pub fn with_instruction(mut self, step: impl Into<String>) -> Self {
        self.instructions.push(step.into());
        self
    }

    /// Add ingredients
    #[must_use]
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients
            .extend(ingredients.into_iter().map(Into::into));
        self
    }
}

/// A recipe whose ingredients have been matched against an inventory snapshot
///
/// `matching` and `missing` partition `ingredients`, both in the recipe's
/// original order. They are only meaningful for the inventory they were
/// computed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeCandidate {
    /// Recipe title
    pub title: String,
    /// Estimated time as free text
    pub time: String,
    /// Difficulty as free text
    pub difficulty: String,
    /// Ordered instruction steps
    pub instructions: Vec<String>,
    /// Full ingredient list
    pub ingredients: Vec<String>,
    /// Ingredients present in the inventory
    pub matching: Vec<String>,
    /// Ingredients absent from the inventory
    pub missing: Vec<String>,
}

impl RecipeCandidate {
    /// Assemble a candidate from a draft and its computed partitions
    #[must_use]
    pub fn from_draft(draft: RecipeDraft, matching: Vec<String>, missing: Vec<String>) -> Self {
        Self {
            title: draft.title,
            time: draft.time,
            difficulty: draft.difficulty,
            instructions: draft.instructions,
            ingredients: draft.ingredients,
            matching,
            missing,
        }
    }

    /// True when every ingredient is already in the inventory
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.missing.is_empty()
    }
}
