// ABOUTME: Parses text responses from the external AI service into nutrition snapshots and recipe drafts
// ABOUTME: Strips markdown code fences, sanitises nutrient fields, and discards source-claimed recipe partitions

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! AI response parsing
//!
//! The AI service is asked for raw JSON but often wraps it in a markdown code
//! fence. Nutrition answers (item estimates and label OCR alike) are a single
//! JSON object; recipe answers are a JSON array.
//!
//! Recipe entries may carry `matching_ingredients` / `missing_ingredients`
//! instead of a full `ingredients` list. Those claims only seed the ingredient
//! list: the partitions themselves are always recomputed against the local
//! inventory.

use crate::errors::{AppError, AppResult};
use fridge_core::models::{NutritionSnapshot, RecipeDraft};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

const AI_SERVICE: &str = "AI service";

/// Remove a surrounding markdown code fence, if any
///
/// Handles a leading "```json" or bare "```" fence and a trailing "```".
#[must_use]
pub fn strip_code_fences(text: &str) -> &str {
    let mut body = text.trim();
    if let Some(rest) = body.strip_prefix("```json") {
        body = rest;
    } else if let Some(rest) = body.strip_prefix("```") {
        body = rest;
    }
    if let Some(rest) = body.strip_suffix("```") {
        body = rest;
    }
    body.trim()
}

fn parse_json(text: &str) -> AppResult<Value> {
    let body = strip_code_fences(text);
    if body.is_empty() {
        return Err(AppError::external_service(AI_SERVICE, "empty response"));
    }
    serde_json::from_str(body).map_err(|e| {
        AppError::invalid_format(format!("{AI_SERVICE} response is not valid JSON: {e}"))
            .with_source(e)
    })
}

/// Parse a nutrition estimate or nutrition-label response
///
/// Returns `Ok(None)` when the object carries no usable nutrient field.
///
/// # Errors
///
/// Returns `InvalidFormat` if the body is not JSON or not a JSON object, and
/// `ExternalServiceError` if the response is empty
pub fn parse_nutrition_snapshot(text: &str) -> AppResult<Option<NutritionSnapshot>> {
    let value = parse_json(text)?;
    if !value.is_object() {
        return Err(AppError::invalid_format(format!(
            "{AI_SERVICE} nutrition response must be a JSON object"
        )));
    }
    Ok(NutritionSnapshot::from_json(&value, "nutrition response"))
}

#[derive(Debug, Deserialize)]
struct RawRecipe {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    time: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    instructions: Vec<String>,
    #[serde(default)]
    ingredients: Option<Vec<String>>,
    #[serde(default)]
    matching_ingredients: Vec<String>,
    #[serde(default)]
    missing_ingredients: Vec<String>,
}

impl RawRecipe {
    fn into_draft(self) -> AppResult<RecipeDraft> {
        let title = self
            .title
            .filter(|title| !title.trim().is_empty())
            .ok_or_else(|| AppError::missing_field("title"))?;

        let ingredients = self.ingredients.unwrap_or_else(|| {
            self.matching_ingredients
                .into_iter()
                .chain(self.missing_ingredients)
                .collect()
        });

        let mut draft = RecipeDraft::new(title.trim())
            .with_time(self.time.unwrap_or_default())
            .with_difficulty(self.difficulty.unwrap_or_default())
            .with_ingredients(ingredients);
        draft.instructions = self.instructions;
        Ok(draft)
    }
}

/// Parse a recipe suggestion response into drafts, in response order
///
/// Entries that cannot be read (no title, wrong field types) are skipped with
/// a warning.
///
/// # Errors
///
/// Returns `InvalidFormat` if the body is not a JSON array, and
/// `ExternalServiceError` if the response is empty
pub fn parse_recipe_drafts(text: &str) -> AppResult<Vec<RecipeDraft>> {
    let Value::Array(entries) = parse_json(text)? else {
        return Err(AppError::invalid_format(format!(
            "{AI_SERVICE} recipe response must be a JSON array"
        )));
    };

    let total = entries.len();
    let drafts: Vec<RecipeDraft> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let parsed = serde_json::from_value::<RawRecipe>(entry)
                .map_err(AppError::from)
                .and_then(RawRecipe::into_draft);
            match parsed {
                Ok(draft) => Some(draft),
                Err(e) => {
                    warn!(index, error = %e, "skipping unreadable recipe entry");
                    None
                }
            }
        })
        .collect();

    debug!(total, parsed = drafts.len(), "parsed recipe response");
    Ok(drafts)
}
