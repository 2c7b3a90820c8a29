// ABOUTME: Inventory item and fridge models plus the loosely typed records the inventory source delivers
// ABOUTME: Converts ItemRecord/FridgeRecord into validated Item/Fridge values at the boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::nutrition::NutritionSnapshot;
use crate::constants::expiration::DATE_FORMAT;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

/// Opaque item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque fridge identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FridgeId(pub i64);

impl fmt::Display for FridgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One inventory entry owned by exactly one fridge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Item identifier
    pub id: ItemId,
    /// Display name, never empty
    pub name: String,
    /// Stored quantity, always positive
    pub quantity: f64,
    /// Free-text unit ("kg", "count", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Calendar expiration date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Nutrition figures for the whole stored quantity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionSnapshot>,
    /// Owning fridge
    pub fridge_id: FridgeId,
}

impl Item {
    /// Create an item with a quantity of one and no optional data
    #[must_use]
    pub fn new(id: ItemId, fridge_id: FridgeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            quantity: 1.0,
            unit: None,
            expiration_date: None,
            notes: None,
            nutrition: None,
            fridge_id,
        }
    }

    /// Set quantity and optional unit
    #[must_use]
    pub fn with_quantity(mut self, quantity: f64, unit: Option<&str>) -> Self {
        self.quantity = quantity;
        self.unit = unit.map(ToOwned::to_owned);
        self
    }

    /// Set expiration date
    #[must_use]
    pub const fn with_expiration(mut self, date: NaiveDate) -> Self {
        self.expiration_date = Some(date);
        self
    }

    /// Set notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Attach a nutrition snapshot
    #[must_use]
    pub const fn with_nutrition(mut self, nutrition: NutritionSnapshot) -> Self {
        self.nutrition = Some(nutrition);
        self
    }
}

/// A named container of items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fridge {
    /// Fridge identifier
    pub id: FridgeId,
    /// Display name
    pub name: String,
    /// Owned items in retrieval order
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Fridge {
    /// Create an empty fridge
    #[must_use]
    pub fn new(id: FridgeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Add items
    #[must_use]
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items.extend(items);
        self
    }
}

/// Parse an expiration date as delivered by the inventory source
///
/// Accepts `YYYY-MM-DD` and RFC 3339 timestamps (the date part is kept, time of
/// day is discarded). Anything else yields `None` and a warning so that the item
/// is classified as having no date instead of failing.
#[must_use]
pub fn parse_expiration_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.date_naive());
    }
    warn!(raw = %trimmed, "unparseable expiration date, treating as unknown");
    None
}

const fn default_quantity() -> f64 {
    1.0
}

/// Item as delivered by the inventory source (original backend JSON shape)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Item identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Quantity, defaults to one
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    /// Free-text unit
    #[serde(default)]
    pub unit: Option<String>,
    /// Expiration date as text
    #[serde(default)]
    pub expiration_date: Option<String>,
    /// Nutrition estimate as arbitrary JSON
    #[serde(default)]
    pub nutritional_info: Option<Value>,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Owning fridge as reported by the record itself
    #[serde(default)]
    pub fridge_id: Option<i64>,
}

impl ItemRecord {
    /// Validate and convert into an [`Item`] owned by `fridge_id`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank name and `ValueOutOfRange` for a
    /// non-positive or non-finite quantity. Malformed dates and nutrition data
    /// degrade to `None` rather than failing.
    pub fn into_item(self, fridge_id: FridgeId) -> AppResult<Item> {
        let context = format!("item {}", self.id);

        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input(format!(
                "{context}: name must not be empty"
            )));
        }
        if !self.quantity.is_finite() || self.quantity <= 0.0 {
            return Err(AppError::out_of_range(format!(
                "{context}: quantity must be positive, got {}",
                self.quantity
            )));
        }
        if let Some(reported) = self.fridge_id {
            if reported != fridge_id.0 {
                warn!(
                    item.id = self.id,
                    reported_fridge = reported,
                    owning_fridge = fridge_id.0,
                    "item record reports a different fridge, using the owning fridge"
                );
            }
        }

        let nutrition = self
            .nutritional_info
            .as_ref()
            .and_then(|value| NutritionSnapshot::from_json(value, &context));

        Ok(Item {
            id: ItemId(self.id),
            name: name.to_owned(),
            quantity: self.quantity,
            unit: non_blank(self.unit),
            expiration_date: self
                .expiration_date
                .as_deref()
                .and_then(parse_expiration_date),
            notes: non_blank(self.notes),
            nutrition,
            fridge_id,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Fridge as delivered by the inventory source, with embedded item records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FridgeRecord {
    /// Fridge identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Embedded item records
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

/// Result of converting a [`FridgeRecord`]
#[derive(Debug)]
pub struct ConvertedFridge {
    /// The fridge with every item that converted cleanly
    pub fridge: Fridge,
    /// Errors for item records that were rejected
    pub rejected: Vec<AppError>,
}

impl FridgeRecord {
    /// Convert the fridge, keeping every item that passes validation
    #[must_use]
    pub fn into_fridge(self) -> ConvertedFridge {
        let fridge_id = FridgeId(self.id);
        let (items, rejected) = convert_items(self.items, fridge_id);
        ConvertedFridge {
            fridge: Fridge {
                id: fridge_id,
                name: self.name,
                items,
            },
            rejected,
        }
    }
}

/// Convert a batch of item records, separating failures from valid items
#[must_use]
pub fn convert_items(records: Vec<ItemRecord>, fridge_id: FridgeId) -> (Vec<Item>, Vec<AppError>) {
    let mut items = Vec::with_capacity(records.len());
    let mut rejected = Vec::new();
    for record in records {
        match record.into_item(fridge_id) {
            Ok(item) => items.push(item),
            Err(e) => {
                warn!(fridge.id = %fridge_id, error = %e, "rejecting item record");
                rejected.push(e);
            }
        }
    }
    debug!(
        fridge.id = %fridge_id,
        accepted = items.len(),
        rejected = rejected.len(),
        "converted item records"
    );
    (items, rejected)
}
