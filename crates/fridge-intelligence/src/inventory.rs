// ABOUTME: Composes per-fridge item lists into the global inventory view used by the engine
// ABOUTME: Flattening follows declared fridge order; name search keeps input order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Inventory aggregation
//!
//! Item lists are typically fetched per fridge and concurrently, so they may
//! arrive in any order. The global view depends only on the declared fridge
//! order, never on arrival order.

use crate::recipe_matcher::normalize_name;
use fridge_core::models::{Fridge, FridgeId, Item};
use std::collections::HashMap;
use std::mem;
use tracing::debug;

/// Concatenate each fridge's items in declared fridge order
///
/// A fridge absent from `items_by_fridge`, or mapped to an empty list,
/// contributes nothing.
#[must_use]
pub fn flatten_global_inventory(
    fridges: &[Fridge],
    items_by_fridge: &HashMap<FridgeId, Vec<Item>>,
) -> Vec<Item> {
    let mut inventory = Vec::new();
    for fridge in fridges {
        match items_by_fridge.get(&fridge.id) {
            Some(items) if !items.is_empty() => inventory.extend_from_slice(items),
            Some(_) => {}
            None => debug!(fridge.id = %fridge.id, "no item list for fridge"),
        }
    }
    inventory
}

/// Items whose name contains `query`, ignoring case, in input order
///
/// Surrounding whitespace in the query is ignored and a blank query keeps
/// every item.
#[must_use]
pub fn filter_items_by_name(items: &[Item], query: &str) -> Vec<Item> {
    let needle = normalize_name(query);
    if needle.is_empty() {
        return items.to_vec();
    }
    let found: Vec<Item> = items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    debug!(query = %needle, total = items.len(), found = found.len(), "filtered items by name");
    found
}

/// Fridges plus their item lists, keyed by fridge id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventorySnapshot {
    /// Fridges in declared order
    pub fridges: Vec<Fridge>,
    /// Items per fridge, in retrieval order
    pub items_by_fridge: HashMap<FridgeId, Vec<Item>>,
}

impl InventorySnapshot {
    /// Snapshot from explicitly fetched item lists
    #[must_use]
    pub const fn new(fridges: Vec<Fridge>, items_by_fridge: HashMap<FridgeId, Vec<Item>>) -> Self {
        Self {
            fridges,
            items_by_fridge,
        }
    }

    /// Snapshot from fridges carrying their own items
    ///
    /// The embedded item lists move into `items_by_fridge`.
    #[must_use]
    pub fn from_fridges(fridges: Vec<Fridge>) -> Self {
        let mut items_by_fridge = HashMap::with_capacity(fridges.len());
        let fridges = fridges
            .into_iter()
            .map(|mut fridge| {
                let items = mem::take(&mut fridge.items);
                items_by_fridge
                    .entry(fridge.id)
                    .or_insert_with(Vec::new)
                    .extend(items);
                fridge
            })
            .collect();
        Self {
            fridges,
            items_by_fridge,
        }
    }

    /// Global inventory in declared fridge order
    #[must_use]
    pub fn flatten(&self) -> Vec<Item> {
        flatten_global_inventory(&self.fridges, &self.items_by_fridge)
    }

    /// Items of one fridge, empty if unknown
    #[must_use]
    pub fn items_for(&self, fridge_id: FridgeId) -> &[Item] {
        self.items_by_fridge
            .get(&fridge_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Fridge by id
    #[must_use]
    pub fn fridge(&self, fridge_id: FridgeId) -> Option<&Fridge> {
        self.fridges.iter().find(|fridge| fridge.id == fridge_id)
    }

    /// Total number of items across all fridges
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items_by_fridge.values().map(Vec::len).sum()
    }
}
