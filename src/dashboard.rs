// ABOUTME: Composes the engine components into a single inventory dashboard view
// ABOUTME: Per-fridge summaries, expiring items, nutrition report, and matched recipes for one reference date

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Inventory dashboard
//!
//! Everything is computed from one [`InventorySnapshot`] and one reference
//! date, so the sections always agree with each other. Scoping to a single
//! fridge restricts every section to that fridge's items. A name search
//! narrows the item sections (fridge counts, item list, expiring items,
//! nutrition) while recipes are still matched against everything in scope.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use fridge_core::models::{Fridge, FridgeId, Item, ItemId, RecipeCandidate, RecipeDraft};
use fridge_intelligence::expiration::{ExpirationClassifier, ExpirationStatus, RiskTier};
use fridge_intelligence::nutrient_aggregator::{NutrientAggregator, NutritionReport};
use fridge_intelligence::recipe_matcher::{filter_ready, RecipeMatcher};
use fridge_intelligence::{filter_items_by_name, IntelligenceConfig, InventorySnapshot};
use serde::Serialize;
use tracing::debug;

/// What to include in a dashboard
#[derive(Debug, Clone, Default)]
pub struct DashboardOptions {
    /// Restrict every section to one fridge
    pub fridge: Option<FridgeId>,
    /// Recipe drafts to match against the inventory
    pub recipes: Vec<RecipeDraft>,
    /// Keep only recipes with nothing missing
    pub ready_only: bool,
    /// Case-insensitive name search over the items in scope
    pub search: Option<String>,
}

impl DashboardOptions {
    /// Scope to one fridge
    #[must_use]
    pub const fn for_fridge(mut self, fridge_id: FridgeId) -> Self {
        self.fridge = Some(fridge_id);
        self
    }

    /// Recipe drafts to evaluate
    #[must_use]
    pub fn with_recipes(mut self, recipes: Vec<RecipeDraft>) -> Self {
        self.recipes = recipes;
        self
    }

    /// Only report ready-to-cook recipes
    #[must_use]
    pub const fn ready_only(mut self, ready_only: bool) -> Self {
        self.ready_only = ready_only;
        self
    }

    /// Narrow the item sections to names containing `query`
    #[must_use]
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    fn narrow(&self, items: &[Item]) -> Vec<Item> {
        self.search
            .as_deref()
            .map_or_else(|| items.to_vec(), |query| filter_items_by_name(items, query))
    }
}

/// Item counts for one fridge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FridgeSummary {
    /// Fridge identifier
    pub id: FridgeId,
    /// Display name
    pub name: String,
    /// Number of items
    pub item_count: usize,
    /// Items already expired
    pub expired: usize,
    /// Items expiring within the window
    pub expiring_soon: usize,
    /// Items without an expiration date
    pub undated: usize,
}

/// One item in scope with its expiration status
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemEntry {
    /// Item identifier
    pub item_id: ItemId,
    /// Item name
    pub name: String,
    /// Owning fridge
    pub fridge_id: FridgeId,
    /// Amount on hand
    pub quantity: f64,
    /// Unit of `quantity`
    pub unit: Option<String>,
    /// Expiration status
    pub status: ExpirationStatus,
    /// Display label
    pub label: Option<String>,
}

/// One expired or expiring-soon item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiringEntry {
    /// Item identifier
    pub item_id: ItemId,
    /// Item name
    pub name: String,
    /// Owning fridge
    pub fridge_id: FridgeId,
    /// Expiration status
    pub status: ExpirationStatus,
    /// Risk tier for highlighting
    pub risk_tier: RiskTier,
    /// Display label
    pub label: Option<String>,
}

/// Combined inventory view for one reference date
#[derive(Debug, Clone, Serialize)]
pub struct InventoryDashboard {
    /// Date every expiration status is relative to
    pub reference_date: NaiveDate,
    /// Expiring-soon window used
    pub window_days: u32,
    /// Name search applied to the item sections
    pub search: Option<String>,
    /// Per-fridge summaries in declared order
    pub fridges: Vec<FridgeSummary>,
    /// Items in scope, in inventory order
    pub items: Vec<ItemEntry>,
    /// Expired and expiring-soon items in inventory order
    pub expiring: Vec<ExpiringEntry>,
    /// Nutrition totals and findings
    pub nutrition: NutritionReport,
    /// Recipes matched against the inventory, in draft order
    pub recipes: Vec<RecipeCandidate>,
}

impl InventoryDashboard {
    /// Build the dashboard
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the scoped fridge is not in the snapshot
    pub fn build(
        snapshot: &InventorySnapshot,
        reference_date: NaiveDate,
        config: &IntelligenceConfig,
        options: DashboardOptions,
    ) -> AppResult<Self> {
        let classifier = ExpirationClassifier::from_config(&config.expiration);
        let aggregator = NutrientAggregator::new(config.nutrition.clone());
        let matcher = RecipeMatcher::from_config(&config.matching);

        let (fridges, in_scope) = scoped(snapshot, options.fridge)?;
        let items = options.narrow(&in_scope);

        let summaries = fridges
            .iter()
            .map(|fridge| {
                let fridge_items = options.narrow(snapshot.items_for(fridge.id));
                summarize(fridge, &fridge_items, &classifier, reference_date)
            })
            .collect();

        let listed = items
            .iter()
            .map(|item| ItemEntry {
                item_id: item.id,
                name: item.name.clone(),
                fridge_id: item.fridge_id,
                quantity: item.quantity,
                unit: item.unit.clone(),
                status: classifier.classify_item(item, reference_date),
                label: classifier.label(item.expiration_date, reference_date),
            })
            .collect();

        let expiring = classifier
            .expiring_items(&items, reference_date)
            .into_iter()
            .map(|flagged| ExpiringEntry {
                item_id: flagged.item.id,
                name: flagged.item.name.clone(),
                fridge_id: flagged.item.fridge_id,
                status: flagged.status,
                risk_tier: flagged.status.risk_tier(),
                label: flagged.label,
            })
            .collect();

        let nutrition = aggregator.report(&items);

        let mut recipes = matcher.evaluate_all(options.recipes, &in_scope);
        if options.ready_only {
            recipes = filter_ready(recipes);
        }

        debug!(
            %reference_date,
            items = items.len(),
            recipes = recipes.len(),
            "built inventory dashboard"
        );

        Ok(Self {
            reference_date,
            window_days: classifier.window_days(),
            search: options.search,
            fridges: summaries,
            items: listed,
            expiring,
            nutrition,
            recipes,
        })
    }
}

fn scoped(
    snapshot: &InventorySnapshot,
    fridge: Option<FridgeId>,
) -> AppResult<(Vec<&Fridge>, Vec<Item>)> {
    match fridge {
        None => Ok((snapshot.fridges.iter().collect(), snapshot.flatten())),
        Some(fridge_id) => {
            let fridge = snapshot
                .fridge(fridge_id)
                .ok_or_else(|| AppError::not_found(format!("Fridge {fridge_id}")))?;
            Ok((vec![fridge], snapshot.items_for(fridge_id).to_vec()))
        }
    }
}

fn summarize(
    fridge: &Fridge,
    items: &[Item],
    classifier: &ExpirationClassifier,
    reference_date: NaiveDate,
) -> FridgeSummary {
    let mut summary = FridgeSummary {
        id: fridge.id,
        name: fridge.name.clone(),
        item_count: items.len(),
        expired: 0,
        expiring_soon: 0,
        undated: 0,
    };
    for item in items {
        match classifier.classify_item(item, reference_date) {
            ExpirationStatus::Expired { .. } => summary.expired += 1,
            ExpirationStatus::ExpiringSoon { .. } => summary.expiring_soon += 1,
            ExpirationStatus::Unknown => summary.undated += 1,
            ExpirationStatus::Fresh => {}
        }
    }
    summary
}
