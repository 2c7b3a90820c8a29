// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for fridge-cli
// ABOUTME: Provides consistent text display for fridges, items, expiring items, nutrition, and recipes

use fridge_intelligence::{NutritionReport, RiskTier};
use fridge_inventory::dashboard::InventoryDashboard;
use fridge_inventory::models::RecipeCandidate;

const RULE_WIDTH: usize = 60;

fn heading(title: &str) {
    println!("\n{title}");
    println!("{}", "=".repeat(RULE_WIDTH));
}

const fn tier_marker(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::Critical => "[!!]",
        RiskTier::Warning => "[! ]",
        RiskTier::Normal | RiskTier::Unknown => "[  ]",
    }
}

/// Per-fridge item counts
pub fn display_fridges(dashboard: &InventoryDashboard) {
    heading(&format!("FRIDGES (as of {})", dashboard.reference_date));
    if dashboard.fridges.is_empty() {
        println!("   No fridges found");
        return;
    }
    for fridge in &dashboard.fridges {
        println!(
            "   #{} {}: {} item(s), {} expired, {} expiring soon, {} undated",
            fridge.id,
            fridge.name,
            fridge.item_count,
            fridge.expired,
            fridge.expiring_soon,
            fridge.undated
        );
    }
}

/// Items in scope, one line each
pub fn display_items(dashboard: &InventoryDashboard) {
    let title = dashboard.search.as_deref().map_or_else(
        || "ITEMS".to_owned(),
        |query| format!("ITEMS matching \"{query}\""),
    );
    heading(&title);
    if dashboard.items.is_empty() {
        println!("   No items found");
        return;
    }
    for entry in &dashboard.items {
        let amount = entry.unit.as_deref().map_or_else(
            || entry.quantity.to_string(),
            |unit| format!("{} {unit}", entry.quantity),
        );
        println!(
            "   {} {} x {amount} (fridge #{}): {}",
            tier_marker(entry.status.risk_tier()),
            entry.name,
            entry.fridge_id,
            entry.label.as_deref().unwrap_or("no date")
        );
    }
}

/// Expired and expiring-soon items
pub fn display_expiring(dashboard: &InventoryDashboard) {
    heading(&format!(
        "EXPIRING (window: {} day(s), as of {})",
        dashboard.window_days, dashboard.reference_date
    ));
    if dashboard.expiring.is_empty() {
        println!("   Nothing expired or expiring soon");
        return;
    }
    for entry in &dashboard.expiring {
        println!(
            "   {} {} (fridge #{}): {}",
            tier_marker(entry.risk_tier),
            entry.name,
            entry.fridge_id,
            entry.label.as_deref().unwrap_or("no date")
        );
    }
}

/// Nutrition totals and breakdown
pub fn display_nutrition(report: &NutritionReport) {
    heading("NUTRITION");
    println!("   Total calories: {:.0} kcal", report.totals.total_calories());
    for bar in &report.breakdown {
        println!("   {:<12} {:>10.1}", bar.label, bar.value);
    }
    println!("   Items with nutrition data: {}", report.items_with_nutrition);
    if !report.inconsistent_items.is_empty() {
        let ids: Vec<String> = report
            .inconsistent_items
            .iter()
            .map(ToString::to_string)
            .collect();
        println!(
            "   Check item(s) {}: stated calories disagree with macros",
            ids.join(", ")
        );
    }
}

/// Recipes with their matching and missing ingredients
pub fn display_recipes(recipes: &[RecipeCandidate]) {
    heading("RECIPES");
    if recipes.is_empty() {
        println!("   No recipes to show");
        return;
    }
    for recipe in recipes {
        let status = if recipe.is_ready() {
            "ready".to_owned()
        } else {
            format!("{} missing", recipe.missing.len())
        };
        println!("   {} ({status})", recipe.title);
        if !recipe.time.is_empty() || !recipe.difficulty.is_empty() {
            println!("      {} {}", recipe.time, recipe.difficulty);
        }
        if !recipe.matching.is_empty() {
            println!("      have: {}", recipe.matching.join(", "));
        }
        if !recipe.missing.is_empty() {
            println!("      need: {}", recipe.missing.join(", "));
        }
    }
}
