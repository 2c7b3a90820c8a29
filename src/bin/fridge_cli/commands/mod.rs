// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Command implementations for fridge-cli
// ABOUTME: Builds the dashboard for each subcommand and prints the requested section

use anyhow::{Context, Result};
use chrono::NaiveDate;
use fridge_inventory::config::AppConfig;
use fridge_inventory::dashboard::{DashboardOptions, InventoryDashboard};
use fridge_inventory::external::parse_recipe_drafts;
use fridge_inventory::models::RecipeDraft;
use fridge_inventory::InventorySnapshot;
use serde::Serialize;
use std::path::Path;
use tokio::fs;
use tracing::info;

use crate::helpers::display;

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub const fn from_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Read a recipe suggestions file; the raw AI response text is accepted as-is
pub async fn load_recipes(path: &Path) -> Result<Vec<RecipeDraft>> {
    let text = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read recipes from {}", path.display()))?;
    let drafts = parse_recipe_drafts(&text)?;
    info!(path = %path.display(), recipes = drafts.len(), "loaded recipe suggestions");
    Ok(drafts)
}

fn build(
    snapshot: &InventorySnapshot,
    today: NaiveDate,
    config: &AppConfig,
    options: DashboardOptions,
) -> Result<InventoryDashboard> {
    Ok(InventoryDashboard::build(
        snapshot,
        today,
        &config.intelligence,
        options,
    )?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Full dashboard
pub fn dashboard(
    snapshot: &InventorySnapshot,
    today: NaiveDate,
    config: &AppConfig,
    options: DashboardOptions,
    format: OutputFormat,
) -> Result<()> {
    let dashboard = build(snapshot, today, config, options)?;
    match format {
        OutputFormat::Json => print_json(&dashboard),
        OutputFormat::Text => {
            display::display_fridges(&dashboard);
            display::display_expiring(&dashboard);
            display::display_nutrition(&dashboard.nutrition);
            if !dashboard.recipes.is_empty() {
                display::display_recipes(&dashboard.recipes);
            }
            Ok(())
        }
    }
}

/// Items in scope
pub fn items(
    snapshot: &InventorySnapshot,
    today: NaiveDate,
    config: &AppConfig,
    options: DashboardOptions,
    format: OutputFormat,
) -> Result<()> {
    let dashboard = build(snapshot, today, config, options)?;
    match format {
        OutputFormat::Json => print_json(&dashboard.items),
        OutputFormat::Text => {
            display::display_items(&dashboard);
            Ok(())
        }
    }
}

/// Expired and expiring-soon items
pub fn expiring(
    snapshot: &InventorySnapshot,
    today: NaiveDate,
    config: &AppConfig,
    options: DashboardOptions,
    format: OutputFormat,
) -> Result<()> {
    let dashboard = build(snapshot, today, config, options)?;
    match format {
        OutputFormat::Json => print_json(&dashboard.expiring),
        OutputFormat::Text => {
            display::display_expiring(&dashboard);
            Ok(())
        }
    }
}

/// Nutrition totals
pub fn nutrition(
    snapshot: &InventorySnapshot,
    today: NaiveDate,
    config: &AppConfig,
    options: DashboardOptions,
    format: OutputFormat,
) -> Result<()> {
    let dashboard = build(snapshot, today, config, options)?;
    match format {
        OutputFormat::Json => print_json(&dashboard.nutrition),
        OutputFormat::Text => {
            display::display_nutrition(&dashboard.nutrition);
            Ok(())
        }
    }
}

/// Recipe readiness
pub fn recipes(
    snapshot: &InventorySnapshot,
    today: NaiveDate,
    config: &AppConfig,
    options: DashboardOptions,
    format: OutputFormat,
) -> Result<()> {
    let dashboard = build(snapshot, today, config, options)?;
    match format {
        OutputFormat::Json => print_json(&dashboard.recipes),
        OutputFormat::Text => {
            display::display_recipes(&dashboard.recipes);
            Ok(())
        }
    }
}
