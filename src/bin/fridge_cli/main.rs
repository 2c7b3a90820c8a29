// ABOUTME: Fridge CLI - command-line view of inventory expiration, nutrition, and recipe readiness
// ABOUTME: Loads an inventory snapshot, runs the intelligence engine, and prints text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Overview of every fridge
//! fridge-cli --inventory inventory.json dashboard
//!
//! # Items expired or expiring within the window, as of a given date
//! fridge-cli --inventory inventory.json --today 2025-06-10 expiring
//!
//! # Nutrition totals for one fridge
//! fridge-cli --inventory inventory.json --fridge 2 nutrition
//!
//! # Items whose name contains "milk", any case
//! fridge-cli --inventory inventory.json --search milk items
//!
//! # Match AI recipe suggestions against the inventory, ready-to-cook only
//! fridge-cli recipes --recipes suggestions.json --ready-only --json
//! ```

mod commands;
mod helpers;

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use fridge_inventory::config::{AppConfig, LogLevel};
use fridge_inventory::constants::expiration::DATE_FORMAT;
use fridge_inventory::dashboard::DashboardOptions;
use fridge_inventory::external::{collect_inventory, JsonFileInventory};
use fridge_inventory::logging::LoggingConfig;
use fridge_inventory::models::FridgeId;
use std::path::PathBuf;
use tracing::{debug, info};

use commands::OutputFormat;

#[derive(Parser)]
#[command(
    name = "fridge-cli",
    about = "Fridge inventory intelligence CLI",
    long_about = "Expiration risk, nutrition totals, and recipe readiness for the items in your fridges."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Inventory snapshot file (JSON list of fridges with their items)
    #[arg(long, global = true, env = "FRIDGE_INVENTORY_PATH")]
    inventory: Option<PathBuf>,

    /// Reference date as YYYY-MM-DD (defaults to the local date)
    #[arg(long, global = true, value_parser = parse_date)]
    today: Option<NaiveDate>,

    /// Restrict output to one fridge id
    #[arg(long, global = true)]
    fridge: Option<i64>,

    /// Only consider items whose name contains this text (case-insensitive)
    #[arg(long, global = true)]
    search: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging for the fridge crates (overrides RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Per-fridge counts, expiring items, nutrition totals, and optional recipes
    Dashboard {
        /// Recipe suggestions file (raw AI response text accepted)
        #[arg(long)]
        recipes: Option<PathBuf>,

        /// Only list recipes with nothing missing
        #[arg(long)]
        ready_only: bool,
    },

    /// Every item in scope with its expiration label
    Items,

    /// Items that are expired or expire within the configured window
    Expiring,

    /// Nutrition totals and macro breakdown
    Nutrition,

    /// Match recipe suggestions against the inventory
    Recipes {
        /// Recipe suggestions file (raw AI response text accepted)
        #[arg(long)]
        recipes: PathBuf,

        /// Only list recipes with nothing missing
        #[arg(long)]
        ready_only: bool,
    },
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|e| format!("expected YYYY-MM-DD, got `{value}`: {e}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level(LogLevel::Debug)
    } else {
        logging
    };
    logging.init()?;

    let config = AppConfig::from_env()?;
    debug!("{}", config.summary());

    let inventory_path = cli
        .inventory
        .or_else(|| config.inventory_path.clone())
        .ok_or_else(|| anyhow!("no inventory file: pass --inventory or set FRIDGE_INVENTORY_PATH"))?;
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let format = OutputFormat::from_flag(cli.json);

    info!(inventory = %inventory_path.display(), %today, "loading inventory");
    let snapshot = collect_inventory(&JsonFileInventory::new(inventory_path)).await?;

    let mut options = DashboardOptions::default();
    if let Some(id) = cli.fridge {
        options = options.for_fridge(FridgeId(id));
    }
    if let Some(query) = cli.search {
        options = options.with_search(query);
    }

    match cli.command {
        Command::Dashboard {
            recipes,
            ready_only,
        } => {
            if let Some(path) = recipes {
                options = options.with_recipes(commands::load_recipes(&path).await?);
            }
            let options = options.ready_only(ready_only);
            commands::dashboard(&snapshot, today, &config, options, format)?;
        }
        Command::Items => {
            commands::items(&snapshot, today, &config, options, format)?;
        }
        Command::Expiring => {
            commands::expiring(&snapshot, today, &config, options, format)?;
        }
        Command::Nutrition => {
            commands::nutrition(&snapshot, today, &config, options, format)?;
        }
        Command::Recipes {
            recipes,
            ready_only,
        } => {
            let options = options
                .with_recipes(commands::load_recipes(&recipes).await?)
                .ready_only(ready_only);
            commands::recipes(&snapshot, today, &config, options, format)?;
        }
    }

    Ok(())
}
