// ABOUTME: Main library entry point for the fridge inventory intelligence tools
// ABOUTME: Wires logging, configuration, AI response parsing, inventory collection, and the dashboard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fridge Intelligence
//!
//! Inventory intelligence for a kitchen-inventory manager: which items are
//! expiring, what the stocked food adds up to nutritionally, and which
//! suggested recipes can be cooked from what is on hand.
//!
//! ## Architecture
//!
//! - **`fridge-core`**: domain models, boundary records, errors, constants
//! - **`fridge-intelligence`**: the pure engine (expiration, nutrition, recipes, aggregation)
//! - **this crate**: environment configuration, logging, parsing of AI service
//!   responses, concurrent inventory collection, and the dashboard composition
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use fridge_inventory::dashboard::{DashboardOptions, InventoryDashboard};
//! use fridge_inventory::external::{collect_inventory, JsonFileInventory};
//! use fridge_inventory::IntelligenceConfig;
//!
//! # async fn example() -> fridge_inventory::errors::AppResult<()> {
//! let source = JsonFileInventory::new("inventory.json");
//! let snapshot = collect_inventory(&source).await?;
//! let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap_or_default();
//! let dashboard = InventoryDashboard::build(
//!     &snapshot,
//!     today,
//!     IntelligenceConfig::global(),
//!     DashboardOptions::default(),
//! )?;
//! println!("{} item(s) need attention", dashboard.expiring.len());
//! # Ok(())
//! # }
//! ```

// Re-export fridge-core modules so callers need a single dependency
pub use fridge_core::constants;
pub use fridge_core::models;

// Engine types used across the public API
pub use fridge_intelligence::{IntelligenceConfig, InventorySnapshot};

/// Environment and engine configuration
pub mod config;

/// Combined inventory dashboard
pub mod dashboard;

/// Unified error handling
pub mod errors;

/// AI service responses and inventory sources
pub mod external;

/// Structured logging setup
pub mod logging;
