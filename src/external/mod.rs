// ABOUTME: External collaborator modules (AI service responses, inventory sources)
// ABOUTME: Turns upstream data into engine inputs without failing on partial upstream errors

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! External Collaborators
//!
//! The AI service and the inventory API are outside this crate. This module
//! only parses what they return and gathers it into an inventory snapshot.

pub mod ai_response;
pub mod inventory_source;

// Re-export commonly used types
pub use ai_response::{parse_nutrition_snapshot, parse_recipe_drafts, strip_code_fences};
pub use inventory_source::{
    collect_inventory, InMemoryInventory, InventorySource, JsonFileInventory,
};
