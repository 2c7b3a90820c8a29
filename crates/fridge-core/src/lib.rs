// ABOUTME: Core types and constants for the fridge inventory intelligence workspace
// ABOUTME: Foundation crate with domain models, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fridge Core
//!
//! Foundation crate providing shared types and constants for the inventory
//! intelligence engine. Kept free of engine logic so it changes rarely.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Expiration windows, nutrient labels, env variable names
//! - **models**: Items, fridges, nutrition snapshots, recipes

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Item, Fridge, NutritionSnapshot, recipes)
pub mod models;
