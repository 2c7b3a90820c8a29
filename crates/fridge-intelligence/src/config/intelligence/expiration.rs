// ABOUTME: Expiration classifier configuration
// ABOUTME: Configures the inclusive "expiring soon" window in days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fridge_core::constants::expiration::DEFAULT_EXPIRING_SOON_DAYS;
use serde::{Deserialize, Serialize};

/// Expiration classification configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpirationConfig {
    /// Items expiring in `0..=expiring_soon_days` days are "expiring soon"
    pub expiring_soon_days: u32,
}

impl Default for ExpirationConfig {
    fn default() -> Self {
        Self {
            expiring_soon_days: DEFAULT_EXPIRING_SOON_DAYS,
        }
    }
}
