// ABOUTME: Expiration-risk classification for inventory items against a caller-supplied reference date
// ABOUTME: Derives ExpirationStatus, risk tier, and display label; selects expired and expiring-soon items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Expiration classifier
//!
//! Classification is a pure function of an item's calendar expiration date and
//! the reference date ("today") passed by the caller. Both are calendar dates,
//! so the whole-day difference is exact and independent of time of day.

use crate::config::ExpirationConfig;
use chrono::NaiveDate;
use fridge_core::constants::expiration::{DATE_FORMAT, DEFAULT_EXPIRING_SOON_DAYS};
use fridge_core::models::Item;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use fridge_core::models::parse_expiration_date;

/// Expiration state of one item relative to a reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExpirationStatus {
    /// Expiration date is in the past
    Expired {
        /// Whole days since the expiration date
        days_ago: u32,
    },
    /// Expires today or within the configured window
    ExpiringSoon {
        /// Whole days until the expiration date (0 = today)
        days_remaining: u32,
    },
    /// Expires after the window
    Fresh,
    /// No expiration date known
    Unknown,
}

/// Coarse urgency tier used for highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    /// Already expired
    Critical,
    /// Expiring soon
    Warning,
    /// Nothing to worry about
    Normal,
    /// No date to judge by
    Unknown,
}

impl ExpirationStatus {
    /// Risk tier for this status
    #[must_use]
    pub const fn risk_tier(&self) -> RiskTier {
        match self {
            Self::Expired { .. } => RiskTier::Critical,
            Self::ExpiringSoon { .. } => RiskTier::Warning,
            Self::Fresh => RiskTier::Normal,
            Self::Unknown => RiskTier::Unknown,
        }
    }

    /// True for expired and expiring-soon items
    #[must_use]
    pub const fn needs_attention(&self) -> bool {
        matches!(self, Self::Expired { .. } | Self::ExpiringSoon { .. })
    }
}

/// Classifies expiration dates with a configurable expiring-soon window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationClassifier {
    window_days: u32,
}

impl Default for ExpirationClassifier {
    fn default() -> Self {
        Self::with_window(DEFAULT_EXPIRING_SOON_DAYS)
    }
}

impl ExpirationClassifier {
    /// Classifier whose expiring-soon window is `0..=window_days`
    #[must_use]
    pub const fn with_window(window_days: u32) -> Self {
        Self { window_days }
    }

    /// Classifier built from configuration
    #[must_use]
    pub const fn from_config(config: &ExpirationConfig) -> Self {
        Self::with_window(config.expiring_soon_days)
    }

    /// Configured window in days
    #[must_use]
    pub const fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Classify an optional expiration date against `reference_date`
    #[must_use]
    pub fn classify(
        &self,
        expiration_date: Option<NaiveDate>,
        reference_date: NaiveDate,
    ) -> ExpirationStatus {
        let Some(expiration) = expiration_date else {
            return ExpirationStatus::Unknown;
        };

        let diff_days = expiration.signed_duration_since(reference_date).num_days();
        if diff_days < 0 {
            ExpirationStatus::Expired {
                days_ago: saturating_days(-diff_days),
            }
        } else if diff_days <= i64::from(self.window_days) {
            ExpirationStatus::ExpiringSoon {
                days_remaining: saturating_days(diff_days),
            }
        } else {
            ExpirationStatus::Fresh
        }
    }

    /// Classify an item
    #[must_use]
    pub fn classify_item(&self, item: &Item, reference_date: NaiveDate) -> ExpirationStatus {
        self.classify(item.expiration_date, reference_date)
    }

    /// Human label for an expiration date, `None` when the date is unknown
    #[must_use]
    pub fn label(
        &self,
        expiration_date: Option<NaiveDate>,
        reference_date: NaiveDate,
    ) -> Option<String> {
        let date = expiration_date?;
        let label = match self.classify(Some(date), reference_date) {
            ExpirationStatus::Expired { days_ago } => format!("Expired {days_ago} day(s) ago"),
            ExpirationStatus::ExpiringSoon { days_remaining } => {
                format!("Expires in {days_remaining} day(s)")
            }
            ExpirationStatus::Fresh => format!("Exp: {}", date.format(DATE_FORMAT)),
            ExpirationStatus::Unknown => return None,
        };
        Some(label)
    }

    /// Items that are expired or expiring soon, in input order
    #[must_use]
    pub fn expiring_items<'a>(
        &self,
        items: &'a [Item],
        reference_date: NaiveDate,
    ) -> Vec<ExpiringItem<'a>> {
        let expiring: Vec<ExpiringItem<'a>> = items
            .iter()
            .filter_map(|item| {
                let status = self.classify_item(item, reference_date);
                status.needs_attention().then(|| ExpiringItem {
                    item,
                    status,
                    label: self.label(item.expiration_date, reference_date),
                })
            })
            .collect();
        debug!(
            total = items.len(),
            expiring = expiring.len(),
            window_days = self.window_days,
            "selected expiring items"
        );
        expiring
    }
}

/// An item flagged by [`ExpirationClassifier::expiring_items`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpiringItem<'a> {
    /// The flagged item
    pub item: &'a Item,
    /// Its status (always `Expired` or `ExpiringSoon`)
    pub status: ExpirationStatus,
    /// Display label
    pub label: Option<String>,
}

/// Classify with the default three-day window
#[must_use]
pub fn classify(expiration_date: Option<NaiveDate>, reference_date: NaiveDate) -> ExpirationStatus {
    ExpirationClassifier::default().classify(expiration_date, reference_date)
}

fn saturating_days(days: i64) -> u32 {
    u32::try_from(days).unwrap_or(u32::MAX)
}
