// ABOUTME: Inventory source abstraction with concurrent per-fridge item collection
// ABOUTME: Provides a JSON snapshot file source and an in-memory source for tests and demos

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Inventory sources
//!
//! A source lists fridges and fetches each fridge's items separately, the way
//! the inventory API exposes them. [`collect_inventory`] issues every per-fridge
//! fetch concurrently and joins them before building the snapshot, so the
//! resulting global order depends only on the listed fridge order.
//!
//! A failed per-fridge fetch contributes no items and is logged; it never
//! aborts collection. Failing to list fridges is an error.

use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use fridge_core::models::{Fridge, FridgeId, FridgeRecord, Item};
use fridge_intelligence::InventorySnapshot;
use futures_util::future::join_all;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

/// A provider of fridges and their items
#[async_trait]
pub trait InventorySource: Send + Sync {
    /// List fridges in declared order; returned fridges carry no items
    async fn list_fridges(&self) -> AppResult<Vec<Fridge>>;

    /// Fetch the items of one fridge in retrieval order
    async fn fetch_items(&self, fridge_id: FridgeId) -> AppResult<Vec<Item>>;
}

/// List fridges, fetch every fridge's items concurrently, and build a snapshot
///
/// # Errors
///
/// Returns the source's error if the fridge list cannot be retrieved
pub async fn collect_inventory<S>(source: &S) -> AppResult<InventorySnapshot>
where
    S: InventorySource + ?Sized,
{
    let fridges = source.list_fridges().await?;
    let fetches = fridges.iter().map(|fridge| source.fetch_items(fridge.id));
    let results = join_all(fetches).await;

    let mut items_by_fridge = HashMap::with_capacity(fridges.len());
    let mut failed = 0_usize;
    for (fridge, result) in fridges.iter().zip(results) {
        match result {
            Ok(items) => {
                items_by_fridge.insert(fridge.id, items);
            }
            Err(e) => {
                failed += 1;
                warn!(
                    fridge.id = %fridge.id,
                    fridge.name = %fridge.name,
                    error = %e,
                    "failed to fetch fridge items, treating fridge as empty"
                );
                items_by_fridge.insert(fridge.id, Vec::new());
            }
        }
    }

    let snapshot = InventorySnapshot::new(fridges, items_by_fridge);
    info!(
        fridges = snapshot.fridges.len(),
        items = snapshot.item_count(),
        failed_fetches = failed,
        "collected inventory"
    );
    Ok(snapshot)
}

/// On-disk snapshot layout: either a bare array of fridges or `{"fridges": [...]}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    Wrapped { fridges: Vec<FridgeRecord> },
    Bare(Vec<FridgeRecord>),
}

impl SnapshotFile {
    fn into_records(self) -> Vec<FridgeRecord> {
        match self {
            Self::Wrapped { fridges } | Self::Bare(fridges) => fridges,
        }
    }
}

/// Inventory source backed by a JSON snapshot file in the inventory API's record shape
///
/// The file is read and converted once, on first use; later calls serve the
/// cached fridges so every fetch sees the same snapshot.
#[derive(Debug, Clone)]
pub struct JsonFileInventory {
    path: PathBuf,
    fridges: OnceCell<Vec<Fridge>>,
}

impl JsonFileInventory {
    /// Source reading from `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fridges: OnceCell::new(),
        }
    }

    /// Snapshot file location
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and convert every fridge in the file, bypassing the cache
    ///
    /// Item records that fail validation are dropped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the file does not exist, `StorageError` if
    /// it cannot be read, and `SerializationError` if it is not a snapshot
    pub async fn load(&self) -> AppResult<Vec<Fridge>> {
        let contents = fs::read_to_string(&self.path).await.map_err(|e| {
            let error = AppError::from(e);
            AppError {
                message: format!("{}: {}", self.path.display(), error.message),
                ..error
            }
        })?;
        let records = serde_json::from_str::<SnapshotFile>(&contents)?.into_records();

        let mut seen = HashSet::with_capacity(records.len());
        let mut fridges = Vec::with_capacity(records.len());
        for record in records {
            let converted = record.into_fridge();
            if !seen.insert(converted.fridge.id) {
                warn!(fridge.id = %converted.fridge.id, "duplicate fridge id in snapshot, keeping the first");
                continue;
            }
            if !converted.rejected.is_empty() {
                warn!(
                    fridge.id = %converted.fridge.id,
                    rejected = converted.rejected.len(),
                    "dropped invalid item records"
                );
            }
            fridges.push(converted.fridge);
        }
        debug!(path = %self.path.display(), fridges = fridges.len(), "loaded inventory snapshot");
        Ok(fridges)
    }

    /// Fridges from the first successful [`Self::load`]; a failed load is retried
    async fn cached(&self) -> AppResult<&[Fridge]> {
        self.fridges
            .get_or_try_init(|| self.load())
            .await
            .map(Vec::as_slice)
    }
}

#[async_trait]
impl InventorySource for JsonFileInventory {
    async fn list_fridges(&self) -> AppResult<Vec<Fridge>> {
        Ok(self
            .cached()
            .await?
            .iter()
            .map(|fridge| Fridge::new(fridge.id, fridge.name.clone()))
            .collect())
    }

    async fn fetch_items(&self, fridge_id: FridgeId) -> AppResult<Vec<Item>> {
        self.cached()
            .await?
            .iter()
            .find(|fridge| fridge.id == fridge_id)
            .map(|fridge| fridge.items.clone())
            .ok_or_else(|| AppError::not_found(format!("Fridge {fridge_id}")))
    }
}

/// In-memory inventory source for tests and demos (no I/O)
#[derive(Debug, Clone, Default)]
pub struct InMemoryInventory {
    fridges: Vec<Fridge>,
    failing: HashSet<FridgeId>,
}

impl InMemoryInventory {
    /// Source serving the given fridges and their embedded items
    #[must_use]
    pub fn new(fridges: Vec<Fridge>) -> Self {
        Self {
            fridges,
            failing: HashSet::new(),
        }
    }

    /// Make item fetches for `fridge_id` fail with an external service error
    #[must_use]
    pub fn with_failing_fridge(mut self, fridge_id: FridgeId) -> Self {
        self.failing.insert(fridge_id);
        self
    }
}

#[async_trait]
impl InventorySource for InMemoryInventory {
    async fn list_fridges(&self) -> AppResult<Vec<Fridge>> {
        Ok(self
            .fridges
            .iter()
            .map(|fridge| Fridge::new(fridge.id, fridge.name.clone()))
            .collect())
    }

    async fn fetch_items(&self, fridge_id: FridgeId) -> AppResult<Vec<Item>> {
        if self.failing.contains(&fridge_id) {
            return Err(AppError::external_service(
                "inventory API",
                format!("items for fridge {fridge_id} unavailable"),
            ));
        }
        self.fridges
            .iter()
            .find(|fridge| fridge.id == fridge_id)
            .map(|fridge| fridge.items.clone())
            .ok_or_else(|| AppError::not_found(format!("Fridge {fridge_id}")))
    }
}
