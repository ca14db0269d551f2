//! File-backed catalog store
//!
//! Holds the product catalog and optional price history as one JSON document.
//! Read paths serve from an in-memory snapshot that is replaced by reference
//! only after a successful rewrite; reconciliation always works from a fresh
//! disk read.

use crate::core::types::{PriceHistoryEntry, Product};
use crate::utils::error::{Result, TrackerError};
use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// The persisted catalog document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub price_history: Vec<PriceHistoryEntry>,
}

/// Catalog store backed by a single JSON file
pub struct CatalogStore {
    path: PathBuf,
    cache: ArcSwap<CatalogDocument>,
}

impl CatalogStore {
    /// Open the store, reading and caching the document
    ///
    /// Fails with `StoreRead` when the file is missing or does not parse.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let document = read_document(&path)?;
        info!(
            "Catalog store opened: {:?} ({} products)",
            path,
            document.products.len()
        );

        Ok(Self {
            path,
            cache: ArcSwap::from_pointee(document),
        })
    }

    /// Current in-memory snapshot of the document
    pub fn document(&self) -> Arc<CatalogDocument> {
        self.cache.load_full()
    }

    /// Fresh read of the document from disk, bypassing the cache
    pub fn load(&self) -> Result<CatalogDocument> {
        read_document(&self.path)
    }

    /// Rewrite the whole document, pretty-printed
    pub fn write(&self, document: &CatalogDocument) -> Result<()> {
        let content = serde_json::to_string_pretty(document)
            .map_err(|e| TrackerError::store_write(format!("Failed to encode catalog: {}", e)))?;
        std::fs::write(&self.path, content)
            .map_err(|e| TrackerError::store_write(format!("Failed to write catalog: {}", e)))?;

        debug!("Catalog written: {:?}", self.path);
        Ok(())
    }

    /// Reload the cache from disk
    ///
    /// Called after a successful reconciliation write so read paths observe the
    /// merged rates. Swaps the snapshot by reference.
    pub fn reload(&self) -> Result<()> {
        let document = read_document(&self.path)?;
        debug!("Catalog cache reloaded ({} products)", document.products.len());
        self.cache.store(Arc::new(document));
        Ok(())
    }
}

fn read_document(path: &Path) -> Result<CatalogDocument> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| TrackerError::store_read(format!("Failed to read catalog file: {}", e)))?;
    serde_json::from_str(&content)
        .map_err(|e| TrackerError::store_read(format!("Failed to parse catalog file: {}", e)))
}
