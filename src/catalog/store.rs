//! Record Store Module
//!
//! The whole catalog lives in one JSON array on disk. Every operation reads
//! the full file; creation rewrites it wholesale.

use std::path::{Path, PathBuf};

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::catalog::{paginate, ListQuery};
use crate::error::{CatalogError, Result};
use crate::models::{Item, ItemDraft, ItemId, PageResult};

// == Record Store ==
/// File-backed collection of catalog items.
#[derive(Debug)]
pub struct RecordStore {
    /// Location of the JSON array
    path: PathBuf,
    /// Serializes load-append-save within this process
    write_lock: Mutex<()>,
}

impl RecordStore {
    // == Constructor ==
    /// Creates a store over the file at `path`. The file is not touched until
    /// the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // == Load ==
    /// Reads and parses every item in insertion order.
    pub async fn load(&self) -> Result<Vec<Item>> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let items: Vec<Item> = serde_json::from_str(&raw)?;
        debug!("Loaded {} items from {}", items.len(), self.path.display());
        Ok(items)
    }

    // == Save ==
    /// Overwrites the backing file with `items`, pretty-printed.
    pub async fn save(&self, items: &[Item]) -> Result<()> {
        let raw = serde_json::to_string_pretty(items)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }

    // == List ==
    /// Filters and paginates the current contents.
    pub async fn list(&self, query: &ListQuery) -> Result<PageResult> {
        Ok(paginate(self.load().await?, query))
    }

    // == Get ==
    /// Returns the first item with the given identifier.
    pub async fn get(&self, id: ItemId) -> Result<Item> {
        self.load()
            .await?
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(CatalogError::item_not_found)
    }

    // == Create ==
    /// Appends a new item built from `draft` and rewrites the file.
    ///
    /// The identifier is the current time in milliseconds; two creations in
    /// the same millisecond get the same id.
    pub async fn create(&self, draft: ItemDraft) -> Result<Item> {
        let _guard = self.write_lock.lock().await;

        let mut items = self.load().await?;
        let item = Item::from_draft(next_id(), draft);
        items.push(item.clone());
        self.save(&items).await?;

        info!("Created item {} ({} items stored)", item.id, items.len());
        Ok(item)
    }
}

/// Returns current Unix timestamp in milliseconds.
fn next_id() -> ItemId {
    chrono::Utc::now().timestamp_millis()
}
