//! Catalog Statistics Module
//!
//! Aggregate count and average price over the record store, cached until the
//! store is reported as changed.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::catalog::RecordStore;
use crate::error::Result;
use crate::models::Item;

// == Stats Snapshot ==
/// Aggregate view of the record store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    /// Number of stored items
    pub total: usize,
    /// Mean price; NaN (serialized as null) when the store is empty
    pub average_price: f64,
}

impl StatsSnapshot {
    /// Computes the snapshot for `items`.
    ///
    /// Items without a price count as zero. No special case for an empty
    /// store: the average is then `0 / 0`.
    pub fn from_items(items: &[Item]) -> Self {
        let sum: f64 = items.iter().map(Item::price).sum();
        Self {
            total: items.len(),
            average_price: sum / items.len() as f64,
        }
    }
}

// == Stats Cache ==
/// Holds at most one snapshot, dropped on every invalidation.
///
/// The generation counter moves on each invalidation. A recompute that
/// started under an older generation returns its result but does not store it.
#[derive(Debug, Default)]
pub struct StatsCache {
    snapshot: RwLock<Option<StatsSnapshot>>,
    generation: AtomicU64,
    recomputations: AtomicU64,
}

impl StatsCache {
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    // == Get Or Compute ==
    /// Returns the cached snapshot, reading the store only when absent.
    pub async fn get_or_compute(&self, store: &RecordStore) -> Result<StatsSnapshot> {
        if let Some(snapshot) = self.snapshot.read().await.as_ref() {
            return Ok(snapshot.clone());
        }

        let started_at = self.generation.load(Ordering::Acquire);
        let items = store.load().await?;
        let snapshot = StatsSnapshot::from_items(&items);
        self.recomputations.fetch_add(1, Ordering::Relaxed);

        let mut slot = self.snapshot.write().await;
        if self.generation.load(Ordering::Acquire) == started_at {
            *slot = Some(snapshot.clone());
        } else {
            debug!("Store changed during stats recompute, result not cached");
        }

        Ok(snapshot)
    }

    // == Invalidate ==
    /// Drops the cached snapshot; the next request recomputes.
    pub async fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        *self.snapshot.write().await = None;
    }

    /// Returns the cached snapshot without computing one.
    pub async fn cached(&self) -> Option<StatsSnapshot> {
        self.snapshot.read().await.clone()
    }

    /// Number of invalidations seen so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Number of times the store has been read to build a snapshot.
    pub fn recomputations(&self) -> u64 {
        self.recomputations.load(Ordering::Relaxed)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    async fn store_with(items: &[Item]) -> (TempDir, RecordStore) {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path().join("items.json"));
        store.save(items).await.unwrap();
        (dir, store)
    }

    #[test]
    fn test_snapshot_average() {
        let items = vec![Item::new(1, "a", 10.0), Item::new(2, "b", 30.0)];
        let snapshot = StatsSnapshot::from_items(&items);
        assert_eq!(snapshot.total, 2);
        assert_eq!(snapshot.average_price, 20.0);
    }

    #[test]
    fn test_snapshot_missing_price_counts_as_zero() {
        let priceless: Item = serde_json::from_value(json!({"id": 2, "name": "b"})).unwrap();
        let snapshot = StatsSnapshot::from_items(&[Item::new(1, "a", 10.0), priceless]);
        assert_eq!(snapshot.average_price, 5.0);
    }

    #[test]
    fn test_snapshot_empty_store_is_nan_and_serializes_null() {
        let snapshot = StatsSnapshot::from_items(&[]);
        assert_eq!(snapshot.total, 0);
        assert!(snapshot.average_price.is_nan());

        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json["averagePrice"].is_null());
    }

    #[tokio::test]
    async fn test_cache_serves_same_snapshot_until_invalidated() {
        let (_dir, store) = store_with(&[Item::new(1, "a", 10.0)]).await;
        let cache = StatsCache::new();

        let first = cache.get_or_compute(&store).await.unwrap();
        store
            .save(&[Item::new(1, "a", 10.0), Item::new(2, "b", 20.0)])
            .await
            .unwrap();
        let second = cache.get_or_compute(&store).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(cache.recomputations(), 1);

        cache.invalidate().await;
        assert!(cache.cached().await.is_none());

        let third = cache.get_or_compute(&store).await.unwrap();
        assert_eq!(third.total, 2);
        assert_eq!(third.average_price, 15.0);
        assert_eq!(cache.recomputations(), 2);
        assert_eq!(cache.generation(), 1);
    }

    #[tokio::test]
    async fn test_cache_propagates_store_errors() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path().join("absent.json"));
        let cache = StatsCache::new();

        assert!(cache.get_or_compute(&store).await.is_err());
        assert!(cache.cached().await.is_none());
    }
}
