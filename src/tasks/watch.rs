//! Store Watch Task
//!
//! Background task that polls the record store file and drops the cached
//! statistics whenever the file changes.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::catalog::StatsCache;

/// What the watcher compares between polls: modification time, length and
/// a hash of the contents. `None` means the file is absent or unreadable.
type Fingerprint = Option<(Option<SystemTime>, u64, u64)>;

async fn fingerprint(path: &Path) -> Fingerprint {
    let meta = tokio::fs::metadata(path).await.ok()?;
    let contents = tokio::fs::read(path).await.ok()?;

    let mut hasher = DefaultHasher::new();
    contents.hash(&mut hasher);
    Some((meta.modified().ok(), meta.len(), hasher.finish()))
}

/// Spawns a background task that invalidates `stats` whenever the file at
/// `path` changes.
///
/// The file is polled every `interval_ms` milliseconds; a change in
/// modification time, length or contents, or the file appearing or
/// disappearing, counts as a change. Hashing the contents catches
/// same-length edits on filesystems with coarse modification times.
/// Invalidation runs independently of any request in flight.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let stats = Arc::new(StatsCache::new());
/// let watch_handle = spawn_store_watcher("data/items.json".into(), stats.clone(), 1000);
/// // Later, during shutdown:
/// watch_handle.abort();
/// ```
pub fn spawn_store_watcher(
    path: PathBuf,
    stats: Arc<StatsCache>,
    interval_ms: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_millis(interval_ms);

    tokio::spawn(async move {
        info!(
            "Watching {} for changes every {} ms",
            path.display(),
            interval_ms
        );

        let mut last = fingerprint(&path).await;

        loop {
            tokio::time::sleep(interval).await;

            let current = fingerprint(&path).await;
            if current == last {
                continue;
            }

            info!("Record store changed, invalidating cached stats");
            stats.invalidate().await;
            debug!("Stats generation is now {}", stats.generation());
            last = current;
        }
    })
}
