//! API Handlers
//!
//! HTTP request handlers for each catalog endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::catalog::{RecordStore, StatsCache, StatsSnapshot};
use crate::error::{CatalogError, Result};
use crate::models::{parse_leading_int, HealthResponse, Item, ItemDraft, ListParams, PageResult};

/// Application state shared across all handlers.
///
/// Item and stats routes share one record store, so both always see the
/// same file.
#[derive(Clone)]
pub struct AppState {
    /// File-backed record store
    pub store: Arc<RecordStore>,
    /// Statistics cache, invalidated by writes and by the store watcher
    pub stats: Arc<StatsCache>,
}

impl AppState {
    /// Creates a new AppState over the given record store.
    pub fn new(store: RecordStore) -> Self {
        Self {
            store: Arc::new(store),
            stats: Arc::new(StatsCache::new()),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(RecordStore::new(config.data_path.clone()))
    }
}

/// Handler for GET /api/items
///
/// Returns one page of items matching the optional `q` filter.
pub async fn list_items_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<PageResult>> {
    let query = params.to_query();
    debug!(
        "Listing items: page={}, limit={}, q={:?}",
        query.page, query.limit, query.q
    );

    let page = state.store.list(&query).await?;
    Ok(Json(page))
}

/// Handler for GET /api/items/:id
///
/// Returns a single item, or 404 when no item has that id.
pub async fn get_item_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Item>> {
    let id = parse_leading_int(&raw_id).ok_or_else(CatalogError::item_not_found)?;
    let item = state.store.get(id).await?;
    Ok(Json(item))
}

/// Handler for POST /api/items
///
/// Stores the payload as a new item and returns it with its assigned id.
/// Bodies that are not a JSON object get the usual `{ "message" }` error.
pub async fn create_item_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ItemDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>)> {
    let Json(draft) = payload?;
    let item = state.store.create(draft).await?;

    // The watcher would catch this too, but only on its next poll
    state.stats.invalidate().await;

    Ok((StatusCode::CREATED, Json(item)))
}

/// Handler for GET /api/stats
///
/// Returns the cached item count and average price.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsSnapshot>> {
    let snapshot = state.stats.get_or_compute(&state.store).await?;
    Ok(Json(snapshot))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
