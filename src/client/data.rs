//! Listing state holder

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use crate::catalog::DEFAULT_LIMIT;
use crate::client::{CancellationToken, ClientError, ItemsTransport};
use crate::models::{Item, PageResult};

// == Page Request ==
/// Parameters of one listing fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: usize,
    /// Items per page
    pub limit: usize,
    /// Search text, empty for the full listing
    pub q: String,
}

impl PageRequest {
    /// Page `page` of the listing filtered by `q`, with the default page size.
    pub fn new(page: usize, q: impl Into<String>) -> Self {
        Self {
            page,
            limit: DEFAULT_LIMIT,
            q: q.into(),
        }
    }

    /// Overrides the page size.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, "")
    }
}

// == Page Meta ==
/// Pagination metadata of the page currently held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Number of items matching the query
    pub total: usize,
    /// Page the held items belong to
    pub page: usize,
    /// Number of pages, never below 1
    pub total_pages: usize,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            total: 0,
            page: 1,
            total_pages: 1,
        }
    }
}

impl From<&PageResult> for PageMeta {
    fn from(result: &PageResult) -> Self {
        Self {
            total: result.total,
            page: result.page,
            total_pages: result.total_pages,
        }
    }
}

// == Listing State ==
/// Items and metadata of the most recently applied fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingState {
    /// Items of the held page
    pub items: Vec<Item>,
    /// Pagination of the held page
    pub meta: PageMeta,
}

// == Data Layer ==
/// Fetches listing pages and keeps the latest one.
#[derive(Debug)]
pub struct DataLayer<T> {
    transport: T,
    state: RwLock<ListingState>,
}

impl<T: ItemsTransport> DataLayer<T> {
    /// Creates a data layer with empty state.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: RwLock::new(ListingState::default()),
        }
    }

    // == Fetch Items ==
    /// Fetches a page and, on success, replaces the held items and metadata.
    ///
    /// When `cancel` fires before the result is applied the state is left
    /// untouched and `ClientError::Cancelled` is returned. Transport failures
    /// also leave the state untouched and are returned as-is.
    pub async fn fetch_items(
        &self,
        request: PageRequest,
        cancel: Option<&CancellationToken>,
    ) -> Result<PageResult, ClientError> {
        let result = match cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => return Err(ClientError::Cancelled),
                result = self.transport.fetch_page(&request) => result?,
            },
            None => self.transport.fetch_page(&request).await?,
        };

        let mut state = self.state.write().await;
        if cancel.is_some_and(CancellationToken::is_cancelled) {
            debug!(
                "Dropping page {} of {:?}, request was cancelled",
                request.page, request.q
            );
            return Err(ClientError::Cancelled);
        }

        state.items = result.items.clone();
        state.meta = PageMeta::from(&result);
        Ok(result)
    }

    /// Returns a copy of the held state.
    pub async fn state(&self) -> ListingState {
        self.state.read().await.clone()
    }
}
