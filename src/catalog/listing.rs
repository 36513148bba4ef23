//! Listing Module
//!
//! Search filtering and page slicing over a loaded record set.

use crate::catalog::{DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::models::{Item, PageResult};

// == List Query ==
/// Normalized listing parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Requested page, 1-based
    pub page: usize,
    /// Maximum items per page
    pub limit: usize,
    /// Case-insensitive name filter, empty for none
    pub q: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            q: String::new(),
        }
    }
}

// == Paginate ==
/// Filters `items` by the query string and returns the requested page.
///
/// The page is clamped to `[1, total_pages]`, so asking past the end yields
/// the last page rather than an empty one. `total_pages` is at least one even
/// when nothing matches.
pub fn paginate(items: Vec<Item>, query: &ListQuery) -> PageResult {
    let limit = query.limit.max(1);
    let needle = query.q.to_lowercase();

    let filtered: Vec<Item> = items
        .into_iter()
        .filter(|item| item.matches(&needle))
        .collect();

    let total = filtered.len();
    let total_pages = total.div_ceil(limit).max(1);
    let page = query.page.clamp(1, total_pages);

    let items = filtered
        .into_iter()
        .skip((page - 1) * limit)
        .take(limit)
        .collect();

    PageResult {
        items,
        total,
        page,
        total_pages,
    }
}
