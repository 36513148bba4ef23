//! Catalog Module
//!
//! File-backed record store, search/pagination over it, and the cached
//! aggregate statistics.

mod listing;
mod stats;
mod store;


// Re-export public types
pub use listing::{paginate, ListQuery};
pub use stats::{StatsCache, StatsSnapshot};
pub use store::RecordStore;

// == Public Constants ==
/// Page served when the request names none
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when the request names none
pub const DEFAULT_LIMIT: usize = 50;
