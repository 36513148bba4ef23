//! Client Module
//!
//! Data layer for frontends of the catalog API: fetches listing pages over
//! HTTP and holds the most recent page as observable state. Every fetch can
//! be tied to a cancellation token so superseded requests never touch state.

mod cancel;
mod data;
mod error;
mod transport;

pub use cancel::CancellationToken;
pub use data::{DataLayer, ListingState, PageMeta, PageRequest};
pub use error::ClientError;
pub use transport::{HttpTransport, ItemsTransport, DEFAULT_BASE_URL};
