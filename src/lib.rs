//! Catalog - a small catalog browsing service
//!
//! Serves a paginated, searchable item listing, single-item lookup, item
//! creation and cached statistics over a JSON file, and provides the client
//! data layer and headless list view that consume it.

pub mod api;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;
pub mod view;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_store_watcher;
