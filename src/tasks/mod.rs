//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of the server.
//!
//! # Tasks
//! - Store watcher: invalidates cached statistics when the record store
//!   file changes on disk

mod watch;

pub use watch::spawn_store_watcher;
