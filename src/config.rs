//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Default location of the record store, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/items.json";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Record store file shared by the item and stats routes
    pub data_path: PathBuf,
    /// HTTP server port
    pub server_port: u16,
    /// Store watcher poll interval in milliseconds
    pub watch_interval_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATA_PATH` - Record store file (default: data/items.json)
    /// - `SERVER_PORT` - HTTP server port (default: 3001)
    /// - `WATCH_INTERVAL_MS` - Store watcher poll interval (default: 1000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            data_path: env::var("DATA_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            watch_interval_ms: env::var("WATCH_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.watch_interval_ms),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            server_port: 3001,
            watch_interval_ms: 1000,
        }
    }
}
