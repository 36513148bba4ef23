//! Error types for the catalog client

use thiserror::Error;

// == Client Error Enum ==
/// Failure of a client-side fetch.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The fetch was superseded or its owner went away; not a user-facing error
    #[error("Request cancelled")]
    Cancelled,

    /// Transport-level failure (connect, timeout, body decode)
    #[error("Failed to fetch items: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Failed to fetch items: server responded {0}")]
    Status(u16),
}

impl ClientError {
    /// True for the expected cancellation outcome.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ClientError::Cancelled)
    }
}
