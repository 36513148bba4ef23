//! Error types for the catalog server
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == Catalog Error Enum ==
/// Unified error type for the catalog server.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No record matched the requested identifier
    #[error("{0}")]
    NotFound(String),

    /// The record store could not be read or written
    #[error("Record store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The record store contents are not a valid item array
    #[error("Record store is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    /// The request body could not be read as an item payload
    #[error("{message}")]
    InvalidBody { status: StatusCode, message: String },

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Not-found outcome for a single-item lookup.
    pub fn item_not_found() -> Self {
        CatalogError::NotFound("Item not found".to_string())
    }
}

impl From<JsonRejection> for CatalogError {
    fn from(rejection: JsonRejection) -> Self {
        CatalogError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match &self {
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::InvalidBody { status, .. } => *status,
            CatalogError::Io(_) | CatalogError::Parse(_) | CatalogError::Internal(_) => {
                error!(error = %self, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the catalog server.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = CatalogError::item_not_found().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_io_error_maps_to_500() {
        let err: CatalogError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_body_keeps_status() {
        let err = CatalogError::InvalidBody {
            status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
            message: "Expected request with `Content-Type: application/json`".to_string(),
        };
        assert_eq!(err.to_string(), "Expected request with `Content-Type: application/json`");
        assert_eq!(err.into_response().status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn test_parse_error_message() {
        let err: CatalogError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(err.to_string().starts_with("Record store is malformed"));
    }
}
