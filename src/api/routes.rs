//! API Routes
//!
//! Configures the Axum router with all catalog endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_item_handler, get_item_handler, health_handler, list_items_handler, stats_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/items` - Paginated, searchable listing
/// - `POST /api/items` - Create an item
/// - `GET /api/items/:id` - Single item lookup
/// - `GET /api/stats` - Item count and average price
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin so the browser frontend can call in
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/items", get(list_items_handler).post(create_item_handler))
        .route("/api/items/:id", get(get_item_handler))
        .route("/api/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RecordStore;
    use crate::models::Item;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    async fn create_test_app() -> (TempDir, Router) {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path().join("items.json"));
        store
            .save(&[Item::new(1, "Laptop Pro", 2499.0)])
            .await
            .unwrap();
        (dir, create_router(AppState::new(store)))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (_dir, app) = create_test_app().await;

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let (_dir, app) = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/stats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_endpoint() {
        let (_dir, app) = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/items")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name":"Mouse","price":25}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let (_dir, app) = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/items/99999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
