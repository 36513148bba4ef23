//! API Module
//!
//! HTTP handlers and routing for the catalog REST API.
//!
//! # Endpoints
//! - `GET /api/items?page=&limit=&q=` - Paginated, searchable listing
//! - `GET /api/items/:id` - Single item lookup
//! - `POST /api/items` - Create an item
//! - `GET /api/stats` - Item count and average price
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
