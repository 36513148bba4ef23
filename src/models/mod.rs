//! Request and Response models for the catalog API
//!
//! This module defines the record type and the DTOs (Data Transfer Objects)
//! used for serializing/deserializing HTTP request and response bodies.

pub mod item;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use item::{Item, ItemId};
pub use requests::{parse_leading_int, ItemDraft, ListParams};
pub use responses::{ErrorResponse, HealthResponse, PageResult};
