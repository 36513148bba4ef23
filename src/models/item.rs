//! Catalog item record
//!
//! Items carry three well-known fields; everything else a client sent is kept
//! in an open bag and written back verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::models::ItemDraft;

/// Identifier type, assigned as Unix milliseconds at creation time.
pub type ItemId = i64;

// == Item ==
/// One catalog entry as persisted in the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique in practice, never reassigned
    pub id: ItemId,
    /// Display name, matched by search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Unit price, kept as the original JSON number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Number>,
    /// Any additional fields, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    // == Constructor ==
    /// Creates an item with the given name and price and no extra fields.
    pub fn new(id: ItemId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: Some(name.into()),
            price: Number::from_f64(price),
            extra: Map::new(),
        }
    }

    // == From Draft ==
    /// Builds a stored item from an unvalidated creation payload.
    ///
    /// Any `id` the client supplied is discarded in favor of `id`.
    pub fn from_draft(id: ItemId, draft: ItemDraft) -> Self {
        let mut extra = draft.extra;
        extra.remove("id");
        Self {
            id,
            name: draft.name,
            price: draft.price,
            extra,
        }
    }

    /// Name used for display and search; empty when the record has none.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Price as a float; a record without a price counts as zero.
    pub fn price(&self) -> f64 {
        self.price.as_ref().and_then(Number::as_f64).unwrap_or(0.0)
    }

    // == Search Match ==
    /// Case-insensitive substring match of `needle` against the name.
    ///
    /// `needle` must already be lowercased. An empty needle matches everything.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.name().to_lowercase().contains(needle)
    }
}
