//! Request DTOs for the catalog API
//!
//! Defines the structure of incoming query strings and request bodies.

use serde::Deserialize;
use serde_json::{Map, Number, Value};

use crate::catalog::{ListQuery, DEFAULT_LIMIT, DEFAULT_PAGE};

/// Request body for item creation (POST /api/items)
///
/// Nothing is required. `name` and `price` only have to be a string and a
/// number when present; every other field is stored as sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Raw query string for the listing endpoint (GET /api/items)
///
/// Values are kept as strings so that malformed numbers fall back to
/// defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
}

impl ListParams {
    /// Normalizes the raw parameters into a listing query.
    ///
    /// Missing, unparseable or zero values take the default; anything below
    /// one is raised to one.
    pub fn to_query(&self) -> ListQuery {
        ListQuery {
            page: positive_or(self.page.as_deref(), DEFAULT_PAGE),
            limit: positive_or(self.limit.as_deref(), DEFAULT_LIMIT),
            q: self.q.clone().unwrap_or_default(),
        }
    }
}

fn positive_or(raw: Option<&str>, default: usize) -> usize {
    match raw.and_then(parse_leading_int) {
        None | Some(0) => default,
        Some(n) if n < 1 => 1,
        Some(n) => usize::try_from(n).unwrap_or(usize::MAX),
    }
}

/// Parses the integer prefix of `raw`, ignoring leading whitespace and any
/// trailing garbage (`"12abc"` is 12). Returns None when no digit is found.
/// Out-of-range values saturate.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}
