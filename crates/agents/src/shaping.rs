//! Per-category response shaping.
//!
//! After normalization, an agent's reply is forced into one consistent
//! surface: `{category_key: ...}`. A well-formed reply keeps its record
//! list; anything else carries the raw model text under the same key,
//! so downstream consumers can still show the user *something*.

use schemas::Category;
use serde_json::{Value, json};

/// Shape a normalized model reply into the agent's wire payload.
///
/// - normalized object containing the category's payload key mapped to
///   a list → `{key: list}`
/// - anything else (non-object, missing key, key not a list) →
///   `{key: raw_text}`, the raw-text passthrough policy
pub fn shape_payload(category: Category, normalized: &Value, raw_text: &str) -> Value {
    let key = category.payload_key();

    if let Some(records) = normalized.get(key) {
        if records.is_array() {
            return json!({ key: records });
        }
    }

    json!({ key: raw_text })
}
