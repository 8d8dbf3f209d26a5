//! Response normalization.
//!
//! The upstream text producer is untrusted: it may wrap valid JSON in
//! explanatory prose or markdown fences, or emit plain prose instead of
//! JSON. Normalization extracts a structured value when it can and
//! passes the original through when it can't. It never errors and
//! never panics, so it can never be the point of failure for the whole
//! pipeline.

use serde_json::Value;

const FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// Normalize an arbitrary value.
///
/// Non-string values pass through unchanged, which makes this
/// idempotent: `normalize(normalize(x)) == normalize(x)` once `x` is
/// structured. Strings go through [`extract_json`].
pub fn normalize(raw: Value) -> Value {
    match raw {
        Value::String(text) => extract_json(&text),
        structured => structured,
    }
}

/// Best-effort extraction of a JSON value from model text.
///
/// If the text carries a ```` ```json ```` fenced block anywhere, the
/// block's interior is the only parse attempt: a fence that fails to
/// parse degrades straight to passthrough. Without a fence, the entire
/// string is parsed as JSON, and on failure the original string comes
/// back unchanged.
pub fn extract_json(text: &str) -> Value {
    if let Some(interior) = fenced_block(text) {
        return match serde_json::from_str(interior.trim()) {
            Ok(value) => value,
            Err(_) => Value::String(text.to_string()),
        };
    }

    match serde_json::from_str(text) {
        Ok(value) => value,
        Err(_) => Value::String(text.to_string()),
    }
}

/// Locate the interior of the first ```` ```json ```` fence, if any.
fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find(FENCE_OPEN)? + FENCE_OPEN.len();
    let rest = &text[start..];
    let end = rest.find(FENCE_CLOSE)?;
    Some(&rest[..end])
}
