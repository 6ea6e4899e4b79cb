//! Error response body
//!
//! Failed requests carry a `{"detail": ...}` body. `detail` is usually a
//! string, but request validation failures return a list of
//! `{"loc": [...], "msg": "..."}` objects instead.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned on non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: Value,
}

impl ErrorDetail {
    /// Human-readable message carried by `detail`, if any
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Array(items) => {
                let parts: Vec<String> = items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.clone()),
                        Value::Object(obj) => obj
                            .get("msg")
                            .and_then(Value::as_str)
                            .map(str::to_string),
                        _ => None,
                    })
                    .collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join("; "))
                }
            }
            other => Some(other.to_string()),
        }
    }

    /// Extract the detail message from a raw response body.
    ///
    /// Returns `None` for empty, non-JSON or detail-less bodies so callers
    /// can fall back to a generic message.
    pub fn extract(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorDetail>(body)
            .ok()
            .and_then(|e| e.message())
    }
}
