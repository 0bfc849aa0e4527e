//! Wire types specific to the backend's error responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the backend.
///
/// `detail` is a string for most errors and a list of field errors for
/// request validation failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub detail: Value,
}

impl ApiErrorResponse {
    /// Human-readable form of `detail`.
    pub fn message(&self) -> String {
        match &self.detail {
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item.get("msg").and_then(Value::as_str) {
                    Some(msg) => msg.to_string(),
                    None => item.to_string(),
                })
                .collect::<Vec<_>>()
                .join("; "),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_from_string_detail() {
        let body: ApiErrorResponse =
            serde_json::from_value(json!({ "detail": "Asset not found" })).unwrap();
        assert_eq!(body.message(), "Asset not found");
    }

    #[test]
    fn test_message_from_validation_detail() {
        let body: ApiErrorResponse = serde_json::from_value(json!({
            "detail": [
                { "loc": ["body", "ticker"], "msg": "Field required", "type": "missing" },
                { "loc": ["body", "current_price"], "msg": "Input should be a valid number" }
            ]
        }))
        .unwrap();
        assert_eq!(
            body.message(),
            "Field required; Input should be a valid number"
        );
    }
}
