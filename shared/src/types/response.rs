//! Error response envelope returned by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// JSON body returned with every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code, e.g. `invalid_credentials`.
    pub error: String,

    /// Human-readable message.
    pub message: String,

    /// Optional structured details (e.g. field-level validation errors).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Response timestamp.
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create an error response with the given code and message.
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach structured details.
    pub fn with_details(mut self, details: HashMap<String, serde_json::Value>) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_without_empty_details() {
        let response = ErrorResponse::new("unknown_type", "Unknown property type");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "unknown_type");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn serializes_details_when_present() {
        let mut details = HashMap::new();
        details.insert("field".to_string(), serde_json::json!("email"));
        let response = ErrorResponse::new("validation_error", "Invalid request").with_details(details);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["details"]["field"], "email");
    }
}
