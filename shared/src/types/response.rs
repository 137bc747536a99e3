//! API error response body

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error body returned by the API for every failed request.
///
/// `code` is a stable machine-readable tag; `message` is safe to show to
/// end users and never reveals which credential or check failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error tag, e.g. `invalid_token`
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serializes() {
        let body = ErrorResponse::new("invalid_token", "Invalid or expired token");
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"code\":\"invalid_token\""));
        assert!(json.contains("Invalid or expired token"));
    }
}
