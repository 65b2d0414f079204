//! Shared response structures used across all API endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard error response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Minimal message-only body, used where the original API answered with
/// `{ "message": ... }` and nothing else
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error codes carried by `ErrorResponse` bodies
pub mod error_codes {
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const TOKEN_INVALID: &str = "TOKEN_INVALID";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serializes_fields() {
        let response = ErrorResponse::new(error_codes::UNAUTHORIZED, "Invalid or expired token");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "UNAUTHORIZED");
        assert_eq!(json["message"], "Invalid or expired token");
        assert!(json["timestamp"].is_string());
    }
}
