//! Authentication configuration

use serde::{Deserialize, Serialize};

/// Configuration for session-token signing and verification
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT signing secret
    pub jwt_secret: String,

    /// Session token expiry in hours
    pub token_expiry_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            token_expiry_hours: 24,
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    ///
    /// Reads `JWT_SECRET` and `TOKEN_EXPIRY_HOURS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret);
        let token_expiry_hours = std::env::var("TOKEN_EXPIRY_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.token_expiry_hours);

        Self {
            jwt_secret,
            token_expiry_hours,
        }
    }
}
