//! Configuration for the token service

use ps_shared::config::AuthConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Session token expiry in hours
    pub token_expiry_hours: i64,
    /// Issuer claim stamped into every token
    pub issuer: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            token_expiry_hours: 24,
            issuer: "prosel".to_string(),
        }
    }
}

impl From<&AuthConfig> for TokenServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
            token_expiry_hours: config.token_expiry_hours,
            ..Default::default()
        }
    }
}
