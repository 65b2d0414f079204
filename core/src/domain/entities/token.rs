//! Session token claims.

use chrono::{Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::TokenError;

/// JWT claims carried by a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the contractor id
    pub sub: String,

    /// Token issuer
    pub iss: String,

    /// Issued-at timestamp (Unix seconds)
    pub iat: i64,

    /// Expiry timestamp (Unix seconds)
    pub exp: i64,

    /// Unique token id
    pub jti: String,
}

impl Claims {
    /// Creates claims for a contractor session token
    pub fn new(contractor_id: i64, issuer: &str, expiry_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiry_hours);
        Self {
            sub: contractor_id.to_string(),
            iss: issuer.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Self::generate_jti(),
        }
    }

    /// Parses the contractor id out of the subject claim
    pub fn contractor_id(&self) -> Result<i64, TokenError> {
        self.sub.parse().map_err(|_| TokenError::InvalidClaims)
    }

    fn generate_jti() -> String {
        let bytes: [u8; 8] = rand::thread_rng().gen();
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}
