//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::Claims;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and verifying contractor session tokens
#[derive(Clone)]
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from its configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a signed session token embedding the contractor id
    pub fn issue(&self, contractor_id: i64) -> DomainResult<String> {
        let claims = Claims::new(
            contractor_id,
            &self.config.issuer,
            self.config.token_expiry_hours,
        );
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies a session token and returns its claims
    pub fn verify(&self, token: &str) -> DomainResult<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            let token_error = match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                jsonwebtoken::errors::ErrorKind::InvalidIssuer => TokenError::InvalidClaims,
                _ => TokenError::InvalidTokenFormat,
            };
            DomainError::Token(token_error)
        })?;
        Ok(data.claims)
    }

    /// Verifies a token and extracts the contractor id it was issued for
    pub fn verify_contractor_id(&self, token: &str) -> DomainResult<i64> {
        let claims = self.verify(token)?;
        claims.contractor_id().map_err(DomainError::Token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(TokenServiceConfig {
            jwt_secret: "test-secret".to_string(),
            token_expiry_hours: 1,
            issuer: "prosel".to_string(),
        })
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let tokens = service();
        let token = tokens.issue(42).unwrap();
        assert_eq!(tokens.verify_contractor_id(&token).unwrap(), 42);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let tokens = service();
        let err = tokens.verify("not-a-token").unwrap_err();
        assert!(matches!(
            err,
            DomainError::Token(TokenError::InvalidTokenFormat)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = service().issue(1).unwrap();
        let other = TokenService::new(TokenServiceConfig {
            jwt_secret: "different-secret".to_string(),
            token_expiry_hours: 1,
            issuer: "prosel".to_string(),
        });
        let err = other.verify(&token).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Token(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let tokens = TokenService::new(TokenServiceConfig {
            jwt_secret: "test-secret".to_string(),
            token_expiry_hours: -1,
            issuer: "prosel".to_string(),
        });
        let token = tokens.issue(1).unwrap();
        let err = service().verify(&token).unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));
    }
}
