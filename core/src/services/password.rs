//! Password hashing and verification.
//!
//! A thin wrapper over bcrypt. Length and charset policy is enforced earlier
//! by request validation, not here.

use crate::errors::{DomainError, DomainResult};

/// Handles contractor password hashing and verification
#[derive(Debug, Clone, Default)]
pub struct PasswordHandler;

impl PasswordHandler {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password with a fresh salt
    pub fn hash(&self, plaintext: &str) -> DomainResult<String> {
        bcrypt::hash(plaintext, bcrypt::DEFAULT_COST).map_err(|e| DomainError::Internal {
            message: format!("password hashing failed: {}", e),
        })
    }

    /// Check a plaintext password against a stored hash
    pub fn verify(&self, plaintext: &str, stored_hash: &str) -> DomainResult<bool> {
        bcrypt::verify(plaintext, stored_hash).map_err(|e| DomainError::Internal {
            message: format!("password verification failed: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_never_equals_plaintext() {
        let handler = PasswordHandler::new();
        let hash = handler.hash("Abc12345").unwrap();
        assert_ne!(hash, "Abc12345");
    }

    #[test]
    fn test_verify_roundtrip() {
        let handler = PasswordHandler::new();
        let hash = handler.hash("Abc12345").unwrap();
        assert!(handler.verify("Abc12345", &hash).unwrap());
        assert!(!handler.verify("wrong-pass", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let handler = PasswordHandler::new();
        let first = handler.hash("Abc12345").unwrap();
        let second = handler.hash("Abc12345").unwrap();
        assert_ne!(first, second);
    }
}
