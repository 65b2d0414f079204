//! Authentication and token error types.
//!
//! The `#[error]` strings double as the messages surfaced to API callers, so
//! they match the public contract of the login and two-step endpoints.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Wrong email or password. Deliberately does not say which, and is the
    /// same regardless of the contractor's two-step state.
    #[error("Invalid username or password.")]
    InvalidCredentials,

    /// Two-step completion referenced a contractor that does not exist
    #[error("Invalid user.")]
    UnknownContractor,

    /// Submitted two-step code does not match the stored one
    #[error("Invalid token.")]
    InvalidTwoStepCode,
}

/// Session-token errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Missing authorization token")]
    MissingToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
