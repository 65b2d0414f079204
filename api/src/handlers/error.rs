//! Central mapping from domain errors to HTTP responses.
//!
//! Client-facing failures keep the `{ "message": ... }` body shape of the
//! public contract. Persistence failures are logged with full detail and
//! answered with a generic body; internal detail never reaches the caller.

use actix_web::HttpResponse;
use validator::ValidationErrors;

use crate::dto::{ErrorResponse, MessageResponse};
use ps_core::errors::DomainError;
use ps_shared::types::error_codes;

/// Convert a domain error into the appropriate HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(MessageResponse::new(message))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(
            MessageResponse::new(format!("{} not found", resource.to_lowercase())),
        ),
        DomainError::Forbidden { message } | DomainError::Conflict { message } => {
            HttpResponse::Forbidden().json(MessageResponse::new(message))
        }
        DomainError::Auth(auth_error) => {
            HttpResponse::Forbidden().json(MessageResponse::new(auth_error.to_string()))
        }
        DomainError::Token(token_error) => HttpResponse::Unauthorized().json(ErrorResponse::new(
            error_codes::TOKEN_INVALID,
            token_error.to_string(),
        )),
        DomainError::Database { message } | DomainError::Internal { message } => {
            log::error!("internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                error_codes::INTERNAL_ERROR,
                "An internal error occurred",
            ))
        }
    }
}

/// Reject a request whose body failed DTO validation
pub fn validation_failure(errors: ValidationErrors) -> HttpResponse {
    log::debug!("request validation failed: {}", errors);
    HttpResponse::BadRequest().json(ErrorResponse::new(
        error_codes::VALIDATION_ERROR,
        "Invalid request data",
    ))
}
