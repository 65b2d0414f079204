//! CORS configuration.
//!
//! The API accepts cross-origin requests only from the origin configured at
//! startup (`ACCEPTED_URL`). With no origin configured the policy is
//! permissive, which is only appropriate for local development.

use actix_cors::Cors;
use actix_web::http::{header, Method};

/// Creates the CORS middleware for the configured accepted origin
pub fn create_cors(accepted_origin: Option<&str>) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600);

    match accepted_origin {
        Some(origin) => {
            log::info!("CORS restricted to origin: {}", origin);
            cors.allowed_origin(origin)
        }
        None => {
            log::warn!("no ACCEPTED_URL configured, allowing any origin");
            cors.allow_any_origin()
        }
    }
}
