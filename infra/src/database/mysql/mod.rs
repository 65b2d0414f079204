//! MySQL implementations of the repository traits

mod contractor_repository;
mod selective_process_repository;
mod subscriber_repository;

pub use contractor_repository::MySqlContractorRepository;
pub use selective_process_repository::MySqlSelectiveProcessRepository;
pub use subscriber_repository::MySqlSubscriberRepository;

use ps_core::errors::DomainError;

/// Map a SQLx error to a domain error, recognizing unique-key violations
pub(crate) fn map_sqlx_error(e: sqlx::Error, context: &str) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return DomainError::Conflict {
                message: "email already registered".to_string(),
            };
        }
    }
    DomainError::Database {
        message: format!("{}: {}", context, e),
    }
}
