//! Cross-cutting request handlers

pub mod error;

pub use error::{handle_domain_error, validation_failure};
