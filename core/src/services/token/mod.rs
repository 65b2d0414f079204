//! Session token service.
//!
//! Issues and verifies the signed HS256 tokens that carry a contractor id
//! between requests.

mod config;
mod service;

pub use config::TokenServiceConfig;
pub use service::TokenService;
