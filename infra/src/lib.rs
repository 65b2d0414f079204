//! # ProSel Infrastructure
//!
//! MySQL implementations of the core repository traits, plus connection-pool
//! management. All persistence failures are reported upward as
//! `DomainError::Database`; the detail never reaches API callers.

pub mod database;

pub use database::connection::DatabasePool;
pub use database::mysql::{
    MySqlContractorRepository, MySqlSelectiveProcessRepository, MySqlSubscriberRepository,
};
