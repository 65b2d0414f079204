//! Two-step verification service.
//!
//! Generates the short numeric code a contractor must present as a second
//! factor after password login, and validates submitted codes.

mod service;

pub use service::{TwoStepService, CODE_LENGTH};
