//! Request and response DTOs.
//!
//! Wire-format JSON uses camelCase keys. Validation rules live on the request
//! structs so malformed input is rejected before handler logic runs.

pub mod auth;
pub mod contractor;
pub mod process;
pub mod subscriber;

pub use ps_shared::types::{ErrorResponse, MessageResponse};
