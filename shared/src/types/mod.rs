//! Common types shared across layers

pub mod response;

pub use response::{error_codes, ErrorResponse, MessageResponse};
