//! HTTP route handlers, grouped by resource

pub mod contractor;
pub mod login;
pub mod process;
pub mod subscriber;
