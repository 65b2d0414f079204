//! # ProSel Shared
//!
//! Cross-layer utilities for the ProSel backend: typed configuration,
//! common response structures, and input validation helpers.

pub mod config;
pub mod types;
pub mod utils;
