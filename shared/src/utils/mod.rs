//! Utility helpers shared by the API and domain layers

pub mod validation;
