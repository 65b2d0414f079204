//! Value objects shared by domain services

mod login_outcome;

pub use login_outcome::LoginOutcome;
