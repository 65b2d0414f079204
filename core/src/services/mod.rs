//! Domain services

pub mod auth;
pub mod password;
pub mod token;
pub mod verification;

pub use auth::AuthService;
pub use password::PasswordHandler;
pub use token::{TokenService, TokenServiceConfig};
pub use verification::TwoStepService;
