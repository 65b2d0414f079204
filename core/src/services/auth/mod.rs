//! Authentication flow: registration, password login, and two-step
//! completion.

mod service;

pub use service::AuthService;
