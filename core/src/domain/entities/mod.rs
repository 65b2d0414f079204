//! Domain entities

pub mod contractor;
pub mod selective_process;
pub mod subscriber;
pub mod token;

pub use contractor::Contractor;
pub use selective_process::SelectiveProcess;
pub use subscriber::Subscriber;
pub use token::Claims;
