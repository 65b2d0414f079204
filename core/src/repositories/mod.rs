//! Repository interfaces for entity persistence.
//!
//! The traits here are the boundary between the domain and the storage
//! layer. `infra` provides the MySQL implementations; `mock` provides an
//! in-memory store used throughout the test suites.

pub mod contractor;
pub mod mock;
pub mod selective_process;
pub mod subscriber;

pub use contractor::ContractorRepository;
pub use mock::{MockContractorRepository, MockProcessRepository, MockStore, MockSubscriberRepository};
pub use selective_process::SelectiveProcessRepository;
pub use subscriber::SubscriberRepository;
