//! Contractor repository trait defining the interface for contractor
//! persistence.

use async_trait::async_trait;

use crate::domain::entities::Contractor;
use crate::errors::DomainError;

/// Repository contract for contractor data access.
///
/// Implementations handle the actual database operations while keeping the
/// domain layer free of storage concerns.
#[async_trait]
pub trait ContractorRepository: Send + Sync {
    /// Persist a new contractor and return it with its assigned id.
    ///
    /// Fails with `DomainError::Conflict` when the email is already taken.
    async fn create(&self, contractor: Contractor) -> Result<Contractor, DomainError>;

    /// Find a contractor by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Contractor>, DomainError>;

    /// Find a contractor by login email
    async fn find_by_email(&self, email: &str) -> Result<Option<Contractor>, DomainError>;

    /// List all contractors
    async fn find_all(&self) -> Result<Vec<Contractor>, DomainError>;

    /// Overwrite an existing contractor's fields
    async fn update(&self, contractor: Contractor) -> Result<Contractor, DomainError>;

    /// Persist the two-step flag and code for a contractor
    async fn set_two_step(
        &self,
        id: i64,
        enabled: bool,
        code: Option<String>,
    ) -> Result<(), DomainError>;

    /// Delete a contractor, cascading to its selective processes and their
    /// subscribers. Returns the deleted row, or `None` if it did not exist.
    /// The cascade must be all-or-nothing.
    async fn delete(&self, id: i64) -> Result<Option<Contractor>, DomainError>;
}
