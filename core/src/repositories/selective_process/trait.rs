//! Selective process repository trait.

use async_trait::async_trait;

use crate::domain::entities::SelectiveProcess;
use crate::errors::DomainError;

/// Repository contract for selective process data access
#[async_trait]
pub trait SelectiveProcessRepository: Send + Sync {
    /// Persist a new process and return it with its assigned id
    async fn create(&self, process: SelectiveProcess) -> Result<SelectiveProcess, DomainError>;

    /// Find a process by id
    async fn find_by_id(&self, id: i64) -> Result<Option<SelectiveProcess>, DomainError>;

    /// Find the first process with the given title
    async fn find_by_title(&self, title: &str) -> Result<Option<SelectiveProcess>, DomainError>;

    /// List the processes owned by a contractor
    async fn find_by_contractor(
        &self,
        contractor_id: i64,
    ) -> Result<Vec<SelectiveProcess>, DomainError>;

    /// List all processes
    async fn find_all(&self) -> Result<Vec<SelectiveProcess>, DomainError>;

    /// Delete a process, cascading to its subscribers. Returns the deleted
    /// row, or `None` if it did not exist. The cascade must be
    /// all-or-nothing.
    async fn delete(&self, id: i64) -> Result<Option<SelectiveProcess>, DomainError>;
}
