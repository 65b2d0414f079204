//! Subscriber repository trait.

use async_trait::async_trait;

use crate::domain::entities::Subscriber;
use crate::errors::DomainError;

/// Repository contract for subscriber data access
#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    /// Persist a new subscriber and return it with its assigned id
    async fn create(&self, subscriber: Subscriber) -> Result<Subscriber, DomainError>;

    /// List the subscribers enrolled in a selective process
    async fn find_by_process(&self, process_id: i64) -> Result<Vec<Subscriber>, DomainError>;
}
