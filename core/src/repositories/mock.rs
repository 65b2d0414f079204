//! In-memory repository implementations for testing.
//!
//! All three mock repositories share one `MockStore`, so relational behavior
//! such as cascading deletes works the same way it does against the real
//! database.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Contractor, SelectiveProcess, Subscriber};
use crate::errors::DomainError;
use crate::repositories::{
    ContractorRepository, SelectiveProcessRepository, SubscriberRepository,
};

#[derive(Default)]
struct MockState {
    contractors: HashMap<i64, Contractor>,
    processes: HashMap<i64, SelectiveProcess>,
    subscribers: HashMap<i64, Subscriber>,
    next_id: i64,
}

impl MockState {
    fn assign_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Shared in-memory store backing the mock repositories
#[derive(Clone, Default)]
pub struct MockStore {
    inner: Arc<RwLock<MockState>>,
}

impl MockStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Contractor repository over this store
    pub fn contractors(&self) -> MockContractorRepository {
        MockContractorRepository {
            store: self.clone(),
        }
    }

    /// Selective process repository over this store
    pub fn processes(&self) -> MockProcessRepository {
        MockProcessRepository {
            store: self.clone(),
        }
    }

    /// Subscriber repository over this store
    pub fn subscribers(&self) -> MockSubscriberRepository {
        MockSubscriberRepository {
            store: self.clone(),
        }
    }
}

/// Mock contractor repository for testing
#[derive(Clone)]
pub struct MockContractorRepository {
    store: MockStore,
}

#[async_trait]
impl ContractorRepository for MockContractorRepository {
    async fn create(&self, mut contractor: Contractor) -> Result<Contractor, DomainError> {
        let mut state = self.store.inner.write().await;

        if state.contractors.values().any(|c| c.email == contractor.email) {
            return Err(DomainError::Conflict {
                message: "email already registered".to_string(),
            });
        }

        contractor.id = state.assign_id();
        state.contractors.insert(contractor.id, contractor.clone());
        Ok(contractor)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Contractor>, DomainError> {
        let state = self.store.inner.read().await;
        Ok(state.contractors.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Contractor>, DomainError> {
        let state = self.store.inner.read().await;
        Ok(state.contractors.values().find(|c| c.email == email).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Contractor>, DomainError> {
        let state = self.store.inner.read().await;
        let mut all: Vec<_> = state.contractors.values().cloned().collect();
        all.sort_by_key(|c| c.id);
        Ok(all)
    }

    async fn update(&self, contractor: Contractor) -> Result<Contractor, DomainError> {
        let mut state = self.store.inner.write().await;

        if !state.contractors.contains_key(&contractor.id) {
            return Err(DomainError::not_found("Contractor"));
        }
        if state
            .contractors
            .values()
            .any(|c| c.email == contractor.email && c.id != contractor.id)
        {
            return Err(DomainError::Conflict {
                message: "email already registered".to_string(),
            });
        }

        state.contractors.insert(contractor.id, contractor.clone());
        Ok(contractor)
    }

    async fn set_two_step(
        &self,
        id: i64,
        enabled: bool,
        code: Option<String>,
    ) -> Result<(), DomainError> {
        let mut state = self.store.inner.write().await;
        let contractor = state
            .contractors
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("Contractor"))?;
        contractor.two_step_enabled = enabled;
        contractor.two_step_code = code;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<Option<Contractor>, DomainError> {
        let mut state = self.store.inner.write().await;

        let deleted = match state.contractors.remove(&id) {
            Some(contractor) => contractor,
            None => return Ok(None),
        };

        let process_ids: Vec<i64> = state
            .processes
            .values()
            .filter(|p| p.contractor_id == id)
            .map(|p| p.id)
            .collect();
        for process_id in &process_ids {
            state.processes.remove(process_id);
        }
        state
            .subscribers
            .retain(|_, s| !process_ids.contains(&s.selective_process_id));

        Ok(Some(deleted))
    }
}

/// Mock selective process repository for testing
#[derive(Clone)]
pub struct MockProcessRepository {
    store: MockStore,
}

#[async_trait]
impl SelectiveProcessRepository for MockProcessRepository {
    async fn create(&self, mut process: SelectiveProcess) -> Result<SelectiveProcess, DomainError> {
        let mut state = self.store.inner.write().await;

        if !state.contractors.contains_key(&process.contractor_id) {
            return Err(DomainError::not_found("Contractor"));
        }

        process.id = state.assign_id();
        state.processes.insert(process.id, process.clone());
        Ok(process)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<SelectiveProcess>, DomainError> {
        let state = self.store.inner.read().await;
        Ok(state.processes.get(&id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<SelectiveProcess>, DomainError> {
        let state = self.store.inner.read().await;
        let mut matches: Vec<_> = state
            .processes
            .values()
            .filter(|p| p.title == title)
            .cloned()
            .collect();
        matches.sort_by_key(|p| p.id);
        Ok(matches.into_iter().next())
    }

    async fn find_by_contractor(
        &self,
        contractor_id: i64,
    ) -> Result<Vec<SelectiveProcess>, DomainError> {
        let state = self.store.inner.read().await;
        let mut owned: Vec<_> = state
            .processes
            .values()
            .filter(|p| p.contractor_id == contractor_id)
            .cloned()
            .collect();
        owned.sort_by_key(|p| p.id);
        Ok(owned)
    }

    async fn find_all(&self) -> Result<Vec<SelectiveProcess>, DomainError> {
        let state = self.store.inner.read().await;
        let mut all: Vec<_> = state.processes.values().cloned().collect();
        all.sort_by_key(|p| p.id);
        Ok(all)
    }

    async fn delete(&self, id: i64) -> Result<Option<SelectiveProcess>, DomainError> {
        let mut state = self.store.inner.write().await;

        let deleted = match state.processes.remove(&id) {
            Some(process) => process,
            None => return Ok(None),
        };
        state.subscribers.retain(|_, s| s.selective_process_id != id);

        Ok(Some(deleted))
    }
}

/// Mock subscriber repository for testing
#[derive(Clone)]
pub struct MockSubscriberRepository {
    store: MockStore,
}

#[async_trait]
impl SubscriberRepository for MockSubscriberRepository {
    async fn create(&self, mut subscriber: Subscriber) -> Result<Subscriber, DomainError> {
        let mut state = self.store.inner.write().await;

        if !state.processes.contains_key(&subscriber.selective_process_id) {
            return Err(DomainError::not_found("SelectiveProcess"));
        }

        subscriber.id = state.assign_id();
        state.subscribers.insert(subscriber.id, subscriber.clone());
        Ok(subscriber)
    }

    async fn find_by_process(&self, process_id: i64) -> Result<Vec<Subscriber>, DomainError> {
        let state = self.store.inner.read().await;
        let mut enrolled: Vec<_> = state
            .subscribers
            .values()
            .filter(|s| s.selective_process_id == process_id)
            .cloned()
            .collect();
        enrolled.sort_by_key(|s| s.id);
        Ok(enrolled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn contractor(email: &str) -> Contractor {
        Contractor::new(
            email.to_string(),
            "$2b$12$hash".to_string(),
            "12345678901234".to_string(),
            "X".to_string(),
            "Y".to_string(),
        )
    }

    fn process(contractor_id: i64, title: &str) -> SelectiveProcess {
        SelectiveProcess::new(
            title.to_string(),
            "desc".to_string(),
            NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
            "email".to_string(),
            contractor_id,
        )
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = MockStore::new();
        let repo = store.contractors();
        let first = repo.create(contractor("a@b.com")).await.unwrap();
        let second = repo.create(contractor("c@d.com")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let store = MockStore::new();
        let repo = store.contractors();
        repo.create(contractor("a@b.com")).await.unwrap();
        let err = repo.create(contractor("a@b.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_contractor_delete_cascades() {
        let store = MockStore::new();
        let contractors = store.contractors();
        let processes = store.processes();
        let subscribers = store.subscribers();

        let owner = contractors.create(contractor("a@b.com")).await.unwrap();
        let posting = processes.create(process(owner.id, "Dev")).await.unwrap();
        subscribers
            .create(Subscriber::new(
                "Ana".to_string(),
                NaiveDate::from_ymd_opt(1999, 4, 2).unwrap(),
                "ana@example.com".to_string(),
                posting.id,
            ))
            .await
            .unwrap();

        let deleted = contractors.delete(owner.id).await.unwrap();
        assert_eq!(deleted.unwrap().id, owner.id);
        assert!(processes.find_by_id(posting.id).await.unwrap().is_none());
        assert!(subscribers
            .find_by_process(posting.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_process_delete_cascades_to_subscribers() {
        let store = MockStore::new();
        let contractors = store.contractors();
        let processes = store.processes();
        let subscribers = store.subscribers();

        let owner = contractors.create(contractor("a@b.com")).await.unwrap();
        let posting = processes.create(process(owner.id, "Dev")).await.unwrap();
        subscribers
            .create(Subscriber::new(
                "Ana".to_string(),
                NaiveDate::from_ymd_opt(1999, 4, 2).unwrap(),
                "ana@example.com".to_string(),
                posting.id,
            ))
            .await
            .unwrap();

        processes.delete(posting.id).await.unwrap();
        assert!(subscribers
            .find_by_process(posting.id)
            .await
            .unwrap()
            .is_empty());
        assert!(contractors.find_by_id(owner.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_find_by_title_returns_first_match() {
        let store = MockStore::new();
        let contractors = store.contractors();
        let processes = store.processes();

        let owner = contractors.create(contractor("a@b.com")).await.unwrap();
        let first = processes.create(process(owner.id, "Dev")).await.unwrap();
        processes.create(process(owner.id, "Dev")).await.unwrap();

        let found = processes.find_by_title("Dev").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
        assert!(processes.find_by_title("QA").await.unwrap().is_none());
    }
}
