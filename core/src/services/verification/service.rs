//! Main two-step verification implementation

use constant_time_eq::constant_time_eq;
use rand::Rng;
use std::sync::Arc;

use crate::errors::{DomainError, DomainResult};
use crate::repositories::ContractorRepository;

/// Length of the generated verification code
pub const CODE_LENGTH: usize = 6;

/// Two-step verification over the contractor store.
///
/// The generated code is persisted on the contractor row itself; delivery to
/// the contractor happens out-of-band and is not this service's concern. A
/// successful validation does not rotate the stored code.
pub struct TwoStepService<C: ContractorRepository> {
    contractors: Arc<C>,
}

impl<C: ContractorRepository> TwoStepService<C> {
    /// Create a new two-step verification service
    pub fn new(contractors: Arc<C>) -> Self {
        Self { contractors }
    }

    /// Enables two-step verification for a contractor and returns the
    /// generated code. Re-activation replaces any previous code.
    pub async fn activate(&self, contractor_id: i64) -> DomainResult<String> {
        self.contractors
            .find_by_id(contractor_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Contractor"))?;

        let code = Self::generate_code();
        self.contractors
            .set_two_step(contractor_id, true, Some(code.clone()))
            .await?;

        tracing::info!(contractor_id, "two-step verification activated");
        Ok(code)
    }

    /// Compares a submitted code against the stored one.
    ///
    /// Returns `false` for contractors that never activated two-step.
    pub async fn validate(&self, contractor_id: i64, submitted: &str) -> DomainResult<bool> {
        let contractor = self
            .contractors
            .find_by_id(contractor_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Contractor"))?;

        Ok(match contractor.two_step_code {
            Some(stored) => constant_time_eq(stored.as_bytes(), submitted.as_bytes()),
            None => false,
        })
    }

    fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        let code: u32 = rng.gen_range(0..1_000_000);
        format!("{:0width$}", code, width = CODE_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Contractor;
    use crate::repositories::MockStore;

    async fn seeded() -> (Arc<crate::repositories::MockContractorRepository>, i64) {
        let store = MockStore::new();
        let contractors = Arc::new(store.contractors());
        let created = contractors
            .create(Contractor::new(
                "a@b.com".to_string(),
                "$2b$12$hash".to_string(),
                "12345678901234".to_string(),
                "X".to_string(),
                "Y".to_string(),
            ))
            .await
            .unwrap();
        (contractors, created.id)
    }

    #[tokio::test]
    async fn test_activate_stores_six_digit_code() {
        let (contractors, id) = seeded().await;
        let service = TwoStepService::new(contractors.clone());

        let code = service.activate(id).await.unwrap();
        assert_eq!(code.len(), CODE_LENGTH);
        assert!(code.chars().all(|c| c.is_ascii_digit()));

        let stored = contractors.find_by_id(id).await.unwrap().unwrap();
        assert!(stored.two_step_enabled);
        assert_eq!(stored.two_step_code.as_deref(), Some(code.as_str()));
    }

    #[tokio::test]
    async fn test_validate_matches_stored_code() {
        let (contractors, id) = seeded().await;
        let service = TwoStepService::new(contractors);

        let code = service.activate(id).await.unwrap();
        assert!(service.validate(id, &code).await.unwrap());
        assert!(!service.validate(id, "000000").await.unwrap() || code == "000000");
    }

    #[tokio::test]
    async fn test_validate_without_activation_is_false() {
        let (contractors, id) = seeded().await;
        let service = TwoStepService::new(contractors);
        assert!(!service.validate(id, "123456").await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_contractor_is_not_found() {
        let (contractors, _) = seeded().await;
        let service = TwoStepService::new(contractors);
        let err = service.activate(999_999).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_code_survives_successful_validation() {
        let (contractors, id) = seeded().await;
        let service = TwoStepService::new(contractors.clone());

        let code = service.activate(id).await.unwrap();
        assert!(service.validate(id, &code).await.unwrap());
        // No rotation: the same code validates again
        assert!(service.validate(id, &code).await.unwrap());
    }
}
