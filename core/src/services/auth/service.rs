//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::Contractor;
use crate::domain::value_objects::LoginOutcome;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::ContractorRepository;
use crate::services::password::PasswordHandler;
use crate::services::token::TokenService;
use crate::services::verification::TwoStepService;

/// Authentication service for the contractor login state machine.
///
/// `AwaitingCredentials -> Authenticated` when two-step is off;
/// `AwaitingCredentials -> AwaitingSecondFactor -> Authenticated` when it is
/// on. Any verification failure is terminal for the request.
pub struct AuthService<C: ContractorRepository> {
    contractors: Arc<C>,
    password_handler: PasswordHandler,
    token_service: TokenService,
    two_step: TwoStepService<C>,
}

impl<C: ContractorRepository> AuthService<C> {
    /// Create a new authentication service
    pub fn new(contractors: Arc<C>, token_service: TokenService) -> Self {
        Self {
            two_step: TwoStepService::new(contractors.clone()),
            contractors,
            password_handler: PasswordHandler::new(),
            token_service,
        }
    }

    /// Registers a contractor: hashes the password, persists the account and
    /// issues an initial session token.
    pub async fn register(
        &self,
        email: String,
        cnpj: String,
        trade_name: String,
        company_name: String,
        password: &str,
    ) -> DomainResult<(Contractor, String)> {
        let password_hash = self.password_handler.hash(password)?;
        let contractor = self
            .contractors
            .create(Contractor::new(
                email,
                password_hash,
                cnpj,
                company_name,
                trade_name,
            ))
            .await?;
        let token = self.token_service.issue(contractor.id)?;

        tracing::info!(contractor_id = contractor.id, "contractor registered");
        Ok((contractor, token))
    }

    /// Verifies email and password.
    ///
    /// Unknown emails and wrong passwords produce the same error, and the
    /// two-step state of the account never changes that error.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginOutcome> {
        let contractor = match self.contractors.find_by_email(email).await? {
            Some(contractor) => contractor,
            None => return Err(AuthError::InvalidCredentials.into()),
        };

        if !self
            .password_handler
            .verify(password, &contractor.password_hash)?
        {
            return Err(AuthError::InvalidCredentials.into());
        }

        if contractor.two_step_enabled {
            return Ok(LoginOutcome::SecondFactorRequired {
                contractor_id: contractor.id,
            });
        }

        let token = self.token_service.issue(contractor.id)?;
        Ok(LoginOutcome::Authenticated { token })
    }

    /// Completes the two-step flow: validates the submitted code and issues
    /// the session token the password step withheld.
    pub async fn complete_two_step(&self, contractor_id: i64, code: &str) -> DomainResult<String> {
        if self
            .contractors
            .find_by_id(contractor_id)
            .await?
            .is_none()
        {
            return Err(AuthError::UnknownContractor.into());
        }

        if !self.two_step.validate(contractor_id, code).await? {
            return Err(AuthError::InvalidTwoStepCode.into());
        }

        self.token_service.issue(contractor_id)
    }
}
