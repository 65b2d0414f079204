//! Session login routes.
//!
//! Password login either yields a session token directly or, for accounts
//! with two-step verification enabled, withholds it until the code is
//! validated through the second endpoint.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::{
    format_code, AuthenticatedResponse, AuthorizationResponse, LoginRequest,
    TwoStepPendingResponse, ValidateLoginTokenRequest,
};
use crate::handlers::{handle_domain_error, validation_failure};

use ps_core::domain::value_objects::LoginOutcome;
use ps_core::repositories::{
    ContractorRepository, SelectiveProcessRepository, SubscriberRepository,
};

/// POST /login
pub async fn login<C, P, S>(
    state: web::Data<AppState<C, P, S>>,
    payload: web::Json<LoginRequest>,
) -> HttpResponse
where
    C: ContractorRepository + 'static,
    P: SelectiveProcessRepository + 'static,
    S: SubscriberRepository + 'static,
{
    if let Err(errors) = payload.validate() {
        return validation_failure(errors);
    }

    match state.auth_service.login(&payload.email, &payload.password).await {
        Ok(LoginOutcome::SecondFactorRequired { contractor_id }) => {
            HttpResponse::Ok().json(TwoStepPendingResponse {
                two_step_enabled: true,
                usuario_id: contractor_id,
            })
        }
        Ok(LoginOutcome::Authenticated { token }) => {
            HttpResponse::Ok().json(AuthenticatedResponse {
                two_step_enabled: false,
                authorization: token,
            })
        }
        Err(e) => handle_domain_error(e),
    }
}

/// GET /login/validartoken
///
/// Completes the two-step flow: a valid code yields the session token the
/// password step withheld.
pub async fn validate_token<C, P, S>(
    state: web::Data<AppState<C, P, S>>,
    payload: web::Json<ValidateLoginTokenRequest>,
) -> HttpResponse
where
    C: ContractorRepository + 'static,
    P: SelectiveProcessRepository + 'static,
    S: SubscriberRepository + 'static,
{
    match state
        .auth_service
        .complete_two_step(payload.id, &format_code(payload.token))
        .await
    {
        Ok(token) => HttpResponse::Ok().json(AuthorizationResponse {
            authorization: token,
        }),
        Err(e) => handle_domain_error(e),
    }
}
