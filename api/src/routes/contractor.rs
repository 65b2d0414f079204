//! Contractor account routes.
//!
//! Registration and lookup are public; deletion, updates and the two-step
//! endpoints require a valid session token, and a contractor can only act on
//! its own record.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::format_code;
use crate::dto::contractor::{
    ContractorCreatedResponse, ContractorSummary, ContractorView, FindContractorQuery,
    ValidateCodeRequest,
};
use crate::dto::MessageResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;

use ps_core::repositories::{
    ContractorRepository, SelectiveProcessRepository, SubscriberRepository,
};

/// POST /contratante
///
/// Any failure, validation or persistence, is reported the same way so the
/// endpoint does not reveal which emails are already registered.
pub async fn create<C, P, S>(
    state: web::Data<AppState<C, P, S>>,
    payload: web::Json<crate::dto::contractor::ContractorPayload>,
) -> HttpResponse
where
    C: ContractorRepository + 'static,
    P: SelectiveProcessRepository + 'static,
    S: SubscriberRepository + 'static,
{
    let payload = payload.into_inner();
    if let Err(errors) = payload.validate() {
        log::debug!("contractor registration rejected: {}", errors);
        return HttpResponse::Forbidden().json(MessageResponse::new("Unable to create user."));
    }

    match state
        .auth_service
        .register(
            payload.email,
            payload.cnpj,
            payload.trade_name,
            payload.company_name,
            &payload.password,
        )
        .await
    {
        Ok((contractor, authorization)) => HttpResponse::Ok().json(ContractorCreatedResponse {
            message: "User created".to_string(),
            id: contractor.id,
            email: contractor.email,
            cnpj: contractor.cnpj,
            company_name: contractor.company_name,
            trade_name: contractor.trade_name,
            authorization,
        }),
        Err(e) => {
            log::debug!("contractor registration failed: {}", e);
            HttpResponse::Forbidden().json(MessageResponse::new("Unable to create user."))
        }
    }
}

/// GET /contratante?id=
pub async fn find<C, P, S>(
    state: web::Data<AppState<C, P, S>>,
    query: web::Query<FindContractorQuery>,
) -> HttpResponse
where
    C: ContractorRepository + 'static,
    P: SelectiveProcessRepository + 'static,
    S: SubscriberRepository + 'static,
{
    match state.contractors.find_by_id(query.id).await {
        Ok(Some(contractor)) => HttpResponse::Ok().json(
            ContractorView::new("Foi encontrado", &contractor)
                .with_two_step_flag(contractor.two_step_enabled),
        ),
        Ok(None) => HttpResponse::NotFound().json(MessageResponse::new("contractor not found")),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /contratante/todos
pub async fn list<C, P, S>(state: web::Data<AppState<C, P, S>>) -> HttpResponse
where
    C: ContractorRepository + 'static,
    P: SelectiveProcessRepository + 'static,
    S: SubscriberRepository + 'static,
{
    match state.contractors.find_all().await {
        Ok(contractors) => HttpResponse::Ok().json(
            contractors
                .iter()
                .map(ContractorSummary::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => handle_domain_error(e),
    }
}

/// DELETE /contratante/{id}
///
/// Deletion cascades to the contractor's processes and their subscribers.
pub async fn delete<C, P, S>(
    state: web::Data<AppState<C, P, S>>,
    path: web::Path<i64>,
    auth: AuthContext,
) -> HttpResponse
where
    C: ContractorRepository + 'static,
    P: SelectiveProcessRepository + 'static,
    S: SubscriberRepository + 'static,
{
    let id = path.into_inner();

    match state.contractors.find_by_id(id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::NotFound().json(MessageResponse::new("Contractor not found"))
        }
        Err(e) => return handle_domain_error(e),
    }

    if auth.contractor_id != id {
        return HttpResponse::Forbidden().json(MessageResponse::new("Operation not permitted."));
    }

    match state.contractors.delete(id).await {
        Ok(Some(deleted)) => {
            log::info!("contractor {} deleted", id);
            HttpResponse::Ok().json(ContractorView::new("Foi Removido", &deleted))
        }
        Ok(None) => HttpResponse::NotFound().json(MessageResponse::new("Contractor not found")),
        Err(e) => handle_domain_error(e),
    }
}

/// PUT /contratante/{id}
///
/// Overwrites the profile and re-hashes the password. The new email must not
/// belong to another contractor.
pub async fn update<C, P, S>(
    state: web::Data<AppState<C, P, S>>,
    path: web::Path<i64>,
    payload: web::Json<crate::dto::contractor::ContractorPayload>,
    auth: AuthContext,
) -> HttpResponse
where
    C: ContractorRepository + 'static,
    P: SelectiveProcessRepository + 'static,
    S: SubscriberRepository + 'static,
{
    let id = path.into_inner();
    let payload = payload.into_inner();
    if let Err(errors) = payload.validate() {
        return crate::handlers::validation_failure(errors);
    }

    let mut contractor = match state.contractors.find_by_id(id).await {
        Ok(Some(contractor)) => contractor,
        Ok(None) => {
            return HttpResponse::NotFound().json(MessageResponse::new("Contractor not found"))
        }
        Err(e) => return handle_domain_error(e),
    };

    if auth.contractor_id != id {
        return HttpResponse::Forbidden().json(MessageResponse::new("Operation not permitted."));
    }

    match state.contractors.find_by_email(&payload.email).await {
        Ok(Some(other)) if other.id != id => {
            return HttpResponse::Forbidden().json(MessageResponse::new("Invalid email"))
        }
        Ok(_) => {}
        Err(e) => return handle_domain_error(e),
    }

    let password_hash = match state.password_handler.hash(&payload.password) {
        Ok(hash) => hash,
        Err(e) => return handle_domain_error(e),
    };

    contractor.apply_update(
        payload.email,
        password_hash,
        payload.cnpj,
        payload.company_name,
        payload.trade_name,
    );

    match state.contractors.update(contractor).await {
        Ok(updated) => HttpResponse::Ok().json(ContractorView::new("Foi atualizado", &updated)),
        Err(e) => handle_domain_error(e),
    }
}

/// PUT /contratante/ativarduasetapas/{id}
///
/// Enables two-step verification and returns the generated code as a bare
/// JSON string.
pub async fn activate_two_step<C, P, S>(
    state: web::Data<AppState<C, P, S>>,
    path: web::Path<i64>,
    auth: AuthContext,
) -> HttpResponse
where
    C: ContractorRepository + 'static,
    P: SelectiveProcessRepository + 'static,
    S: SubscriberRepository + 'static,
{
    let id = path.into_inner();

    match state.contractors.find_by_id(id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::BadRequest().json(MessageResponse::new("Contractor not found"))
        }
        Err(e) => return handle_domain_error(e),
    }

    if auth.contractor_id != id {
        return HttpResponse::Forbidden().json(MessageResponse::new("Operation not permitted."));
    }

    match state.two_step.activate(id).await {
        Ok(code) => HttpResponse::Ok().json(code),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /contratante/validartoken/{id}
///
/// Checks a submitted code against the stored one; answers with a bare JSON
/// boolean.
pub async fn validate_two_step_code<C, P, S>(
    state: web::Data<AppState<C, P, S>>,
    path: web::Path<i64>,
    payload: web::Json<ValidateCodeRequest>,
    auth: AuthContext,
) -> HttpResponse
where
    C: ContractorRepository + 'static,
    P: SelectiveProcessRepository + 'static,
    S: SubscriberRepository + 'static,
{
    let id = path.into_inner();

    match state.contractors.find_by_id(id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::BadRequest().json(MessageResponse::new("Contractor not found"))
        }
        Err(e) => return handle_domain_error(e),
    }

    if auth.contractor_id != id {
        return HttpResponse::Forbidden().json(MessageResponse::new("Operation not permitted."));
    }

    match state.two_step.validate(id, &format_code(payload.token)).await {
        Ok(verified) => HttpResponse::Ok().json(verified),
        Err(e) => handle_domain_error(e),
    }
}
