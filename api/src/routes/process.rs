//! Selective process routes.
//!
//! Browsing processes is public so candidates can find openings; creating and
//! deleting them requires a contractor session, and a process can only be
//! deleted by the contractor that owns it.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::process::{
    CreateProcessRequest, FindByTitleQuery, FindProcessQuery, ProcessRecord, ProcessSummary,
    ProcessView,
};
use crate::dto::MessageResponse;
use crate::handlers::{handle_domain_error, validation_failure};
use crate::middleware::auth::AuthContext;

use ps_core::domain::entities::SelectiveProcess;
use ps_core::repositories::{
    ContractorRepository, SelectiveProcessRepository, SubscriberRepository,
};

/// GET /processo-seletivo/todos
pub async fn list<C, P, S>(state: web::Data<AppState<C, P, S>>) -> HttpResponse
where
    C: ContractorRepository + 'static,
    P: SelectiveProcessRepository + 'static,
    S: SubscriberRepository + 'static,
{
    match state.processes.find_all().await {
        Ok(processes) => HttpResponse::Ok().json(
            processes
                .iter()
                .map(ProcessRecord::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /processo-seletivo?id=
pub async fn find<C, P, S>(
    state: web::Data<AppState<C, P, S>>,
    query: web::Query<FindProcessQuery>,
) -> HttpResponse
where
    C: ContractorRepository + 'static,
    P: SelectiveProcessRepository + 'static,
    S: SubscriberRepository + 'static,
{
    match state.processes.find_by_id(query.id).await {
        Ok(Some(process)) => HttpResponse::Ok().json(ProcessView::new("Foi encontrado", &process)),
        Ok(None) => HttpResponse::NotFound().json(MessageResponse::new("process not found")),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /findProcessByTitle?title=
///
/// A miss answers 200 with a message body rather than 404; clients treat
/// this endpoint as a search, not a lookup.
pub async fn find_by_title<C, P, S>(
    state: web::Data<AppState<C, P, S>>,
    query: web::Query<FindByTitleQuery>,
) -> HttpResponse
where
    C: ContractorRepository + 'static,
    P: SelectiveProcessRepository + 'static,
    S: SubscriberRepository + 'static,
{
    if let Err(errors) = query.validate() {
        return validation_failure(errors);
    }

    match state.processes.find_by_title(&query.title).await {
        Ok(Some(process)) => HttpResponse::Ok().json(ProcessView::new("Foi encontrado", &process)),
        Ok(None) => HttpResponse::Ok().json(MessageResponse::new("process not found")),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /processo-seletivo/{id}
///
/// Lists the processes owned by contractor `{id}` with the owner relation
/// cleared, so the listing leaks no contractor data.
pub async fn list_by_contractor<C, P, S>(
    state: web::Data<AppState<C, P, S>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    C: ContractorRepository + 'static,
    P: SelectiveProcessRepository + 'static,
    S: SubscriberRepository + 'static,
{
    match state.processes.find_by_contractor(path.into_inner()).await {
        Ok(processes) => HttpResponse::Ok().json(
            processes
                .iter()
                .map(ProcessSummary::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => handle_domain_error(e),
    }
}

/// POST /processo-seletivo
///
/// The authenticated contractor becomes the owner; ownership is never taken
/// from the request body.
pub async fn create<C, P, S>(
    state: web::Data<AppState<C, P, S>>,
    payload: web::Json<CreateProcessRequest>,
    auth: AuthContext,
) -> HttpResponse
where
    C: ContractorRepository + 'static,
    P: SelectiveProcessRepository + 'static,
    S: SubscriberRepository + 'static,
{
    let payload = payload.into_inner();
    if let Err(errors) = payload.validate() {
        return validation_failure(errors);
    }

    let process = SelectiveProcess::new(
        payload.title,
        payload.description,
        payload.deadline,
        payload.method_of_contact,
        auth.contractor_id,
    );

    match state.processes.create(process).await {
        Ok(created) => {
            log::info!(
                "process {} created by contractor {}",
                created.id,
                auth.contractor_id
            );
            HttpResponse::Ok().json(ProcessView::new("Foi inserido", &created))
        }
        Err(e) => handle_domain_error(e),
    }
}

/// DELETE /processo-seletivo/{id}
///
/// Deletion cascades to the process's subscribers.
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

    let process = match state.processes.find_by_id(id).await {
        Ok(Some(process)) => process,
        Ok(None) => {
            return HttpResponse::NotFound().json(MessageResponse::new("process not found"))
        }
        Err(e) => return handle_domain_error(e),
    };

    if !process.is_owned_by(auth.contractor_id) {
        return HttpResponse::Forbidden().json(MessageResponse::new("Invalid contractor."));
    }

    match state.processes.delete(id).await {
        Ok(Some(deleted)) => {
            log::info!("process {} deleted", id);
            HttpResponse::Ok().json(ProcessView::new("Foi removido", &deleted))
        }
        Ok(None) => HttpResponse::NotFound().json(MessageResponse::new("process not found")),
        Err(e) => handle_domain_error(e),
    }
}
