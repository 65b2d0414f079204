//! Subscriber (candidate enrollment) routes.
//!
//! Both endpoints are public: candidates enroll without an account, and
//! listings are scoped to a single selective process.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::subscriber::{
    ListSubscribersQuery, SubscribeRequest, SubscriberCreatedResponse, SubscriberSummary,
};
use crate::dto::MessageResponse;
use crate::handlers::handle_domain_error;

use ps_core::domain::entities::Subscriber;
use ps_core::repositories::{
    ContractorRepository, SelectiveProcessRepository, SubscriberRepository,
};

const ENROLL_FAILED: &str = "It was not possible to enroll in the selective process.";

/// POST /subscriber
///
/// Enrollment requires the target process to exist; any failure is reported
/// with the same message.
pub async fn subscribe<C, P, S>(
    state: web::Data<AppState<C, P, S>>,
    payload: web::Json<SubscribeRequest>,
) -> HttpResponse
where
    C: ContractorRepository + 'static,
    P: SelectiveProcessRepository + 'static,
    S: SubscriberRepository + 'static,
{
    let payload = payload.into_inner();
    if let Err(errors) = payload.validate() {
        log::debug!("enrollment rejected: {}", errors);
        return HttpResponse::Forbidden().json(MessageResponse::new(ENROLL_FAILED));
    }

    match state
        .processes
        .find_by_id(payload.selective_process_id)
        .await
    {
        Ok(Some(_)) => {}
        Ok(None) => return HttpResponse::Forbidden().json(MessageResponse::new(ENROLL_FAILED)),
        Err(e) => return handle_domain_error(e),
    }

    let subscriber = Subscriber::new(
        payload.name,
        payload.birth,
        payload.email,
        payload.selective_process_id,
    );

    match state.subscribers.create(subscriber).await {
        Ok(created) => HttpResponse::Ok().json(SubscriberCreatedResponse {
            message: "Foi inscrito".to_string(),
            id: created.id,
            email: created.email,
            name: created.name,
            birth: created.birth,
            selective_process_id: created.selective_process_id,
        }),
        Err(e) => {
            log::debug!("enrollment failed: {}", e);
            HttpResponse::Forbidden().json(MessageResponse::new(ENROLL_FAILED))
        }
    }
}

/// GET /subscriber?selectiveProcessId=
pub async fn list<C, P, S>(
    state: web::Data<AppState<C, P, S>>,
    query: web::Query<ListSubscribersQuery>,
) -> HttpResponse
where
    C: ContractorRepository + 'static,
    P: SelectiveProcessRepository + 'static,
    S: SubscriberRepository + 'static,
{
    match state
        .subscribers
        .find_by_process(query.selective_process_id)
        .await
    {
        Ok(subscribers) => HttpResponse::Ok().json(
            subscribers
                .iter()
                .map(SubscriberSummary::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => handle_domain_error(e),
    }
}
