//! Application state and factory.
//!
//! `AppState` carries the repositories and domain services; `create_app`
//! assembles the actix application with its middleware and routes. Protected
//! routes declare their guard with a per-route `wrap` of the JWT middleware.

use actix_web::{middleware::Logger, web, App, HttpResponse};
use std::sync::Arc;

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::{contractor, login, process, subscriber};

use ps_core::repositories::{
    ContractorRepository, SelectiveProcessRepository, SubscriberRepository,
};
use ps_core::services::auth::AuthService;
use ps_core::services::password::PasswordHandler;
use ps_core::services::token::{TokenService, TokenServiceConfig};
use ps_core::services::verification::TwoStepService;

/// Shared application state, generic over the repository implementations
pub struct AppState<C, P, S>
where
    C: ContractorRepository,
    P: SelectiveProcessRepository,
    S: SubscriberRepository,
{
    pub contractors: Arc<C>,
    pub processes: Arc<P>,
    pub subscribers: Arc<S>,
    pub token_service: TokenService,
    pub auth_service: AuthService<C>,
    pub two_step: TwoStepService<C>,
    pub password_handler: PasswordHandler,
    pub accepted_origin: Option<String>,
}

impl<C, P, S> AppState<C, P, S>
where
    C: ContractorRepository,
    P: SelectiveProcessRepository,
    S: SubscriberRepository,
{
    /// Wire the services around the given repositories
    pub fn new(
        contractors: Arc<C>,
        processes: Arc<P>,
        subscribers: Arc<S>,
        token_config: TokenServiceConfig,
        accepted_origin: Option<String>,
    ) -> Self {
        let token_service = TokenService::new(token_config);
        Self {
            auth_service: AuthService::new(contractors.clone(), token_service.clone()),
            two_step: TwoStepService::new(contractors.clone()),
            password_handler: PasswordHandler::new(),
            contractors,
            processes,
            subscribers,
            token_service,
            accepted_origin,
        }
    }
}

/// Create and configure the application with all routes and middleware
pub fn create_app<C, P, S>(
    state: web::Data<AppState<C, P, S>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    C: ContractorRepository + 'static,
    P: SelectiveProcessRepository + 'static,
    S: SubscriberRepository + 'static,
{
    let cors = create_cors(state.accepted_origin.as_deref());
    let tokens = state.token_service.clone();

    App::new()
        .app_data(state)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check
        .route("/health", web::get().to(health_check))
        // Contractor routes
        .route("/contratante", web::post().to(contractor::create::<C, P, S>))
        .route("/contratante", web::get().to(contractor::find::<C, P, S>))
        .route(
            "/contratante/todos",
            web::get().to(contractor::list::<C, P, S>),
        )
        .route(
            "/contratante/ativarduasetapas/{id}",
            web::put()
                .to(contractor::activate_two_step::<C, P, S>)
                .wrap(JwtAuth::new(tokens.clone())),
        )
        .route(
            "/contratante/validartoken/{id}",
            web::get()
                .to(contractor::validate_two_step_code::<C, P, S>)
                .wrap(JwtAuth::new(tokens.clone())),
        )
        .route(
            "/contratante/{id}",
            web::put()
                .to(contractor::update::<C, P, S>)
                .wrap(JwtAuth::new(tokens.clone())),
        )
        .route(
            "/contratante/{id}",
            web::delete()
                .to(contractor::delete::<C, P, S>)
                .wrap(JwtAuth::new(tokens.clone())),
        )
        // Login routes
        .route("/login", web::post().to(login::login::<C, P, S>))
        .route(
            "/login/validartoken",
            web::get().to(login::validate_token::<C, P, S>),
        )
        // Selective process routes
        .route(
            "/processo-seletivo/todos",
            web::get().to(process::list::<C, P, S>),
        )
        .route(
            "/processo-seletivo",
            web::get().to(process::find::<C, P, S>),
        )
        .route(
            "/findProcessByTitle",
            web::get().to(process::find_by_title::<C, P, S>),
        )
        .route(
            "/processo-seletivo/{id}",
            web::get().to(process::list_by_contractor::<C, P, S>),
        )
        .route(
            "/processo-seletivo",
            web::post()
                .to(process::create::<C, P, S>)
                .wrap(JwtAuth::new(tokens.clone())),
        )
        .route(
            "/processo-seletivo/{id}",
            web::delete()
                .to(process::delete::<C, P, S>)
                .wrap(JwtAuth::new(tokens)),
        )
        // Subscriber routes
        .route("/subscriber", web::post().to(subscriber::subscribe::<C, P, S>))
        .route("/subscriber", web::get().to(subscriber::list::<C, P, S>))
        // Default 404 handler
        .default_service(web::route().to(|| async {
            HttpResponse::NotFound().json(serde_json::json!({
                "error": "not_found",
                "message": "The requested resource was not found"
            }))
        }))
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "prosel-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
