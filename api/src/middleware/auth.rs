//! JWT authentication middleware for protected endpoints.
//!
//! The middleware extracts the Bearer token from the Authorization header,
//! verifies it through the core token service, and injects the resolved
//! contractor identity into request extensions before the handler runs.
//! Requests without a valid token are rejected with 401 and never reach the
//! handler.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use ps_core::services::token::TokenService;
use ps_shared::types::{error_codes, ErrorResponse};

/// 401 error whose body keeps the JSON wire contract of the other error paths
fn unauthorized(message: &str) -> Error {
    let response = HttpResponse::Unauthorized()
        .json(ErrorResponse::new(error_codes::UNAUTHORIZED, message));
    InternalError::from_response(message.to_string(), response).into()
}

/// Authenticated caller identity injected into requests
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    /// Contractor id extracted from the token's subject claim
    pub contractor_id: i64,
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let context = req.extensions().get::<AuthContext>().copied();
        ready(context.ok_or_else(|| unauthorized("Missing authentication context")))
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    token_service: TokenService,
}

impl JwtAuth {
    /// Creates the middleware around the given token service
    pub fn new(token_service: TokenService) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: self.token_service.clone(),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: TokenService,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = self.token_service.clone();

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Err(unauthorized("Missing or invalid Authorization header"));
                }
            };

            let contractor_id = match token_service.verify_contractor_id(&token) {
                Ok(contractor_id) => contractor_id,
                Err(e) => {
                    log::debug!("token verification failed: {}", e);
                    return Err(unauthorized("Invalid or expired token"));
                }
            };

            req.extensions_mut().insert(AuthContext { contractor_id });

            service.call(req).await
        })
    }
}

/// Extracts the Bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
