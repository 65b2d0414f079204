//! Shared setup for the API integration tests.
//!
//! Tests run the real application factory over the in-memory store, so the
//! full middleware and routing stack is exercised without a database.

#![allow(dead_code)]

use actix_web::web;
use serde_json::{json, Value};
use std::sync::Arc;

use ps_api::app::AppState;
use ps_core::repositories::{
    MockContractorRepository, MockProcessRepository, MockStore, MockSubscriberRepository,
};
use ps_core::services::token::TokenServiceConfig;

pub type TestState =
    AppState<MockContractorRepository, MockProcessRepository, MockSubscriberRepository>;

/// Application state over a fresh in-memory store
pub fn test_state() -> web::Data<TestState> {
    let store = MockStore::new();
    web::Data::new(AppState::new(
        Arc::new(store.contractors()),
        Arc::new(store.processes()),
        Arc::new(store.subscribers()),
        TokenServiceConfig {
            jwt_secret: "integration-test-secret".to_string(),
            token_expiry_hours: 1,
            issuer: "prosel".to_string(),
        },
        None,
    ))
}

/// Valid registration body for the given email
pub fn contractor_json(email: &str) -> Value {
    json!({
        "email": email,
        "cnpj": "12345678901234",
        "companyName": "Acme Ltda",
        "tradeName": "Acme",
        "password": "Abc12345"
    })
}

/// Valid process creation body with the given title
pub fn process_json(title: &str) -> Value {
    json!({
        "title": title,
        "description": "Junior opening",
        "deadline": "2026-12-31",
        "methodOfContact": "email"
    })
}

/// Valid enrollment body targeting the given process
pub fn subscriber_json(email: &str, process_id: i64) -> Value {
    json!({
        "email": email,
        "name": "Ana Silva",
        "birth": "1999-04-02",
        "selectiveProcessId": process_id
    })
}

/// Authorization header value for a session token
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
