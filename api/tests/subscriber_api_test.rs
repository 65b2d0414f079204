//! Integration tests for candidate enrollment endpoints

mod common;

use actix_web::http::header::AUTHORIZATION;
use actix_web::test;
use serde_json::Value;

use common::{bearer, contractor_json, process_json, subscriber_json, test_state};
use ps_api::app::create_app;

async fn seeded_process<S, B>(app: &S) -> (i64, i64, String)
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: actix_web::body::MessageBody,
{
    let request = test::TestRequest::post()
        .uri("/contratante")
        .set_json(contractor_json("acme@example.com"))
        .to_request();
    let contractor: Value = test::call_and_read_body_json(app, request).await;
    let contractor_id = contractor["id"].as_i64().unwrap();
    let token = contractor["authorization"].as_str().unwrap().to_string();

    let request = test::TestRequest::post()
        .uri("/processo-seletivo")
        .insert_header((AUTHORIZATION, bearer(&token)))
        .set_json(process_json("Backend engineer"))
        .to_request();
    let process: Value = test::call_and_read_body_json(app, request).await;

    (contractor_id, process["id"].as_i64().unwrap(), token)
}

#[actix_web::test]
async fn test_enroll_in_existing_process() {
    let app = test::init_service(create_app(test_state())).await;
    let (_, process_id, _) = seeded_process(&app).await;

    let request = test::TestRequest::post()
        .uri("/subscriber")
        .set_json(subscriber_json("ana@example.com", process_id))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert!(response.status().is_success());

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Foi inscrito");
    assert_eq!(body["email"], "ana@example.com");
    assert_eq!(body["selectiveProcessId"], process_id);
    assert!(body["id"].as_i64().unwrap() > 0);
}

#[actix_web::test]
async fn test_enroll_in_missing_process_is_403() {
    let app = test::init_service(create_app(test_state())).await;

    let request = test::TestRequest::post()
        .uri("/subscriber")
        .set_json(subscriber_json("ana@example.com", 999))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 403);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body["message"],
        "It was not possible to enroll in the selective process."
    );
}

#[actix_web::test]
async fn test_enroll_rejects_malformed_email() {
    let app = test::init_service(create_app(test_state())).await;
    let (_, process_id, _) = seeded_process(&app).await;

    let mut payload = subscriber_json("not-an-email", process_id);
    payload["email"] = "not-an-email".into();
    let request = test::TestRequest::post()
        .uri("/subscriber")
        .set_json(payload)
        .to_request();
    assert_eq!(test::call_service(&app, request).await.status(), 403);
}

#[actix_web::test]
async fn test_list_subscribers_of_a_process() {
    let app = test::init_service(create_app(test_state())).await;
    let (_, process_id, _) = seeded_process(&app).await;

    for email in ["ana@example.com", "bia@example.com"] {
        let request = test::TestRequest::post()
            .uri("/subscriber")
            .set_json(subscriber_json(email, process_id))
            .to_request();
        assert!(test::call_service(&app, request).await.status().is_success());
    }

    let request = test::TestRequest::get()
        .uri(&format!("/subscriber?selectiveProcessId={}", process_id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["email"], "ana@example.com");
    assert_eq!(list[1]["email"], "bia@example.com");
}

#[actix_web::test]
async fn test_contractor_deletion_cascades_to_enrollments() {
    let app = test::init_service(create_app(test_state())).await;
    let (contractor_id, process_id, token) = seeded_process(&app).await;

    let request = test::TestRequest::post()
        .uri("/subscriber")
        .set_json(subscriber_json("ana@example.com", process_id))
        .to_request();
    assert!(test::call_service(&app, request).await.status().is_success());

    let request = test::TestRequest::delete()
        .uri(&format!("/contratante/{}", contractor_id))
        .insert_header((AUTHORIZATION, bearer(&token)))
        .to_request();
    assert!(test::call_service(&app, request).await.status().is_success());

    let request = test::TestRequest::get()
        .uri(&format!("/processo-seletivo?id={}", process_id))
        .to_request();
    assert_eq!(test::call_service(&app, request).await.status(), 404);

    let request = test::TestRequest::get()
        .uri(&format!("/subscriber?selectiveProcessId={}", process_id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    assert!(body.as_array().unwrap().is_empty());
}
