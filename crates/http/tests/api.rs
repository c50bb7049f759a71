//! Black-box tests driving the router with `tower::ServiceExt::oneshot`.

#![allow(clippy::unwrap_used, reason = "test code")]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use employee_registry_http::{AppState, create_router};
use employee_registry_service::EmployeeService;
use employee_registry_storage::StorageBackend;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

fn create_app() -> (Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let backend = StorageBackend::new_sqlite(&temp_dir.path().join("api.db")).unwrap();
    let service = EmployeeService::new(Arc::new(backend));
    let state = Arc::new(AppState { employee_service: Arc::new(service) });
    (create_router(state), temp_dir)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    send_json(app, Method::GET, uri, None).await
}

async fn post_employee(app: &Router, first: &str, last: &str, email: &str) -> (StatusCode, Value) {
    send_json(app, Method::POST, "/Employees", Some(employee(first, last, email))).await
}

fn employee(first: &str, last: &str, email: &str) -> Value {
    json!({ "firstName": first, "lastName": last, "email": email })
}

fn assert_error_body(body: &Value, status: StatusCode) {
    assert_eq!(body["status"], status.as_u16());
    assert!(body["timestamp"].is_string());
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn create_duplicate_then_missing() {
    let (app, _dir) = create_app();

    let (status, created) = post_employee(&app, "Ana", "Li", "ana.li@example.com").await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created["id"].as_i64().unwrap() > 0);
    assert_eq!(created["firstName"], "Ana");

    let (status, body) = post_employee(&app, "Ana", "Li", "ana.li@example.com").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("ana.li@example.com"));

    let (status, body) = get_json(&app, "/Employees/987654").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body(&body, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Employee not found with ID: 987654");
}

#[tokio::test]
async fn list_is_no_content_when_empty() {
    let (app, _dir) = create_app();

    let (status, bytes) = send(&app, Method::GET, "/Employees", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(bytes.is_empty());

    post_employee(&app, "Ana", "Li", "ana.li@example.com").await;
    let (status, list) = get_json(&app, "/Employees").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn create_then_get_round_trip() {
    let (app, _dir) = create_app();
    let (_, created) = post_employee(&app, "Ana", "Li", "ana.li@example.com").await;
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = get_json(&app, &format!("/Employees/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_rejects_invalid_email() {
    let (app, _dir) = create_app();
    let (status, body) = post_employee(&app, "Ana", "Li", "ana.li").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/Employees", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn create_with_null_email_is_invalid_email() {
    let (app, _dir) = create_app();
    let body = json!({ "firstName": "A", "lastName": "B", "email": null });

    let (status, body) = send_json(&app, Method::POST, "/Employees", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "The email address '' is not valid");

    let (status, body) =
        send_json(&app, Method::POST, "/Employees", Some(json!({ "firstName": "A" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "The email address '' is not valid");
}

#[tokio::test]
async fn malformed_requests_are_bad_request() {
    let (app, _dir) = create_app();

    let (status, body) = get_json(&app, "/Employees/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body, StatusCode::BAD_REQUEST);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/Employees")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_utf8_search_path_uses_error_body() {
    let (app, _dir) = create_app();
    for uri in [
        "/Employees/search/email/%FF",
        "/Employees/search/firstNameContaining/%FF",
        "/Employees/search/lastNameContaining/%FF",
        "/Employees/search/firstName/%FF",
    ] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_error_body(&body, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn update_keeps_path_id() {
    let (app, _dir) = create_app();
    let (_, created) = post_employee(&app, "Ana", "Li", "ana.li@example.com").await;
    let id = created["id"].as_i64().unwrap();

    let mut body = employee("Anna", "Lee", "anna.lee@example.com");
    body["id"] = json!(id + 100);
    let uri = format!("/Employees/{id}");
    let (status, updated) = send_json(&app, Method::PUT, &uri, Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["lastName"], "Lee");

    let body = employee("X", "Y", "x.y@example.com");
    let (status, _) = send_json(&app, Method::PUT, "/Employees/424242", Some(body)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_returns_text_and_removes() {
    let (app, _dir) = create_app();
    let (_, created) = post_employee(&app, "Ana", "Li", "ana.li@example.com").await;
    let id = created["id"].as_i64().unwrap();
    let uri = format!("/Employees/{id}");

    let (status, bytes) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(text, format!("Employee with ID {id} has been deleted."));

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_routes() {
    let (app, _dir) = create_app();
    post_employee(&app, "Ana", "Li", "ana.li@example.com").await;
    post_employee(&app, "Joana", "Lima", "joana@example.com").await;
    post_employee(&app, "Bob", "Ray", "bob@example.com").await;

    let (status, found) = get_json(&app, "/Employees/search/email/bob@example.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["firstName"], "Bob");

    let (status, body) = get_json(&app, "/Employees/search/email/nobody@example.com").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Employee not found with email: nobody@example.com");

    let (status, hits) = get_json(&app, "/Employees/search/firstNameContaining/an").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hits.as_array().unwrap().len(), 1);

    let (status, _) =
        send(&app, Method::GET, "/Employees/search/firstNameContaining/zz", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, hits) = get_json(&app, "/Employees/search/lastNameContaining/Li").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hits.as_array().unwrap().len(), 2);

    let (status, hits) = get_json(&app, "/Employees/search/firstName/Ana").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hits.as_array().unwrap().len(), 1);

    let (status, hits) =
        get_json(&app, "/Employees/search/fullName?firstName=Joana&lastName=Lima").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hits[0]["email"], "joana@example.com");

    let (status, body) = get_json(&app, "/Employees/search/fullName?firstName=Joana").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("lastName"));
}

#[tokio::test]
async fn stats_routes() {
    let (app, _dir) = create_app();
    let (_, count) = get_json(&app, "/Employees/stats/count").await;
    assert_eq!(count, json!(0));

    post_employee(&app, "Ana", "Li", "ana.li@example.com").await;
    post_employee(&app, "Ana", "Ray", "ana.ray@example.com").await;

    let (status, count) = get_json(&app, "/Employees/stats/count").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(count, json!(2));

    let (_, names) = get_json(&app, "/Employees/stats/firstNames").await;
    assert_eq!(names, json!(["Ana"]));
}

#[tokio::test]
async fn batch_is_all_or_nothing() {
    let (app, _dir) = create_app();
    let bad = json!([employee("A", "One", "a@example.com"), employee("B", "Two", "broken")]);
    let (status, body) = send_json(&app, Method::POST, "/Employees/batch", Some(bad)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body, StatusCode::BAD_REQUEST);

    let (_, count) = get_json(&app, "/Employees/stats/count").await;
    assert_eq!(count, json!(0));

    let good =
        json!([employee("A", "One", "a@example.com"), employee("B", "Two", "b@example.com")]);
    let (status, created) = send_json(&app, Method::POST, "/Employees/batch", Some(good)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn health_and_version() {
    let (app, _dir) = create_app();
    let (status, bytes) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"ok");

    let (status, body) = get_json(&app, "/api/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
