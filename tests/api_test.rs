//! Integration tests for API endpoints.
//!
//! Every test drives the real router over a fresh in-memory store.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use plantcare_api::api::{create_router, AppState};

// =============================================================================
// Test Helpers
// =============================================================================

fn app() -> Router {
    create_router(AppState::in_memory())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
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
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn registration(cpf: &str, email: &str, password: &str) -> Value {
    json!({
        "name": "Maria Silva",
        "cpf": cpf,
        "email": email,
        "password": password,
        "address": "Rua das Flores, 100"
    })
}

async fn register(app: &Router, cpf: &str, email: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/auth/register",
        Some(registration(cpf, email, "Jardim2024")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {body}");
    body
}

// =============================================================================
// Root and Health
// =============================================================================

#[tokio::test]
async fn test_root_endpoint_returns_welcome_message() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"Welcome to the Plant Care API");
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(&app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, body) = send(&app(), Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/auth/register"].is_object());
    assert!(body["paths"]["/plants/{id}/actions"].is_object());
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_register_success() {
    let app = app();
    let body = register(&app, "123.456.789-09", "maria@example.com").await;

    assert_eq!(body["cpf"], "123.456.789-09");
    assert_eq!(body["email"], "maria@example.com");
    assert_eq!(body["role"], "usuario");
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_rejects_invalid_cpf() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/auth/register",
        Some(registration("12345678900", "maria@example.com", "Jardim2024")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "Invalid CPF");
}

#[tokio::test]
async fn test_register_rejects_repeated_digit_cpf() {
    let (status, _) = send(
        &app(),
        Method::POST,
        "/auth/register",
        Some(registration("00000000000", "maria@example.com", "Jardim2024")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_rejects_weak_passwords() {
    let app = app();
    let cases = [
        ("jardim2024", "Password must contain at least one uppercase letter"),
        ("Jardim 2024", "Password must not contain spaces"),
        ("Short1", "Password must be at least 8 characters"),
        ("JardimSemNumero", "Password must contain at least one digit"),
    ];

    for (password, message) in cases {
        let (status, body) = send(
            &app,
            Method::POST,
            "/auth/register",
            Some(registration("12345678909", "maria@example.com", password)),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "password {password:?}");
        assert_eq!(body["error"]["message"], message);
    }
}

#[tokio::test]
async fn test_register_duplicate_cpf_conflicts() {
    let app = app();
    register(&app, "12345678909", "maria@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/register",
        Some(registration("123.456.789-09", "other@example.com", "Jardim2024")),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["message"], "CPF already exists");
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = app();
    register(&app, "12345678909", "maria@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/register",
        Some(registration("52998224725", "maria@example.com", "Jardim2024")),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_register_malformed_json() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/auth/register",
        Some(json!({ "name": "Maria" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

// =============================================================================
// CPF Lookups
// =============================================================================

#[tokio::test]
async fn test_email_lookup() {
    let app = app();
    register(&app, "11144477735", "joao@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/email-lookup",
        Some(json!({ "cpf": "111.444.777-35" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "joao@example.com");
}

#[tokio::test]
async fn test_email_lookup_unknown_cpf() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/auth/email-lookup",
        Some(json!({ "cpf": "39053344705" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_user_lookup_invalid_cpf() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/users/lookup",
        Some(json!({ "cpf": "1234567890a" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Invalid CPF");
}

#[tokio::test]
async fn test_user_lookup() {
    let app = app();
    let created = register(&app, "52998224725", "ana@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/users/lookup",
        Some(json!({ "cpf": "52998224725" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], created["id"]);
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn test_get_and_update_user() {
    let app = app();
    let created = register(&app, "12345678909", "maria@example.com").await;
    let uri = format!("/users/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Maria Silva");

    let (status, body) = send(
        &app,
        Method::PATCH,
        &uri,
        Some(json!({ "address": "Avenida Paulista, 1000", "role": "admin" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["address"], "Avenida Paulista, 1000");
    assert_eq!(body["role"], "admin");
    assert_eq!(body["name"], "Maria Silva");
}

#[tokio::test]
async fn test_update_rejects_empty_name() {
    let app = app();
    let created = register(&app, "12345678909", "maria@example.com").await;
    let uri = format!("/users/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({ "name": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Name cannot be empty");
}

#[tokio::test]
async fn test_get_unknown_user() {
    let uri = format!("/users/{}", uuid::Uuid::new_v4());
    let (status, _) = send(&app(), Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_users_paginates() {
    let app = app();
    register(&app, "12345678909", "a@example.com").await;
    register(&app, "11144477735", "b@example.com").await;
    register(&app, "52998224725", "c@example.com").await;

    let (status, body) = send(&app, Method::GET, "/users?page=2&per_page=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["meta"]["total"], 3);
    assert_eq!(body["meta"]["total_pages"], 2);
    assert_eq!(body["meta"]["page"], 2);
}

// =============================================================================
// Password Changes
// =============================================================================

#[tokio::test]
async fn test_change_password_flow() {
    let app = app();
    let created = register(&app, "12345678909", "maria@example.com").await;
    let uri = format!("/users/{}/password", created["id"].as_str().unwrap());

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "current_password": "Wrong1234", "new_password": "NovaSenha99" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "current_password": "Jardim2024", "new_password": "novasenha99" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        "Password must contain at least one uppercase letter"
    );

    let (status, _) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "current_password": "Jardim2024", "new_password": "NovaSenha99" })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // The old password no longer works
    let (status, _) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "current_password": "Jardim2024", "new_password": "Outra1234" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_users_huge_page_is_empty() {
    let app = app();
    register(&app, "12345678909", "a@example.com").await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/users?page=18446744073709551615&per_page=100",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["meta"]["total"], 1);
}

// =============================================================================
// Path and Query Rejections
// =============================================================================

#[tokio::test]
async fn test_malformed_user_id_uses_error_envelope() {
    let (status, body) = send(&app(), Method::GET, "/users/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["message"].is_string());
}

#[tokio::test]
async fn test_malformed_query_uses_error_envelope() {
    let (status, body) = send(&app(), Method::GET, "/users?page=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Plants and Care Actions
// =============================================================================

async fn add_plant(app: &Router, owner_id: &str, name: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        &format!("/users/{owner_id}/plants"),
        Some(json!({ "name": name, "species": "Nephrolepis exaltata" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {body}");
    body
}

#[tokio::test]
async fn test_add_and_list_user_plants() {
    let app = app();
    let user = register(&app, "12345678909", "maria@example.com").await;
    let owner_id = user["id"].as_str().unwrap();

    let plant = add_plant(&app, owner_id, "Samambaia").await;
    assert_eq!(plant["owner_id"], user["id"]);
    assert_eq!(plant["name"], "Samambaia");

    let (status, body) = send(&app, Method::GET, &format!("/users/{owner_id}/plants"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let uri = format!("/plants/{}", plant["id"].as_str().unwrap());
    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Samambaia");
}

#[tokio::test]
async fn test_add_plant_to_unknown_user() {
    let uri = format!("/users/{}/plants", uuid::Uuid::new_v4());
    let (status, body) = send(&app(), Method::POST, &uri, Some(json!({ "name": "Cacto" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_record_every_care_kind() {
    let app = app();
    let user = register(&app, "12345678909", "maria@example.com").await;
    let plant = add_plant(&app, user["id"].as_str().unwrap(), "Samambaia").await;
    let uri = format!("/plants/{}/actions", plant["id"].as_str().unwrap());

    for kind in ["poda", "rega", "adubo"] {
        let (status, body) = send(
            &app,
            Method::POST,
            &uri,
            Some(json!({ "kind": kind, "description": "string", "performed_at": "2025-12-24" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "kind {kind}");
        assert_eq!(body["kind"], kind);
        assert!(body["performed_at"].as_str().unwrap().starts_with("2025-12-24T00:00:00"));
    }

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_record_care_requires_performed_at() {
    let app = app();
    let user = register(&app, "12345678909", "maria@example.com").await;
    let plant = add_plant(&app, user["id"].as_str().unwrap(), "Samambaia").await;
    let uri = format!("/plants/{}/actions", plant["id"].as_str().unwrap());

    let (status, body) = send(
        &app,
        Method::POST,
        &uri,
        Some(json!({ "kind": "rega", "description": "string" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("performed_at"));

    let (status, _) = send(
        &app,
        Method::POST,
        &uri,
        Some(json!({ "kind": "colheita", "performed_at": "2025-12-24" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, history) = send(&app, Method::GET, &uri, None).await;
    assert!(history.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_care_history_is_most_recent_first() {
    let app = app();
    let user = register(&app, "12345678909", "maria@example.com").await;
    let plant = add_plant(&app, user["id"].as_str().unwrap(), "Samambaia").await;
    let uri = format!("/plants/{}/actions", plant["id"].as_str().unwrap());

    for (kind, day) in [("rega", "2025-12-20"), ("poda", "2025-12-24"), ("adubo", "2025-12-22")] {
        let (status, _) = send(
            &app,
            Method::POST,
            &uri,
            Some(json!({ "kind": kind, "performed_at": day })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = send(&app, Method::GET, &uri, None).await;
    let kinds: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["kind"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, ["poda", "adubo", "rega"]);
}

#[tokio::test]
async fn test_care_for_unknown_plant() {
    let uri = format!("/plants/{}/actions", uuid::Uuid::new_v4());
    let (status, _) = send(
        &app(),
        Method::POST,
        &uri,
        Some(json!({ "kind": "rega", "performed_at": "2025-12-24" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app(), Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
