//! Registration and login flow tests.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{register_and_login, test_issuer, test_server};

#[tokio::test]
async fn register_then_login_yields_verifiable_token() {
    let server = test_server().await;
    let token = register_and_login(&server, "alice", "secret1").await;

    // The token decodes under the service's signing secret to a user id.
    let owner = test_issuer().verify(&token).expect("token verifies");
    assert!(!owner.as_str().is_empty());
}

#[tokio::test]
async fn register_responds_with_message() {
    let server = test_server().await;
    let response = server
        .post("/api/auth/register")
        .json(&json!({ "username": "alice", "password": "secret1" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>()["message"],
        "User registered successfully!"
    );
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let server = test_server().await;
    register_and_login(&server, "alice", "secret1").await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "username": "alice", "password": "different7" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Username already taken.");
}

#[tokio::test]
async fn registration_trims_username_before_uniqueness_check() {
    let server = test_server().await;
    register_and_login(&server, "alice", "secret1").await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "username": "  alice  ", "password": "secret1" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn short_password_is_rejected() {
    let server = test_server().await;
    let response = server
        .post("/api/auth/register")
        .json(&json!({ "username": "alice", "password": "short" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn short_username_is_rejected() {
    let server = test_server().await;
    let response = server
        .post("/api/auth/register")
        .json(&json!({ "username": "al", "password": "secret1" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn multibyte_usernames_are_measured_in_characters() {
    let server = test_server().await;

    // Two characters, six bytes: still below the three-character minimum.
    let response = server
        .post("/api/auth/register")
        .json(&json!({ "username": "日日", "password": "secret1" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "username": "日日日", "password": "secret1" }))
        .await;
    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn missing_body_field_is_bad_request_with_json_message() {
    let server = test_server().await;

    let register = server
        .post("/api/auth/register")
        .json(&json!({ "username": "alice" }))
        .await;
    register.assert_status(StatusCode::BAD_REQUEST);
    assert!(register.json::<Value>()["message"].is_string());

    let login = server
        .post("/api/auth/login")
        .json(&json!({ "username": "alice" }))
        .await;
    login.assert_status(StatusCode::BAD_REQUEST);
    assert!(login.json::<Value>()["message"].is_string());
}

#[tokio::test]
async fn unknown_user_and_wrong_password_are_indistinguishable() {
    let server = test_server().await;
    register_and_login(&server, "alice", "secret1").await;

    let unknown = server
        .post("/api/auth/login")
        .json(&json!({ "username": "nobody", "password": "secret1" }))
        .await;
    unknown.assert_status(StatusCode::BAD_REQUEST);

    let wrong = server
        .post("/api/auth/login")
        .json(&json!({ "username": "alice", "password": "wrong-password" }))
        .await;
    wrong.assert_status(StatusCode::BAD_REQUEST);

    // Identical generic message in both cases, so the endpoint cannot be
    // used to probe which usernames exist.
    assert_eq!(
        unknown.json::<Value>()["message"],
        wrong.json::<Value>()["message"]
    );
    assert_eq!(wrong.json::<Value>()["message"], "Invalid credentials.");
}

#[tokio::test]
async fn login_with_empty_fields_is_rejected() {
    let server = test_server().await;
    let response = server
        .post("/api/auth/login")
        .json(&json!({ "username": "", "password": "" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_endpoint_requires_no_auth() {
    let server = test_server().await;
    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "ok");
}
