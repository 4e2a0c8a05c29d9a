//! Shared helpers for API integration tests.

use std::sync::Arc;

use axum_test::TestServer;
use chrono::Duration;
use serde_json::json;
use sqlx::sqlite::SqlitePoolOptions;

use spendlog::api::build_router;
use spendlog::auth::TokenIssuer;
use spendlog::storage::{run_migrations, DbPool};

pub const TEST_SECRET: &[u8] = b"test-secret-test-secret-test-secret!";

pub async fn test_pool() -> DbPool {
    // A single connection keeps every request on the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    run_migrations(&pool).await.expect("migrations");
    pool
}

pub fn test_issuer() -> Arc<TokenIssuer> {
    Arc::new(TokenIssuer::new(TEST_SECRET, Duration::hours(1)))
}

pub async fn test_server() -> TestServer {
    let pool = test_pool().await;
    TestServer::new(build_router(pool, test_issuer())).expect("test server")
}

/// Register a user and log in, returning the bearer token.
pub async fn register_and_login(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/api/auth/register")
        .json(&json!({ "username": username, "password": password }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "username": username, "password": password }))
        .await;
    response.assert_status_ok();
    response.json::<serde_json::Value>()["token"]
        .as_str()
        .expect("token in login response")
        .to_string()
}
