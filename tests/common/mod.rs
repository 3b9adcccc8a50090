//! Test fixtures and utilities
//!
//! Provides an in-memory database, a configured test server, and helpers
//! for acquiring authenticated sessions.

use std::sync::Arc;

use axum_test::TestServer;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use inkpost::auth::sessions::SessionManager;
use inkpost::routes::create_router;
use inkpost::server::AppState;

/// Signing secret for test sessions
pub const TEST_SESSION_SECRET: &str = "test-session-secret";

/// Create an in-memory test database with the schema applied
///
/// A single connection keeps the in-memory database alive and shared for
/// the lifetime of the pool.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create a test server over a fresh in-memory database
pub async fn create_test_server() -> TestServer {
    let db_pool = create_test_pool().await;
    let sessions = Arc::new(SessionManager::new(TEST_SESSION_SECRET));
    let app = create_router(AppState { db_pool, sessions });
    TestServer::new(app).expect("Failed to start test server")
}

/// Sign up an account and return its session token value
pub async fn signup_for_token(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/api/auth/signup")
        .json(&serde_json::json!({
            "email": email,
            "password": password,
        }))
        .await;

    assert_eq!(
        response.status_code(),
        axum::http::StatusCode::OK,
        "signup fixture failed: {}",
        response.text()
    );

    let body: serde_json::Value = response.json();
    body["token"]["value"]
        .as_str()
        .expect("signup response carried no token value")
        .to_string()
}
