/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container: the database connection pool
 * shared by the account and post stores, and the session manager holding
 * the process-wide signing secret.
 *
 * # Thread Safety
 *
 * `SqlitePool` is internally reference-counted and safe to clone per
 * request. The `SessionManager` is read-only after construction and shared
 * behind an `Arc`.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::auth::sessions::SessionManager;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool backing the account and post stores
    pub db_pool: SqlitePool,

    /// Session manager
    ///
    /// Constructed once at process start with the signing secret; only
    /// read afterwards.
    pub sessions: Arc<SessionManager>,
}

/// Implement FromRef for the database pool
///
/// This allows store-only handlers to extract `State<SqlitePool>` without
/// taking the whole `AppState`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Implement FromRef for the session manager
///
/// This allows token-only handlers (logout) to extract
/// `State<Arc<SessionManager>>` directly.
impl FromRef<AppState> for Arc<SessionManager> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}
