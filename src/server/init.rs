/**
 * Server Initialization
 *
 * This module handles the initialization of the Axum HTTP server: loading
 * configuration, constructing shared state, and building the router.
 *
 * # Initialization Process
 *
 * 1. Connect to the database and run migrations
 * 2. Load the session signing secret and build the session manager
 * 3. Assemble the application state
 * 4. Create the router with all routes
 */

use axum::Router;
use std::sync::Arc;

use crate::auth::sessions::SessionManager;
use crate::routes::router::create_router;
use crate::server::config::{load_database, load_session_secret};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if the database pool cannot be created; everything else in
/// startup has a logged fallback.
pub async fn create_app() -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing inkpost server");

    let db_pool = load_database().await?;

    // The secret is process-wide, read once, and owned by the manager
    let secret = load_session_secret();
    let sessions = Arc::new(SessionManager::new(&secret));

    let app_state = AppState { db_pool, sessions };

    tracing::info!("Application state initialized");

    Ok(create_router(app_state))
}
