/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines the
 * route table, request tracing, and the fallback handler into a single
 * Axum router.
 */

use axum::http::StatusCode;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the store pool and the
///   session manager
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    // Add API routes
    let router = configure_api_routes(router);

    // Request tracing for every route
    let router = router.layer(TraceLayer::new_for_http());

    // Fallback handler for unknown routes
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    // Use AppState as router state
    router.with_state(app_state)
}
