/**
 * Logout Handler
 *
 * This module implements the handler for POST /api/auth/logout. Sessions
 * are stateless signed tokens, so logout does not touch the store; it
 * returns the cleared token for the transport layer to overwrite whatever
 * credential the client holds (empty value, expiry in the past).
 */

use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::auth::sessions::{SessionManager, SessionToken};

/// Logout handler
///
/// Always succeeds; logging out without a session is a no-op that still
/// returns the clearing instruction.
pub async fn logout(State(sessions): State<Arc<SessionManager>>) -> Json<SessionToken> {
    tracing::info!("Logout request");
    Json(sessions.revoke())
}
