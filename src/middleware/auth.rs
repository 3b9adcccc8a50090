/**
 * Authentication Extraction
 *
 * This module resolves the session credential on protected routes. It
 * extracts the bearer token from the Authorization header, resolves it to
 * a subject through the session manager, and confirms the subject still
 * names a live account.
 *
 * Returns 401 Unauthorized when any step fails; resolution never reveals
 * which step rejected.
 */

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
};
use uuid::Uuid;

use crate::auth::users;
use crate::server::state::AppState;

/// Authenticated account data resolved from the session token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Axum extractor for the authenticated account
///
/// Use as a handler parameter to require a valid session:
/// 1. Extracts the token from the `Authorization: Bearer <token>` header
/// 2. Resolves it (signature + expiry) to a subject ID
/// 3. Verifies the subject still exists in the account store
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("Missing Authorization header");
                StatusCode::UNAUTHORIZED
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            StatusCode::UNAUTHORIZED
        })?;

        let subject = state.sessions.resolve(token).ok_or_else(|| {
            tracing::warn!("Session token did not resolve");
            StatusCode::UNAUTHORIZED
        })?;

        // The session only names the account; confirm it still exists
        let account = users::find_by_id(&state.db_pool, subject)
            .await
            .map_err(|e| {
                tracing::error!("Database error: {:?}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .ok_or_else(|| {
                tracing::warn!("Session subject no longer exists: {}", subject);
                StatusCode::UNAUTHORIZED
            })?;

        Ok(AuthUser(AuthenticatedUser {
            user_id: account.id,
            email: account.email,
        }))
    }
}
