/**
 * Login Handler
 *
 * This module implements the authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Validate email shape and password length at the boundary
 * 2. Verify credentials against the account store
 * 3. Issue a session token, long- or short-lived per the remember flag
 *
 * # Security
 *
 * - Unknown email and wrong password return the same generic field error;
 *   the unknown-email path burns a dummy verify so its timing matches
 * - Passwords are never logged or echoed back
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{AccountResponse, AuthResponse, LoginRequest};
use crate::auth::users::verify_credentials;
use crate::auth::validate::{validate_email, validate_password};
use crate::error::{AppError, FieldErrors};
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - invalid email shape or too-short password
/// * `401 Unauthorized` - credentials did not verify; one generic message
///   regardless of which part was wrong
/// * `500 Internal Server Error` - storage or signing failed
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    tracing::info!("Login request for email: {}", request.email);

    let mut errors = FieldErrors::new();
    if !validate_email(&request.email) {
        errors.insert("email", "Email is invalid");
    }
    if validate_password(&request.password).is_err() {
        errors.insert("password", "Password is too short");
    }
    if !errors.is_empty() {
        return Err(AppError::Validation { errors });
    }

    let account = verify_credentials(&state.db_pool, &request.email, &request.password).await?;
    let token = state.sessions.issue(account.id, request.remember)?;

    tracing::info!("Login succeeded for: {}", account.email);

    Ok(Json(AuthResponse {
        token,
        account: AccountResponse::from(&account),
    }))
}
