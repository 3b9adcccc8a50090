/**
 * Signup Handler
 *
 * This module implements the registration handler for POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate email shape and password length
 * 2. Create the account (normalize, hash, atomic insert-if-absent)
 * 3. Issue a short-lived session token
 * 4. Return the token and account info
 *
 * # Validation
 *
 * - Email must have an '@' with non-empty local and domain parts
 * - Password must be at least 8 characters
 * - Email must be unique under case normalization; losers of a concurrent
 *   signup race receive the duplicate-email field error
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{AccountResponse, AuthResponse, SignupRequest};
use crate::auth::users::create_account;
use crate::auth::validate::{validate_email, validate_password};
use crate::error::{AppError, FieldErrors};
use crate::server::state::AppState;

/// Sign up handler
///
/// Validates the request, creates the account, and returns a session token
/// for immediate authentication. A fresh signup always gets the short
/// session window; only login offers the remember flag.
///
/// # Errors
///
/// * `400 Bad Request` - invalid email shape or too-short password, as
///   field errors
/// * `409 Conflict` - an account with this email already exists
/// * `500 Internal Server Error` - hashing, storage, or signing failed
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    tracing::info!("Signup request for email: {}", request.email);

    let mut errors = FieldErrors::new();
    if !validate_email(&request.email) {
        errors.insert("email", "Email is invalid");
    }
    if validate_password(&request.password).is_err() {
        errors.insert("password", "Password is too short");
    }
    if !errors.is_empty() {
        tracing::warn!("Signup validation failed for email: {}", request.email);
        return Err(AppError::Validation { errors });
    }

    let account = create_account(&state.db_pool, &request.email, &request.password).await?;
    let token = state.sessions.issue(account.id, false)?;

    tracing::info!("Account created: {}", account.email);

    Ok(Json(AuthResponse {
        token,
        account: AccountResponse::from(&account),
    }))
}
