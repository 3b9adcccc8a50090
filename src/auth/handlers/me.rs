/**
 * Get Current Account Handler
 *
 * This module implements the handler for GET /api/auth/me, which resolves
 * the inbound session token to the account it names.
 *
 * # Authentication
 *
 * Requires a valid token in the `Authorization: Bearer <token>` header.
 * Resolution happens in the [`AuthUser`] extractor; a missing, malformed,
 * expired, or forged token never reaches this handler.
 */

use axum::response::Json;

use crate::auth::handlers::types::AccountResponse;
use crate::middleware::AuthUser;

/// Get current account handler
///
/// # Example Response
///
/// ```json
/// {
///   "id": "123e4567-e89b-12d3-a456-426614174000",
///   "email": "user@example.com"
/// }
/// ```
pub async fn me(AuthUser(user): AuthUser) -> Json<AccountResponse> {
    Json(AccountResponse {
        id: user.user_id.to_string(),
        email: user.email,
    })
}
