/**
 * Error Conversion
 *
 * This module converts application errors into HTTP responses so handlers
 * can return `Result<_, AppError>` directly.
 *
 * # Response Format
 *
 * Field-addressable failures (validation, conflicts, bad credentials) return:
 * ```json
 * { "errors": { "email": "A user already exists with this email" } }
 * ```
 *
 * Everything else returns a generic shape:
 * ```json
 * { "error": "post not found", "status": 404 }
 * ```
 *
 * Internal failures are logged with their detail and reported to the client
 * as a bare "internal server error".
 */

use axum::response::{IntoResponse, Json, Response};

use crate::error::types::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let Some(errors) = self.field_errors() {
            let body = serde_json::json!({ "errors": errors });
            return (status, Json(body)).into_response();
        }

        let message = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "internal server error".to_string()
            }
            AppError::Hash(e) => {
                tracing::error!("Password hashing error: {:?}", e);
                "internal server error".to_string()
            }
            AppError::Session(e) => {
                tracing::error!("Session token error: {:?}", e);
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
