/**
 * Application Error Types
 *
 * This module defines the error types used across the core and its HTTP
 * boundary.
 *
 * # Error Categories
 *
 * - Validation errors - malformed email, weak password, missing content
 *   fields; recovered at the boundary and returned as field errors
 * - Conflict errors - duplicate email or slug; the existing record is
 *   untouched and the conflict is reported on the offending field
 * - Authentication errors - one generic outcome that never reveals whether
 *   an email exists
 * - Not-found errors - unknown slug or account
 * - Internal errors - database and token-signing failures; details go to
 *   the log, never to the client
 */

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Field-level error map returned for expected input problems.
///
/// Keys are form field names (`email`, `password`, `title`, `slug`, `body`),
/// values are human-readable messages. Serializes as a flat JSON object so
/// the caller can attach each message to its field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Create an empty error map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map holding a single field error
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    /// Add an error for a field, replacing any previous message for it
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// Get the message for a field, if any
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Application-wide error type.
///
/// Every fallible core operation returns this. Each variant maps to an HTTP
/// status via [`AppError::status_code`] and, where the failure belongs to a
/// form field, to a [`FieldErrors`] payload via [`AppError::field_errors`].
/// No variant is fatal to the process.
#[derive(Debug, Error)]
pub enum AppError {
    /// Boundary validation failed; the map names each offending field
    #[error("validation failed")]
    Validation {
        /// Per-field messages collected at the boundary
        errors: FieldErrors,
    },

    /// An account with this normalized email already exists
    #[error("a user already exists with this email")]
    DuplicateEmail,

    /// A post with this slug already exists
    #[error("a post already exists with this slug")]
    DuplicateSlug,

    /// Credential verification failed.
    ///
    /// Covers both unknown email and wrong password; the two are
    /// indistinguishable to the caller.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The addressed resource does not exist
    #[error("{resource} not found")]
    NotFound {
        /// What was being looked up ("post", "account")
        resource: &'static str,
    },

    /// Database operation failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failed
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Session token signing failed
    #[error("session error: {0}")]
    Session(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    /// Create a validation error for a single field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            errors: FieldErrors::single(field, message),
        }
    }

    /// Create a not-found error for a named resource
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    /// HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `DuplicateEmail` / `DuplicateSlug` - 409 Conflict
    /// - `InvalidCredentials` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Database` / `Session` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::DuplicateEmail | Self::DuplicateSlug => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Hash(_) | Self::Session(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Field-error payload for this error, when the failure belongs to a field.
    ///
    /// Conflicts and credential failures collapse to a single message on the
    /// field the caller can act on. Internal errors return `None` so nothing
    /// about them reaches the client body.
    pub fn field_errors(&self) -> Option<FieldErrors> {
        match self {
            Self::Validation { errors } => Some(errors.clone()),
            Self::DuplicateEmail => Some(FieldErrors::single(
                "email",
                "A user already exists with this email",
            )),
            Self::DuplicateSlug => Some(FieldErrors::single(
                "slug",
                "A post already exists with this slug",
            )),
            Self::InvalidCredentials => {
                Some(FieldErrors::single("email", "Invalid email or password"))
            }
            Self::NotFound { .. } | Self::Database(_) | Self::Hash(_) | Self::Session(_) => None,
        }
    }
}
