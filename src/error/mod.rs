//! Error Types
//!
//! Application error taxonomy and its HTTP conversion. Core modules return
//! [`AppError`]; the axum boundary turns it into a status code plus either a
//! per-field error map or a generic message body.

/// Error enum and field-error map
pub mod types;

/// `IntoResponse` conversion for handlers
pub mod conversion;

pub use types::{AppError, FieldErrors};
