//! Request Middleware
//!
//! Extractors that run before handlers. Currently just authentication.

/// Session-to-identity resolution for protected routes
pub mod auth;

pub use auth::{AuthUser, AuthenticatedUser};
