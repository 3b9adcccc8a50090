//! Authentication Module
//!
//! This module handles account registration, credential verification, and
//! session management.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`validate`** - pure email/password/slug validation
//! - **`password`** - bcrypt hashing and fail-closed verification
//! - **`users`** - account model and database operations
//! - **`sessions`** - signed session tokens (issue/resolve/revoke)
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email + password → validated → account created → token issued
//! 2. **Login**: email + password → credentials verified → token issued
//!    (long-lived when the remember flag is set)
//! 3. **Resolve**: token → subject account ID, on every protected request
//! 4. **Logout**: cleared token handed back to the transport layer
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never serialized
//! - Unknown email and wrong password are indistinguishable to the caller,
//!   in outcome and in timing
//! - Tokens with a bad signature or past expiry resolve to no session

/// Pure credential validation
pub mod validate;

/// Password hashing and verification
pub mod password;

/// Account model and database operations
pub mod users;

/// Session token management
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{AccountResponse, AuthResponse, LoginRequest, SignupRequest};
pub use handlers::{login, logout, me, signup};
pub use sessions::{SessionManager, SessionToken};
