//! Inkpost - Main Library
//!
//! Inkpost is the core of a multi-user content application: account
//! creation, credential verification, session-backed authentication, and
//! slug-addressed post management with atomic rename.
//!
//! # Module Structure
//!
//! - **`auth`** - credentials, password hashing, accounts, sessions, and
//!   their HTTP handlers
//! - **`posts`** - the slug-keyed content store and its HTTP handlers
//! - **`error`** - the application error taxonomy and its HTTP conversion
//! - **`middleware`** - session-to-identity extraction for protected routes
//! - **`server`** - configuration, shared state, app construction
//! - **`routes`** - the API route table
//!
//! # Usage
//!
//! ```rust,no_run
//! use inkpost::server::create_app;
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let app = create_app().await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! Requests share the store pool and a read-only session manager; there is
//! no other cross-request state. Key conflicts (duplicate email, duplicate
//! or renamed-onto slug) are arbitrated by the database's unique indexes,
//! so racing writers lose cleanly instead of overwriting.
//!
//! # Error Handling
//!
//! Every fallible operation returns `Result`; expected input problems come
//! back as per-field error maps, conflicts leave the stored record
//! untouched, and integrity failures (bad signatures, malformed hashes)
//! fail closed to "unauthenticated" rather than crashing a request.

/// Authentication: validation, hashing, accounts, sessions, handlers
pub mod auth;

/// Error taxonomy and HTTP conversion
pub mod error;

/// Request middleware (session extraction)
pub mod middleware;

/// Slug-addressed content store and handlers
pub mod posts;

/// API route configuration
pub mod routes;

/// Server startup wiring
pub mod server;
