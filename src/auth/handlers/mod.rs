//! Authentication HTTP Handlers
//!
//! One module per endpoint, plus the shared request/response types:
//!
//! - `signup` - POST /api/auth/signup
//! - `login` - POST /api/auth/login
//! - `logout` - POST /api/auth/logout
//! - `me` - GET /api/auth/me

/// Request/response types
pub mod types;

/// Account registration handler
pub mod signup;

/// Credential verification handler
pub mod login;

/// Session clearing handler
pub mod logout;

/// Current account handler
pub mod me;

pub use login::login;
pub use logout::logout;
pub use me::me;
pub use signup::signup;
