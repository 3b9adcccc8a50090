//! Route Configuration
//!
//! The API route table and the router assembly around it.

/// API route table
pub mod api_routes;

/// Router assembly (routes + tracing + fallback)
pub mod router;

pub use router::create_router;
