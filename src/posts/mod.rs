//! Content Module
//!
//! Slug-addressed posts: the store that owns the records and the HTTP
//! handlers over it.
//!
//! # Invariants
//!
//! - Slug uniqueness holds at all times; the slug is the primary key
//! - A rename travels in the same atomic statement as the field update, so
//!   no reader ever observes a half-renamed post and no rename race loses
//!   data
//! - Conflict losers receive a duplicate-slug error with the original
//!   record untouched

/// Post model and database operations
pub mod store;

/// HTTP handlers for content endpoints
pub mod handlers;

pub use store::{Post, PostChanges, PostSummary};
