/**
 * API Route Handlers
 *
 * This module defines the route table for the API endpoints.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/signup` - account registration
 * - `POST /api/auth/login` - credential verification
 * - `POST /api/auth/logout` - session clearing
 * - `GET /api/auth/me` - current account info
 *
 * ## Posts
 * - `GET /api/posts` - list post summaries
 * - `POST /api/posts` - create a post
 * - `GET /api/posts/{slug}` - fetch one post
 * - `PUT /api/posts/{slug}` - update (and possibly rename) a post
 * - `DELETE /api/posts/{slug}` - delete a post
 *
 * # Authentication
 *
 * Reads are public; every mutation of posts and the `/api/auth/me` lookup
 * require a bearer token (enforced by the `AuthUser` extractor in the
 * handlers, not by a route layer).
 */

use axum::Router;

use crate::auth::handlers::{login, logout, me, signup};
use crate::posts::handlers::{create_post, delete_post, get_post, list_posts, update_post};
use crate::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/signup", axum::routing::post(signup))
        .route("/api/auth/login", axum::routing::post(login))
        .route("/api/auth/logout", axum::routing::post(logout))
        .route("/api/auth/me", axum::routing::get(me))
        // Content endpoints
        .route(
            "/api/posts",
            axum::routing::get(list_posts).post(create_post),
        )
        .route(
            "/api/posts/{slug}",
            axum::routing::get(get_post)
                .put(update_post)
                .delete(delete_post),
        )
}
