/**
 * Post HTTP Handlers
 *
 * This module implements the content endpoints:
 *
 * - `GET /api/posts` - list post summaries (public)
 * - `GET /api/posts/{slug}` - fetch one post (public)
 * - `POST /api/posts` - create a post (authenticated)
 * - `PUT /api/posts/{slug}` - update a post, including slug rename
 *   (authenticated)
 * - `DELETE /api/posts/{slug}` - delete a post (authenticated)
 *
 * # Validation
 *
 * Title, slug, and body are required; the slug must be URL-safe. Failures
 * come back as field errors so the caller can attach each message to its
 * form field. Conflict and not-found outcomes pass through from the store.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::auth::validate::validate_slug;
use crate::error::{AppError, FieldErrors};
use crate::middleware::AuthUser;
use crate::posts::store::{self, Post, PostChanges, PostSummary};

/// Create post request
#[derive(Deserialize, Serialize, Debug)]
pub struct CreatePostRequest {
    pub title: String,
    pub slug: String,
    pub body: String,
}

/// Update post request
///
/// `slug` is the slug the post should have after the update; when it
/// differs from the path slug the update is a rename.
#[derive(Deserialize, Serialize, Debug)]
pub struct UpdatePostRequest {
    pub title: String,
    pub slug: String,
    pub body: String,
}

fn validate_post_fields(title: &str, slug: &str, body: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if title.trim().is_empty() {
        errors.insert("title", "Title is required");
    }
    if slug.is_empty() {
        errors.insert("slug", "Slug is required");
    } else if !validate_slug(slug) {
        errors.insert(
            "slug",
            "Slug may only contain letters, numbers, hyphens, and underscores",
        );
    }
    if body.trim().is_empty() {
        errors.insert("body", "Body is required");
    }
    errors
}

/// List post summaries
pub async fn list_posts(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<PostSummary>>, AppError> {
    let posts = store::list_posts(&pool).await?;
    Ok(Json(posts))
}

/// Get a single post by slug
///
/// # Errors
///
/// * `404 Not Found` - no post owns this slug
pub async fn get_post(
    State(pool): State<SqlitePool>,
    Path(slug): Path<String>,
) -> Result<Json<Post>, AppError> {
    let post = store::get_post(&pool, &slug)
        .await?
        .ok_or_else(|| AppError::not_found("post"))?;
    Ok(Json(post))
}

/// Create a post
///
/// # Errors
///
/// * `400 Bad Request` - missing or malformed fields, as field errors
/// * `409 Conflict` - the slug is already taken; the existing post is
///   untouched
pub async fn create_post(
    _user: AuthUser,
    State(pool): State<SqlitePool>,
    Json(request): Json<CreatePostRequest>,
) -> Result<Json<Post>, AppError> {
    tracing::info!("Create post request for slug: {}", request.slug);

    let errors = validate_post_fields(&request.title, &request.slug, &request.body);
    if !errors.is_empty() {
        return Err(AppError::Validation { errors });
    }

    let post = store::create_post(&pool, &request.title, &request.slug, &request.body).await?;
    Ok(Json(post))
}

/// Update a post, renaming it when the slug in the body differs from the
/// slug in the path
///
/// # Errors
///
/// * `400 Bad Request` - missing or malformed fields
/// * `404 Not Found` - nothing lives at the current slug
/// * `409 Conflict` - the new slug is already taken; the post keeps its
///   old slug and content in full
pub async fn update_post(
    _user: AuthUser,
    State(pool): State<SqlitePool>,
    Path(current_slug): Path<String>,
    Json(request): Json<UpdatePostRequest>,
) -> Result<Json<Post>, AppError> {
    tracing::info!(
        "Update post request for slug: {} (new slug: {})",
        current_slug,
        request.slug
    );

    let errors = validate_post_fields(&request.title, &request.slug, &request.body);
    if !errors.is_empty() {
        return Err(AppError::Validation { errors });
    }

    let changes = PostChanges {
        title: request.title,
        slug: request.slug,
        body: request.body,
    };
    let post = store::update_post(&pool, &current_slug, &changes).await?;
    Ok(Json(post))
}

/// Delete a post
///
/// # Errors
///
/// * `404 Not Found` - no post owns this slug
pub async fn delete_post(
    _user: AuthUser,
    State(pool): State<SqlitePool>,
    Path(slug): Path<String>,
) -> Result<StatusCode, AppError> {
    tracing::info!("Delete post request for slug: {}", slug);

    store::delete_post(&pool, &slug).await?;
    Ok(StatusCode::NO_CONTENT)
}
