/**
 * Post Model and Database Operations
 *
 * This module owns post records, keyed by their human-chosen slug. The slug
 * is the primary key, so slug uniqueness is enforced by the database on
 * every insert and rename.
 *
 * # Rename Atomicity
 *
 * An update that changes the slug runs as a single UPDATE statement against
 * the current slug. Either the whole row moves to the new slug, or - when
 * the new slug is already taken - the statement fails with a unique
 * violation and the original row is untouched. Readers never observe a
 * half-renamed post, and racing renames cannot lose an update.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::error::AppError;

/// Post struct representing a content entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique, URL-safe, human-chosen primary key
    pub slug: String,
    /// Post title
    pub title: String,
    /// Post body text
    pub body: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Listing entry: just enough to render an index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
}

/// Replacement fields for an update, including the (possibly unchanged) slug
#[derive(Debug, Clone)]
pub struct PostChanges {
    pub title: String,
    pub slug: String,
    pub body: String,
}

fn post_from_row(row: &SqliteRow) -> Result<Post, sqlx::Error> {
    Ok(Post {
        slug: row.try_get("slug")?,
        title: row.try_get("title")?,
        body: row.try_get("body")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// Get a post by slug
pub async fn get_post(pool: &SqlitePool, slug: &str) -> Result<Option<Post>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT slug, title, body, created_at, updated_at
        FROM posts
        WHERE slug = $1
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(post_from_row).transpose()
}

/// Create a new post
///
/// Insert-if-absent on the slug key: of concurrent creates for the same
/// slug, exactly one wins and the rest receive [`AppError::DuplicateSlug`].
pub async fn create_post(
    pool: &SqlitePool,
    title: &str,
    slug: &str,
    body: &str,
) -> Result<Post, AppError> {
    let now = Utc::now();

    let result = sqlx::query(
        r#"
        INSERT INTO posts (slug, title, body, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(slug)
    .bind(title)
    .bind(body)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(Post {
            slug: slug.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            created_at: now,
            updated_at: now,
        }),
        Err(e) if is_unique_violation(&e) => Err(AppError::DuplicateSlug),
        Err(e) => Err(AppError::Database(e)),
    }
}

/// Update a post, atomically renaming it when the slug changes
///
/// One UPDATE statement carries the field changes and the rename together.
/// If `changes.slug` is already owned by another post the unique index
/// rejects the statement, the original row stays exactly as it was, and the
/// caller gets [`AppError::DuplicateSlug`]. If nothing lives at
/// `current_slug` the caller gets [`AppError::NotFound`].
pub async fn update_post(
    pool: &SqlitePool,
    current_slug: &str,
    changes: &PostChanges,
) -> Result<Post, AppError> {
    let now = Utc::now();

    let result = sqlx::query(
        r#"
        UPDATE posts
        SET slug = $1, title = $2, body = $3, updated_at = $4
        WHERE slug = $5
        RETURNING slug, title, body, created_at, updated_at
        "#,
    )
    .bind(&changes.slug)
    .bind(&changes.title)
    .bind(&changes.body)
    .bind(now)
    .bind(current_slug)
    .fetch_optional(pool)
    .await;

    match result {
        Ok(Some(row)) => post_from_row(&row).map_err(AppError::Database),
        Ok(None) => Err(AppError::not_found("post")),
        Err(e) if is_unique_violation(&e) => Err(AppError::DuplicateSlug),
        Err(e) => Err(AppError::Database(e)),
    }
}

/// Delete a post by slug
pub async fn delete_post(pool: &SqlitePool, slug: &str) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM posts WHERE slug = $1")
        .bind(slug)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("post"));
    }
    Ok(())
}

/// List all posts as summaries
///
/// Newest first, slug as the tiebreaker, so the ordering is stable within
/// a single read.
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<PostSummary>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT slug, title
        FROM posts
        ORDER BY created_at DESC, slug ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| {
            Ok(PostSummary {
                slug: row.try_get("slug")?,
                title: row.try_get("title")?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");
        sqlx::migrate!()
            .run(&pool)
            .await
            .expect("Failed to run migrations");
        pool
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let pool = test_pool().await;

        let created = create_post(&pool, "My First Post", "my-first-post", "Hello.")
            .await
            .unwrap();
        let fetched = get_post(&pool, "my-first-post").await.unwrap().unwrap();
        assert_eq!(fetched.slug, created.slug);
        assert_eq!(fetched.title, "My First Post");
        assert_eq!(fetched.body, "Hello.");

        assert!(get_post(&pool, "missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_slug_preserves_first_post() {
        let pool = test_pool().await;

        create_post(&pool, "Title", "my-slug", "body").await.unwrap();
        let result = create_post(&pool, "Other", "my-slug", "body2").await;
        assert!(matches!(result, Err(AppError::DuplicateSlug)));

        let post = get_post(&pool, "my-slug").await.unwrap().unwrap();
        assert_eq!(post.title, "Title");
        assert_eq!(post.body, "body");
    }

    #[tokio::test]
    async fn test_update_in_place() {
        let pool = test_pool().await;

        create_post(&pool, "Title", "my-slug", "body").await.unwrap();
        let changes = PostChanges {
            title: "Title2".into(),
            slug: "my-slug".into(),
            body: "body2".into(),
        };
        let updated = update_post(&pool, "my-slug", &changes).await.unwrap();
        assert_eq!(updated.title, "Title2");
        assert_eq!(updated.body, "body2");
    }

    #[tokio::test]
    async fn test_rename_is_total() {
        let pool = test_pool().await;

        create_post(&pool, "Title", "my-slug", "body").await.unwrap();
        let changes = PostChanges {
            title: "Title2".into(),
            slug: "new-slug".into(),
            body: "body2".into(),
        };
        update_post(&pool, "my-slug", &changes).await.unwrap();

        // Old key gone, new key carries the updated content
        assert!(get_post(&pool, "my-slug").await.unwrap().is_none());
        let moved = get_post(&pool, "new-slug").await.unwrap().unwrap();
        assert_eq!(moved.title, "Title2");
        assert_eq!(moved.body, "body2");
    }

    #[tokio::test]
    async fn test_rename_onto_taken_slug_leaves_original_unchanged() {
        let pool = test_pool().await;

        create_post(&pool, "A", "a", "body-a").await.unwrap();
        create_post(&pool, "B", "b", "body-b").await.unwrap();

        let changes = PostChanges {
            title: "A2".into(),
            slug: "b".into(),
            body: "body-a2".into(),
        };
        let result = update_post(&pool, "a", &changes).await;
        assert!(matches!(result, Err(AppError::DuplicateSlug)));

        // No partial rename: "a" is exactly as created, "b" untouched
        let original = get_post(&pool, "a").await.unwrap().unwrap();
        assert_eq!(original.title, "A");
        assert_eq!(original.body, "body-a");
        let other = get_post(&pool, "b").await.unwrap().unwrap();
        assert_eq!(other.title, "B");
    }

    #[tokio::test]
    async fn test_update_unknown_slug_is_not_found() {
        let pool = test_pool().await;

        let changes = PostChanges {
            title: "T".into(),
            slug: "t".into(),
            body: "b".into(),
        };
        let result = update_post(&pool, "missing", &changes).await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete() {
        let pool = test_pool().await;

        create_post(&pool, "Title", "my-slug", "body").await.unwrap();
        delete_post(&pool, "my-slug").await.unwrap();
        assert!(get_post(&pool, "my-slug").await.unwrap().is_none());

        let result = delete_post(&pool, "my-slug").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_posts_stable_order() {
        let pool = test_pool().await;

        create_post(&pool, "A", "a", "body").await.unwrap();
        create_post(&pool, "B", "b", "body").await.unwrap();
        create_post(&pool, "C", "c", "body").await.unwrap();

        let listed = list_posts(&pool).await.unwrap();
        assert_eq!(listed.len(), 3);
        let again = list_posts(&pool).await.unwrap();
        assert_eq!(listed, again);

        let slugs: Vec<_> = listed.iter().map(|p| p.slug.as_str()).collect();
        assert!(slugs.contains(&"a") && slugs.contains(&"b") && slugs.contains(&"c"));
    }
}
