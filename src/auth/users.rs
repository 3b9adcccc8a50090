/**
 * Account Model and Database Operations
 *
 * This module owns account records: a unique, case-normalized email plus a
 * bcrypt password hash. The unique index on email is what arbitrates
 * concurrent signups - exactly one INSERT for a given normalized address
 * wins, the rest surface as `DuplicateEmail`.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::auth::password;
use crate::error::AppError;

/// Account struct representing a registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique account ID (UUID, assigned at creation)
    pub id: Uuid,
    /// Email address, stored lowercase
    pub email: String,
    /// Hashed password (bcrypt); never serialized into responses
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Normalize an email for storage and comparison.
///
/// Lowercases and trims surrounding whitespace. Uniqueness and lookups are
/// defined over this form, so `User@Example.COM` and `user@example.com`
/// name the same account.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn account_from_row(row: &SqliteRow) -> Result<Account, sqlx::Error> {
    let id: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id).map_err(|e| sqlx::Error::ColumnDecode {
        index: "id".into(),
        source: Box::new(e),
    })?;

    Ok(Account {
        id,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// Create a new account
///
/// Normalizes the email, hashes the password, and inserts. The insert is
/// atomic against the unique email index: concurrent attempts for the same
/// normalized email produce exactly one account, and losers receive
/// [`AppError::DuplicateEmail`].
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - Email address (any casing)
/// * `raw_password` - Plaintext password; hashed before it touches the pool
///
/// # Returns
/// Created account or error
pub async fn create_account(
    pool: &SqlitePool,
    email: &str,
    raw_password: &str,
) -> Result<Account, AppError> {
    let id = Uuid::new_v4();
    let email = normalize_email(email);
    let password_hash = password::hash_password(raw_password)?;
    let now = Utc::now();

    let result = sqlx::query(
        r#"
        INSERT INTO users (id, email, password_hash, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(id.to_string())
    .bind(&email)
    .bind(&password_hash)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(Account {
            id,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }),
        Err(e) if is_unique_violation(&e) => Err(AppError::DuplicateEmail),
        Err(e) => Err(AppError::Database(e)),
    }
}

/// Get an account by email
///
/// Case-insensitive: the candidate is normalized before lookup. Password
/// data is neither hashed nor logged here.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - Email address (any casing)
///
/// # Returns
/// Account or None if not found
pub async fn find_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<Account>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, email, password_hash, created_at, updated_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(normalize_email(email))
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(account_from_row).transpose()
}

/// Get an account by ID
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `id` - Account ID
///
/// # Returns
/// Account or None if not found
pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Account>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, email, password_hash, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id.to_string())
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(account_from_row).transpose()
}

/// Verify a login attempt
///
/// Looks the account up by normalized email and checks the password against
/// the stored hash. Unknown email and wrong password collapse into the same
/// [`AppError::InvalidCredentials`] outcome; the unknown-email path still
/// burns a verify cycle against a dummy digest so its timing matches the
/// wrong-password path.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - Email address (any casing)
/// * `raw_password` - Plaintext password to check
///
/// # Returns
/// The authenticated account, or `InvalidCredentials`
pub async fn verify_credentials(
    pool: &SqlitePool,
    email: &str,
    raw_password: &str,
) -> Result<Account, AppError> {
    match find_by_email(pool, email).await? {
        Some(account) => {
            if password::verify_password(raw_password, &account.password_hash) {
                Ok(account)
            } else {
                Err(AppError::InvalidCredentials)
            }
        }
        None => {
            password::verify_dummy(raw_password);
            Err(AppError::InvalidCredentials)
        }
    }
}
