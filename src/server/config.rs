/**
 * Server Configuration
 *
 * This module handles loading of server configuration: the SQLite database
 * connection and the session signing secret.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables once at startup, with
 * development defaults where a missing value should not stop a local run.
 *
 * # Error Handling
 *
 * The database is required - the stores are the application - so a failed
 * connection aborts startup. Migration failures are logged but tolerated,
 * since the schema may already be in place.
 */

use sqlx::SqlitePool;

/// Fallback signing secret for local development only
const DEV_SESSION_SECRET: &str = "inkpost-dev-secret-change-in-production";

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from the environment (defaulting to a local
///    SQLite file)
/// 2. Creates the connection pool
/// 3. Runs database migrations
///
/// # Errors
///
/// Returns the connection error if the pool cannot be created; without a
/// database there is nothing to serve.
pub async fn load_database() -> Result<SqlitePool, sqlx::Error> {
    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        tracing::warn!("DATABASE_URL not set. Using local inkpost.db");
        "sqlite:inkpost.db?mode=rwc".to_string()
    });

    tracing::info!("Connecting to database...");
    let pool = SqlitePool::connect(&database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            // Continue anyway - migrations might have already been run
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Ok(pool)
}

/// Load the session signing secret from the environment
///
/// Falls back to a development secret with a loud warning. The secret is
/// read exactly once, at startup, and handed to the session manager; no
/// request-path code touches the environment.
pub fn load_session_secret() -> String {
    match std::env::var("SESSION_SECRET") {
        Ok(secret) if !secret.is_empty() => secret,
        _ => {
            tracing::warn!("SESSION_SECRET not set. Using development secret - do not deploy this");
            DEV_SESSION_SECRET.to_string()
        }
    }
}
