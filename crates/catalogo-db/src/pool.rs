//! Database pool helpers

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::error::DbResult;

/// Shared connection pool type
pub type DbPool = PgPool;

/// Connect to the database and verify the connection
pub async fn connect(database_url: &str) -> DbResult<DbPool> {
    tracing::debug!("Connecting to database");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}
