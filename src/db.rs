//! Database connection management

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// SQL for the single `users` table.
///
/// AUTOINCREMENT keeps id assignment monotonic; dropping the table also
/// drops its `sqlite_sequence` row, so a reset restarts ids at 1.
pub(crate) const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        username TEXT NOT NULL,
        balance INTEGER NOT NULL DEFAULT 0
    );
"#;

/// SQLite database connection pool
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database connection pool, creating the file if absent
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(options)
            .await?;

        tracing::info!("SQLite connection pool established: {}", database_url);
        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Ensure the users table exists; idempotent
    pub async fn create_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_USERS_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Drop and recreate the users table, discarding all records
    /// and restarting id assignment from 1
    pub async fn reset_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query("DROP TABLE IF EXISTS users;")
            .execute(&self.pool)
            .await?;
        self.create_schema().await?;
        tracing::info!("Users table reset");
        Ok(())
    }

    /// Check database health
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
