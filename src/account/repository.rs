//! Repository layer for database operations

use super::models::{User, UserSummary};
use sqlx::{Row, SqlitePool};

/// User repository for CRUD operations
pub struct UserRepository;

impl UserRepository {
    /// List every user: id, name, username (balance omitted)
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<UserSummary>, sqlx::Error> {
        let rows: Vec<UserSummary> = sqlx::query_as(r#"SELECT id, name, username FROM users"#)
            .fetch_all(pool)
            .await?;

        Ok(rows)
    }

    /// Get the full record by id
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
        let row: Option<User> =
            sqlx::query_as(r#"SELECT id, name, username, balance FROM users WHERE id = ?"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(row)
    }

    /// Create a new user, returning the assigned id
    ///
    /// Non-empty checks on name/username happen at the API layer.
    pub async fn create(
        pool: &SqlitePool,
        name: &str,
        username: &str,
        balance: i64,
    ) -> Result<i64, sqlx::Error> {
        let row = sqlx::query(
            r#"INSERT INTO users (name, username, balance) VALUES (?, ?, ?) RETURNING id"#,
        )
        .bind(name)
        .bind(username)
        .bind(balance)
        .fetch_one(pool)
        .await?;

        Ok(row.get("id"))
    }

    /// Remove the record with this id; no-op if absent
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query(r#"DELETE FROM users WHERE id = ?"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Get just the balance by id
    pub async fn get_balance(pool: &SqlitePool, id: i64) -> Result<Option<i64>, sqlx::Error> {
        let row = sqlx::query(r#"SELECT balance FROM users WHERE id = ?"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(|r| r.get("balance")))
    }

    /// Apply `balance = balance + delta` to the record with this id
    pub async fn adjust_balance(
        pool: &SqlitePool,
        id: i64,
        delta: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(r#"UPDATE users SET balance = balance + ? WHERE id = ?"#)
            .bind(delta)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
