//! PostgreSQL storage backend.
//!
//! Uniqueness of both `alias` and `url` is enforced by unique constraints;
//! the backend maps any unique violation (Postgres 23505) to
//! [`StorageError::AlreadyExists`] without distinguishing which column
//! collided.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use super::{Storage, StorageError};
use crate::config::Config;

/// PostgreSQL-backed record store.
///
/// Uses SQLx prepared statements with runtime parameter binding.
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connects to the database, verifies liveness, and bootstraps the schema.
    ///
    /// The schema is created idempotently, so repeated startups against the
    /// same database are safe.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or the
    /// bootstrap DDL fails. Callers treat this as fatal to startup.
    pub async fn connect(database_url: &str, config: &Config) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
            .connect(database_url)
            .await
            .context("failed to connect to postgres")?;

        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .context("postgres liveness check failed")?;

        Self::bootstrap(&pool).await?;

        Ok(Self { pool })
    }

    async fn bootstrap(pool: &PgPool) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS url (
                id SERIAL PRIMARY KEY,
                alias TEXT NOT NULL UNIQUE,
                url TEXT NOT NULL UNIQUE
            )
            "#,
        )
        .execute(pool)
        .await
        .context("create url table")?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_alias ON url (alias)")
            .execute(pool)
            .await
            .context("create alias index")?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_url ON url (url)")
            .execute(pool)
            .await
            .context("create url index")?;

        Ok(())
    }
}

#[async_trait]
impl Storage for PgStorage {
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StorageError> {
        let id: i32 = sqlx::query_scalar("INSERT INTO url (url, alias) VALUES ($1, $2) RETURNING id")
            .bind(url)
            .bind(alias)
            .fetch_one(&self.pool)
            .await
            .map_err(map_save_error)?;

        Ok(i64::from(id))
    }

    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        let url: Option<String> = sqlx::query_scalar("SELECT url FROM url WHERE alias = $1")
            .bind(alias)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                StorageError::Backend(anyhow::Error::new(e).context("select url by alias"))
            })?;

        url.ok_or(StorageError::NotFound)
    }

    async fn close(&self) -> Result<(), StorageError> {
        self.pool.close().await;
        Ok(())
    }
}

fn map_save_error(e: sqlx::Error) -> StorageError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return StorageError::AlreadyExists;
    }

    StorageError::Backend(anyhow::Error::new(e).context("insert url"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_maps_to_backend() {
        let err = map_save_error(sqlx::Error::RowNotFound);

        assert!(matches!(err, StorageError::Backend(_)));
        assert!(err.to_string().contains("insert url"));
    }
}
