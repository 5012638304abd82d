//! Storage abstraction over the alias → url record set.
//!
//! Records are `{id, alias, url}` with both `alias` and `url` unique across
//! the whole set. Records are created once and never updated or deleted.
//!
//! # Implementations
//!
//! - [`MemoryStorage`] - two in-process maps behind a reader/writer lock
//! - [`PgStorage`] - PostgreSQL table with unique constraints

pub mod memory;
pub mod postgres;

pub use memory::MemoryStorage;
pub use postgres::PgStorage;

use async_trait::async_trait;

/// Errors produced at the storage boundary.
///
/// Backends translate their backend-specific failure signals into these
/// kinds; callers never see raw driver errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No record matches the requested alias.
    #[error("url not found")]
    NotFound,

    /// The alias or the url is already present. Backends do not report
    /// which of the two columns collided.
    #[error("url or alias already exists")]
    AlreadyExists,

    /// Any other backend failure, wrapped with operation context.
    #[error("storage backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

/// Record store shared by the save and redirect handlers.
///
/// The backend exclusively owns the record set; handlers only reference it
/// through this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Storage: Send + Sync {
    /// Stores a new record and returns its opaque id (used only for logging).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AlreadyExists`] if either `alias` or `url` is
    /// already present; the failed call leaves the record set unchanged.
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StorageError>;

    /// Returns the url stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no record has that alias.
    async fn get_url(&self, alias: &str) -> Result<String, StorageError>;

    /// Releases backend resources. Called once at shutdown.
    async fn close(&self) -> Result<(), StorageError>;
}
