//! In-memory storage backend.
//!
//! Keeps the record set in two maps (alias → url and url → alias) so both
//! uniqueness checks are constant-time. A single reader/writer lock guards
//! the pair: lookups proceed concurrently, saves are exclusive.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Storage, StorageError};

#[derive(Default)]
struct Records {
    /// alias → url
    urls: HashMap<String, String>,
    /// url → alias, for the url uniqueness check
    reverse: HashMap<String, String>,
}

/// Storage backend holding all records in process memory.
///
/// Intended for local development and tests; nothing is persisted.
#[derive(Default)]
pub struct MemoryStorage {
    inner: RwLock<Records>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StorageError> {
        let mut records = self.inner.write().await;

        if records.urls.contains_key(alias) {
            return Err(StorageError::AlreadyExists);
        }
        if records.reverse.contains_key(url) {
            return Err(StorageError::AlreadyExists);
        }

        records.urls.insert(alias.to_owned(), url.to_owned());
        records.reverse.insert(url.to_owned(), alias.to_owned());

        // Synthetic id: the record count after insertion.
        Ok(records.urls.len() as i64)
    }

    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        let records = self.inner.read().await;

        records
            .urls
            .get(alias)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn close(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_save_and_get_roundtrip() {
        let storage = MemoryStorage::new();

        let id = storage.save_url("https://example.com", "abc").await.unwrap();
        assert_eq!(id, 1);

        let url = storage.get_url("abc").await.unwrap();
        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn test_get_unknown_alias_is_not_found() {
        let storage = MemoryStorage::new();

        let result = storage.get_url("missing").await;
        assert!(matches!(result, Err(StorageError::NotFound)));
    }

    #[tokio::test]
    async fn test_duplicate_alias_is_rejected() {
        let storage = MemoryStorage::new();

        storage.save_url("https://example.com", "abc").await.unwrap();

        let result = storage.save_url("https://other.com", "abc").await;
        assert!(matches!(result, Err(StorageError::AlreadyExists)));

        // The failed save must not have touched either map.
        assert_eq!(storage.get_url("abc").await.unwrap(), "https://example.com");
        let result = storage.save_url("https://other.com", "xyz").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_duplicate_url_is_rejected() {
        let storage = MemoryStorage::new();

        storage.save_url("https://example.com", "abc").await.unwrap();

        let result = storage.save_url("https://example.com", "xyz").await;
        assert!(matches!(result, Err(StorageError::AlreadyExists)));

        assert!(matches!(
            storage.get_url("xyz").await,
            Err(StorageError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_synthetic_id_grows_with_record_count() {
        let storage = MemoryStorage::new();

        assert_eq!(storage.save_url("https://a.com", "a").await.unwrap(), 1);
        assert_eq!(storage.save_url("https://b.com", "b").await.unwrap(), 2);
        assert_eq!(storage.save_url("https://c.com", "c").await.unwrap(), 3);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_distinct_saves_all_succeed() {
        let storage = Arc::new(MemoryStorage::new());

        let mut handles = Vec::new();
        for i in 0..100 {
            let storage = storage.clone();
            handles.push(tokio::spawn(async move {
                storage
                    .save_url(&format!("https://example.com/{i}"), &format!("alias{i}"))
                    .await
            }));
        }

        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }

        // No lost updates: every pair is independently retrievable.
        for i in 0..100 {
            let url = storage.get_url(&format!("alias{i}")).await.unwrap();
            assert_eq!(url, format!("https://example.com/{i}"));
        }
    }

    #[tokio::test]
    async fn test_close_is_a_noop() {
        let storage = MemoryStorage::new();
        storage.save_url("https://example.com", "abc").await.unwrap();

        storage.close().await.unwrap();
    }
}
