//! History service - cache operations backed by durable storage
//!
//! Wraps the pure [`HistoryCache`] with an injected [`HistoryStore`] so
//! every mutation is its own durable write.

use crate::domain::history::{HistoryCache, HistoryEntry};

use super::ports::{HistoryStore, HistoryStoreError};

/// Service exposing create/delete/clear/load over persisted history
pub struct HistoryService<S: HistoryStore> {
    store: S,
}

impl<S: HistoryStore> HistoryService<S> {
    /// Create a service over the given store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Rehydrate the cache from storage
    pub async fn load(&self) -> Result<HistoryCache, HistoryStoreError> {
        Ok(HistoryCache::from_entries(self.store.load().await?))
    }

    /// Prepend a new entry and persist the result
    pub async fn record(&self, entry: HistoryEntry) -> Result<(), HistoryStoreError> {
        let mut cache = self.load().await?;
        cache.add(entry);
        self.store.save(cache.entries()).await
    }

    /// Delete the entry with the given id.
    /// Returns whether an entry was removed; unknown ids are a no-op
    /// and do not rewrite storage.
    pub async fn delete(&self, id: &str) -> Result<bool, HistoryStoreError> {
        let mut cache = self.load().await?;
        if !cache.remove(id) {
            return Ok(false);
        }
        self.store.save(cache.entries()).await?;
        Ok(true)
    }

    /// Delete all entries
    pub async fn clear(&self) -> Result<(), HistoryStoreError> {
        self.store.save(&[]).await
    }

    /// Read-only lookup by id
    pub async fn get(&self, id: &str) -> Result<Option<HistoryEntry>, HistoryStoreError> {
        Ok(self.load().await?.get(id).cloned())
    }
}
