//! History persistence port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::history::HistoryEntry;

/// History storage errors
#[derive(Debug, Clone, Error)]
pub enum HistoryStoreError {
    #[error("Failed to read history: {0}")]
    ReadError(String),

    #[error("Failed to write history: {0}")]
    WriteError(String),
}

/// Port for durable history storage.
///
/// The store holds one ordered list of entries; every mutation of the
/// cache is followed by a full `save`.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Load persisted entries, most recent first.
    ///
    /// A missing or corrupt stored value yields an empty list rather
    /// than an error; history is a convenience, not critical state.
    async fn load(&self) -> Result<Vec<HistoryEntry>, HistoryStoreError>;

    /// Persist the full ordered list, replacing the stored value.
    async fn save(&self, entries: &[HistoryEntry]) -> Result<(), HistoryStoreError>;
}
