//! JSON file history store adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{HistoryStore, HistoryStoreError};
use crate::domain::history::HistoryEntry;

/// History store backed by a single JSON document in the user data dir
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    /// Create a store at the default path
    pub fn new() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("open-transcribe");

        Self {
            path: data_dir.join("history.json"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the history file path
    pub fn path(&self) -> PathBuf {
        self.path.clone()
    }
}

impl Default for JsonHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryStore for JsonHistoryStore {
    async fn load(&self) -> Result<Vec<HistoryEntry>, HistoryStoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| HistoryStoreError::ReadError(e.to_string()))?;

        // A corrupt stored value is discarded, not surfaced
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    async fn save(&self, entries: &[HistoryEntry]) -> Result<(), HistoryStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| HistoryStoreError::WriteError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| HistoryStoreError::WriteError(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| HistoryStoreError::WriteError(e.to_string()))?;

        Ok(())
    }
}
