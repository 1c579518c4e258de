//! History entry record

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One persisted record of a past transcription.
/// Created exactly once when a transcription succeeds; immutable after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Opaque unique identifier, generated at creation
    pub id: String,
    /// Creation time of the entry
    pub created_at: Timestamp,
    /// Display name of the original file
    pub source_file_name: String,
    /// Transcription result at creation time
    pub text: String,
}

impl HistoryEntry {
    /// Create a new entry with a fresh id and the current time
    pub fn new(source_file_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: Timestamp::now(),
            source_file_name: source_file_name.into(),
            text: text.into(),
        }
    }
}
