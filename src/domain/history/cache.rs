//! Bounded, ordered history cache

use std::collections::HashSet;

use super::HistoryEntry;

/// Maximum number of entries retained in the cache
pub const HISTORY_LIMIT: usize = 50;

/// Bounded, ordered collection of past transcriptions.
///
/// Invariants:
/// - ordered most-recent-first (new entries are prepended)
/// - holds at most [`HISTORY_LIMIT`] entries; the oldest are evicted
/// - entry ids are unique
#[derive(Debug, Clone, Default)]
pub struct HistoryCache {
    entries: Vec<HistoryEntry>,
}

impl HistoryCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate a cache from stored entries.
    /// Entries with a duplicate id are dropped (first occurrence wins)
    /// and the result is truncated to the limit.
    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        let mut seen = HashSet::new();
        let mut unique: Vec<HistoryEntry> = entries
            .into_iter()
            .filter(|e| seen.insert(e.id.clone()))
            .collect();
        unique.truncate(HISTORY_LIMIT);

        Self { entries: unique }
    }

    /// Prepend an entry, evicting the oldest past the limit
    pub fn add(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_LIMIT);
    }

    /// Delete the entry with the given id.
    /// Returns whether an entry was removed; removing an unknown id
    /// is a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Empty the cache entirely
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Read-only lookup by id; does not mutate order
    pub fn get(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// All entries, most recent first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Consume the cache and return its entries
    pub fn into_entries(self) -> Vec<HistoryEntry> {
        self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
