//! History domain - past transcription records and the bounded cache

pub mod cache;
pub mod entry;

pub use cache::{HistoryCache, HISTORY_LIMIT};
pub use entry::HistoryEntry;
