//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod history;
pub mod transcription;
pub mod upload;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use history::{HistoryCache, HistoryEntry, HISTORY_LIMIT};
pub use transcription::{
    InvalidStateTransition, LanguageHint, TranscribeSession, TranscribeState,
    NO_SPEECH_PLACEHOLDER,
};
pub use upload::{AudioFile, InvalidFileType};
