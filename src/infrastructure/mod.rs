//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the transcription backend, local storage, etc.

pub mod clipboard;
pub mod config;
pub mod history;
pub mod transcription;

// Re-export adapters
pub use clipboard::ArboardClipboard;
pub use config::XdgConfigStore;
pub use history::JsonHistoryStore;
pub use transcription::WhisperTranscriber;
