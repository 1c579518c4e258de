//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod history_store;
pub mod transcriber;

// Re-export common types
pub use clipboard::{Clipboard, ClipboardError};
pub use config::ConfigStore;
pub use history_store::{HistoryStore, HistoryStoreError};
pub use transcriber::{Transcriber, TranscriptionError};
