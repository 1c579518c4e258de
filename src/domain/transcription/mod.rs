//! Transcription domain - language hints and the request session

pub mod language;
pub mod session;

pub use language::LanguageHint;
pub use session::{InvalidStateTransition, TranscribeSession, TranscribeState};

/// Text shown when the server returns an empty or missing transcription.
/// An empty result is still a successful outcome, not an error.
pub const NO_SPEECH_PLACEHOLDER: &str = "No speech detected.";
