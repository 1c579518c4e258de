//! Transcription port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcription::LanguageHint;
use crate::domain::upload::AudioFile;

/// Transcription errors.
/// All variants are terminal for the current attempt; recovery is an
/// explicit user-initiated retry.
#[derive(Debug, Clone, Error)]
pub enum TranscriptionError {
    /// The server answered with a 4xx/5xx and gave a reason
    #[error("{0}")]
    ServerRejected(String),

    /// The server could not be reached at all, as opposed to the
    /// server saying no
    #[error("Cannot reach transcription server at {0}. Please ensure the backend is running.")]
    ServerUnreachable(String),

    /// Any other failure
    #[error("Transcription failed: {0}")]
    Unknown(String),
}

/// Port for audio transcription
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe an audio file to text.
    ///
    /// # Arguments
    /// * `audio` - The validated audio file to transcribe
    /// * `language` - Language hint; `Auto` lets the backend detect it
    ///
    /// # Returns
    /// The transcribed text (possibly empty) or an error
    async fn transcribe(
        &self,
        audio: &AudioFile,
        language: &LanguageHint,
    ) -> Result<String, TranscriptionError>;
}
