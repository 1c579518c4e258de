//! Whisper HTTP API transcriber adapter

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{Transcriber, TranscriptionError};
use crate::domain::transcription::LanguageHint;
use crate::domain::upload::{AudioFile, MPEG_AUDIO_MIME};

/// Multipart field carrying the raw audio bytes
const FILE_FIELD: &str = "file";

/// Multipart field carrying the language hint, omitted for auto-detect
const LANGUAGE_FIELD: &str = "language";

/// File name sent to the backend regardless of the original name
const UPLOAD_FILE_NAME: &str = "audio.mp3";

// Response types for the transcription API

#[derive(Debug, Deserialize)]
struct TranscribeResponse {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    detail: String,
}

/// Transcriber adapter for a Whisper-compatible HTTP backend.
/// Sends `POST {base_url}/transcribe` with a multipart form body.
pub struct WhisperTranscriber {
    base_url: String,
    client: reqwest::Client,
}

impl WhisperTranscriber {
    /// Create a new transcriber against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Build the endpoint URL
    fn endpoint(&self) -> String {
        format!("{}/transcribe", self.base_url)
    }

    /// Build the multipart request body
    fn build_form(
        audio: &AudioFile,
        language: &LanguageHint,
    ) -> Result<multipart::Form, TranscriptionError> {
        let part = multipart::Part::bytes(audio.bytes().to_vec())
            .file_name(UPLOAD_FILE_NAME)
            .mime_str(MPEG_AUDIO_MIME)
            .map_err(|e| TranscriptionError::Unknown(e.to_string()))?;

        let mut form = multipart::Form::new().part(FILE_FIELD, part);
        if let Some(code) = language.code() {
            form = form.text(LANGUAGE_FIELD, code.to_string());
        }

        Ok(form)
    }

    /// Derive an error message from a non-success response body.
    /// Uses the structured `detail` field when the body is JSON,
    /// otherwise falls back to the HTTP status.
    fn error_message(status: reqwest::StatusCode, body: &str) -> String {
        serde_json::from_str::<ErrorResponse>(body)
            .map(|e| e.detail)
            .unwrap_or_else(|_| format!("Transcription request failed with HTTP {}", status.as_u16()))
    }
}

#[async_trait]
impl Transcriber for WhisperTranscriber {
    async fn transcribe(
        &self,
        audio: &AudioFile,
        language: &LanguageHint,
    ) -> Result<String, TranscriptionError> {
        let form = Self::build_form(audio, language)?;

        let response = self
            .client
            .post(self.endpoint())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    TranscriptionError::ServerUnreachable(self.base_url.clone())
                } else {
                    TranscriptionError::Unknown(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranscriptionError::ServerRejected(Self::error_message(
                status, &body,
            )));
        }

        let body: TranscribeResponse = response.json().await.map_err(|e| {
            TranscriptionError::Unknown(format!("Failed to parse server response: {}", e))
        })?;

        // Absent or empty text is resolved to a placeholder by the caller
        Ok(body.text.unwrap_or_default())
    }
}
