//! Transcribe file use case - the request/response orchestrator

use std::sync::{Mutex, PoisonError};

use thiserror::Error;

use crate::domain::history::HistoryEntry;
use crate::domain::transcription::{
    InvalidStateTransition, LanguageHint, TranscribeSession, TranscribeState,
    NO_SPEECH_PLACEHOLDER,
};
use crate::domain::upload::AudioFile;

use super::history::HistoryService;
use super::ports::{Clipboard, HistoryStore, Transcriber, TranscriptionError};

/// Errors from the transcribe use case
#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("{0}")]
    Transcription(#[from] TranscriptionError),

    #[error("{0}")]
    Session(#[from] InvalidStateTransition),
}

/// Input parameters for the transcribe use case
#[derive(Debug, Clone)]
pub struct TranscribeInput {
    /// Validated audio file to upload
    pub audio: AudioFile,
    /// Language hint forwarded to the backend
    pub language: LanguageHint,
    /// Whether to copy the result to the clipboard
    pub enable_clipboard: bool,
}

/// Output from the transcribe use case
#[derive(Debug, Clone)]
pub struct TranscribeOutput {
    /// The transcribed text (placeholder substituted when empty)
    pub text: String,
    /// Id of the history entry created for this result
    pub entry_id: String,
    /// Whether the result was persisted to history
    pub history_recorded: bool,
    /// Whether clipboard copy succeeded (if enabled)
    pub clipboard_copied: bool,
}

/// One-shot transcription use case.
///
/// Owns the session state machine and the history service. A second
/// call while a request is in flight, or before an explicit reset, is
/// rejected by the state machine.
pub struct TranscribeFileUseCase<T, H, C>
where
    T: Transcriber,
    H: HistoryStore,
    C: Clipboard,
{
    transcriber: T,
    history: HistoryService<H>,
    clipboard: C,
    session: Mutex<TranscribeSession>,
}

impl<T, H, C> TranscribeFileUseCase<T, H, C>
where
    T: Transcriber,
    H: HistoryStore,
    C: Clipboard,
{
    /// Create a new use case instance
    pub fn new(transcriber: T, history_store: H, clipboard: C) -> Self {
        Self {
            transcriber,
            history: HistoryService::new(history_store),
            clipboard,
            session: Mutex::new(TranscribeSession::new()),
        }
    }

    /// Get the current session state
    pub fn state(&self) -> TranscribeState {
        self.lock_session().state()
    }

    /// Return to idle after a finished attempt, discarding its state
    pub fn reset(&self) -> Result<(), InvalidStateTransition> {
        self.lock_session().reset()
    }

    /// Access the underlying history service
    pub fn history(&self) -> &HistoryService<H> {
        &self.history
    }

    fn lock_session(&self) -> std::sync::MutexGuard<'_, TranscribeSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Execute the transcription workflow.
    ///
    /// Transitions the session to busy, sends the request, and on
    /// success records exactly one history entry. Persisting the entry
    /// and copying to the clipboard are non-fatal conveniences.
    pub async fn execute(
        &self,
        input: TranscribeInput,
    ) -> Result<TranscribeOutput, TranscribeError> {
        self.lock_session().begin()?;

        let result = self
            .transcriber
            .transcribe(&input.audio, &input.language)
            .await;

        let text = match result {
            Ok(text) => text,
            Err(e) => {
                let _ = self.lock_session().fail();
                return Err(e.into());
            }
        };

        // An empty transcription is a success, not an error
        let text = if text.is_empty() {
            NO_SPEECH_PLACEHOLDER.to_string()
        } else {
            text
        };

        let entry = HistoryEntry::new(input.audio.file_name(), &text);
        let entry_id = entry.id.clone();

        let history_recorded = match self.history.record(entry).await {
            Ok(()) => true,
            Err(e) => {
                eprintln!("Warning: failed to save history: {}", e);
                false
            }
        };

        let clipboard_copied = if input.enable_clipboard {
            match self.clipboard.copy(&text).await {
                Ok(()) => true,
                Err(e) => {
                    eprintln!("Warning: clipboard copy failed: {}", e);
                    false
                }
            }
        } else {
            false
        };

        let _ = self.lock_session().succeed();

        Ok(TranscribeOutput {
            text,
            entry_id,
            history_recorded,
            clipboard_copied,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{ClipboardError, HistoryStoreError};
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;

    // Mock implementations for testing

    struct MockTranscriber {
        response: Result<String, TranscriptionError>,
    }

    impl MockTranscriber {
        fn ok(text: &str) -> Self {
            Self {
                response: Ok(text.to_string()),
            }
        }

        fn err(error: TranscriptionError) -> Self {
            Self {
                response: Err(error),
            }
        }
    }

    #[async_trait]
    impl Transcriber for MockTranscriber {
        async fn transcribe(
            &self,
            _audio: &AudioFile,
            _language: &LanguageHint,
        ) -> Result<String, TranscriptionError> {
            self.response.clone()
        }
    }

    #[derive(Default)]
    struct InMemoryStore {
        entries: StdMutex<Vec<HistoryEntry>>,
    }

    #[async_trait]
    impl HistoryStore for InMemoryStore {
        async fn load(&self) -> Result<Vec<HistoryEntry>, HistoryStoreError> {
            Ok(self.entries.lock().unwrap().clone())
        }

        async fn save(&self, entries: &[HistoryEntry]) -> Result<(), HistoryStoreError> {
            *self.entries.lock().unwrap() = entries.to_vec();
            Ok(())
        }
    }

    struct MockClipboard;

    #[async_trait]
    impl Clipboard for MockClipboard {
        async fn copy(&self, _text: &str) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    fn test_audio() -> AudioFile {
        AudioFile::new("speech.mp3", None, vec![0u8; 100]).unwrap()
    }

    fn input(audio: AudioFile) -> TranscribeInput {
        TranscribeInput {
            audio,
            language: LanguageHint::Auto,
            enable_clipboard: false,
        }
    }

    #[tokio::test]
    async fn execute_returns_transcription_and_records_history() {
        let use_case = TranscribeFileUseCase::new(
            MockTranscriber::ok("hello world"),
            InMemoryStore::default(),
            MockClipboard,
        );

        let output = use_case.execute(input(test_audio())).await.unwrap();

        assert_eq!(output.text, "hello world");
        assert!(output.history_recorded);
        assert!(!output.clipboard_copied); // Not enabled
        assert_eq!(use_case.state(), TranscribeState::Success);

        let cache = use_case.history().load().await.unwrap();
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.entries()[0].source_file_name, "speech.mp3");
        assert_eq!(cache.entries()[0].text, "hello world");
        assert_eq!(cache.entries()[0].id, output.entry_id);
    }

    #[tokio::test]
    async fn empty_text_substitutes_placeholder_and_still_records() {
        let use_case = TranscribeFileUseCase::new(
            MockTranscriber::ok(""),
            InMemoryStore::default(),
            MockClipboard,
        );

        let output = use_case.execute(input(test_audio())).await.unwrap();

        assert_eq!(output.text, NO_SPEECH_PLACEHOLDER);
        assert_eq!(use_case.state(), TranscribeState::Success);

        let cache = use_case.history().load().await.unwrap();
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.entries()[0].text, NO_SPEECH_PLACEHOLDER);
    }

    #[tokio::test]
    async fn server_rejection_ends_in_error_state_without_history() {
        let use_case = TranscribeFileUseCase::new(
            MockTranscriber::err(TranscriptionError::ServerRejected(
                "model overloaded".to_string(),
            )),
            InMemoryStore::default(),
            MockClipboard,
        );

        let err = use_case.execute(input(test_audio())).await.unwrap_err();

        assert_eq!(err.to_string(), "model overloaded");
        assert_eq!(use_case.state(), TranscribeState::Error);
        assert!(use_case.history().load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unreachable_server_surfaces_distinct_message() {
        let use_case = TranscribeFileUseCase::new(
            MockTranscriber::err(TranscriptionError::ServerUnreachable(
                "http://localhost:8000".to_string(),
            )),
            InMemoryStore::default(),
            MockClipboard,
        );

        let err = use_case.execute(input(test_audio())).await.unwrap_err();
        assert!(err.to_string().contains("Cannot reach transcription server"));
    }

    #[tokio::test]
    async fn second_attempt_requires_reset() {
        let use_case = TranscribeFileUseCase::new(
            MockTranscriber::ok("text"),
            InMemoryStore::default(),
            MockClipboard,
        );

        use_case.execute(input(test_audio())).await.unwrap();

        // Still in Success; a new attempt is an illegal transition
        let err = use_case.execute(input(test_audio())).await.unwrap_err();
        assert!(matches!(err, TranscribeError::Session(_)));

        use_case.reset().unwrap();
        assert_eq!(use_case.state(), TranscribeState::Idle);
        use_case.execute(input(test_audio())).await.unwrap();
    }

    #[tokio::test]
    async fn retry_after_failure_via_reset() {
        let use_case = TranscribeFileUseCase::new(
            MockTranscriber::err(TranscriptionError::Unknown("boom".to_string())),
            InMemoryStore::default(),
            MockClipboard,
        );

        use_case.execute(input(test_audio())).await.unwrap_err();
        assert_eq!(use_case.state(), TranscribeState::Error);

        use_case.reset().unwrap();
        assert_eq!(use_case.state(), TranscribeState::Idle);
    }

    #[tokio::test]
    async fn clipboard_enabled_copies_result() {
        let use_case = TranscribeFileUseCase::new(
            MockTranscriber::ok("text"),
            InMemoryStore::default(),
            MockClipboard,
        );

        let output = use_case
            .execute(TranscribeInput {
                audio: test_audio(),
                language: LanguageHint::Auto,
                enable_clipboard: true,
            })
            .await
            .unwrap();

        assert!(output.clipboard_copied);
    }

    #[tokio::test]
    async fn history_write_failure_is_non_fatal() {
        struct FailingStore;

        #[async_trait]
        impl HistoryStore for FailingStore {
            async fn load(&self) -> Result<Vec<HistoryEntry>, HistoryStoreError> {
                Ok(Vec::new())
            }

            async fn save(&self, _entries: &[HistoryEntry]) -> Result<(), HistoryStoreError> {
                Err(HistoryStoreError::WriteError("disk full".to_string()))
            }
        }

        let use_case =
            TranscribeFileUseCase::new(MockTranscriber::ok("text"), FailingStore, MockClipboard);

        let output = use_case.execute(input(test_audio())).await.unwrap();
        assert!(!output.history_recorded);
        assert_eq!(output.text, "text");
        assert_eq!(use_case.state(), TranscribeState::Success);
    }
}
