//! Main app runner for transcription

use std::env;
use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::application::{TranscribeFileUseCase, TranscribeInput};
use crate::domain::config::AppConfig;
use crate::domain::upload::{content_type_for_name, AudioFile};
use crate::infrastructure::{
    ArboardClipboard, JsonHistoryStore, WhisperTranscriber, XdgConfigStore,
};

use super::args::TranscribeOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run a one-shot transcription
pub async fn run_transcribe(options: TranscribeOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    let file_name = options
        .file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| options.file.to_string_lossy().to_string());

    let bytes = match tokio::fs::read(&options.file).await {
        Ok(bytes) => bytes,
        Err(e) => {
            presenter.error(&format!("Failed to read {}: {}", options.file.display(), e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Upload gate: name/type check happens before any network call
    let audio = match AudioFile::new(&file_name, content_type_for_name(&file_name), bytes) {
        Ok(audio) => audio,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    // Create adapters
    let transcriber = WhisperTranscriber::new(&options.server_url);
    let store = JsonHistoryStore::new();
    let clipboard = ArboardClipboard::new();

    let use_case = TranscribeFileUseCase::new(transcriber, store, clipboard);

    let input = TranscribeInput {
        audio,
        language: options.language,
        enable_clipboard: options.copy,
    };

    presenter.start_spinner(&format!(
        "Transcribing {} ({})...",
        file_name,
        input.audio.human_readable_size()
    ));

    match use_case.execute(input).await {
        Ok(output) => {
            presenter.spinner_success("Transcription complete");
            presenter.output(&output.text);

            if output.clipboard_copied {
                presenter.info("Copied to clipboard");
            }
            if !output.history_recorded {
                presenter.warn("Result was not saved to history");
            }
            if options.save {
                let target = transcript_file_name(&file_name);
                match tokio::fs::write(&target, &output.text).await {
                    Ok(()) => presenter.success(&format!("Saved transcript to {}", target)),
                    Err(e) => presenter.warn(&format!("Failed to save {}: {}", target, e)),
                }
            }

            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.spinner_fail("Transcription failed");
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Derive the download file name for a transcript:
/// everything before the first dot, plus a fixed suffix.
pub fn transcript_file_name(source_file_name: &str) -> String {
    let stem = source_file_name
        .split_once('.')
        .map(|(stem, _)| stem)
        .filter(|stem| !stem.is_empty())
        .unwrap_or(source_file_name);

    format!("{}_transcript.txt", stem)
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Build env config
    let env_config = AppConfig {
        server_url: env::var("OPEN_TRANSCRIBE_URL").ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
