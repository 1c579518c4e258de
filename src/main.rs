//! OpenTranscribe CLI entry point

use std::process::ExitCode;

use clap::Parser;

use open_transcribe::cli::{
    app::{load_merged_config, run_transcribe, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands, TranscribeOptions},
    config_cmd::handle_config_command,
    history_cmd::handle_history_command,
    presenter::Presenter,
};
use open_transcribe::domain::config::AppConfig;
use open_transcribe::infrastructure::{JsonHistoryStore, XdgConfigStore};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::History { action }) => {
            let store = JsonHistoryStore::new();
            if let Err(e) = handle_history_command(action, store, &presenter).await {
                presenter.error(&e);
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        None => {}
    }

    let Some(file) = cli.file.clone() else {
        presenter.error("No input file provided. Usage: open-transcribe <FILE>");
        return ExitCode::from(EXIT_USAGE_ERROR);
    };

    // Build CLI config from args
    let cli_config = AppConfig {
        server_url: cli.server.clone(),
        language: cli.language.map(|l| l.as_str().to_string()),
        clipboard: if cli.copy { Some(true) } else { None },
    };

    // Merge config: defaults < file < env < cli
    let config = load_merged_config(cli_config).await;

    let options = TranscribeOptions {
        file,
        language: config.language_or_default(),
        server_url: config.server_url_or_default().to_string(),
        copy: config.clipboard_or_default(),
        save: cli.save,
    };

    run_transcribe(options).await
}
