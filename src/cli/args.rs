//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::transcription::LanguageHint;

/// OpenTranscribe - MP3 to text transcription
#[derive(Parser, Debug)]
#[command(name = "open-transcribe")]
#[command(version)]
#[command(about = "Convert MP3 audio to text using a Whisper-compatible transcription backend")]
#[command(long_about = None)]
pub struct Cli {
    /// MP3 file to transcribe
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Language hint for transcription
    #[arg(short = 'l', long, value_name = "LANG")]
    pub language: Option<LanguageArg>,

    /// Transcription server base URL
    #[arg(short = 's', long, value_name = "URL")]
    pub server: Option<String>,

    /// Copy transcription to clipboard
    #[arg(short = 'c', long)]
    pub copy: bool,

    /// Save transcription as <name>_transcript.txt in the current directory
    #[arg(short = 'o', long)]
    pub save: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage past transcriptions
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// History subcommands
#[derive(Subcommand, Debug)]
pub enum HistoryAction {
    /// List saved transcriptions, most recent first
    List,
    /// Print the full text of a saved transcription
    Show {
        /// Entry id
        id: String,
    },
    /// Delete a saved transcription
    Delete {
        /// Entry id
        id: String,
    },
    /// Delete all saved transcriptions
    Clear {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Language argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LanguageArg {
    /// Let the backend detect the language
    Auto,
    /// English
    En,
    /// Spanish
    Es,
}

impl From<LanguageArg> for LanguageHint {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Auto => LanguageHint::Auto,
            LanguageArg::En => LanguageHint::Iso("en".to_string()),
            LanguageArg::Es => LanguageHint::Iso("es".to_string()),
        }
    }
}

impl LanguageArg {
    /// Config-file representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

/// Parsed transcribe options
#[derive(Debug, Clone)]
pub struct TranscribeOptions {
    pub file: PathBuf,
    pub language: LanguageHint,
    pub server_url: String,
    pub copy: bool,
    pub save: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["server_url", "language", "clipboard"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
