//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::transcription::LanguageHint;

/// Default transcription server base URL (local development backend)
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server_url: Option<String>,
    pub language: Option<String>,
    pub clipboard: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            server_url: Some(DEFAULT_SERVER_URL.to_string()),
            language: Some("auto".to_string()),
            clipboard: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            server_url: other.server_url.or(self.server_url),
            language: other.language.or(self.language),
            clipboard: other.clipboard.or(self.clipboard),
        }
    }

    /// Get the server URL, or the default if not set
    pub fn server_url_or_default(&self) -> &str {
        self.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    /// Get the language hint, or auto-detect if not set
    pub fn language_or_default(&self) -> LanguageHint {
        self.language
            .as_deref()
            .map(LanguageHint::from)
            .unwrap_or_default()
    }

    /// Get clipboard setting, or false if not set
    pub fn clipboard_or_default(&self) -> bool {
        self.clipboard.unwrap_or(false)
    }
}
