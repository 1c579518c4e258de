//! Language hint value object

use std::fmt;

/// Language hint for a transcription request.
/// `Auto` lets the backend detect the language; an ISO code is
/// forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LanguageHint {
    #[default]
    Auto,
    Iso(String),
}

impl LanguageHint {
    /// Get the ISO code to send, or None for auto-detection
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Auto => None,
            Self::Iso(code) => Some(code),
        }
    }
}

impl From<&str> for LanguageHint {
    fn from(s: &str) -> Self {
        if s.eq_ignore_ascii_case("auto") {
            Self::Auto
        } else {
            Self::Iso(s.to_string())
        }
    }
}

impl fmt::Display for LanguageHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Iso(code) => write!(f, "{}", code),
        }
    }
}
