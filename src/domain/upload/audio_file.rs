//! Audio file value object and upload validation

use thiserror::Error;

/// Canonical MIME type for MPEG audio
pub const MPEG_AUDIO_MIME: &str = "audio/mpeg";

/// Error when a file fails upload validation.
/// This is the only validation error kind in the system.
#[derive(Debug, Clone, Error)]
#[error("Invalid file type: \"{file_name}\". Please provide an MP3 file.")]
pub struct InvalidFileType {
    pub file_name: String,
}

/// Guess the declared content type from a file name.
/// Mirrors the loose MIME sniffing browsers and desktops do for uploads.
pub fn content_type_for_name(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.').map(|(_, ext)| ext)?;
    if ext.eq_ignore_ascii_case("mp3") {
        Some(MPEG_AUDIO_MIME)
    } else {
        None
    }
}

/// Check whether a file name / declared content type pair passes the
/// upload gate. Either the canonical MPEG-audio type or a `.mp3`
/// extension (case-insensitive) is enough; declared types are unreliable
/// across platforms, so the two checks are OR-ed.
fn is_acceptable(file_name: &str, content_type: Option<&str>) -> bool {
    let type_matches = content_type == Some(MPEG_AUDIO_MIME);
    let ext_matches = file_name
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("mp3"));

    type_matches || ext_matches
}

/// Value object representing a validated audio file ready for upload.
/// Construction is the upload gate: an `AudioFile` cannot exist unless
/// the name/type check passed and the payload is non-empty.
#[derive(Debug, Clone)]
pub struct AudioFile {
    file_name: String,
    bytes: Vec<u8>,
}

impl AudioFile {
    /// Validate and create an audio file.
    ///
    /// Accepts iff the declared content type is `audio/mpeg` or the file
    /// name ends in `.mp3` (case-insensitive), and the payload is non-empty.
    /// An empty payload can never be a valid MP3, so it is rejected with
    /// the same condition.
    pub fn new(
        file_name: impl Into<String>,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<Self, InvalidFileType> {
        let file_name = file_name.into();

        if bytes.is_empty() || !is_acceptable(&file_name, content_type) {
            return Err(InvalidFileType { file_name });
        }

        Ok(Self { file_name, bytes })
    }

    /// Get the display name of the original file
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Get the raw audio bytes
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}
