//! Upload gate - validation of user-supplied audio files

pub mod audio_file;

pub use audio_file::{content_type_for_name, AudioFile, InvalidFileType, MPEG_AUDIO_MIME};
