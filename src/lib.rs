//! OpenTranscribe - MP3 to text transcription CLI
//!
//! This crate provides the core functionality for uploading MP3 audio to a
//! Whisper-compatible HTTP backend and managing the resulting transcriptions.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core business logic, value objects, entities, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (HTTP backend, JSON storage, clipboard)
//! - **CLI**: Command-line interface and argument parsing

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
