//! Clipboard adapters

pub mod arboard;

pub use self::arboard::ArboardClipboard;
