//! Error types for the settext library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for settext operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the settext library
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Format Errors
    // -------------------------------------------------------------------------
    #[error("Line {line} has no key/value delimiter: '{content}'")]
    MissingDelimiter { line: usize, content: String },

    // -------------------------------------------------------------------------
    // Settings Errors
    // -------------------------------------------------------------------------
    #[error("Setting not found: {0}")]
    SettingNotFound(String),

    #[error("Value for setting '{0}' has no text representation")]
    Encode(String),

    #[error("Stored text '{value}' for setting '{key}' cannot be decoded")]
    Decode { key: String, value: String },
}

impl Error {
    /// Check if this is a "not found" type error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::SettingNotFound(_))
    }
}
