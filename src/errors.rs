//! Defines library error types.
//!
//! This module provides the `Error` enum, which categorizes the failures that
//! can abort a classification run. Per-file problems never surface here; they
//! are recorded as exclusion reasons instead.

use thiserror::Error;

/// Errors that can abort a `filesift` operation.
#[derive(Error, Debug)]
pub enum Error {
    // --- Configuration Errors ---
    /// Generic error related to invalid configuration settings or combinations.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A glob pattern in the rule set could not be compiled.
    #[error("Invalid {slot} pattern '{pattern}': {source}")]
    Pattern {
        /// The pattern as written in the rule set (negation marker stripped).
        pattern: String,
        /// Which rule slot the pattern came from ("include" or "exclude").
        slot: &'static str,
        /// The underlying `globset::Error`.
        #[source]
        source: globset::Error,
    },

    // --- I/O Errors ---
    /// Error occurring while reading a rules or file-list document.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be decoded or encoded.
    #[error("Invalid JSON in {context}: {source}")]
    Json {
        /// What was being decoded (e.g. "rules file").
        context: String,
        /// The underlying `serde_json::Error`.
        #[source]
        source: serde_json::Error,
    },
}

/// A specialized `Result` type for `filesift` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
