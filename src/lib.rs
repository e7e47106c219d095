//! `filesift` is a library and command-line tool for classifying file
//! descriptors against a declarative rule set.
//!
//! A rule set ([`FilterConfig`]) combines include and exclude glob patterns
//! (include entries prefixed with `!` act as excludes), inclusive size bounds
//! and a content-type allow-list. Given a list of [`FileMetadata`] values, the
//! engine partitions them into included and excluded paths, records why each
//! excluded path was rejected, and scores the configuration/result pair with a
//! composite "truth" metric.
//!
//! The library performs no filesystem I/O: callers supply the descriptors.
//!
//! The pipeline has three stages:
//! 1.  **Parse**: compile the rule set into an ordered list of filters.
//! 2.  **Classify**: evaluate every file (in parallel batches for large inputs).
//! 3.  **Verify**: compute the quality metrics and the truth score.
//!
//! # Example: Library Usage
//!
//! ```
//! use filesift::{filter, FileMetadata, FilterConfig};
//!
//! let config = FilterConfig {
//!     include: Some(vec!["**/*.ts".to_string(), "!**/*.test.ts".to_string()]),
//!     max_size: Some(1000),
//!     ..Default::default()
//! };
//! let files = vec![
//!     FileMetadata::new("src/app.ts", 420, "text/plain"),
//!     FileMetadata::new("src/app.test.ts", 80, "text/plain"),
//!     FileMetadata::new("src/huge.ts", 5000, "text/plain"),
//!     FileMetadata::new("README.md", 10, "text/markdown"),
//! ];
//!
//! let result = filter(&config, &files).unwrap();
//!
//! assert_eq!(result.included, vec!["src/app.ts"]);
//! assert_eq!(result.reason("src/app.test.ts"), Some("exclude pattern: **/*.test.ts"));
//! assert_eq!(result.reason("src/huge.ts"), Some("above maximum: 5000 > 1000 bytes"));
//! assert_eq!(result.reason("README.md"), Some("does not match any include pattern"));
//!
//! let report = result.verification.unwrap();
//! println!("truth score: {:.3}", report.truth_score);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod engine;
pub mod errors;
pub mod filtering;
pub mod hooks;
pub mod output;
pub mod prelude;
pub mod progress;
pub mod verification;

// Re-export key public types for easier use as a library
pub use config::{FilterConfig, FilterConfigBuilder};
pub use core_types::{FileMetadata, FilterResult};
pub use engine::FilterEngine;
pub use verification::{FilterVerificationService, VerificationReport};

use crate::errors::Result;

/// Classifies `files` against `config` with a default [`FilterEngine`].
///
/// This is the primary entry point for one-off classification. Use
/// [`FilterEngine`] directly to attach hooks or a progress reporter, change
/// the batch size, or adjust the verification threshold.
///
/// # Errors
/// Returns an error if the rule set cannot be compiled. Malformed file
/// descriptors never cause an error; they are excluded as invalid metadata.
pub fn filter(config: &FilterConfig, files: &[FileMetadata]) -> Result<FilterResult> {
    FilterEngine::new().filter(config, files)
}

/// Scores an existing result with the default verification service.
///
/// Useful for results produced by other means or after a run with
/// verification disabled.
pub fn verify(
    config: &FilterConfig,
    files: &[FileMetadata],
    result: &FilterResult,
) -> VerificationReport {
    FilterVerificationService::default().evaluate(config, files, result)
}
