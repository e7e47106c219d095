//! Defines core data structures used throughout the classification pipeline.
//!
//! `FileMetadata` is the caller-supplied input, `FilterResult` is what a run
//! hands back.

use crate::verification::VerificationReport;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Describes one file to classify.
///
/// The engine never touches the filesystem; callers supply these descriptors.
/// `size` is signed so that a malformed descriptor can still be classified
/// (as invalid metadata) instead of aborting the run.
///
/// # Examples
///
/// ```
/// use filesift::core_types::FileMetadata;
///
/// let file = FileMetadata::new("src/main.rs", 120, "text/x-rust");
/// assert_eq!(file.path, "src/main.rs");
/// assert_eq!(file.size, 120);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    /// Path relative to whatever root the caller walked, using `/` separators.
    pub path: String,
    /// Size in bytes.
    pub size: i64,
    /// MIME type, e.g. `text/plain`.
    #[serde(default)]
    pub content_type: String,
    /// Set when the descriptor could not be read; the file is then excluded
    /// as invalid metadata with this detail.
    #[serde(skip)]
    pub malformed: Option<String>,
}

impl FileMetadata {
    /// Convenience constructor.
    pub fn new(path: impl Into<String>, size: i64, content_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            size,
            content_type: content_type.into(),
            malformed: None,
        }
    }

    /// A placeholder for an entry that failed to deserialize.
    pub fn malformed(path: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            malformed: Some(detail.into()),
            ..Default::default()
        }
    }
}

/// The outcome of one `filter()` call.
///
/// `included` and `excluded` keep input order and never share a path. Every
/// excluded path has exactly one entry in `reasons`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterResult {
    /// Paths that passed every filter, in input order.
    pub included: Vec<String>,
    /// Paths rejected by at least one filter, in input order.
    pub excluded: Vec<String>,
    /// Exclusion reason per excluded path.
    pub reasons: BTreeMap<String, String>,
    /// Quality assessment of this configuration/result pair, if verification ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<VerificationReport>,
    /// Wall time spent classifying (excludes verification).
    #[serde(skip)]
    pub elapsed: Duration,
    /// Number of batches the input was split into.
    pub batches: usize,
}

impl FilterResult {
    /// Total number of classified paths.
    pub fn total(&self) -> usize {
        self.included.len() + self.excluded.len()
    }

    /// The reason recorded for `path`, if it was excluded.
    pub fn reason(&self, path: &str) -> Option<&str> {
        self.reasons.get(path).map(String::as_str)
    }

    /// One-line description used in logs and the `post_task` hook.
    pub fn summary_line(&self) -> String {
        format!(
            "{} files: {} included, {} excluded",
            self.total(),
            self.included.len(),
            self.excluded.len()
        )
    }
}
