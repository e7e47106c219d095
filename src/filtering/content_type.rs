// src/filtering/content_type.rs

use super::FileFilter;
use crate::constants::REASON_CONTENT_TYPE;
use crate::core_types::FileMetadata;
use std::collections::BTreeSet;

/// Passes files whose MIME type is on the allow-list.
///
/// Matching ignores case and MIME parameters (`text/plain; charset=utf-8`
/// matches `text/plain`). An entry of the form `type/*` allows every subtype.
/// An empty allow-list rejects every file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTypeFilter {
    allowed: BTreeSet<String>,
}

impl ContentTypeFilter {
    pub fn new<'a>(allowed: impl IntoIterator<Item = &'a String>) -> Self {
        Self {
            allowed: allowed.into_iter().map(|t| essence(t)).collect(),
        }
    }

    pub fn allowed(&self) -> &BTreeSet<String> {
        &self.allowed
    }
}

/// The lowercased `type/subtype` part of a MIME string.
fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

/// Checks a MIME type against an allow-list of normalized entries.
pub fn is_content_type_allowed(content_type: &str, allowed: &BTreeSet<String>) -> bool {
    let mime = essence(content_type);
    if mime.is_empty() {
        return false;
    }
    if allowed.contains(&mime) {
        return true;
    }
    match mime.split_once('/') {
        Some((top, _)) => allowed.contains(&format!("{}/*", top)) || allowed.contains("*/*"),
        None => false,
    }
}

impl FileFilter for ContentTypeFilter {
    fn apply(&self, file: &FileMetadata) -> bool {
        is_content_type_allowed(&file.content_type, &self.allowed)
    }

    fn explain(&self, file: &FileMetadata) -> String {
        let shown = if file.content_type.trim().is_empty() {
            "<none>"
        } else {
            file.content_type.trim()
        };
        format!("{}: {}", REASON_CONTENT_TYPE, shown)
    }

    fn name(&self) -> &'static str {
        "ContentTypeFilter"
    }
}
