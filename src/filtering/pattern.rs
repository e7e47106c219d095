// src/filtering/pattern.rs

use super::{FileFilter, GlobMatcher};
use crate::constants::{REASON_EXCLUDE_PATTERN, REASON_NO_INCLUDE_MATCH};
use crate::core_types::FileMetadata;

/// Passes a file if it matches at least one of the positive include patterns.
#[derive(Debug, Clone)]
pub struct IncludeGroupFilter {
    matchers: Vec<GlobMatcher>,
}

impl IncludeGroupFilter {
    pub fn new(matchers: Vec<GlobMatcher>) -> Self {
        Self { matchers }
    }

    pub fn matchers(&self) -> &[GlobMatcher] {
        &self.matchers
    }
}

impl FileFilter for IncludeGroupFilter {
    fn apply(&self, file: &FileMetadata) -> bool {
        self.matchers.iter().any(|m| m.test(&file.path))
    }

    fn explain(&self, _file: &FileMetadata) -> String {
        REASON_NO_INCLUDE_MATCH.to_string()
    }

    fn name(&self) -> &'static str {
        "IncludeGroupFilter"
    }
}

/// Rejects a file matching its pattern.
///
/// Built both from `exclude` entries and from negated (`!`) include entries;
/// the two are indistinguishable once compiled.
#[derive(Debug, Clone)]
pub struct ExcludeFilter {
    matcher: GlobMatcher,
}

impl ExcludeFilter {
    pub fn new(matcher: GlobMatcher) -> Self {
        Self { matcher }
    }

    pub fn pattern(&self) -> &str {
        self.matcher.pattern()
    }
}

impl FileFilter for ExcludeFilter {
    fn apply(&self, file: &FileMetadata) -> bool {
        !self.matcher.test(&file.path)
    }

    fn explain(&self, _file: &FileMetadata) -> String {
        format!("{}: {}", REASON_EXCLUDE_PATTERN, self.matcher.pattern())
    }

    fn name(&self) -> &'static str {
        "ExcludeFilter"
    }
}
