// src/filtering/mod.rs

//! Compiled filters and the ordered pipeline they form.
//!
//! Every filter kind implements [`FileFilter`]. The pipeline stores them as the
//! closed [`CompiledFilter`] enum so evaluation is an exhaustive `match`.
//! Filters are immutable once built and can be shared across threads.

mod content_type;
mod glob;
mod parser;
mod pattern;
mod size;

pub use content_type::{is_content_type_allowed, ContentTypeFilter};
pub use glob::GlobMatcher;
pub use parser::ConfigParser;
pub use pattern::{ExcludeFilter, IncludeGroupFilter};
pub use size::{passes_size_filter, SizeFilter};

use crate::constants::REASON_INVALID_METADATA;
use crate::core_types::FileMetadata;
use serde::Serialize;
use std::fmt;

/// The apply/explain contract shared by every filter kind.
pub trait FileFilter: Send + Sync {
    /// Returns `true` if the file passes this filter.
    fn apply(&self, file: &FileMetadata) -> bool;
    /// Describes why `file` was rejected. Only meaningful when `apply` returned `false`.
    fn explain(&self, file: &FileMetadata) -> String;
    /// Returns a descriptive name for the filter.
    fn name(&self) -> &'static str;
}

/// The four filter kinds a rule set can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKind {
    IncludeGroup,
    Exclude,
    Size,
    ContentType,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterKind::IncludeGroup => "include",
            FilterKind::Exclude => "exclude",
            FilterKind::Size => "size",
            FilterKind::ContentType => "content type",
        };
        f.write_str(name)
    }
}

/// One stage of the pipeline.
#[derive(Debug, Clone)]
pub enum CompiledFilter {
    IncludeGroup(IncludeGroupFilter),
    Exclude(ExcludeFilter),
    Size(SizeFilter),
    ContentType(ContentTypeFilter),
}

impl CompiledFilter {
    pub fn kind(&self) -> FilterKind {
        match self {
            CompiledFilter::IncludeGroup(_) => FilterKind::IncludeGroup,
            CompiledFilter::Exclude(_) => FilterKind::Exclude,
            CompiledFilter::Size(_) => FilterKind::Size,
            CompiledFilter::ContentType(_) => FilterKind::ContentType,
        }
    }

    fn as_filter(&self) -> &dyn FileFilter {
        match self {
            CompiledFilter::IncludeGroup(f) => f,
            CompiledFilter::Exclude(f) => f,
            CompiledFilter::Size(f) => f,
            CompiledFilter::ContentType(f) => f,
        }
    }
}

impl FileFilter for CompiledFilter {
    #[inline]
    fn apply(&self, file: &FileMetadata) -> bool {
        self.as_filter().apply(file)
    }

    fn explain(&self, file: &FileMetadata) -> String {
        self.as_filter().explain(file)
    }

    fn name(&self) -> &'static str {
        self.as_filter().name()
    }
}

/// The classification of a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Included,
    Excluded {
        /// The first rejecting filter kind; `None` for malformed metadata.
        kind: Option<FilterKind>,
        reason: String,
    },
}

/// Returns a description of what is wrong with `file`, if anything.
pub fn validate_metadata(file: &FileMetadata) -> Option<String> {
    if let Some(ref detail) = file.malformed {
        Some(format!("{}: {}", REASON_INVALID_METADATA, detail))
    } else if file.path.trim().is_empty() {
        Some(format!("{}: empty path", REASON_INVALID_METADATA))
    } else if file.size < 0 {
        Some(format!(
            "{}: negative size {}",
            REASON_INVALID_METADATA, file.size
        ))
    } else {
        None
    }
}

/// An ordered list of compiled filters built from one rule set.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    filters: Vec<CompiledFilter>,
}

impl Pipeline {
    pub fn new(filters: Vec<CompiledFilter>) -> Self {
        Self { filters }
    }

    pub fn filters(&self) -> &[CompiledFilter] {
        &self.filters
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// The distinct filter kinds present, in pipeline order.
    pub fn kinds(&self) -> Vec<FilterKind> {
        let mut kinds: Vec<FilterKind> = Vec::new();
        for kind in self.filters.iter().map(CompiledFilter::kind) {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        kinds
    }

    /// Classifies one file. The first rejecting filter supplies the reason.
    pub fn classify(&self, file: &FileMetadata) -> Verdict {
        if let Some(reason) = validate_metadata(file) {
            return Verdict::Excluded { kind: None, reason };
        }
        match self.filters.iter().find(|f| !f.apply(file)) {
            Some(filter) => Verdict::Excluded {
                kind: Some(filter.kind()),
                reason: filter.explain(file),
            },
            None => Verdict::Included,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pipeline_includes_valid_files() {
        let pipeline = Pipeline::default();
        assert_eq!(
            pipeline.classify(&FileMetadata::new("a", 0, "")),
            Verdict::Included
        );
    }

    #[test]
    fn test_invalid_metadata_is_excluded_before_filters() {
        let pipeline = Pipeline::default();
        let verdict = pipeline.classify(&FileMetadata::new("a", -1, "text/plain"));
        assert_eq!(
            verdict,
            Verdict::Excluded {
                kind: None,
                reason: "invalid metadata: negative size -1".to_string()
            }
        );
        assert!(validate_metadata(&FileMetadata::new("  ", 1, "")).is_some());
    }

    #[test]
    fn test_malformed_descriptor_carries_its_detail() {
        let pipeline = Pipeline::default();
        let file = FileMetadata::malformed("b.ts", "missing field `size`");
        assert_eq!(
            pipeline.classify(&file),
            Verdict::Excluded {
                kind: None,
                reason: "invalid metadata: missing field `size`".to_string()
            }
        );
    }

    #[test]
    fn test_first_rejecting_filter_wins() {
        let pipeline = Pipeline::new(vec![
            CompiledFilter::Exclude(ExcludeFilter::new(GlobMatcher::compile("*.log").unwrap())),
            CompiledFilter::Size(SizeFilter::new(None, Some(10))),
        ]);
        let verdict = pipeline.classify(&FileMetadata::new("big.log", 100, ""));
        match verdict {
            Verdict::Excluded { kind, reason } => {
                assert_eq!(kind, Some(FilterKind::Exclude));
                assert_eq!(reason, "exclude pattern: *.log");
            }
            Verdict::Included => panic!("expected exclusion"),
        }
    }

    #[test]
    fn test_kinds_are_deduplicated_in_order() {
        let pipeline = Pipeline::new(vec![
            CompiledFilter::Exclude(ExcludeFilter::new(GlobMatcher::compile("a").unwrap())),
            CompiledFilter::Exclude(ExcludeFilter::new(GlobMatcher::compile("b").unwrap())),
            CompiledFilter::Size(SizeFilter::new(Some(1), None)),
        ]);
        assert_eq!(pipeline.kinds(), vec![FilterKind::Exclude, FilterKind::Size]);
        assert_eq!(pipeline.filters()[0].name(), "ExcludeFilter");
    }
}
