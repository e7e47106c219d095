//! Defines the `FilterConfig` rule set and the ways to build one.
//!
//! A rule set is a fixed structure with explicit optional fields. It is
//! validated once, when it is turned into a filter pipeline, and is never
//! mutated afterwards.

use crate::constants::NEGATION_PREFIX;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub use builder::FilterConfigBuilder;
pub use parsing::{load_file_list, load_rules_file};
mod builder;
mod parsing;
mod validation;

pub(crate) use validation::check_config;

/// A declarative rule set.
///
/// * `include` - glob patterns a file must match (any of them). Entries
///   prefixed with `!` are negations and act as extra exclude rules.
/// * `exclude` - glob patterns that reject a file.
/// * `min_size` / `max_size` - inclusive size bounds in bytes.
/// * `content_types` - MIME allow-list. `Some` of an empty set rejects every
///   file.
///
/// # Examples
///
/// ```
/// use filesift::config::FilterConfig;
///
/// let config: FilterConfig = serde_json::from_str(
///     r#"{"include":["**/*.ts","!**/*.test.ts"],"maxSize":1000}"#,
/// ).unwrap();
///
/// assert_eq!(config.positive_includes().collect::<Vec<_>>(), vec!["**/*.ts"]);
/// assert_eq!(config.negated_includes().collect::<Vec<_>>(), vec!["**/*.test.ts"]);
/// assert!(config.has_size_filters());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_types: Option<BTreeSet<String>>,
}

impl FilterConfig {
    /// Starts a builder.
    pub fn builder() -> FilterConfigBuilder {
        FilterConfigBuilder::new()
    }

    /// Include entries without the negation prefix, in source order.
    pub fn positive_includes(&self) -> impl Iterator<Item = &str> {
        self.include
            .iter()
            .flatten()
            .map(String::as_str)
            .filter(|p| !p.starts_with(NEGATION_PREFIX))
    }

    /// Negated include entries with the prefix stripped, in source order.
    pub fn negated_includes(&self) -> impl Iterator<Item = &str> {
        self.include
            .iter()
            .flatten()
            .filter_map(|p| p.strip_prefix(NEGATION_PREFIX))
    }

    /// Entries of the `exclude` list, in source order.
    pub fn excludes(&self) -> impl Iterator<Item = &str> {
        self.exclude.iter().flatten().map(String::as_str)
    }

    /// Whether any include entry is configured (positive or negated).
    pub fn has_include(&self) -> bool {
        self.include.as_ref().is_some_and(|v| !v.is_empty())
    }

    /// Whether any exclusion rule is configured, counting negated includes.
    pub fn has_exclude(&self) -> bool {
        self.exclude.as_ref().is_some_and(|v| !v.is_empty())
            || self.negated_includes().next().is_some()
    }

    pub fn has_size_filters(&self) -> bool {
        self.min_size.is_some() || self.max_size.is_some()
    }

    pub fn has_content_type_filter(&self) -> bool {
        self.content_types.is_some()
    }

    /// A configuration with neither include nor exclude patterns.
    pub fn is_vacuous(&self) -> bool {
        !self.has_include() && !self.has_exclude()
    }
}
