// src/config/builder.rs

use super::{
    parsing::{load_rules_file, normalize_content_types, parse_size},
    FilterConfig,
};
use crate::cli::Cli;
use crate::errors::{Error, Result};
use std::path::PathBuf;

/// A builder for creating a `FilterConfig` programmatically or from CLI arguments.
///
/// Sizes are accepted as human-readable strings and parsed in `build()`.
///
/// # Examples
///
/// ```
/// use filesift::config::FilterConfigBuilder;
///
/// let config = FilterConfigBuilder::new()
///     .include(vec!["src/**/*.rs".to_string()])
///     .exclude(vec!["**/target/**".to_string()])
///     .max_size("1MiB")
///     .content_types(vec!["text/x-rust".to_string()])
///     .build()
///     .unwrap();
///
/// assert_eq!(config.max_size, Some(1024 * 1024));
/// assert!(config.has_content_type_filter());
/// ```
#[derive(Debug, Default, Clone)]
pub struct FilterConfigBuilder {
    include: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
    min_size: Option<String>,
    max_size: Option<String>,
    content_types: Option<Vec<String>>,
    rules_file: Option<PathBuf>,
}

impl FilterConfigBuilder {
    /// Creates a new, empty `FilterConfigBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated with the rule options of the parsed CLI.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            include: cli.include.clone(),
            exclude: cli.exclude.clone(),
            min_size: cli.min_size.clone(),
            max_size: cli.max_size.clone(),
            content_types: cli.content_types.clone(),
            rules_file: cli.rules.clone(),
        }
    }

    /// Glob patterns a file must match; `!`-prefixed entries are negations.
    pub fn include(mut self, patterns: Vec<String>) -> Self {
        self.include = Some(patterns);
        self
    }

    /// Glob patterns that reject a file.
    pub fn exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = Some(patterns);
        self
    }

    /// Inclusive lower size bound, e.g. `"1"` or `"4k"`.
    pub fn min_size(mut self, size: impl Into<String>) -> Self {
        self.min_size = Some(size.into());
        self
    }

    /// Inclusive upper size bound, e.g. `"1000"` or `"2MiB"`.
    pub fn max_size(mut self, size: impl Into<String>) -> Self {
        self.max_size = Some(size.into());
        self
    }

    /// MIME allow-list. Passing an empty vector yields a filter that rejects everything.
    pub fn content_types(mut self, types: Vec<String>) -> Self {
        self.content_types = Some(types);
        self
    }

    /// Loads the whole rule set from a JSON file instead of the individual setters.
    pub fn rules_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.rules_file = Some(path.into());
        self
    }

    fn has_inline_rules(&self) -> bool {
        self.include.is_some()
            || self.exclude.is_some()
            || self.min_size.is_some()
            || self.max_size.is_some()
            || self.content_types.is_some()
    }

    /// Builds the `FilterConfig`.
    ///
    /// # Errors
    /// Returns `Error::Config` for unparsable sizes or a rules file combined
    /// with inline rules, and the loader's errors when a rules file cannot be
    /// read.
    pub fn build(self) -> Result<FilterConfig> {
        let config = match self.rules_file {
            Some(ref path) => {
                if self.has_inline_rules() {
                    return Err(Error::Config(
                        "a rules file cannot be combined with inline rule options".to_string(),
                    ));
                }
                log::debug!("Loading rules from {}", path.display());
                load_rules_file(path)?
            }
            None => FilterConfig {
                include: self.include,
                exclude: self.exclude,
                min_size: parse_size(self.min_size.as_deref(), "minSize")?,
                max_size: parse_size(self.max_size.as_deref(), "maxSize")?,
                content_types: self.content_types.map(normalize_content_types),
            },
        };

        Ok(config)
    }
}
