// src/filtering/parser.rs

use super::{
    CompiledFilter, ContentTypeFilter, ExcludeFilter, GlobMatcher, IncludeGroupFilter, Pipeline,
    SizeFilter,
};
use crate::config::{check_config, FilterConfig};
use crate::errors::{Error, Result};
use log::debug;

/// Turns a `FilterConfig` into an ordered filter pipeline.
///
/// Pipeline order:
/// 1. one `IncludeGroup` over all positive include patterns (omitted when there are none),
/// 2. one `Exclude` per negated include entry, in source order,
/// 3. one `Exclude` per `exclude` entry, in source order,
/// 4. one `Size` filter if either bound is set,
/// 5. one `ContentType` filter if an allow-list is present, even an empty one.
///
/// # Examples
///
/// ```
/// use filesift::config::FilterConfig;
/// use filesift::filtering::{ConfigParser, FilterKind};
///
/// let config = FilterConfig {
///     include: Some(vec!["**/*.ts".into(), "!**/*.test.ts".into()]),
///     exclude: Some(vec!["**/node_modules/**".into()]),
///     max_size: Some(1000),
///     ..Default::default()
/// };
/// let pipeline = ConfigParser::parse(&config).unwrap();
/// let kinds: Vec<FilterKind> = pipeline.filters().iter().map(|f| f.kind()).collect();
/// assert_eq!(
///     kinds,
///     vec![FilterKind::IncludeGroup, FilterKind::Exclude, FilterKind::Exclude, FilterKind::Size]
/// );
/// ```
pub struct ConfigParser;

impl ConfigParser {
    /// Builds the pipeline for `config`.
    ///
    /// # Errors
    /// Returns `Error::Pattern` for any pattern that fails to compile, which
    /// makes the whole rule set unusable. Inverted size bounds are not an
    /// error; they produce a `Size` filter that rejects every file.
    pub fn parse(config: &FilterConfig) -> Result<Pipeline> {
        check_config(config);
        let mut filters = Vec::new();

        let positives = config
            .positive_includes()
            .map(|p| compile(p, "include"))
            .collect::<Result<Vec<_>>>()?;
        if !positives.is_empty() {
            filters.push(CompiledFilter::IncludeGroup(IncludeGroupFilter::new(
                positives,
            )));
        }

        for pattern in config.negated_includes() {
            let matcher = compile(pattern, "include")?;
            filters.push(CompiledFilter::Exclude(ExcludeFilter::new(matcher)));
        }

        for pattern in config.excludes() {
            let matcher = compile(pattern, "exclude")?;
            filters.push(CompiledFilter::Exclude(ExcludeFilter::new(matcher)));
        }

        if config.has_size_filters() {
            filters.push(CompiledFilter::Size(SizeFilter::new(
                config.min_size,
                config.max_size,
            )));
        }

        if let Some(ref allowed) = config.content_types {
            filters.push(CompiledFilter::ContentType(ContentTypeFilter::new(allowed)));
        }

        debug!("Built filter pipeline with {} stages", filters.len());
        Ok(Pipeline::new(filters))
    }
}

fn compile(pattern: &str, slot: &'static str) -> Result<GlobMatcher> {
    GlobMatcher::compile(pattern).map_err(|source| Error::Pattern {
        pattern: pattern.to_string(),
        slot,
        source,
    })
}
