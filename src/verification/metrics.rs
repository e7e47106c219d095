// src/verification/metrics.rs

//! The five quality dimensions, each computed independently.

use super::VerificationError;
use crate::config::FilterConfig;
use crate::constants::TARGET_FILES_PER_SECOND;
use crate::core_types::{FileMetadata, FilterResult};
use crate::filtering::{ConfigParser, FilterKind, GlobMatcher, Verdict};
use std::collections::{BTreeSet, HashSet};

type MetricResult = Result<f64, VerificationError>;

/// Rewards rule sets that pin down at least two dimensions; halves the score
/// of a rule set with neither include nor exclude patterns.
pub(super) fn config_completeness(config: &FilterConfig) -> MetricResult {
    let dimensions = [
        config.positive_includes().next().is_some(),
        config.has_exclude(),
        config.has_size_filters(),
        config.has_content_type_filter(),
    ]
    .iter()
    .filter(|present| **present)
    .count();

    let mut score = (dimensions as f64 / 2.0).min(1.0);
    if config.is_vacuous() {
        score *= 0.5;
    }
    Ok(score)
}

fn compile_all<'a>(
    patterns: impl Iterator<Item = &'a str>,
) -> Result<Vec<GlobMatcher>, VerificationError> {
    patterns
        .map(|p| {
            GlobMatcher::compile(p).map_err(|e| VerificationError::Pattern {
                pattern: p.to_string(),
                message: e.to_string(),
            })
        })
        .collect()
}

/// Re-checks every included path against freshly compiled patterns.
pub(super) fn pattern_accuracy(config: &FilterConfig, result: &FilterResult) -> MetricResult {
    if result.included.is_empty() {
        return Ok(1.0);
    }
    let positives = compile_all(config.positive_includes())?;
    let vetoes = compile_all(config.negated_includes().chain(config.excludes()))?;

    let correct = result
        .included
        .iter()
        .filter(|path| {
            let included = positives.is_empty() || positives.iter().any(|m| m.test(path));
            let vetoed = vetoes.iter().any(|m| m.test(path));
            included && !vetoed
        })
        .count();

    Ok(correct as f64 / result.included.len() as f64)
}

/// Checks the structural invariants of the result against the input.
pub(super) fn consistency(files: &[FileMetadata], result: &FilterResult) -> MetricResult {
    let included: HashSet<&str> = result.included.iter().map(String::as_str).collect();
    let excluded: HashSet<&str> = result.excluded.iter().map(String::as_str).collect();
    let inputs: HashSet<&str> = files.iter().map(|f| f.path.as_str()).collect();

    let disjoint = included.is_disjoint(&excluded)
        && included.len() == result.included.len()
        && excluded.len() == result.excluded.len();
    let every_exclusion_explained = result
        .excluded
        .iter()
        .all(|path| result.reasons.get(path).is_some_and(|r| !r.trim().is_empty()));
    let no_stray_reasons = result.reasons.keys().all(|path| excluded.contains(path.as_str()));
    let counts_match = result.included.len() + result.excluded.len() == inputs.len()
        && included.union(&excluded).all(|path| inputs.contains(path));

    let passed = [
        disjoint,
        every_exclusion_explained,
        no_stray_reasons,
        counts_match,
    ]
    .iter()
    .filter(|ok| **ok)
    .count();

    Ok(passed as f64 / 4.0)
}

/// Measured throughput relative to the target rate.
pub(super) fn performance(files: &[FileMetadata], result: &FilterResult) -> MetricResult {
    let seconds = result.elapsed.as_secs_f64();
    if files.is_empty() || seconds <= 0.0 {
        return Ok(1.0);
    }
    let throughput = files.len() as f64 / seconds;
    if !throughput.is_finite() {
        return Err(VerificationError::Measurement(format!(
            "throughput of {} files in {}s",
            files.len(),
            seconds
        )));
    }
    Ok((throughput / TARGET_FILES_PER_SECOND).min(1.0))
}

/// Fraction of configured filter kinds that were the first to reject at
/// least one excluded file.
pub(super) fn coverage(
    config: &FilterConfig,
    files: &[FileMetadata],
    result: &FilterResult,
) -> MetricResult {
    let pipeline =
        ConfigParser::parse(config).map_err(|e| VerificationError::Pipeline(e.to_string()))?;
    let configured = pipeline.kinds();
    if configured.is_empty() {
        return Ok(0.0);
    }

    let excluded: HashSet<&str> = result.excluded.iter().map(String::as_str).collect();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut effective: BTreeSet<FilterKind> = BTreeSet::new();

    for file in files {
        if !excluded.contains(file.path.as_str()) || !seen.insert(file.path.as_str()) {
            continue;
        }
        if let Verdict::Excluded {
            kind: Some(kind), ..
        } = pipeline.classify(file)
        {
            effective.insert(kind);
        }
        if effective.len() == configured.len() {
            break;
        }
    }

    Ok(effective.len() as f64 / configured.len() as f64)
}
