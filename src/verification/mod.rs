//! Scores the quality of a configuration/result pair.
//!
//! `FilterVerificationService` computes five metrics in [0, 1] and combines
//! them into a fixed weighted "truth" score:
//!
//! | metric               | weight |
//! |----------------------|--------|
//! | config completeness  | 0.20   |
//! | pattern accuracy     | 0.30   |
//! | consistency          | 0.20   |
//! | performance          | 0.15   |
//! | coverage             | 0.15   |
//!
//! A metric that cannot be computed scores 0; verification itself never fails.

use crate::config::FilterConfig;
use crate::constants::{
    DEFAULT_TRUTH_THRESHOLD, WEIGHT_CONFIG_COMPLETENESS, WEIGHT_CONSISTENCY, WEIGHT_COVERAGE,
    WEIGHT_PATTERN_ACCURACY, WEIGHT_PERFORMANCE,
};
use crate::core_types::{FileMetadata, FilterResult};
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

mod metrics;

/// Why a single metric could not be computed.
#[derive(Error, Debug)]
pub enum VerificationError {
    #[error("pattern '{pattern}' could not be recompiled: {message}")]
    Pattern { pattern: String, message: String },
    #[error("filter pipeline could not be rebuilt: {0}")]
    Pipeline(String),
    #[error("invalid measurement: {0}")]
    Measurement(String),
}

/// The five quality dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMetrics {
    pub config_completeness: f64,
    pub pattern_accuracy: f64,
    pub consistency: f64,
    pub performance: f64,
    pub coverage: f64,
}

impl VerificationMetrics {
    /// The weighted composite of the five metrics.
    pub fn truth_score(&self) -> f64 {
        let score = WEIGHT_CONFIG_COMPLETENESS * self.config_completeness
            + WEIGHT_PATTERN_ACCURACY * self.pattern_accuracy
            + WEIGHT_CONSISTENCY * self.consistency
            + WEIGHT_PERFORMANCE * self.performance
            + WEIGHT_COVERAGE * self.coverage;
        score.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationSummary {
    /// Positive include patterns.
    pub include_patterns: usize,
    /// Exclude patterns, counting negated include entries.
    pub exclude_patterns: usize,
    pub has_size_filters: bool,
    pub has_content_type_filters: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationSummary {
    /// Distinct input paths; repeated paths count once.
    pub total_files: usize,
    pub included_files: usize,
    pub excluded_files: usize,
    pub configuration: ConfigurationSummary,
}

/// The outcome of verifying one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    pub truth_score: f64,
    pub meets_threshold: bool,
    pub threshold: f64,
    pub metrics: VerificationMetrics,
    pub summary: VerificationSummary,
}

/// Computes `VerificationReport`s against a configurable threshold.
///
/// # Examples
///
/// ```
/// use filesift::config::FilterConfig;
/// use filesift::core_types::FilterResult;
/// use filesift::verification::FilterVerificationService;
///
/// let service = FilterVerificationService::with_threshold(0.5);
/// let report = service.evaluate(&FilterConfig::default(), &[], &FilterResult::default());
///
/// // The empty rule set earns nothing for completeness or coverage.
/// assert_eq!(report.metrics.config_completeness, 0.0);
/// assert_eq!(report.metrics.coverage, 0.0);
/// assert!(report.meets_threshold);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterVerificationService {
    threshold: f64,
}

impl Default for FilterVerificationService {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_TRUTH_THRESHOLD,
        }
    }
}

impl FilterVerificationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A service with a custom pass mark, clamped to [0, 1].
    pub fn with_threshold(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_TRUTH_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Scores `result` as the classification of `files` under `config`.
    pub fn evaluate(
        &self,
        config: &FilterConfig,
        files: &[FileMetadata],
        result: &FilterResult,
    ) -> VerificationReport {
        let metrics = VerificationMetrics {
            config_completeness: settle(
                "configCompleteness",
                metrics::config_completeness(config),
            ),
            pattern_accuracy: settle("patternAccuracy", metrics::pattern_accuracy(config, result)),
            consistency: settle("consistency", metrics::consistency(files, result)),
            performance: settle("performance", metrics::performance(files, result)),
            coverage: settle("coverage", metrics::coverage(config, files, result)),
        };
        let truth_score = metrics.truth_score();
        log::debug!("Verification metrics: {:?} -> {:.3}", metrics, truth_score);

        VerificationReport {
            truth_score,
            meets_threshold: truth_score >= self.threshold,
            threshold: self.threshold,
            metrics,
            summary: VerificationSummary {
                total_files: distinct_paths(files),
                included_files: result.included.len(),
                excluded_files: result.excluded.len(),
                configuration: ConfigurationSummary {
                    include_patterns: config.positive_includes().count(),
                    exclude_patterns: config.negated_includes().count()
                        + config.excludes().count(),
                    has_size_filters: config.has_size_filters(),
                    has_content_type_filters: config.has_content_type_filter(),
                },
            },
        }
    }
}

fn distinct_paths(files: &[FileMetadata]) -> usize {
    files
        .iter()
        .map(|f| f.path.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Clamps a metric to [0, 1], or defaults it to 0 if it failed.
fn settle(name: &str, value: Result<f64, VerificationError>) -> f64 {
    match value {
        Ok(v) if v.is_finite() => v.clamp(0.0, 1.0),
        Ok(v) => {
            log::warn!("Metric {} produced {}, scoring 0", name, v);
            0.0
        }
        Err(e) => {
            log::warn!("Metric {} failed, scoring 0: {}", name, e);
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truth_score_is_the_weighted_sum() {
        let metrics = VerificationMetrics {
            config_completeness: 1.0,
            pattern_accuracy: 0.5,
            consistency: 1.0,
            performance: 0.0,
            coverage: 1.0,
        };
        let expected = 0.2 + 0.15 + 0.2 + 0.0 + 0.15;
        assert!((metrics.truth_score() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_failed_metric_scores_zero() {
        assert_eq!(
            settle("x", Err(VerificationError::Measurement("bad".into()))),
            0.0
        );
        assert_eq!(settle("x", Ok(f64::NAN)), 0.0);
        assert_eq!(settle("x", Ok(1.7)), 1.0);
    }

    #[test]
    fn test_broken_pattern_zeroes_only_affected_metrics() {
        let config = FilterConfig {
            include: Some(vec!["{oops".into()]),
            ..Default::default()
        };
        let result = FilterResult {
            included: vec!["a".into()],
            ..Default::default()
        };
        let files = vec![FileMetadata::new("a", 1, "")];
        let report = FilterVerificationService::new().evaluate(&config, &files, &result);
        assert_eq!(report.metrics.pattern_accuracy, 0.0);
        assert_eq!(report.metrics.coverage, 0.0);
        assert_eq!(report.metrics.consistency, 1.0);
        assert!(!report.meets_threshold);
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(FilterVerificationService::with_threshold(3.0).threshold(), 1.0);
        assert_eq!(
            FilterVerificationService::with_threshold(f64::NAN).threshold(),
            DEFAULT_TRUTH_THRESHOLD
        );
    }

    #[test]
    fn test_summary_counts_repeated_paths_once() {
        let files = vec![
            FileMetadata::new("a", 1, ""),
            FileMetadata::new("a", 9, ""),
            FileMetadata::new("b", 1, ""),
        ];
        let result = crate::filter(&FilterConfig::default(), &files).unwrap();
        let summary = result.verification.unwrap().summary;
        assert_eq!(summary.total_files, 2);
        assert_eq!(
            summary.total_files,
            summary.included_files + summary.excluded_files
        );
    }

    #[test]
    fn test_summary_counts_patterns() {
        let config = FilterConfig {
            include: Some(vec!["**/*.ts".into(), "!**/*.d.ts".into()]),
            exclude: Some(vec!["dist/**".into()]),
            content_types: Some(Default::default()),
            ..Default::default()
        };
        let report =
            FilterVerificationService::new().evaluate(&config, &[], &FilterResult::default());
        assert_eq!(report.summary.configuration.include_patterns, 1);
        assert_eq!(report.summary.configuration.exclude_patterns, 2);
        assert!(report.summary.configuration.has_content_type_filters);
        assert!(!report.summary.configuration.has_size_filters);
    }
}
