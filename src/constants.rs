// src/constants.rs

/// Inputs with more files than this are split into batches of this size.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Default truth score a configuration/result pair must reach.
pub const DEFAULT_TRUTH_THRESHOLD: f64 = 0.95;

/// Throughput (files per second) at which the performance metric saturates.
pub const TARGET_FILES_PER_SECOND: f64 = 1000.0;

/// Prefix marking an include entry as a negation.
pub const NEGATION_PREFIX: char = '!';

// Metric weights. They sum to 1.0.
pub const WEIGHT_CONFIG_COMPLETENESS: f64 = 0.2;
pub const WEIGHT_PATTERN_ACCURACY: f64 = 0.3;
pub const WEIGHT_CONSISTENCY: f64 = 0.2;
pub const WEIGHT_PERFORMANCE: f64 = 0.15;
pub const WEIGHT_COVERAGE: f64 = 0.15;

// Exclusion reasons, one per filter kind.
pub const REASON_NO_INCLUDE_MATCH: &str = "does not match any include pattern";
pub const REASON_EXCLUDE_PATTERN: &str = "exclude pattern";
pub const REASON_BELOW_MINIMUM: &str = "below minimum";
pub const REASON_ABOVE_MAXIMUM: &str = "above maximum";
pub const REASON_CONTENT_TYPE: &str = "content type not allowed";
pub const REASON_INVALID_METADATA: &str = "invalid metadata";
