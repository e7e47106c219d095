// src/config/validation.rs

use super::FilterConfig;

/// Returns `(min, max)` when the size bounds leave no admissible size.
pub(crate) fn inverted_size_bounds(config: &FilterConfig) -> Option<(u64, u64)> {
    match (config.min_size, config.max_size) {
        (Some(min), Some(max)) if min > max => Some((min, max)),
        _ => None,
    }
}

/// Warns about rule sets that are well-formed but cannot include anything.
///
/// Such rule sets are still applied: every file is excluded with the size
/// reason of the bound it violates.
pub(crate) fn check_config(config: &FilterConfig) {
    if let Some((min, max)) = inverted_size_bounds(config) {
        log::warn!(
            "minSize ({}) is greater than maxSize ({}); every file will be excluded",
            min,
            max
        );
    }
}
