// src/filtering/size.rs

use super::FileFilter;
use crate::constants::{REASON_ABOVE_MAXIMUM, REASON_BELOW_MINIMUM};
use crate::core_types::FileMetadata;

/// Enforces inclusive lower and/or upper size bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeFilter {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

impl SizeFilter {
    pub fn new(min: Option<u64>, max: Option<u64>) -> Self {
        Self { min, max }
    }
}

/// Checks a size against optional inclusive bounds.
#[inline]
pub fn passes_size_filter(size: u64, min: Option<u64>, max: Option<u64>) -> bool {
    min.map_or(true, |min| size >= min) && max.map_or(true, |max| size <= max)
}

impl FileFilter for SizeFilter {
    fn apply(&self, file: &FileMetadata) -> bool {
        // Negative sizes are caught as invalid metadata before any filter runs.
        u64::try_from(file.size).is_ok_and(|size| passes_size_filter(size, self.min, self.max))
    }

    fn explain(&self, file: &FileMetadata) -> String {
        match self.min {
            Some(min) if file.size < 0 || (file.size as u64) < min => {
                format!("{}: {} < {} bytes", REASON_BELOW_MINIMUM, file.size, min)
            }
            _ => format!(
                "{}: {} > {} bytes",
                REASON_ABOVE_MAXIMUM,
                file.size,
                self.max.unwrap_or(u64::MAX)
            ),
        }
    }

    fn name(&self) -> &'static str {
        "SizeFilter"
    }
}
