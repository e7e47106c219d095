//! The `filesift` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types, traits, and functions
//! from the `filesift` library.
//!
//! # Example
//!
//! ```
//! use filesift::prelude::*;
//! # fn main() -> Result<()> {
//!
//! let config = FilterConfigBuilder::new().max_size("1k").build()?;
//! let files = vec![FileMetadata::new("notes.txt", 12, "text/plain")];
//! let result = FilterEngine::new()
//!     .with_hooks(std::sync::Arc::new(NoOpHooks))
//!     .filter(&config, &files)?;
//! assert_eq!(result.included, vec!["notes.txt"]);
//!
//! # Ok(())
//! # }
//! ```

pub use crate::config::{load_file_list, load_rules_file, FilterConfig, FilterConfigBuilder};
pub use crate::core_types::{FileMetadata, FilterResult};
pub use crate::engine::FilterEngine;
pub use crate::errors::{Error, Result};
pub use crate::filtering::{
    is_content_type_allowed, passes_size_filter, CompiledFilter, ConfigParser, FileFilter,
    FilterKind, GlobMatcher, Pipeline, Verdict,
};
pub use crate::hooks::{FilterHooks, HookError, LoggingHooks, NoOpHooks};
pub use crate::progress::{NoOpProgress, ProgressReporter};
pub use crate::verification::{FilterVerificationService, VerificationMetrics, VerificationReport};
pub use crate::{filter, verify};
