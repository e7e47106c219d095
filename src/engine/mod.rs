//! Runs a rule set against a list of file descriptors.
//!
//! The engine builds the filter pipeline once per call, classifies every file
//! (splitting large inputs into batches evaluated in parallel with Rayon),
//! merges the batch results in input order and, unless disabled, attaches a
//! verification report.

use crate::config::FilterConfig;
use crate::constants::DEFAULT_BATCH_SIZE;
use crate::core_types::{FileMetadata, FilterResult};
use crate::errors::Result;
use crate::filtering::ConfigParser;
use crate::hooks::{fire, FilterHooks, NoOpHooks};
use crate::progress::ProgressReporter;
use crate::verification::FilterVerificationService;
use log::{debug, info};
use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

mod batch;

use batch::{evaluate_batch, merge, BatchContext};

/// Classifies files against a `FilterConfig`.
///
/// The engine itself holds no per-call state, so one instance can serve
/// concurrent callers.
///
/// # Examples
///
/// ```
/// use filesift::config::FilterConfig;
/// use filesift::core_types::FileMetadata;
/// use filesift::engine::FilterEngine;
///
/// let config = FilterConfig {
///     include: Some(vec!["**/*.ts".into()]),
///     exclude: Some(vec!["**/node_modules/**".into()]),
///     ..Default::default()
/// };
/// let files = vec![
///     FileMetadata::new("src/a.ts", 10, "text/plain"),
///     FileMetadata::new("node_modules/x/a.ts", 10, "text/plain"),
/// ];
///
/// let result = FilterEngine::new().filter(&config, &files).unwrap();
/// assert_eq!(result.included, vec!["src/a.ts"]);
/// assert_eq!(result.excluded, vec!["node_modules/x/a.ts"]);
/// assert!(result.reason("node_modules/x/a.ts").unwrap().contains("exclude pattern"));
/// assert!(result.verification.is_some());
/// ```
pub struct FilterEngine {
    batch_size: usize,
    hooks: Arc<dyn FilterHooks>,
    progress: Option<Arc<dyn ProgressReporter>>,
    verifier: Option<FilterVerificationService>,
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterEngine {
    /// Creates an engine with the default batch size, no hooks, no progress
    /// reporting and the default verification service.
    pub fn new() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            hooks: Arc::new(NoOpHooks),
            progress: None,
            verifier: Some(FilterVerificationService::default()),
        }
    }

    /// Sets the number of files per batch. Values below 1 are treated as 1.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn FilterHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressReporter>) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Replaces the verification service (e.g. to change the threshold).
    pub fn with_verifier(mut self, verifier: FilterVerificationService) -> Self {
        self.verifier = Some(verifier);
        self
    }

    /// Skips verification; `FilterResult::verification` stays `None`.
    pub fn without_verification(mut self) -> Self {
        self.verifier = None;
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Classifies `files` against `config`.
    ///
    /// Every distinct input path ends up in exactly one of `included` or
    /// `excluded`, and every excluded path carries a reason. Malformed file
    /// descriptors are excluded as invalid metadata without affecting the
    /// rest of the run.
    ///
    /// # Errors
    /// Returns an error only if the rule set itself is unusable (a pattern
    /// fails to compile).
    pub fn filter(&self, config: &FilterConfig, files: &[FileMetadata]) -> Result<FilterResult> {
        let session_id = Uuid::new_v4().to_string();
        let span = tracing::info_span!("filter", session = %session_id, files = files.len());
        let _guard = span.enter();

        let start = Instant::now();
        let pipeline = ConfigParser::parse(config)?;

        let description = format!(
            "classify {} files with {} filters",
            files.len(),
            pipeline.len()
        );
        fire("pre_task", || self.hooks.pre_task(&session_id, &description));

        let ctx = BatchContext {
            pipeline: &pipeline,
            config,
            hooks: &*self.hooks,
            session_id: &session_id,
        };

        if let Some(ref progress) = self.progress {
            progress.set_length(files.len() as u64);
        }

        let (mut result, batches) = if files.len() > self.batch_size {
            let total_batches = files.len().div_ceil(self.batch_size);
            let processed = AtomicU64::new(0);
            let finished = AtomicUsize::new(0);
            let per_batch: Vec<_> = files
                .par_chunks(self.batch_size)
                .map(|chunk| {
                    let verdicts = evaluate_batch(chunk, &ctx);
                    let done = processed.fetch_add(chunk.len() as u64, Ordering::Relaxed)
                        + chunk.len() as u64;
                    let batch = finished.fetch_add(1, Ordering::Relaxed) + 1;
                    if let Some(ref progress) = self.progress {
                        progress.set_position(done);
                        progress.set_message(format!("batch {}/{}", batch, total_batches));
                    }
                    verdicts
                })
                .collect();
            let batches = per_batch.len();
            debug!(
                "Evaluated {} batches of up to {} files",
                batches, self.batch_size
            );
            (merge(files, per_batch.into_iter().flatten()), batches)
        } else {
            let verdicts = evaluate_batch(files, &ctx);
            if let Some(ref progress) = self.progress {
                progress.set_position(files.len() as u64);
                if !files.is_empty() {
                    progress.set_message("batch 1/1".to_string());
                }
            }
            (merge(files, verdicts), usize::from(!files.is_empty()))
        };

        result.batches = batches;
        result.elapsed = start.elapsed();

        if let Some(ref progress) = self.progress {
            progress.finish_with_message(result.summary_line());
        }

        if let Some(ref verifier) = self.verifier {
            result.verification = Some(verifier.evaluate(config, files, &result));
        }

        let truth_score = result.verification.as_ref().map(|v| v.truth_score);
        let summary = result.summary_line();
        fire("post_task", || {
            self.hooks.post_task(&session_id, &summary, truth_score)
        });

        info!(
            "Classified {} in {:?} ({} batches)",
            summary, result.elapsed, result.batches
        );
        Ok(result)
    }
}
