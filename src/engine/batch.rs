// src/engine/batch.rs

use crate::config::FilterConfig;
use crate::core_types::{FileMetadata, FilterResult};
use crate::filtering::{Pipeline, Verdict};
use crate::hooks::{fire, FilterHooks};
use log::debug;
use std::collections::HashSet;

/// Shared, read-only state every batch sees.
pub(super) struct BatchContext<'a> {
    pub pipeline: &'a Pipeline,
    pub config: &'a FilterConfig,
    pub hooks: &'a dyn FilterHooks,
    pub session_id: &'a str,
}

/// Classifies one batch. The returned verdicts line up with `files`.
pub(super) fn evaluate_batch(files: &[FileMetadata], ctx: &BatchContext<'_>) -> Vec<Verdict> {
    files
        .iter()
        .map(|file| {
            let verdict = ctx.pipeline.classify(file);
            fire("post_edit", || {
                ctx.hooks.post_edit(ctx.session_id, &file.path, ctx.config)
            });
            verdict
        })
        .collect()
}

/// Folds verdicts (in input order) into a `FilterResult`.
///
/// A path that appears more than once keeps the verdict of its first
/// occurrence, so the included and excluded sets stay disjoint.
pub(super) fn merge<'a, I>(files: &'a [FileMetadata], verdicts: I) -> FilterResult
where
    I: IntoIterator<Item = Verdict>,
{
    let mut result = FilterResult::default();
    let mut seen: HashSet<&'a str> = HashSet::with_capacity(files.len());

    for (file, verdict) in files.iter().zip(verdicts) {
        if !seen.insert(file.path.as_str()) {
            debug!("Ignoring repeated path '{}'", file.path);
            continue;
        }
        match verdict {
            Verdict::Included => result.included.push(file.path.clone()),
            Verdict::Excluded { reason, .. } => {
                result.excluded.push(file.path.clone());
                result.reasons.insert(file.path.clone(), reason);
            }
        }
    }
    result
}
