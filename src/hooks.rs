// src/hooks.rs

//! Lifecycle notifications emitted by the engine.
//!
//! Hooks are observational. The engine calls them before a run, after every
//! per-file decision and after the run, and ignores whatever they do: errors
//! and panics are logged and swallowed. Implementations shared across
//! concurrent runs must serialize their own writes.

use crate::config::FilterConfig;
use std::panic::{catch_unwind, AssertUnwindSafe};
use thiserror::Error;

/// A failure reported by a hooks implementation.
#[derive(Error, Debug)]
#[error("hook '{hook}' failed: {message}")]
pub struct HookError {
    pub hook: &'static str,
    pub message: String,
}

impl HookError {
    pub fn new(hook: &'static str, message: impl Into<String>) -> Self {
        Self {
            hook,
            message: message.into(),
        }
    }
}

/// Receives lifecycle notifications from `FilterEngine`.
///
/// # Examples
///
/// ```
/// use filesift::config::FilterConfig;
/// use filesift::hooks::{FilterHooks, HookError};
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// #[derive(Default)]
/// struct CountingHooks {
///     decisions: AtomicUsize,
/// }
///
/// impl FilterHooks for CountingHooks {
///     fn post_edit(&self, _: &str, _: &str, _: &FilterConfig) -> Result<(), HookError> {
///         self.decisions.fetch_add(1, Ordering::Relaxed);
///         Ok(())
///     }
/// }
///
/// let hooks = CountingHooks::default();
/// hooks.post_edit("session", "a.rs", &FilterConfig::default()).unwrap();
/// assert_eq!(hooks.decisions.load(Ordering::Relaxed), 1);
/// ```
pub trait FilterHooks: Send + Sync {
    /// Called once before any file is classified.
    fn pre_task(&self, _session_id: &str, _task_description: &str) -> Result<(), HookError> {
        Ok(())
    }

    /// Called after each per-file decision. May run on several threads at once.
    fn post_edit(
        &self,
        _session_id: &str,
        _file_path: &str,
        _config_snapshot: &FilterConfig,
    ) -> Result<(), HookError> {
        Ok(())
    }

    /// Called once after the run, with the truth score if verification ran.
    fn post_task(
        &self,
        _session_id: &str,
        _result_summary: &str,
        _truth_score: Option<f64>,
    ) -> Result<(), HookError> {
        Ok(())
    }
}

/// A `FilterHooks` that does nothing.
pub struct NoOpHooks;

impl FilterHooks for NoOpHooks {}

/// A `FilterHooks` that writes every notification to the `log` facade.
///
/// Per-file notifications go to `trace` so that large runs stay quiet by default.
pub struct LoggingHooks;

impl FilterHooks for LoggingHooks {
    fn pre_task(&self, session_id: &str, task_description: &str) -> Result<(), HookError> {
        log::debug!("[{}] pre-task: {}", session_id, task_description);
        Ok(())
    }

    fn post_edit(
        &self,
        session_id: &str,
        file_path: &str,
        _config_snapshot: &FilterConfig,
    ) -> Result<(), HookError> {
        log::trace!("[{}] classified {}", session_id, file_path);
        Ok(())
    }

    fn post_task(
        &self,
        session_id: &str,
        result_summary: &str,
        truth_score: Option<f64>,
    ) -> Result<(), HookError> {
        match truth_score {
            Some(score) => log::debug!(
                "[{}] post-task: {} (truth {:.3})",
                session_id,
                result_summary,
                score
            ),
            None => log::debug!("[{}] post-task: {}", session_id, result_summary),
        }
        Ok(())
    }
}

/// Runs one hook call, logging and discarding any error or panic.
pub(crate) fn fire<F>(hook: &'static str, call: F)
where
    F: FnOnce() -> Result<(), HookError>,
{
    match catch_unwind(AssertUnwindSafe(call)) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => log::warn!("Ignoring hook failure: {}", e),
        Err(_) => log::warn!("Ignoring panic in hook '{}'", hook),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_swallows_errors() {
        fire("pre_task", || Err(HookError::new("pre_task", "sink closed")));
    }

    #[test]
    fn test_fire_swallows_panics() {
        fire("post_edit", || panic!("hook exploded"));
    }

    #[test]
    fn test_default_methods_succeed() {
        let hooks = NoOpHooks;
        assert!(hooks.pre_task("s", "t").is_ok());
        assert!(hooks.post_task("s", "r", Some(1.0)).is_ok());
        assert!(LoggingHooks
            .post_edit("s", "a", &FilterConfig::default())
            .is_ok());
    }

    #[test]
    fn test_hook_error_display() {
        let err = HookError::new("post_task", "boom");
        assert_eq!(err.to_string(), "hook 'post_task' failed: boom");
    }
}
