// src/progress.rs

//! Defines a trait for reporting progress of batched classification runs.
#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

/// A trait for reporting progress, abstracting over specific implementations like `indicatif`.
///
/// The engine sets the length to the number of input files and advances the
/// position as batches complete. Batches finish on worker threads, so
/// implementations must be `Send + Sync`.
///
/// # Examples
///
/// ```
/// use filesift::progress::ProgressReporter;
/// use std::sync::Mutex;
///
/// // A mock reporter that just stores the last position.
/// struct MockProgress {
///     position: Mutex<u64>,
/// }
/// impl ProgressReporter for MockProgress {
///     fn set_length(&self, _len: u64) {}
///     fn set_position(&self, pos: u64) {
///         *self.position.lock().unwrap() = pos;
///     }
///     fn set_message(&self, _msg: String) {}
///     fn finish_with_message(&self, _msg: String) {}
/// }
///
/// let reporter = MockProgress { position: Mutex::new(0) };
/// reporter.set_position(250);
/// assert_eq!(*reporter.position.lock().unwrap(), 250);
/// ```
pub trait ProgressReporter: Send + Sync {
    /// Sets the total number of items to process.
    fn set_length(&self, len: u64);
    /// Sets the current position in the process.
    fn set_position(&self, pos: u64);
    /// Sets a short status, e.g. the batch that just completed.
    fn set_message(&self, msg: String);
    /// Finishes the progress reporting with a final message and hides the progress bar.
    fn finish_with_message(&self, msg: String);
}

/// A `ProgressReporter` that does nothing.
///
/// This is used as a default or in non-interactive environments where a progress
/// bar is not desired.
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    fn set_length(&self, _len: u64) {}
    fn set_position(&self, _pos: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish_with_message(&self, _msg: String) {}
}

/// An implementation of `ProgressReporter` using the `indicatif` crate.
#[cfg(feature = "progress")]
pub struct IndicatifProgress {
    bar: ProgressBar,
}

#[cfg(feature = "progress")]
impl IndicatifProgress {
    /// Creates a new progress bar with a default style.
    pub fn new() -> Self {
        let pb = ProgressBar::new(0);
        let style = ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files {msg}",
            )
            .map(|s| s.progress_chars("#>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        Self { bar: pb }
    }
}

#[cfg(feature = "progress")]
impl Default for IndicatifProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "progress")]
impl ProgressReporter for IndicatifProgress {
    fn set_length(&self, len: u64) {
        self.bar.set_length(len);
    }

    fn set_position(&self, pos: u64) {
        self.bar.set_position(pos);
    }

    fn set_message(&self, msg: String) {
        self.bar.set_message(msg);
    }

    fn finish_with_message(&self, msg: String) {
        self.bar.finish_with_message(msg);
    }
}
