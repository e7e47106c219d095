// src/cli.rs

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Classifies file descriptors against a declarative rule set.
///
/// filesift reads a JSON array of `{path, size, contentType}` descriptors,
/// applies include/exclude glob patterns (with `!` negation), inclusive size
/// bounds and a content-type allow-list, and reports which files are
/// included, which are excluded and why. Each run is scored by a verification
/// pass that estimates how consistent and meaningful the rule set is.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON file containing the file descriptors to classify ('-' reads stdin).
    pub files: PathBuf,

    // --- Rule Options ---
    /// Load the rule set from a JSON file instead of the options below.
    #[arg(
        short = 'r',
        long,
        value_name = "FILE",
        conflicts_with_all = &["include", "exclude", "min_size", "max_size", "content_types"]
    )]
    pub rules: Option<PathBuf>,

    /// Include only files matching any of these globs. Prefix with '!' to exclude.
    #[arg(short = 'i', long, value_name = "GLOB", num_args = 1..)]
    pub include: Option<Vec<String>>,

    /// Exclude files matching any of these globs.
    #[arg(short = 'x', long, value_name = "GLOB", num_args = 1..)]
    pub exclude: Option<Vec<String>>,

    /// Minimum file size to include (e.g., "1", "4k"). Inclusive.
    #[arg(long, value_name = "BYTES")]
    pub min_size: Option<String>,

    /// Maximum file size to include (e.g., "1M", "512k"). Inclusive.
    #[arg(short = 'm', long, value_name = "BYTES")]
    pub max_size: Option<String>,

    /// Allowed content types (MIME, case-insensitive, repeatable).
    #[arg(short = 't', long = "content-type", value_name = "MIME", num_args = 1..)]
    pub content_types: Option<Vec<String>>,

    // --- Execution Control ---
    /// Number of files per batch for large inputs.
    #[arg(short = 'b', long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub batch_size: Option<u64>,

    /// Truth score the result must reach to count as trustworthy.
    #[arg(long, value_name = "SCORE", default_value_t = crate::constants::DEFAULT_TRUTH_THRESHOLD)]
    pub threshold: f64,

    /// Skip the verification pass.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_verify: bool,

    /// Exit with status 2 when the truth score is below the threshold.
    #[arg(long, action = clap::ArgAction::SetTrue, conflicts_with = "no_verify")]
    pub fail_under: bool,

    // --- Output ---
    /// Output format.
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// How the result is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing with reasons and a score summary.
    Text,
    /// The full `FilterResult` as pretty-printed JSON.
    Json,
}
