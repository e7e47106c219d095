// src/main.rs

use anyhow::Result;
use clap::Parser;
use filesift::cli::Cli;
use filesift::config::{load_file_list, FilterConfigBuilder};
use filesift::engine::FilterEngine;
use filesift::hooks::LoggingHooks;
use filesift::output::write_result;
#[cfg(feature = "progress")]
use filesift::progress::IndicatifProgress;
use filesift::progress::ProgressReporter;
use filesift::verification::FilterVerificationService;
use std::sync::Arc;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "filesift=debug".parse()?
                } else {
                    "filesift=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting filesift v{}...", env!("CARGO_PKG_VERSION"));

    // --- Setup ---
    let cli = Cli::parse();

    // Show a progress bar only for interactive stderr.
    let progress_reporter: Option<Arc<dyn ProgressReporter>> = {
        #[cfg(feature = "progress")]
        {
            if atty::is(atty::Stream::Stderr) {
                Some(Arc::new(IndicatifProgress::new()))
            } else {
                None
            }
        }
        #[cfg(not(feature = "progress"))]
        {
            None
        }
    };

    // --- Configuration & Input ---
    let config = FilterConfigBuilder::from_cli(&cli).build()?;
    log::debug!("Rule set: {:?}", config);
    let files = load_file_list(&cli.files)?;
    log::debug!("Loaded {} file descriptors", files.len());

    // --- Execution ---
    let mut engine = FilterEngine::new().with_hooks(Arc::new(LoggingHooks));
    if let Some(batch_size) = cli.batch_size {
        engine = engine.with_batch_size(usize::try_from(batch_size).unwrap_or(usize::MAX));
    }
    if let Some(progress) = progress_reporter {
        engine = engine.with_progress(progress);
    }
    engine = if cli.no_verify {
        engine.without_verification()
    } else {
        engine.with_verifier(FilterVerificationService::with_threshold(cli.threshold))
    };

    let result = engine.filter(&config, &files)?;

    // --- Output ---
    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    write_result(&result, cli.format, &mut writer)?;

    if cli.fail_under {
        if let Some(ref report) = result.verification {
            if !report.meets_threshold {
                eprintln!(
                    "filesift: truth score {:.3} is below the threshold {:.2}",
                    report.truth_score, report.threshold
                );
                std::process::exit(2);
            }
        }
    }

    Ok(())
}
