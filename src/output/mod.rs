// src/output/mod.rs

use crate::cli::OutputFormat;
use crate::core_types::FilterResult;
use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

pub mod listing;
pub mod score;

/// Writes `result` to `writer` in the requested format.
pub fn write_result(
    result: &FilterResult,
    format: OutputFormat,
    writer: &mut dyn Write,
) -> Result<()> {
    debug!("Writing result as {:?}...", format);
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, result)
                .context("Failed to serialize result as JSON")?;
            writeln!(writer)?;
        }
        OutputFormat::Text => {
            listing::write_listing(writer, result)?;
            if let Some(ref report) = result.verification {
                writeln!(writer)?;
                score::write_score(writer, report)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
