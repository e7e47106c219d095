// src/output/listing.rs

use crate::core_types::FilterResult;
use anyhow::Result;
use std::io::Write;

/// Writes the included and excluded paths, each excluded path followed by its reason.
pub fn write_listing(writer: &mut dyn Write, result: &FilterResult) -> Result<()> {
    writeln!(writer, "Included Files: ({})", result.included.len())?;
    for path in &result.included {
        writeln!(writer, "- {}", path)?;
    }

    writeln!(writer, "\nExcluded Files: ({})", result.excluded.len())?;
    for path in &result.excluded {
        let reason = result.reason(path).unwrap_or("<no reason recorded>");
        writeln!(writer, "- {} ({})", path, reason)?;
    }
    Ok(())
}
