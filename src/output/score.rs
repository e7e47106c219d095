// src/output/score.rs

use crate::verification::VerificationReport;
use anyhow::Result;
use std::io::Write;

/// Writes the truth score, the pass/fail verdict and the individual metrics.
pub fn write_score(writer: &mut dyn Write, report: &VerificationReport) -> Result<()> {
    writeln!(writer, "---")?;
    writeln!(
        writer,
        "Truth score: {:.3} (threshold {:.2}, {})",
        report.truth_score,
        report.threshold,
        if report.meets_threshold {
            "met"
        } else {
            "not met"
        }
    )?;
    let m = &report.metrics;
    for (name, value) in [
        ("config completeness", m.config_completeness),
        ("pattern accuracy", m.pattern_accuracy),
        ("consistency", m.consistency),
        ("performance", m.performance),
        ("coverage", m.coverage),
    ] {
        writeln!(writer, "  {:<20} {:.3}", name, value)?;
    }
    Ok(())
}
