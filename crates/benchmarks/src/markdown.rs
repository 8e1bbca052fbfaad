// Copyright 2025 List Perf Contributors
// SPDX-License-Identifier: Apache-2.0

//! Markdown output generation for benchmark reports.

use crate::error::Result;
use crate::render::ReportRenderer;
use crate::report::Report;
use crate::result::Variant;
use chrono::Utc;
use std::io;

/// Renders a report as a markdown document.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl ReportRenderer for MarkdownRenderer {
    fn render(&self, report: &Report, out: &mut dyn io::Write) -> Result<()> {
        writeln!(out, "# ArrayList vs LinkedList Performance")?;
        writeln!(out)?;
        writeln!(out, "Generated: {}", Utc::now().to_rfc3339())?;
        if let Some(config) = &report.config {
            writeln!(out)?;
            writeln!(out, "- Warmup iterations: {}", config.warmup_iterations)?;
            writeln!(out, "- Test iterations: {}", config.test_iterations)?;
        }
        writeln!(out)?;

        writeln!(out, "## Results (microseconds)")?;
        writeln!(out)?;
        writeln!(out, "| Operation | Iterations | ArrayList | LinkedList | Winner |")?;
        writeln!(out, "|-----------|-----------:|----------:|-----------:|--------|")?;

        for (row, entry) in report.rows.iter().zip(&report.winners) {
            writeln!(
                out,
                "| `{}` | {} | {} | {} | {} |",
                row.operation,
                row.iterations,
                row.array_list_micros,
                row.linked_list_micros,
                entry.winner
            )?;
        }
        writeln!(out)?;

        writeln!(out, "## Final score")?;
        writeln!(out)?;
        for variant in Variant::ALL {
            writeln!(out, "- **{}**: {} wins", variant, report.tally.wins(variant))?;
        }
        writeln!(out)?;

        writeln!(out, "## Recommendations")?;
        writeln!(out)?;
        for line in &report.recommendations {
            writeln!(out, "- {}", line)?;
        }

        writeln!(out)?;
        writeln!(out, "---")?;
        writeln!(out, "Total measurements: {}", report.results.len())?;
        Ok(())
    }
}
