// Copyright 2025 List Perf Contributors
// SPDX-License-Identifier: Apache-2.0

//! Report rendering.
//!
//! Renderers format a [`Report`] into any [`io::Write`] sink, so the same
//! report can go to stdout, a buffer in tests, or anywhere else.

use crate::error::Result;
use crate::markdown::MarkdownRenderer;
use crate::report::Report;
use crate::result::Variant;
use std::fmt;
use std::io;
use std::str::FromStr;

const BANNER: &str = "================================================================";

/// Formats a report into an output sink.
pub trait ReportRenderer {
    /// Write `report` to `out`.
    fn render(&self, report: &Report, out: &mut dyn io::Write) -> Result<()>;
}

/// Fixed-width console output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    fn header(&self, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out, "{}", BANNER)?;
        writeln!(out, "           ArrayList vs LinkedList Performance Test")?;
        writeln!(out, "{}", BANNER)?;
        Ok(())
    }

    fn table(&self, report: &Report, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "PERFORMANCE RESULTS (in microseconds)")?;
        writeln!(out, "==========================================")?;
        writeln!(
            out,
            "{:<20} | {:<10} | {:<12} | {:<12}",
            "Operation", "Iterations", "ArrayList", "LinkedList"
        )?;
        writeln!(out, "---------------------|------------|--------------|--------------")?;

        for row in &report.rows {
            writeln!(
                out,
                "{:<20} | {:<10} | {:<12} | {:<12}",
                row.operation, row.iterations, row.array_list_micros, row.linked_list_micros
            )?;
        }
        Ok(())
    }

    fn summary(&self, report: &Report, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "PERFORMANCE SUMMARY")?;
        writeln!(out, "======================")?;
        writeln!(out)?;
        writeln!(out, "WINNER BY OPERATION:")?;
        writeln!(out, "----------------------")?;

        for entry in &report.winners {
            writeln!(out, "• {:<18}: {}", entry.operation, entry.winner)?;
        }

        writeln!(out)?;
        writeln!(out, "FINAL SCORE:")?;
        for variant in Variant::ALL {
            writeln!(out, "{}: {} wins", variant, report.tally.wins(variant))?;
        }

        writeln!(out)?;
        writeln!(out, "PRACTICAL RECOMMENDATIONS:")?;
        for line in &report.recommendations {
            writeln!(out, "• {}", line)?;
        }
        Ok(())
    }

    fn footer(&self, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out, "{}", BANNER)?;
        writeln!(out, "                          TEST COMPLETED")?;
        writeln!(out, "{}", BANNER)?;
        Ok(())
    }
}

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &Report, out: &mut dyn io::Write) -> Result<()> {
        self.header(out)?;
        self.table(report, out)?;
        self.summary(report, out)?;
        self.footer(out)?;
        Ok(())
    }
}

/// Pretty-printed JSON of the whole report.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &Report, out: &mut dyn io::Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Selects a renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Fixed-width console tables.
    #[default]
    Text,
    /// Markdown document.
    Markdown,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Renderer for this format.
    pub fn renderer(&self) -> Box<dyn ReportRenderer> {
        match self {
            Self::Text => Box::new(TextRenderer),
            Self::Markdown => Box::new(MarkdownRenderer),
            Self::Json => Box::new(JsonRenderer),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown output format '{}', expected text, markdown or json",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Markdown => "markdown",
            Self::Json => "json",
        })
    }
}
