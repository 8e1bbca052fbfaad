// Copyright 2025 List Perf Contributors
// SPDX-License-Identifier: Apache-2.0

//! Array-backed vs. linked-node list performance comparison.
//!
//! This crate times a fixed set of list operations against `Vec` and
//! `LinkedList`, collects one [`ResultRecord`] per (operation, variant)
//! pair, and renders a comparison table with a winner per operation.
//!
//! # Quick Start
//!
//! ```no_run
//! use list_perf_benchmarks::{run_all_benchmarks, BenchConfig, OutputFormat, ReportRenderer};
//!
//! let report = run_all_benchmarks(BenchConfig::default())?;
//! OutputFormat::Text
//!     .renderer()
//!     .render(&report, &mut std::io::stdout().lock())?;
//! # Ok::<(), list_perf_benchmarks::BenchError>(())
//! ```
//!
//! # Modules
//!
//! - [`driver`] - Runs warmup and the scenario set
//! - [`scenario`] - The nine timed scenarios
//! - [`lists`] - Common surface over both containers
//! - [`result`] - The immutable `ResultRecord`
//! - [`report`] - Grouping, comparison rows and winners
//! - [`render`] / [`markdown`] - Text, markdown and JSON output

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod driver;
pub mod error;
pub mod lists;
pub mod markdown;
pub mod render;
pub mod report;
pub mod result;
pub mod scenario;

pub use config::BenchConfig;
pub use driver::BenchmarkDriver;
pub use error::{BenchError, Result};
pub use render::{OutputFormat, ReportRenderer};
pub use report::Report;
pub use result::{ResultRecord, Variant};
pub use scenario::Scenario;

use std::io;

/// Run every scenario with `config` and build the report.
///
/// # Errors
///
/// Returns [`BenchError::InvalidConfig`] if `config` cannot drive every scenario.
pub fn run_all_benchmarks(config: BenchConfig) -> Result<Report> {
    let mut driver = BenchmarkDriver::new(config)?;
    let results = driver.run_all_tests();
    Ok(Report::from_results(results).with_config(config))
}

/// Run every scenario and render the report to `out` in `format`.
pub fn run_and_render(
    config: BenchConfig,
    format: OutputFormat,
    out: &mut dyn io::Write,
) -> Result<Report> {
    let report = run_all_benchmarks(config)?;
    format.renderer().render(&report, out)?;
    out.flush()?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> BenchConfig {
        BenchConfig::new(100, 1000).unwrap()
    }

    #[test]
    fn test_run_all_benchmarks_returns_report() {
        let report = run_all_benchmarks(small_config()).unwrap();
        assert_eq!(report.results.len(), 18);
        assert_eq!(report.rows.len(), 9);
        assert_eq!(report.winners.len(), 9);
        assert_eq!(report.tally.array_list + report.tally.linked_list, 9);
        assert_eq!(report.config, Some(small_config()));
    }

    #[test]
    fn test_run_all_benchmarks_rejects_bad_config() {
        let config = BenchConfig {
            warmup_iterations: 0,
            test_iterations: 5,
        };
        assert!(matches!(
            run_all_benchmarks(config),
            Err(BenchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_run_and_render_text() {
        let mut buf = Vec::new();
        run_and_render(small_config(), OutputFormat::Text, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        for scenario in Scenario::ALL {
            assert!(text.contains(scenario.name()), "missing {}", scenario.name());
        }
        assert!(text.contains("TEST COMPLETED"));
    }
}
