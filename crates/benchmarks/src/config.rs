// Copyright 2025 List Perf Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark sizing.
//!
//! The scenario set and list sizes are compiled in. The only knobs are the
//! warmup count and the nominal test size, and the entry point always uses
//! the defaults below.

use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};

/// Default number of warmup operations per variant.
pub const DEFAULT_WARMUP_ITERATIONS: usize = 1_000;

/// Default nominal scenario size.
pub const DEFAULT_TEST_ITERATIONS: usize = 10_000;

/// Divisor applied to the test size for the middle insert/remove scenarios.
pub const MIDDLE_SCALE_DIVISOR: usize = 10;

/// Smallest test size for which every scenario records a positive count.
pub const MIN_TEST_ITERATIONS: usize = MIDDLE_SCALE_DIVISOR;

/// Sizing for one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Operations run against both variants before any measurement.
    pub warmup_iterations: usize,
    /// Nominal size used by most scenarios.
    pub test_iterations: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            warmup_iterations: DEFAULT_WARMUP_ITERATIONS,
            test_iterations: DEFAULT_TEST_ITERATIONS,
        }
    }
}

impl BenchConfig {
    /// Create a validated configuration.
    pub fn new(warmup_iterations: usize, test_iterations: usize) -> Result<Self> {
        let config = Self {
            warmup_iterations,
            test_iterations,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject sizes that would leave a scenario with nothing to measure.
    pub fn validate(&self) -> Result<()> {
        if self.test_iterations < MIN_TEST_ITERATIONS {
            return Err(BenchError::InvalidConfig(format!(
                "test_iterations must be at least {}, got {}",
                MIN_TEST_ITERATIONS, self.test_iterations
            )));
        }
        Ok(())
    }

    /// Size of the middle insert/remove scenarios.
    pub fn scaled_iterations(&self) -> usize {
        self.test_iterations / MIDDLE_SCALE_DIVISOR
    }
}
