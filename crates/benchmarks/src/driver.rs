// Copyright 2025 List Perf Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark driver.
//!
//! Runs warmup and then every [`Scenario`] in order, timing the array-backed
//! variant first and the linked variant second, and accumulates one
//! [`ResultRecord`] per (scenario, variant) pair.

use crate::config::BenchConfig;
use crate::error::Result;
use crate::lists::BenchList;
use crate::result::ResultRecord;
use crate::scenario::Scenario;
use std::collections::LinkedList;
use std::hint::black_box;
use tracing::{debug, info};

/// Executes the scenario set and owns the accumulated results.
#[derive(Debug, Default)]
pub struct BenchmarkDriver {
    config: BenchConfig,
    results: Vec<ResultRecord>,
}

impl BenchmarkDriver {
    /// Create a driver, rejecting configurations that cannot run every scenario.
    pub fn new(config: BenchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            results: Vec::new(),
        })
    }

    /// Sizing this driver runs with.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Run warmup followed by every scenario, appending two records per scenario.
    pub fn run_all_tests(&mut self) -> &[ResultRecord] {
        info!(
            warmup_iterations = self.config.warmup_iterations,
            test_iterations = self.config.test_iterations,
            "Starting performance tests"
        );

        self.warm_up();

        for scenario in Scenario::ALL {
            self.run_scenario(scenario);
        }

        info!(records = self.results.len(), "All tests completed");
        &self.results
    }

    /// Accumulated results, in the order they were recorded.
    pub fn results(&self) -> &[ResultRecord] {
        &self.results
    }

    /// Drop all accumulated results so the driver can be reused.
    pub fn clear_results(&mut self) {
        self.results.clear();
    }

    fn warm_up(&self) {
        info!(iterations = self.config.warmup_iterations, "Warming up");
        warm_up_list::<Vec<i64>>(self.config.warmup_iterations);
        warm_up_list::<LinkedList<i64>>(self.config.warmup_iterations);
    }

    fn run_scenario(&mut self, scenario: Scenario) {
        info!(operation = scenario.name(), "Testing {}", scenario.description());
        let size = scenario.size(&self.config);

        let array = self.record::<Vec<i64>>(scenario, size);
        let linked = self.record::<LinkedList<i64>>(scenario, size);

        debug!(
            operation = scenario.name(),
            array_nanos = array.elapsed_nanos(),
            linked_nanos = linked.elapsed_nanos(),
            "Scenario finished"
        );
        self.results.push(array);
        self.results.push(linked);
    }

    fn record<L: BenchList>(&self, scenario: Scenario, size: usize) -> ResultRecord {
        let elapsed = scenario.measure::<L>(size);
        ResultRecord::new(scenario.name(), L::VARIANT, size, elapsed)
    }
}

fn warm_up_list<L: BenchList>(iterations: usize) {
    let mut list = L::default();
    for i in 0..iterations {
        list.push_back(i as i64);
        black_box(list.get(i % list.len()));
    }
}
