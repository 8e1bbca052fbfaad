// Copyright 2025 List Perf Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for the benchmark library.

use thiserror::Error;

/// Errors that can occur while configuring or reporting a benchmark run.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Configuration values that cannot drive every scenario
    #[error("Invalid benchmark configuration: {0}")]
    InvalidConfig(String),

    /// Writing to the output sink failed
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the machine-readable report failed
    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for benchmark operations.
pub type Result<T> = std::result::Result<T, BenchError>;
