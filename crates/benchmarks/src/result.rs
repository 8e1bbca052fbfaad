// Copyright 2025 List Perf Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark result types.
//!
//! A [`ResultRecord`] is one timed measurement of one scenario against one
//! container variant. Records are created by the driver and never mutated.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::time::Duration;

/// The two container implementations under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Contiguous, resizable buffer (`Vec`).
    ArrayList,
    /// Individually allocated, doubly-linked nodes (`LinkedList`).
    LinkedList,
}

impl Variant {
    /// Both variants, in measurement order.
    pub const ALL: [Variant; 2] = [Variant::ArrayList, Variant::LinkedList];

    /// Label used in tables and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ArrayList => "ArrayList",
            Self::LinkedList => "LinkedList",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single timed measurement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResultRecord {
    operation: String,
    variant: Variant,
    iterations: usize,
    elapsed_nanos: u64,
}

impl ResultRecord {
    /// Create a new record.
    pub fn new(
        operation: impl Into<String>,
        variant: Variant,
        iterations: usize,
        elapsed: Duration,
    ) -> Self {
        Self {
            operation: operation.into(),
            variant,
            iterations,
            elapsed_nanos: u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
        }
    }

    /// Name of the timed scenario, e.g. `add(end)`.
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Container variant that was measured.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Number of operations performed in the timed region.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Wall-clock duration of the timed region.
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_nanos)
    }

    /// Elapsed time in nanoseconds, the value winners are decided on.
    pub fn elapsed_nanos(&self) -> u64 {
        self.elapsed_nanos
    }

    /// Elapsed time in whole microseconds (truncated).
    pub fn elapsed_micros(&self) -> u64 {
        self.elapsed_nanos / 1_000
    }
}

impl Serialize for ResultRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ResultRecord", 5)?;
        state.serialize_field("operation", &self.operation)?;
        state.serialize_field("variant", &self.variant)?;
        state.serialize_field("iterations", &self.iterations)?;
        state.serialize_field("elapsed_nanos", &self.elapsed_nanos)?;
        state.serialize_field("elapsed_micros", &self.elapsed_micros())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accessors() {
        let record = ResultRecord::new(
            "test",
            Variant::ArrayList,
            1000,
            Duration::from_nanos(5_000_000),
        );

        assert_eq!(record.operation(), "test");
        assert_eq!(record.variant(), Variant::ArrayList);
        assert_eq!(record.variant().label(), "ArrayList");
        assert_eq!(record.iterations(), 1000);
        assert_eq!(record.elapsed_nanos(), 5_000_000);
        assert_eq!(record.elapsed_micros(), 5000);
        assert_eq!(record.elapsed(), Duration::from_millis(5));
    }

    #[test]
    fn test_micros_truncate() {
        let record = ResultRecord::new("x", Variant::LinkedList, 1, Duration::from_nanos(1_999));
        assert_eq!(record.elapsed_micros(), 1);

        let record = ResultRecord::new("x", Variant::LinkedList, 1, Duration::from_nanos(999));
        assert_eq!(record.elapsed_micros(), 0);
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(Variant::LinkedList.to_string(), "LinkedList");
        assert_eq!(Variant::ALL, [Variant::ArrayList, Variant::LinkedList]);
    }

    #[test]
    fn test_record_serializes_variant_label() {
        let record = ResultRecord::new("add(end)", Variant::LinkedList, 10, Duration::from_nanos(42));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["variant"], "LinkedList");
        assert_eq!(json["elapsed_nanos"], 42);
        assert_eq!(json["elapsed_micros"], 0);
    }

    #[test]
    fn test_record_serializes_nanos_and_micros() {
        let record = ResultRecord::new(
            "test",
            Variant::ArrayList,
            1000,
            Duration::from_nanos(5_000_000),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["operation"], "test");
        assert_eq!(json["iterations"], 1000);
        assert_eq!(json["elapsed_nanos"], 5_000_000);
        assert_eq!(json["elapsed_micros"], 5000);

        let decoded: ResultRecord = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, record);
    }
}
