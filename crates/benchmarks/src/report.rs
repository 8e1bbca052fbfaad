// Copyright 2025 List Perf Contributors
// SPDX-License-Identifier: Apache-2.0

//! Report model.
//!
//! Turns the flat result sequence into per-operation groups, comparison
//! rows and winners. Nothing here formats text; see [`crate::render`].

use crate::config::BenchConfig;
use crate::result::{ResultRecord, Variant};
use serde::Serialize;
use std::collections::HashMap;

/// Fixed guidance printed after the score.
pub const RECOMMENDATIONS: [&str; 3] = [
    "Use ArrayList for: random access, iteration, add/remove at end",
    "Use LinkedList for: frequent insertions/deletions at beginning/middle",
    "Default choice: ArrayList (better memory locality, cache-friendly)",
];

/// All records sharing one operation name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationGroup<'a> {
    /// Shared operation name.
    pub operation: &'a str,
    /// Records in the order they were recorded.
    pub records: Vec<&'a ResultRecord>,
}

impl<'a> OperationGroup<'a> {
    /// First record measured against `variant`, if any.
    pub fn find(&self, variant: Variant) -> Option<&'a ResultRecord> {
        self.records.iter().copied().find(|r| r.variant() == variant)
    }

    /// The (array, linked) records, or `None` when either is missing.
    pub fn pair(&self) -> Option<(&'a ResultRecord, &'a ResultRecord)> {
        Some((self.find(Variant::ArrayList)?, self.find(Variant::LinkedList)?))
    }
}

/// Partition `results` by operation, keeping first-seen operation order.
pub fn group_by_operation(results: &[ResultRecord]) -> Vec<OperationGroup<'_>> {
    let mut groups: Vec<OperationGroup<'_>> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for record in results {
        let index = *positions.entry(record.operation()).or_insert_with(|| {
            groups.push(OperationGroup {
                operation: record.operation(),
                records: Vec::new(),
            });
            groups.len() - 1
        });
        groups[index].records.push(record);
    }

    groups
}

/// One line of the comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    /// Operation name.
    pub operation: String,
    /// Iteration count, shared by both variants.
    pub iterations: usize,
    /// ArrayList elapsed time in whole microseconds.
    pub array_list_micros: u64,
    /// LinkedList elapsed time in whole microseconds.
    pub linked_list_micros: u64,
}

/// Winner of one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationWinner {
    /// Operation name.
    pub operation: String,
    /// Variant with the strictly smaller elapsed time, LinkedList on ties.
    pub winner: Variant,
}

/// Win counts across all operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WinTally {
    /// Operations won by ArrayList.
    pub array_list: usize,
    /// Operations won by LinkedList.
    pub linked_list: usize,
}

impl WinTally {
    fn record(&mut self, variant: Variant) {
        match variant {
            Variant::ArrayList => self.array_list += 1,
            Variant::LinkedList => self.linked_list += 1,
        }
    }

    /// Wins recorded for `variant`.
    pub fn wins(&self, variant: Variant) -> usize {
        match variant {
            Variant::ArrayList => self.array_list,
            Variant::LinkedList => self.linked_list,
        }
    }
}

/// Compare unrounded nanoseconds. The array variant wins only when strictly
/// faster, so ties go to the linked variant.
pub fn winner(array: &ResultRecord, linked: &ResultRecord) -> Variant {
    if array.elapsed_nanos() < linked.elapsed_nanos() {
        Variant::ArrayList
    } else {
        Variant::LinkedList
    }
}

/// Comparison rows for every group holding both variants.
pub fn comparison_table(groups: &[OperationGroup<'_>]) -> Vec<ComparisonRow> {
    groups
        .iter()
        .filter_map(|group| {
            let (array, linked) = group.pair()?;
            Some(ComparisonRow {
                operation: group.operation.to_string(),
                iterations: array.iterations(),
                array_list_micros: array.elapsed_micros(),
                linked_list_micros: linked.elapsed_micros(),
            })
        })
        .collect()
}

/// Per-operation winners and the overall tally.
pub fn winners(groups: &[OperationGroup<'_>]) -> (Vec<OperationWinner>, WinTally) {
    let mut tally = WinTally::default();
    let winners: Vec<OperationWinner> = groups
        .iter()
        .filter_map(|group| {
            let (array, linked) = group.pair()?;
            let winner = winner(array, linked);
            tally.record(winner);
            Some(OperationWinner {
                operation: group.operation.to_string(),
                winner,
            })
        })
        .collect();
    (winners, tally)
}

/// Everything a renderer needs, computed once from the result sequence.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Sizing used for the run, when known.
    pub config: Option<BenchConfig>,
    /// One row per operation with both variants present.
    pub rows: Vec<ComparisonRow>,
    /// Winner per operation, in the same order as `rows`.
    pub winners: Vec<OperationWinner>,
    /// Win counts across all operations.
    pub tally: WinTally,
    /// Fixed guidance lines.
    pub recommendations: Vec<String>,
    /// The raw result sequence.
    pub results: Vec<ResultRecord>,
}

impl Report {
    /// Build a report from results of unknown provenance.
    pub fn from_results(results: &[ResultRecord]) -> Self {
        let groups = group_by_operation(results);
        let rows = comparison_table(&groups);
        let (winners, tally) = winners(&groups);

        Self {
            config: None,
            rows,
            winners,
            tally,
            recommendations: RECOMMENDATIONS.iter().map(|s| s.to_string()).collect(),
            results: results.to_vec(),
        }
    }

    /// Attach the configuration the results were measured with.
    pub fn with_config(mut self, config: BenchConfig) -> Self {
        self.config = Some(config);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn record(operation: &str, variant: Variant, nanos: u64) -> ResultRecord {
        ResultRecord::new(operation, variant, 100, Duration::from_nanos(nanos))
    }

    #[test]
    fn test_group_preserves_first_seen_order() {
        let results = vec![
            record("A", Variant::ArrayList, 1),
            record("B", Variant::ArrayList, 2),
            record("A", Variant::LinkedList, 3),
            record("B", Variant::LinkedList, 4),
            record("C", Variant::ArrayList, 5),
            record("C", Variant::LinkedList, 6),
        ];

        let groups = group_by_operation(&results);
        let names: Vec<_> = groups.iter().map(|g| g.operation).collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        for group in &groups {
            assert_eq!(group.records.len(), 2);
            assert!(group.records.iter().all(|r| r.operation() == group.operation));
        }
        assert_eq!(groups[0].records[1].elapsed_nanos(), 3);
    }

    #[test]
    fn test_group_order_is_not_alphabetical() {
        let results = vec![
            record("remove(end)", Variant::ArrayList, 1),
            record("add(end)", Variant::ArrayList, 1),
        ];
        let groups = group_by_operation(&results);
        assert_eq!(groups[0].operation, "remove(end)");
        assert_eq!(groups[1].operation, "add(end)");
    }

    #[test]
    fn test_incomplete_groups_are_skipped() {
        let results = vec![
            record("A", Variant::ArrayList, 10),
            record("B", Variant::ArrayList, 10),
            record("B", Variant::LinkedList, 20),
            record("C", Variant::LinkedList, 10),
        ];

        let groups = group_by_operation(&results);
        let rows = comparison_table(&groups);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].operation, "B");

        let (winners, tally) = winners(&groups);
        assert_eq!(winners.len(), 1);
        assert_eq!(tally, WinTally { array_list: 1, linked_list: 0 });
    }

    #[test]
    fn test_winner_uses_nanoseconds() {
        let array = record("op", Variant::ArrayList, 1_000_001);
        let linked = record("op", Variant::LinkedList, 1_000_000);
        assert_eq!(array.elapsed_micros(), linked.elapsed_micros());
        assert_eq!(winner(&array, &linked), Variant::LinkedList);

        let array = record("op", Variant::ArrayList, 1_000_000);
        let linked = record("op", Variant::LinkedList, 1_000_001);
        assert_eq!(winner(&array, &linked), Variant::ArrayList);
    }

    #[test]
    fn test_tie_goes_to_linked_list() {
        let array = record("op", Variant::ArrayList, 500);
        let linked = record("op", Variant::LinkedList, 500);
        assert_eq!(winner(&array, &linked), Variant::LinkedList);
    }

    #[test]
    fn test_report_from_results() {
        let results = vec![
            ResultRecord::new("add(end)", Variant::ArrayList, 10, Duration::from_nanos(2_500)),
            ResultRecord::new("add(end)", Variant::LinkedList, 10, Duration::from_nanos(9_999)),
            ResultRecord::new("add(begin)", Variant::ArrayList, 10, Duration::from_nanos(7_000)),
            ResultRecord::new("add(begin)", Variant::LinkedList, 10, Duration::from_nanos(3_000)),
        ];

        let report = Report::from_results(&results).with_config(BenchConfig::default());
        assert_eq!(
            report.rows[0],
            ComparisonRow {
                operation: "add(end)".to_string(),
                iterations: 10,
                array_list_micros: 2,
                linked_list_micros: 9,
            }
        );
        assert_eq!(report.winners[0].winner, Variant::ArrayList);
        assert_eq!(report.winners[1].winner, Variant::LinkedList);
        assert_eq!(report.tally.wins(Variant::ArrayList), 1);
        assert_eq!(report.tally.wins(Variant::LinkedList), 1);
        assert_eq!(report.recommendations.len(), 3);
        assert_eq!(report.results.len(), 4);
        assert!(report.config.is_some());
    }

    #[test]
    fn test_empty_results() {
        let report = Report::from_results(&[]);
        assert!(report.rows.is_empty());
        assert!(report.winners.is_empty());
        assert_eq!(report.tally, WinTally::default());
    }
}
