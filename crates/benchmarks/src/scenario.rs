// Copyright 2025 List Perf Contributors
// SPDX-License-Identifier: Apache-2.0

//! The fixed scenario set.
//!
//! Each scenario prepares its container outside the timed region, then
//! measures only the operation loop with a monotonic clock.

use crate::config::BenchConfig;
use crate::lists::BenchList;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Seed for the random-access index sequence.
pub const RANDOM_SEED: u64 = 42;

/// A named, fixed-size timed operation applied identically to both variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Append at the tail, starting from empty.
    AddEnd,
    /// Insert at index 0, starting from empty.
    AddBegin,
    /// Insert at the current midpoint of a pre-filled list.
    AddMiddle,
    /// Indexed reads at seeded pseudorandom positions.
    GetRandom,
    /// Indexed reads from 0 to n-1.
    GetSequential,
    /// Remove the last element until empty.
    RemoveEnd,
    /// Remove the first element until empty.
    RemoveBegin,
    /// Remove the midpoint element until one remains.
    RemoveMiddle,
    /// One full forward traversal.
    Iteration,
}

impl Scenario {
    /// Every scenario, in execution order.
    pub const ALL: [Scenario; 9] = [
        Scenario::AddEnd,
        Scenario::AddBegin,
        Scenario::AddMiddle,
        Scenario::GetRandom,
        Scenario::GetSequential,
        Scenario::RemoveEnd,
        Scenario::RemoveBegin,
        Scenario::RemoveMiddle,
        Scenario::Iteration,
    ];

    /// Operation name recorded in results.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddEnd => "add(end)",
            Self::AddBegin => "add(begin)",
            Self::AddMiddle => "add(middle)",
            Self::GetRandom => "get(random)",
            Self::GetSequential => "get(sequential)",
            Self::RemoveEnd => "remove(end)",
            Self::RemoveBegin => "remove(begin)",
            Self::RemoveMiddle => "remove(middle)",
            Self::Iteration => "iteration",
        }
    }

    /// Human-readable progress text.
    pub fn description(&self) -> &'static str {
        match self {
            Self::AddEnd => "add to end",
            Self::AddBegin => "add to beginning",
            Self::AddMiddle => "add to middle",
            Self::GetRandom => "random access",
            Self::GetSequential => "sequential access",
            Self::RemoveEnd => "remove from end",
            Self::RemoveBegin => "remove from beginning",
            Self::RemoveMiddle => "remove from middle",
            Self::Iteration => "iteration",
        }
    }

    /// Iteration count recorded for this scenario.
    ///
    /// Middle insert/remove are quadratic for both variants, so they run at a
    /// tenth of the nominal size.
    pub fn size(&self, config: &BenchConfig) -> usize {
        match self {
            Self::AddMiddle | Self::RemoveMiddle => config.scaled_iterations(),
            _ => config.test_iterations,
        }
    }

    /// Container state before the timed region starts.
    pub fn prepare<L: BenchList>(&self, size: usize) -> L {
        match self {
            Self::AddEnd | Self::AddBegin => L::default(),
            _ => L::with_values(size),
        }
    }

    /// The timed operation loop. Mutates `list` in place and returns a
    /// checksum of every value read or removed.
    pub fn operate<L: BenchList>(&self, list: &mut L, size: usize) -> i64 {
        let mut checksum = 0i64;
        match self {
            Self::AddEnd => {
                for i in 0..size {
                    list.push_back(i as i64);
                }
            }
            Self::AddBegin => {
                for i in 0..size {
                    list.insert(0, i as i64);
                }
            }
            Self::AddMiddle => {
                for i in 0..size {
                    let mid = list.len() / 2;
                    list.insert(mid, i as i64);
                }
            }
            Self::GetRandom => {
                // Drawn here so both variants see the same sequence.
                for index in random_indices(size, list.len()) {
                    checksum = checksum.wrapping_add(read(list, index));
                }
            }
            Self::GetSequential => {
                for index in 0..size {
                    checksum = checksum.wrapping_add(read(list, index));
                }
            }
            Self::RemoveEnd => {
                while !list.is_empty() {
                    let last = list.len() - 1;
                    checksum = checksum.wrapping_add(list.remove(last).unwrap_or_default());
                }
            }
            Self::RemoveBegin => {
                while !list.is_empty() {
                    checksum = checksum.wrapping_add(list.remove(0).unwrap_or_default());
                }
            }
            Self::RemoveMiddle => {
                while list.len() > 1 {
                    let mid = list.len() / 2;
                    checksum = checksum.wrapping_add(list.remove(mid).unwrap_or_default());
                }
            }
            Self::Iteration => {
                checksum = list.sum();
            }
        }
        checksum
    }

    /// Time this scenario against container `L` at the given size.
    pub fn measure<L: BenchList>(&self, size: usize) -> Duration {
        let mut list = self.prepare::<L>(size);
        let start = Instant::now();
        let checksum = self.operate(&mut list, size);
        let elapsed = start.elapsed();
        black_box(checksum);
        black_box(&list);
        elapsed
    }
}

fn read<L: BenchList>(list: &L, index: usize) -> i64 {
    black_box(list.get(index)).copied().unwrap_or_default()
}

/// `count` indices in `0..len`, identical on every call.
pub fn random_indices(count: usize, len: usize) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(RANDOM_SEED);
    (0..count).map(|_| rng.random_range(0..len)).collect()
}
