// Copyright 2025 List Perf Contributors
// SPDX-License-Identifier: Apache-2.0

//! Container adapters.
//!
//! [`BenchList`] gives both containers the same index-based surface so a
//! scenario can be written once and timed against each variant.

use crate::result::Variant;
use std::collections::LinkedList;

/// Index-based list operations exercised by the scenarios.
///
/// Indices passed by the driver are always in range. Implementations follow
/// the std conventions for out-of-range input.
pub trait BenchList: Default + FromIterator<i64> {
    /// Variant this container represents.
    const VARIANT: Variant;

    /// A list holding `0..n` in order.
    fn with_values(n: usize) -> Self {
        (0..n as i64).collect()
    }

    /// Number of elements.
    fn len(&self) -> usize;

    /// Whether the list holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append at the tail.
    fn push_back(&mut self, value: i64);

    /// Insert so that `value` ends up at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    fn insert(&mut self, index: usize, value: i64);

    /// Element at `index`, or `None` if out of range.
    fn get(&self, index: usize) -> Option<&i64>;

    /// Remove and return the element at `index`.
    fn remove(&mut self, index: usize) -> Option<i64>;

    /// One full forward traversal.
    fn sum(&self) -> i64;
}

impl BenchList for Vec<i64> {
    const VARIANT: Variant = Variant::ArrayList;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn push_back(&mut self, value: i64) {
        self.push(value);
    }

    fn insert(&mut self, index: usize, value: i64) {
        Vec::insert(self, index, value);
    }

    fn get(&self, index: usize) -> Option<&i64> {
        self.as_slice().get(index)
    }

    fn remove(&mut self, index: usize) -> Option<i64> {
        (index < Vec::len(self)).then(|| Vec::remove(self, index))
    }

    fn sum(&self) -> i64 {
        self.iter().fold(0i64, |acc, v| acc.wrapping_add(*v))
    }
}

impl BenchList for LinkedList<i64> {
    const VARIANT: Variant = Variant::LinkedList;

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn push_back(&mut self, value: i64) {
        LinkedList::push_back(self, value);
    }

    fn insert(&mut self, index: usize, value: i64) {
        if index == 0 {
            self.push_front(value);
        } else if index == LinkedList::len(self) {
            LinkedList::push_back(self, value);
        } else {
            // split_off walks from whichever end is closer
            let mut tail = self.split_off(index);
            tail.push_front(value);
            self.append(&mut tail);
        }
    }

    fn get(&self, index: usize) -> Option<&i64> {
        let len = LinkedList::len(self);
        if index >= len {
            None
        } else if index < len / 2 {
            self.iter().nth(index)
        } else {
            self.iter().rev().nth(len - 1 - index)
        }
    }

    fn remove(&mut self, index: usize) -> Option<i64> {
        let len = LinkedList::len(self);
        if index >= len {
            None
        } else if index == 0 {
            self.pop_front()
        } else if index == len - 1 {
            self.pop_back()
        } else {
            let mut tail = self.split_off(index);
            let value = tail.pop_front();
            self.append(&mut tail);
            value
        }
    }

    fn sum(&self) -> i64 {
        self.iter().fold(0i64, |acc, v| acc.wrapping_add(*v))
    }
}
