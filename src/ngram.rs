// SPDX-License-Identifier: PMPL-1.0-or-later

//! Sliding-window n-gram counting over token sequences

use crate::types::{NGram, Token};
use indexmap::IndexMap;
use std::ops::RangeInclusive;

/// N-gram orders combined into one profile.
pub const ORDERS: RangeInclusive<usize> = 1..=5;

/// N-gram occurrence counts in first-encountered order.
///
/// Insertion order is what equal counts fall back to when ranking, so the
/// table is backed by an `IndexMap` rather than a `HashMap`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: IndexMap<NGram, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, ngram: NGram) {
        *self.counts.entry(ngram).or_insert(0) += 1;
    }

    /// Inserts every key of `other`. Keys already present take `other`'s
    /// count but keep their original position.
    pub fn merge(&mut self, other: FrequencyTable) {
        self.counts.extend(other.counts);
    }

    pub fn get(&self, ngram: &NGram) -> Option<u64> {
        self.counts.get(ngram).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NGram, u64)> {
        self.counts.iter().map(|(k, v)| (k, *v))
    }

    pub fn into_entries(self) -> Vec<(NGram, u64)> {
        self.counts.into_iter().collect()
    }
}

/// Counts every contiguous window of `n` tokens.
///
/// Returns an empty table when `n` is zero or longer than the sequence.
pub fn build_ngrams(tokens: &[Token], n: usize) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    if n == 0 {
        return table;
    }
    for window in tokens.windows(n) {
        table.increment(NGram::from_window(window));
    }
    table
}

/// Builds one table per order in `orders` and unions them.
pub fn merge_orders(tokens: &[Token], orders: RangeInclusive<usize>) -> FrequencyTable {
    let mut merged = FrequencyTable::new();
    for n in orders {
        merged.merge(build_ngrams(tokens, n));
    }
    merged
}
