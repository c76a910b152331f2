// SPDX-License-Identifier: PMPL-1.0-or-later

//! Out-of-place rank distance between two ranked n-gram lists.
//!
//! For each sample n-gram at rank `i` that the reference holds at rank `j`,
//! the signed offset `i - j` is added (offsets are NOT made absolute, so
//! positive and negative displacements cancel). A sample n-gram missing from
//! the reference costs [`OOV_PENALTY`]. Lower totals mean more similar text.
//! The measure is not symmetric.

use crate::profile::PROFILE_SIZE;
use crate::types::NGram;
use std::collections::HashMap;

/// Cost of a sample n-gram that the reference profile does not contain.
pub const OOV_PENALTY: i64 = PROFILE_SIZE as i64;

pub fn out_of_place_distance(reference: &[&NGram], sample: &[&NGram]) -> i64 {
    let positions: HashMap<&NGram, usize> = reference
        .iter()
        .enumerate()
        .map(|(j, ngram)| (*ngram, j))
        .collect();

    let mut distance: i64 = 0;
    for (i, ngram) in sample.iter().enumerate() {
        match positions.get(*ngram) {
            Some(&j) => distance += i as i64 - j as i64,
            None => distance += OOV_PENALTY,
        }
    }
    distance
}
