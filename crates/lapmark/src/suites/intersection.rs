// Lapmark - Micro-benchmark Harness
//
// Copyright (c) 2025 Lapmark contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! List-intersection strategy candidates.
//!
//! Hash-set intersection against the "direct" sorted two-pointer merge,
//! over two unsorted, partially-overlapping integer lists. Both
//! strategies produce the same set of common elements. The merge
//! candidate clones and sorts its inputs inside the timed window so that
//! every iteration starts from the same unsorted state.

use std::collections::HashSet;
use std::hint::black_box;

use crate::candidate::{Candidate, Procedure};
use crate::error::StepError;
use crate::generators::interleaved_ranges;

/// Intersection via two hash sets. Output order is unspecified.
fn hash_intersection(first: &[i64], second: &[i64]) -> Vec<i64> {
    let a: HashSet<i64> = first.iter().copied().collect();
    let b: HashSet<i64> = second.iter().copied().collect();
    a.intersection(&b).copied().collect()
}

/// Intersection via sorting local copies and walking both with two
/// cursors. Output is sorted and unique; equal runs advance past
/// duplicates so repeated elements are emitted once.
fn sorted_merge_intersection(first: &[i64], second: &[i64]) -> Vec<i64> {
    let mut a = first.to_vec();
    let mut b = second.to_vec();
    a.sort_unstable();
    b.sort_unstable();

    let mut intersection = Vec::new();
    let mut i = 0;
    let mut j = 0;
    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            let value = a[i];
            intersection.push(value);
            while i < a.len() && a[i] == value {
                i += 1;
            }
            while j < b.len() && b[j] == value {
                j += 1;
            }
        } else if a[i] < b[j] {
            i += 1;
        } else {
            j += 1;
        }
    }
    intersection
}

fn intersection_candidate(
    name: &'static str,
    strategy: fn(&[i64], &[i64]) -> Vec<i64>,
    notes: &'static str,
) -> Candidate {
    Candidate::new(name, move |config| {
        let (first, second) =
            interleaved_ranges(config.input_size).map_err(|err| Box::new(err) as StepError)?;
        Ok(Box::new(move || {
            black_box(strategy(&first, &second));
            Ok(())
        }) as Procedure)
    })
    .with_notes(notes)
}

/// Returns the intersection candidates in their fixed order.
pub fn candidates() -> Vec<Candidate> {
    vec![
        intersection_candidate(
            "hash-set",
            hash_intersection,
            "builds both sets inside the timed window",
        ),
        intersection_candidate(
            "sorted-merge",
            sorted_merge_intersection,
            "clones and sorts both lists inside the timed window",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategies_agree() {
        let (first, second) = interleaved_ranges(500).unwrap();
        let mut hashed = hash_intersection(&first, &second);
        hashed.sort_unstable();
        let merged = sorted_merge_intersection(&first, &second);
        assert_eq!(hashed, merged);
        assert!(!merged.is_empty());
    }

    #[test]
    fn test_merge_emits_unique_sorted_elements() {
        let merged = sorted_merge_intersection(&[3, 1, 3, 2], &[3, 3, 2, 9]);
        assert_eq!(merged, vec![2, 3]);
    }

    #[test]
    fn test_disjoint_lists() {
        assert!(hash_intersection(&[1, 3], &[2, 4]).is_empty());
        assert!(sorted_merge_intersection(&[1, 3], &[2, 4]).is_empty());
    }

    #[test]
    fn test_candidate_order_is_stable() {
        let names: Vec<String> = candidates()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(names, vec!["hash-set", "sorted-merge"]);
    }
}
