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

//! Synthetic input generators.
//!
//! All generation is seeded and deterministic: the same seed and size
//! always produce the same inputs, so candidates compete on identical
//! data across runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{validate_input_size, Result};

const ASCII_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of each generated word. Four letters over a 52-letter alphabet
/// gives enough collisions at 10k elements for counting idioms to see
/// realistic duplicate rates.
pub const WORD_LEN: usize = 4;

/// Creates the seeded generator used by all word generation.
pub fn rng_for_seed(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generates a single random word.
pub fn random_word(rng: &mut StdRng) -> String {
    (0..WORD_LEN)
        .map(|_| ASCII_LETTERS[rng.gen_range(0..ASCII_LETTERS.len())] as char)
        .collect()
}

/// Generates `count` random words.
pub fn random_words(count: usize, seed: u64) -> Result<Vec<String>> {
    validate_input_size(count)?;
    let mut rng = rng_for_seed(seed);
    Ok((0..count).map(|_| random_word(&mut rng)).collect())
}

/// Builds the two partially-overlapping integer lists used by the
/// intersection candidates.
///
/// For each `i` in `0..n`, the first list receives `i * 2` and `i * 6`,
/// the second `i * 4` and `i * 3`, so both lists are unsorted and about
/// a third of the elements coincide.
pub fn interleaved_ranges(n: usize) -> Result<(Vec<i64>, Vec<i64>)> {
    validate_input_size(n)?;
    let mut first = Vec::with_capacity(n * 2);
    let mut second = Vec::with_capacity(n * 2);
    for i in 0..n as i64 {
        first.push(i * 2);
        second.push(i * 4);
        first.push(i * 6);
        second.push(i * 3);
    }
    Ok((first, second))
}

/// Joins generated words into a whitespace-separated text, for the
/// tokenization candidates.
pub fn random_text(word_count: usize, seed: u64) -> Result<String> {
    Ok(random_words(word_count, seed)?.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MAX_INPUT_SIZE;

    #[test]
    fn test_words_are_deterministic_per_seed() {
        let a = random_words(100, 42).unwrap();
        let b = random_words(100, 42).unwrap();
        let c = random_words(100, 43).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_word_shape() {
        let words = random_words(50, 7).unwrap();
        assert_eq!(words.len(), 50);
        assert!(words
            .iter()
            .all(|w| w.len() == WORD_LEN && w.bytes().all(|b| b.is_ascii_alphabetic())));
    }

    #[test]
    fn test_interleaved_ranges_overlap() {
        let (first, second) = interleaved_ranges(100).unwrap();
        assert_eq!(first.len(), 200);
        assert_eq!(second.len(), 200);
        // i*6 and i*3 coincide for even i, among others.
        assert!(first.iter().any(|v| second.contains(v)));
    }

    #[test]
    fn test_size_cap_enforced() {
        assert!(random_words(MAX_INPUT_SIZE + 1, 0).is_err());
        assert!(interleaved_ranges(MAX_INPUT_SIZE + 1).is_err());
    }

    #[test]
    fn test_random_text_is_space_separated() {
        let text = random_text(10, 1).unwrap();
        assert_eq!(text.split(' ').count(), 10);
    }
}
