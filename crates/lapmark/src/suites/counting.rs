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

//! Map-counting idiom candidates.
//!
//! Five interchangeable ways of building an occurrence count over the
//! same word list. Every idiom produces identical counts; only the
//! insertion strategy differs. With `interleaved_input` set, each
//! procedure generates its words inside the timed window instead of
//! counting a batch prepared during setup.

use std::collections::HashMap;
use std::hint::black_box;

use crate::candidate::{Candidate, Procedure};
use crate::error::StepError;
use crate::generators::{random_word, random_words, rng_for_seed};

/// Two passes: initialize every key to zero, then increment.
fn double_pass(words: &[String]) -> HashMap<&str, u64> {
    let mut map: HashMap<&str, u64> = HashMap::with_capacity(words.len());
    for word in words {
        map.insert(word.as_str(), 0);
    }
    for word in words {
        *map.get_mut(word.as_str()).expect("key inserted in first pass") += 1;
    }
    map
}

/// Read with a zero default, then write back.
fn getter_default(words: &[String]) -> HashMap<&str, u64> {
    let mut map: HashMap<&str, u64> = HashMap::new();
    for word in words {
        let count = map.get(word.as_str()).copied().unwrap_or(0);
        map.insert(word.as_str(), count + 1);
    }
    map
}

/// Probe for an existing slot and branch on the result.
fn probe_then_insert(words: &[String]) -> HashMap<&str, u64> {
    let mut map: HashMap<&str, u64> = HashMap::new();
    for word in words {
        match map.get_mut(word.as_str()) {
            Some(count) => *count += 1,
            None => {
                map.insert(word.as_str(), 1);
            }
        }
    }
    map
}

/// Single entry-API lookup per word.
fn entry_api(words: &[String]) -> HashMap<&str, u64> {
    let mut map: HashMap<&str, u64> = HashMap::new();
    for word in words {
        *map.entry(word.as_str()).or_insert(0) += 1;
    }
    map
}

/// One-shot fold, the closest idiom to a dedicated counter constructor.
fn fold_counter(words: &[String]) -> HashMap<&str, u64> {
    words.iter().fold(HashMap::new(), |mut map, word| {
        *map.entry(word.as_str()).or_insert(0) += 1;
        map
    })
}

/// Builds one counting candidate around an idiom function.
///
/// Batch mode prepares the word list during setup and only counts inside
/// the timed window; interleaved mode regenerates the words inside the
/// window as well.
fn counting_candidate(
    name: &'static str,
    idiom: fn(&[String]) -> HashMap<&str, u64>,
) -> Candidate {
    Candidate::new(name, move |config| {
        let procedure: Procedure = if config.interleaved_input {
            let mut rng = rng_for_seed(config.seed_or_default());
            let count = config.input_size;
            Box::new(move || {
                let words: Vec<String> = (0..count).map(|_| random_word(&mut rng)).collect();
                black_box(idiom(&words));
                Ok(())
            })
        } else {
            let words = random_words(config.input_size, config.seed_or_default())
                .map_err(|err| Box::new(err) as StepError)?;
            Box::new(move || {
                black_box(idiom(&words));
                Ok(())
            })
        };
        Ok(procedure)
    })
    .with_notes("rebuilds its count map every iteration")
}

/// Returns the counting candidates in their fixed order.
pub fn candidates() -> Vec<Candidate> {
    vec![
        counting_candidate("double-pass", double_pass),
        counting_candidate("getter-default", getter_default),
        counting_candidate("probe-then-insert", probe_then_insert),
        counting_candidate("entry-api", entry_api),
        counting_candidate("fold-counter", fold_counter),
    ]
}
