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

//! Tokenization and text-equality candidates.
//!
//! Two token-counting strategies over the same generated text, and two
//! equality sweeps comparing a token sequence against its plain-text
//! form through [`ComparableAsText`]. Real tokenizer models are outside
//! this crate; both counters here are cheap approximations whose
//! relative cost is the interesting part.

use std::hint::black_box;

use crate::candidate::{Candidate, Procedure};
use crate::error::StepError;
use crate::generators::{random_text, random_words};
use crate::token::{sequence_text_eq, ComparableAsText, EntityToken};

/// Counts tokens by whitespace splitting.
fn whitespace_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Counts tokens by scanning for alphanumeric runs.
fn char_scan_count(text: &str) -> usize {
    let mut count = 0;
    let mut in_token = false;
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if !in_token {
                count += 1;
                in_token = true;
            }
        } else {
            in_token = false;
        }
    }
    count
}

fn counting_candidate(name: &'static str, counter: fn(&str) -> usize) -> Candidate {
    Candidate::new(name, move |config| {
        let text = random_text(config.input_size, config.seed_or_default())
            .map_err(|err| Box::new(err) as StepError)?;
        Ok(Box::new(move || {
            black_box(counter(&text));
            Ok(())
        }) as Procedure)
    })
    .with_notes("scans a pre-generated text")
}

/// Sweeps a sequence of values against plain words. Both equality
/// candidates rebuild the reference slice inside the timed window so
/// their per-iteration cost stays comparable.
fn equality_candidate<T, F>(name: &'static str, build: F) -> Candidate
where
    T: ComparableAsText + 'static,
    F: Fn(&[String]) -> Vec<T> + 'static,
{
    Candidate::new(name, move |config| {
        let words = random_words(config.input_size, config.seed_or_default())
            .map_err(|err| Box::new(err) as StepError)?;
        let values = build(&words);
        Ok(Box::new(move || {
            let refs: Vec<&str> = words.iter().map(String::as_str).collect();
            if !sequence_text_eq(&values, &refs) {
                return Err("equality sweep diverged from its own input".into());
            }
            Ok(())
        }) as Procedure)
    })
    .with_notes("rebuilds the reference slice every iteration")
}

/// Returns the tokenization candidates in their fixed order.
pub fn candidates() -> Vec<Candidate> {
    vec![
        counting_candidate("whitespace-split", whitespace_count),
        counting_candidate("char-scan", char_scan_count),
        equality_candidate("token-text-eq", |words| {
            words
                .iter()
                .enumerate()
                .map(|(i, word)| EntityToken::new(word.clone(), format!("ENT{:05}", i)))
                .collect::<Vec<EntityToken>>()
        }),
        equality_candidate("string-text-eq", |words| words.to_vec()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Harness, RunConfig};

    #[test]
    fn test_counters_agree_on_generated_text() {
        let text = random_text(200, 42).unwrap();
        assert_eq!(whitespace_count(&text), 200);
        assert_eq!(char_scan_count(&text), 200);
    }

    #[test]
    fn test_char_scan_handles_punctuation() {
        assert_eq!(char_scan_count("a, b; c"), 3);
        assert_eq!(char_scan_count(""), 0);
        assert_eq!(char_scan_count("   "), 0);
    }

    #[test]
    fn test_candidate_order_is_stable() {
        let names: Vec<String> = candidates()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "whitespace-split",
                "char-scan",
                "token-text-eq",
                "string-text-eq",
            ]
        );
    }

    #[test]
    fn test_equality_sweeps_succeed() {
        let mut harness = Harness::new("tokens");
        harness.register_all(candidates()).unwrap();
        let report = harness
            .run(&RunConfig::new(2).with_input_size(64).with_seed(1))
            .unwrap();
        assert!(report.results.iter().all(|r| r.is_measured()));
    }
}
