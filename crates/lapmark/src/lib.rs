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

//! Lapmark Micro-benchmark Harness
//!
//! Runs named, interchangeable candidate implementations against
//! identical input under controlled timing and reports normalized
//! per-iteration durations.
//!
//! ## Features
//!
//! - **Candidates as closures**: each unit of work is a first-class
//!   callable with a one-shot, untimed setup step
//! - **Fault isolation**: one failing candidate never takes down the run
//! - **Stable reports**: results stay in registration order, never
//!   sorted by measured speed
//!
//! ## Usage
//!
//! ```
//! use lapmark::{reporters, Candidate, Harness, Procedure, RunConfig};
//!
//! let mut harness = Harness::new("summing strategies");
//! harness.register(Candidate::new("iter-sum", |config| {
//!     let data: Vec<u64> = (0..config.input_size as u64).collect();
//!     Ok(Box::new(move || {
//!         std::hint::black_box(data.iter().sum::<u64>());
//!         Ok(())
//!     }) as Procedure)
//! }))?;
//!
//! let report = harness.run(&RunConfig::new(100).with_input_size(1_000))?;
//! print!("{}", reporters::console::render(&report));
//! # Ok::<(), lapmark::HarnessError>(())
//! ```

pub mod candidate;
pub mod config;
pub mod error;
pub mod generators;
pub mod harness;
pub mod report;
pub mod reporters;
pub mod suites;
pub mod token;

// Re-export key types for convenience
pub use candidate::{Candidate, Procedure, Setup};
pub use config::{RunConfig, DEFAULT_INPUT_SIZE, DEFAULT_ITERATIONS};
pub use error::{validate_input_size, HarnessError, Result, StepError, MAX_INPUT_SIZE};
pub use harness::Harness;
pub use report::{CaseResult, Outcome, Report};
pub use token::{ComparableAsText, EntityToken};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_counting_run() {
        let mut harness = Harness::new("counting idioms");
        harness.register_all(suites::counting::candidates()).unwrap();

        let config = RunConfig::new(3).with_input_size(256).with_seed(42);
        let report = harness.run(&config).unwrap();

        assert_eq!(report.len(), 5);
        assert!(report.results.iter().all(|r| r.is_measured()));
        assert!(report
            .results
            .iter()
            .all(|r| r.per_iteration_secs().unwrap() > 0.0));
        assert_eq!(report.results[0].name, "double-pass");
        assert_eq!(report.results[1].name, "getter-default");
    }

    #[test]
    fn test_render_after_full_run() {
        let mut harness = Harness::new("render");
        harness.register_all(suites::intersection::candidates()).unwrap();

        let config = RunConfig::new(2).with_input_size(128);
        let report = harness.run(&config).unwrap();
        let rendered = reporters::console::render(&report);
        assert!(rendered.starts_with("Time for hash-set: "));
        assert!(rendered.contains("Time for sorted-merge: "));
    }
}
