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

//! Harness execution.
//!
//! Candidates run one at a time, strictly in registration order. Each
//! candidate's setup runs once outside the timed window; only the
//! back-to-back procedure invocations are measured. Single invocations of
//! sub-millisecond work are dominated by timer overhead, hence the
//! repeat-and-divide discipline.

use std::collections::HashSet;
use std::time::Instant;

use crate::candidate::Candidate;
use crate::config::RunConfig;
use crate::error::{HarnessError, Result};
use crate::report::{CaseResult, Report};

/// Executes registered candidates against a shared configuration and
/// collects comparable timing results.
///
/// # Example
///
/// ```
/// use lapmark::{Candidate, Harness, RunConfig};
///
/// let mut harness = Harness::new("sum strategies");
/// harness.register(Candidate::from_procedure("noop", || Ok(())))?;
///
/// let report = harness.run(&RunConfig::new(10))?;
/// assert_eq!(report.results[0].name, "noop");
/// # Ok::<(), lapmark::HarnessError>(())
/// ```
pub struct Harness {
    title: String,
    candidates: Vec<Candidate>,
    names: HashSet<String>,
}

impl Harness {
    /// Creates an empty harness.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            candidates: Vec::new(),
            names: HashSet::new(),
        }
    }

    /// Registers a candidate for the next run.
    ///
    /// Fails with [`HarnessError::DuplicateName`] when a candidate of the
    /// same name is already registered; the earlier registration stays
    /// intact.
    pub fn register(&mut self, candidate: Candidate) -> Result<()> {
        if !self.names.insert(candidate.name().to_string()) {
            return Err(HarnessError::DuplicateName {
                name: candidate.name().to_string(),
            });
        }
        self.candidates.push(candidate);
        Ok(())
    }

    /// Registers every candidate in a suite.
    pub fn register_all(&mut self, candidates: impl IntoIterator<Item = Candidate>) -> Result<()> {
        for candidate in candidates {
            self.register(candidate)?;
        }
        Ok(())
    }

    /// Returns the number of registered candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns whether no candidates are registered.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Runs all registered candidates and produces a report.
    ///
    /// The configuration is validated before any candidate executes. A
    /// failing candidate is recorded as a failed result and does not stop
    /// later candidates, unless `config.strict` is set, in which case the
    /// failure is returned as [`HarnessError::CandidateFailed`].
    ///
    /// Consumes the harness: setup steps run at most once, and a report
    /// is produced once per invocation.
    pub fn run(self, config: &RunConfig) -> Result<Report> {
        config.validate()?;

        let mut report = Report::new(self.title);
        for candidate in self.candidates {
            let (name, setup, notes) = candidate.into_parts();
            let result = match Self::measure(&name, setup, config) {
                Ok(result) => result,
                Err(err) if config.strict => return Err(err),
                Err(err) => CaseResult::failed(&name, config.iterations, err.to_string()),
            };
            report.push(result.with_notes(notes));
        }
        Ok(report)
    }

    /// Runs one candidate: setup (untimed), then the timed loop.
    fn measure(
        name: &str,
        setup: crate::candidate::Setup,
        config: &RunConfig,
    ) -> Result<CaseResult> {
        let mut procedure = setup(config).map_err(|err| HarnessError::CandidateFailed {
            candidate: name.to_string(),
            iteration: None,
            message: err.to_string(),
        })?;

        let started = Instant::now();
        for iteration in 0..config.iterations {
            if let Err(err) = procedure() {
                return Err(HarnessError::CandidateFailed {
                    candidate: name.to_string(),
                    iteration: Some(iteration + 1),
                    message: err.to_string(),
                });
            }
        }
        let total = started.elapsed();

        Ok(CaseResult::measured(name, config.iterations, total))
    }
}
