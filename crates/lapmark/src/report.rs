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

//! Result and report types.
//!
//! A [`CaseResult`] is immutable once produced; a [`Report`] lists results
//! in candidate registration order, never sorted by measured speed, so
//! comparisons stay visually stable across runs.

use std::time::Duration;

/// Outcome of measuring one candidate.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    /// All iterations completed; `total` is the cumulative wall-clock
    /// time of the procedure invocations only.
    Measured {
        /// Total duration across all iterations.
        total: Duration,
    },
    /// Setup or an iteration failed; no duration is reported.
    Failed {
        /// Description of the failure, including the failing iteration
        /// where applicable.
        error: String,
    },
}

/// The measured result for a single candidate.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CaseResult {
    /// Candidate name.
    pub name: String,
    /// Number of iterations the run was configured for.
    pub iterations: u64,
    /// Measurement outcome.
    pub outcome: Outcome,
    /// Interpretation notes carried over from the candidate.
    pub notes: Option<String>,
}

impl CaseResult {
    /// Creates a successful result.
    pub fn measured(name: impl Into<String>, iterations: u64, total: Duration) -> Self {
        Self {
            name: name.into(),
            iterations,
            outcome: Outcome::Measured { total },
            notes: None,
        }
    }

    /// Creates a failed result.
    pub fn failed(name: impl Into<String>, iterations: u64, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            iterations,
            outcome: Outcome::Failed {
                error: error.into(),
            },
            notes: None,
        }
    }

    /// Attaches interpretation notes.
    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Returns whether the candidate completed all iterations.
    pub fn is_measured(&self) -> bool {
        matches!(self.outcome, Outcome::Measured { .. })
    }

    /// Returns the total duration, or `None` for failed candidates.
    pub fn total_duration(&self) -> Option<Duration> {
        match self.outcome {
            Outcome::Measured { total } => Some(total),
            Outcome::Failed { .. } => None,
        }
    }

    /// Returns the average duration of one iteration.
    ///
    /// `iterations` is always positive for a result produced by a run
    /// (the configuration is validated first), so the division is safe.
    /// Counts above `u32::MAX` take the float path, since `Duration`
    /// only divides by `u32` directly.
    pub fn per_iteration(&self) -> Option<Duration> {
        self.total_duration().map(|total| {
            let iterations = self.iterations.max(1);
            match u32::try_from(iterations) {
                Ok(n) => total / n,
                Err(_) => Duration::from_secs_f64(total.as_secs_f64() / iterations as f64),
            }
        })
    }

    /// Returns the average per-iteration duration in seconds.
    pub fn per_iteration_secs(&self) -> Option<f64> {
        self.total_duration()
            .map(|total| total.as_secs_f64() / self.iterations.max(1) as f64)
    }

    /// Returns the failure description for failed candidates.
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Failed { error } => Some(error),
            Outcome::Measured { .. } => None,
        }
    }
}

/// An ordered collection of results from one harness run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Report {
    /// Report title.
    pub title: String,
    /// RFC 3339 timestamp of report creation.
    pub timestamp: String,
    /// Results in candidate registration order.
    pub results: Vec<CaseResult>,
}

impl Report {
    /// Creates an empty report stamped with the current time.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            results: Vec::new(),
        }
    }

    /// Appends a result. Order of calls is preserved in the report.
    pub fn push(&mut self, result: CaseResult) {
        self.results.push(result);
    }

    /// Returns the number of results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns whether the report holds no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns the number of failed candidates.
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| !r.is_measured()).count()
    }
}
