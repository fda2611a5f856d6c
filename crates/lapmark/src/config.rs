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

//! Run configuration.
//!
//! A single configuration applies to every candidate in a run: iteration
//! count, synthetic input size, seed, and the flags controlling
//! interleaved input generation and strict error propagation.

use crate::error::{validate_input_size, HarnessError, Result};

/// Default iteration count per candidate.
pub const DEFAULT_ITERATIONS: u64 = 100;

/// Default synthetic input size.
pub const DEFAULT_INPUT_SIZE: usize = 10_000;

/// Configuration for a single harness run.
///
/// # Example
///
/// ```
/// use lapmark::RunConfig;
///
/// let config = RunConfig::new(100)
///     .with_input_size(10_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Number of back-to-back procedure invocations per candidate.
    pub iterations: u64,
    /// Size of the generated input dataset.
    pub input_size: usize,
    /// Seed for reproducible input generation.
    pub seed: Option<u64>,
    /// When set, candidates generate their input elements inside the
    /// timed window instead of consuming one batch built during setup.
    pub interleaved_input: bool,
    /// When set, a candidate failure aborts the whole run instead of
    /// being recorded as a failed result.
    pub strict: bool,
}

impl RunConfig {
    /// Creates a configuration with the given iteration count.
    pub fn new(iterations: u64) -> Self {
        Self {
            iterations,
            input_size: DEFAULT_INPUT_SIZE,
            seed: None,
            interleaved_input: false,
            strict: false,
        }
    }

    /// Sets the synthetic input size.
    pub fn with_input_size(mut self, input_size: usize) -> Self {
        self.input_size = input_size;
        self
    }

    /// Sets the generation seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables interleaved input generation.
    pub fn with_interleaved_input(mut self, interleaved: bool) -> Self {
        self.interleaved_input = interleaved;
        self
    }

    /// Enables strict error propagation.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns the seed, or a fixed fallback for unseeded runs.
    ///
    /// Unseeded runs still use a deterministic generator; timing noise
    /// dominates any value the data itself could add.
    pub fn seed_or_default(&self) -> u64 {
        self.seed.unwrap_or(0)
    }

    /// Validates run preconditions.
    ///
    /// Fails with [`HarnessError::InvalidConfig`] if `iterations` is zero
    /// (per-iteration averaging would divide by zero) or the input size
    /// exceeds the global cap.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(HarnessError::InvalidConfig {
                parameter: "iterations".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        validate_input_size(self.input_size)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}
