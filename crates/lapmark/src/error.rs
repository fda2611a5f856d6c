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

//! Error types for harness operations.
//!
//! Configuration errors fail fast before any candidate runs; per-candidate
//! execution errors are isolated so one failing candidate cannot take down
//! the rest of the batch.

use thiserror::Error;

/// Maximum synthetic input size (10 million elements).
///
/// Guards against memory exhaustion from an oversized input request.
/// Meaningful micro-benchmarks use far smaller inputs.
pub const MAX_INPUT_SIZE: usize = 10_000_000;

/// Result type for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Errors produced by candidate registration, run execution, and report
/// export.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// A candidate with the same name is already registered.
    #[error("candidate '{name}' is already registered")]
    DuplicateName {
        /// The conflicting candidate name.
        name: String,
    },

    /// A run configuration parameter violates a precondition.
    #[error("invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name.
        parameter: String,
        /// Reason for invalidity.
        reason: String,
    },

    /// A candidate's setup or procedure failed.
    ///
    /// `iteration` is `None` when the failure happened during setup,
    /// otherwise the 1-based iteration that failed.
    #[error("candidate '{candidate}' failed{}: {message}", .iteration.map(|i| format!(" at iteration {}", i)).unwrap_or_default())]
    CandidateFailed {
        /// Name of the failing candidate.
        candidate: String,
        /// 1-based iteration number, or `None` for setup failures.
        iteration: Option<u64>,
        /// Underlying error message.
        message: String,
    },

    /// Writing an exported report failed.
    #[error("failed to write report to '{path}': {message}")]
    Io {
        /// Target path.
        path: String,
        /// Underlying I/O error message.
        message: String,
    },

    /// Serializing a report failed.
    #[error("failed to serialize report: {0}")]
    Serialize(String),
}

/// Error type raised from inside a candidate's setup or procedure.
///
/// Suite code propagates its own failures with `?`; the harness wraps
/// whatever comes out into [`HarnessError::CandidateFailed`].
pub type StepError = Box<dyn std::error::Error + Send + Sync>;

/// Validates that a synthetic input size is within acceptable limits.
#[inline]
pub fn validate_input_size(size: usize) -> Result<()> {
    if size > MAX_INPUT_SIZE {
        Err(HarnessError::InvalidConfig {
            parameter: "input_size".to_string(),
            reason: format!("{} exceeds maximum of {}", size, MAX_INPUT_SIZE),
        })
    } else {
        Ok(())
    }
}
