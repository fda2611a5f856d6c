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

//! Candidate definitions.
//!
//! A candidate is a named unit of work. Its setup runs exactly once,
//! outside the timed window, and returns the procedure with all of its
//! inputs already bound; the harness then times back-to-back calls of
//! that procedure. Candidates are first-class closures, never
//! dynamically interpreted text.

use crate::config::RunConfig;
use crate::error::StepError;

/// The repeatedly-invoked unit of work. Only calls to this closure are
/// inside the timed window.
pub type Procedure = Box<dyn FnMut() -> Result<(), StepError>>;

/// One-shot preparation step. Receives the run configuration so it can
/// generate inputs of the configured size and seed, and returns the
/// procedure those inputs are bound to.
pub type Setup = Box<dyn FnOnce(&RunConfig) -> Result<Procedure, StepError>>;

/// A named, registrable unit of work.
pub struct Candidate {
    name: String,
    setup: Setup,
    notes: Option<String>,
}

impl Candidate {
    /// Creates a candidate from a setup step.
    ///
    /// # Example
    ///
    /// ```
    /// use lapmark::{Candidate, Procedure};
    ///
    /// let candidate = Candidate::new("sum", |config| {
    ///     let data: Vec<u64> = (0..config.input_size as u64).collect();
    ///     Ok(Box::new(move || {
    ///         let _ = data.iter().sum::<u64>();
    ///         Ok(())
    ///     }) as Procedure)
    /// });
    /// assert_eq!(candidate.name(), "sum");
    /// ```
    pub fn new<F>(name: impl Into<String>, setup: F) -> Self
    where
        F: FnOnce(&RunConfig) -> Result<Procedure, StepError> + 'static,
    {
        Self {
            name: name.into(),
            setup: Box::new(setup),
            notes: None,
        }
    }

    /// Creates a candidate that needs no preparation beyond the closure's
    /// own captures.
    pub fn from_procedure<F>(name: impl Into<String>, mut procedure: F) -> Self
    where
        F: FnMut() -> Result<(), StepError> + 'static,
    {
        Self::new(name, move |_config| {
            Ok(Box::new(move || procedure()) as Procedure)
        })
    }

    /// Attaches interpretation notes, e.g. whether the procedure clones
    /// its input per iteration or reuses its own state. Carried onto the
    /// produced result verbatim.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Returns the candidate's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the interpretation notes, if any.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Consumes the candidate, yielding its parts for execution.
    pub(crate) fn into_parts(self) -> (String, Setup, Option<String>) {
        (self.name, self.setup, self.notes)
    }
}

impl std::fmt::Debug for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Candidate")
            .field("name", &self.name)
            .field("notes", &self.notes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_binds_input_to_procedure() {
        let candidate = Candidate::new("count", |config| {
            let data = vec![1u64; config.input_size];
            Ok(Box::new(move || {
                assert_eq!(data.iter().sum::<u64>(), data.len() as u64);
                Ok(())
            }) as Procedure)
        });

        let config = RunConfig::default().with_input_size(8);
        let (_, setup, _) = candidate.into_parts();
        let mut procedure = setup(&config).unwrap();
        procedure().unwrap();
        procedure().unwrap();
    }

    #[test]
    fn test_from_procedure() {
        let candidate = Candidate::from_procedure("noop", || Ok(()));
        assert_eq!(candidate.name(), "noop");
        assert!(candidate.notes().is_none());
    }

    #[test]
    fn test_with_notes() {
        let candidate =
            Candidate::from_procedure("sorter", || Ok(())).with_notes("clones input per iteration");
        assert_eq!(candidate.notes(), Some("clones input per iteration"));
    }
}
