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

//! Contract tests for the harness public surface.
//!
//! Covers registration, configuration validation, fault isolation,
//! report ordering, rendering idempotence, and the end-to-end counting
//! scenario.

use std::time::Duration;

use lapmark::{reporters, suites, Candidate, Harness, HarnessError, RunConfig};

#[test]
fn noop_candidate_yields_nonnegative_per_iteration_for_any_n() {
    for n in [1u64, 10, 1_000] {
        let mut harness = Harness::new("noop");
        harness
            .register(Candidate::from_procedure("noop", || Ok(())))
            .unwrap();
        let report = harness.run(&RunConfig::new(n)).unwrap();
        let result = &report.results[0];
        assert_eq!(result.iterations, n);
        assert!(result.per_iteration_secs().unwrap() >= 0.0);
    }
}

#[test]
fn total_duration_grows_with_iteration_count() {
    let run = |n: u64| {
        let mut harness = Harness::new("sleeper");
        harness
            .register(Candidate::from_procedure("sleeper", || {
                std::thread::sleep(Duration::from_millis(2));
                Ok(())
            }))
            .unwrap();
        harness.run(&RunConfig::new(n)).unwrap().results[0]
            .total_duration()
            .unwrap()
    };

    assert!(run(5) > run(1));
}

#[test]
fn zero_iterations_fail_and_produce_no_results() {
    let mut harness = Harness::new("zero");
    harness
        .register(Candidate::from_procedure("noop", || Ok(())))
        .unwrap();
    let err = harness.run(&RunConfig::new(0)).unwrap_err();
    assert!(matches!(err, HarnessError::InvalidConfig { .. }));
}

#[test]
fn duplicate_names_are_rejected_and_first_survives() {
    let mut harness = Harness::new("dup");
    harness
        .register(Candidate::from_procedure("same", || Ok(())))
        .unwrap();
    assert!(matches!(
        harness.register(Candidate::from_procedure("same", || Ok(()))),
        Err(HarnessError::DuplicateName { .. })
    ));

    let report = harness.run(&RunConfig::new(1)).unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report.results[0].name, "same");
}

#[test]
fn report_lists_slower_first_registrant_first() {
    let mut harness = Harness::new("order");
    harness
        .register(Candidate::from_procedure("a-slow", || {
            std::thread::sleep(Duration::from_micros(500));
            Ok(())
        }))
        .unwrap();
    harness
        .register(Candidate::from_procedure("b-fast", || Ok(())))
        .unwrap();

    let report = harness.run(&RunConfig::new(5)).unwrap();
    assert_eq!(report.results[0].name, "a-slow");
    assert_eq!(report.results[1].name, "b-fast");
    assert!(
        report.results[0].total_duration().unwrap() > report.results[1].total_duration().unwrap()
    );
}

#[test]
fn failure_on_third_iteration_is_reported_once_and_isolated() {
    let mut harness = Harness::new("isolation");
    let mut count = 0u64;
    harness
        .register(Candidate::from_procedure("flaky", move || {
            count += 1;
            if count == 3 {
                Err("induced failure".into())
            } else {
                Ok(())
            }
        }))
        .unwrap();
    harness
        .register(Candidate::from_procedure("healthy", || Ok(())))
        .unwrap();

    let report = harness.run(&RunConfig::new(10)).unwrap();
    assert_eq!(report.len(), 2);
    assert_eq!(report.failure_count(), 1);

    let flaky = &report.results[0];
    assert!(flaky.error().unwrap().contains("iteration 3"));
    assert!(report.results[1].is_measured());
}

#[test]
fn render_is_a_pure_function_of_the_report() {
    let mut harness = Harness::new("idempotent");
    harness
        .register(Candidate::from_procedure("noop", || Ok(())))
        .unwrap();
    let report = harness.run(&RunConfig::new(10)).unwrap();

    let first = reporters::console::render(&report);
    let second = reporters::console::render(&report);
    assert_eq!(first, second);
}

#[test]
fn end_to_end_counting_scenario() {
    let mut harness = Harness::new("counting idioms");
    let by_name = |name: &str| {
        suites::counting::candidates()
            .into_iter()
            .find(|c| c.name() == name)
            .unwrap()
    };
    harness.register(by_name("double-pass")).unwrap();
    harness.register(by_name("getter-default")).unwrap();

    let config = RunConfig::new(100).with_input_size(10_000).with_seed(42);
    let report = harness.run(&config).unwrap();

    assert_eq!(report.results[0].name, "double-pass");
    assert_eq!(report.results[1].name, "getter-default");
    for result in &report.results {
        assert!(result.per_iteration_secs().unwrap() > 0.0);
    }
}
