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

//! Console renderer.
//!
//! One line per candidate, in registration order:
//!
//! ```text
//! Time for double-pass: 0.000214 s
//! Time for getter-default: FAILED: candidate 'getter-default' failed at iteration 3: boom
//! ```

use crate::report::Report;

/// Renders the report as console lines.
///
/// Per-iteration durations are printed with six decimal places in
/// seconds; failed candidates get `FAILED: <reason>` in place of the
/// duration.
pub fn render(report: &Report) -> String {
    let mut out = String::new();
    for result in &report.results {
        match result.per_iteration_secs() {
            Some(secs) => {
                out.push_str(&format!("Time for {}: {:.6} s\n", result.name, secs));
            }
            None => {
                out.push_str(&format!(
                    "Time for {}: FAILED: {}\n",
                    result.name,
                    result.error().unwrap_or("unknown failure")
                ));
            }
        }
    }
    out
}

/// Renders the report and prints it to stdout.
pub fn print(report: &Report) {
    print!("{}", render(report));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::CaseResult;
    use std::time::Duration;

    #[test]
    fn test_render_format() {
        let mut report = Report::new("fmt");
        report.push(CaseResult::measured(
            "double-pass",
            100,
            Duration::from_millis(50),
        ));
        let rendered = render(&report);
        assert_eq!(rendered, "Time for double-pass: 0.000500 s\n");
    }

    #[test]
    fn test_render_failed_candidate() {
        let mut report = Report::new("fmt");
        report.push(CaseResult::failed("broken", 100, "induced failure"));
        let rendered = render(&report);
        assert_eq!(rendered, "Time for broken: FAILED: induced failure\n");
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut report = Report::new("idem");
        report.push(CaseResult::measured("a", 10, Duration::from_micros(123)));
        report.push(CaseResult::failed("b", 10, "nope"));
        assert_eq!(render(&report), render(&report));
    }

    #[test]
    fn test_render_preserves_order() {
        let mut report = Report::new("order");
        report.push(CaseResult::measured("first", 1, Duration::from_secs(1)));
        report.push(CaseResult::measured("second", 1, Duration::from_nanos(1)));
        let rendered = render(&report);
        let first_pos = rendered.find("first").unwrap();
        let second_pos = rendered.find("second").unwrap();
        assert!(first_pos < second_pos);
    }
}
