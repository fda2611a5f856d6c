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

//! Markdown renderer for documentation-friendly reports.

use crate::report::Report;

/// Escapes pipe characters so free-form text cannot break table cells.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Renders the report as a Markdown document with a result table.
pub fn render_markdown(report: &Report) -> String {
    let mut md = String::new();
    md.push_str(&format!("# {}\n\n", report.title));
    md.push_str(&format!("Generated: {}\n\n", report.timestamp));
    md.push_str("| Candidate | Iterations | Per-iteration (s) | Notes |\n");
    md.push_str("|-----------|-----------:|------------------:|-------|\n");

    for result in &report.results {
        let timing = match result.per_iteration_secs() {
            Some(secs) => format!("{:.6}", secs),
            None => format!(
                "FAILED: {}",
                escape_cell(result.error().unwrap_or("unknown failure"))
            ),
        };
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            escape_cell(&result.name),
            result.iterations,
            timing,
            escape_cell(result.notes.as_deref().unwrap_or(""))
        ));
    }

    md
}
