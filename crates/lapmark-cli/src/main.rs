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

//! Lapmark Command Line Interface
//!
//! Registers the fixed candidate suites, runs them under one shared
//! configuration, and prints one timing line per candidate to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lapmark::{reporters, suites, Harness, RunConfig};

/// Lapmark - compare interchangeable algorithm implementations
///
/// Runs the built-in candidate suites (map counting, list intersection,
/// tokenization) with repeated timing and prints the normalized
/// per-iteration duration for each candidate.
///
/// # Examples
///
/// ```bash
/// # Default run: 100 iterations over 10,000 elements, seed 42
/// lapmark
///
/// # Fewer iterations over a smaller input
/// lapmark --iterations 10 --input-size 1000
///
/// # Generate input inside the timed window
/// lapmark --live
///
/// # Save the report as JSON alongside the console output
/// lapmark --json report.json
/// ```
#[derive(Parser)]
#[command(name = "lapmark")]
#[command(author, version, about = "Lapmark - micro-benchmark candidate suites", long_about = None)]
struct Cli {
    /// Number of timed invocations per candidate
    #[arg(long, default_value_t = 100)]
    iterations: u64,

    /// Size of the generated input dataset
    #[arg(long, default_value_t = 10_000)]
    input_size: usize,

    /// Seed for reproducible input generation
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Generate input elements inside the timed window
    #[arg(long)]
    live: bool,

    /// Abort the whole run on the first candidate failure
    #[arg(long)]
    strict: bool,

    /// Write the report as JSON to the given path
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = RunConfig::new(cli.iterations)
        .with_input_size(cli.input_size)
        .with_seed(cli.seed)
        .with_interleaved_input(cli.live)
        .with_strict(cli.strict);

    match run(&config, cli.json.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &RunConfig, json_path: Option<&std::path::Path>) -> lapmark::Result<()> {
    let mut harness = Harness::new("lapmark candidate suites");
    harness.register_all(suites::counting::candidates())?;
    harness.register_all(suites::intersection::candidates())?;
    harness.register_all(suites::tokens::candidates())?;

    let report = harness.run(config)?;
    reporters::console::print(&report);

    if let Some(path) = json_path {
        reporters::json::save(&report, path)?;
    }
    Ok(())
}
