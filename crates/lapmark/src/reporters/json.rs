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

//! JSON export for machine-readable reports.

use std::path::Path;

use crate::error::{HarnessError, Result};
use crate::report::Report;

/// Serializes the report as pretty-printed JSON.
pub fn to_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|err| HarnessError::Serialize(err.to_string()))
}

/// Serializes the report and writes it to `path`.
pub fn save(report: &Report, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = to_json(report)?;
    std::fs::write(path, json).map_err(|err| HarnessError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}
