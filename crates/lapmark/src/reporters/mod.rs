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

//! Report renderers.
//!
//! All renderers are pure functions of the report contents: rendering
//! the same report twice produces identical output.
//!
//! - `console`: one line per candidate for terminal output
//! - `json`: machine-readable export
//! - `markdown`: table form for documentation

pub mod console;
pub mod json;
pub mod markdown;

pub use console::render;
pub use json::to_json;
pub use markdown::render_markdown;
