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

//! Fixed candidate suites.
//!
//! Each suite returns its candidates in a stable order; the order in
//! which suites are registered fixes the report layout.
//!
//! - `counting`: map-counting idioms over generated words
//! - `intersection`: hash-set vs sorted-merge list intersection
//! - `tokens`: tokenization and text-equality strategies

pub mod counting;
pub mod intersection;
pub mod tokens;
