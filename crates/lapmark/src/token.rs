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

//! Tokens comparable against plain text.
//!
//! An [`EntityToken`] carries an entity reference alongside its surface
//! text. Full equality between tokens compares both fields; comparing a
//! token against plain text goes through [`ComparableAsText`], which
//! names the representation being compared instead of hiding it behind
//! an asymmetric `==` overload.

/// Capability for values that can be compared against plain text by
/// their surface form.
pub trait ComparableAsText {
    /// Returns whether this value's textual representation equals `text`.
    fn text_eq(&self, text: &str) -> bool;
}

/// A token with surface text and an entity reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct EntityToken {
    /// Surface text of the token.
    pub text: String,
    /// Identifier of the entity the token refers to.
    pub entity_ref: String,
}

impl EntityToken {
    /// Creates a token.
    pub fn new(text: impl Into<String>, entity_ref: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            entity_ref: entity_ref.into(),
        }
    }
}

impl ComparableAsText for EntityToken {
    fn text_eq(&self, text: &str) -> bool {
        self.text == text
    }
}

// Plain text compares against itself, so mixed sequences of tokens and
// strings can be swept with one bound.
impl ComparableAsText for str {
    fn text_eq(&self, text: &str) -> bool {
        self == text
    }
}

impl ComparableAsText for String {
    fn text_eq(&self, text: &str) -> bool {
        self == text
    }
}

/// Compares a sequence of text-comparable values against a sequence of
/// plain words, element by element.
pub fn sequence_text_eq<T: ComparableAsText>(values: &[T], words: &[&str]) -> bool {
    values.len() == words.len()
        && values
            .iter()
            .zip(words.iter())
            .all(|(value, word)| value.text_eq(word))
}
