// Serbench - Serialization Codec Benchmarks
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
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

//! Entities being benchmarked.
//!
//! All values are immutable after construction. Field names are serialized
//! in PascalCase, so a greeting encodes as
//! `{"From":{"Name":"Dad"},"To":{"Name":"Mom"},"Message":"a"}`.
//! Keys outside that shape are rejected on decode.

use serde::{Deserialize, Serialize};

/// A named participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Person {
    name: String,
}

impl Person {
    /// Creates a person with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The person's display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A message sent from one person to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Greeting {
    from: Person,
    to: Person,
    message: String,
}

impl Greeting {
    /// Creates a greeting from `from` to `to`.
    pub fn new(from: Person, to: Person, message: impl Into<String>) -> Self {
        Self {
            from,
            to,
            message: message.into(),
        }
    }

    /// Sender.
    pub fn from(&self) -> &Person {
        &self.from
    }

    /// Recipient.
    pub fn to(&self) -> &Person {
        &self.to
    }

    /// Message text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Ordered sequence of greetings used as benchmark input.
///
/// Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Workload {
    greetings: Vec<Greeting>,
}

impl Workload {
    /// Wraps greetings, keeping their order.
    pub fn new(greetings: Vec<Greeting>) -> Self {
        Self { greetings }
    }

    /// Number of greetings.
    pub fn len(&self) -> usize {
        self.greetings.len()
    }

    /// Returns true when the workload holds no greetings.
    pub fn is_empty(&self) -> bool {
        self.greetings.is_empty()
    }

    /// Greetings as a slice, in generation order.
    pub fn greetings(&self) -> &[Greeting] {
        &self.greetings
    }

    /// Iterates greetings in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Greeting> {
        self.greetings.iter()
    }

    /// Consumes the workload, returning the underlying vector.
    pub fn into_inner(self) -> Vec<Greeting> {
        self.greetings
    }
}

impl From<Vec<Greeting>> for Workload {
    fn from(greetings: Vec<Greeting>) -> Self {
        Self::new(greetings)
    }
}

impl FromIterator<Greeting> for Workload {
    fn from_iter<I: IntoIterator<Item = Greeting>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Workload {
    type Item = &'a Greeting;
    type IntoIter = std::slice::Iter<'a, Greeting>;

    fn into_iter(self) -> Self::IntoIter {
        self.greetings.iter()
    }
}
