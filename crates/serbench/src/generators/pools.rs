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

//! Static candidate pools for workload generation.

use crate::model::Person;

/// Person reserved as the benchmark operator; never a recipient.
pub const DEFAULT_SELF_NAME: &str = "Joseph";

/// Candidate senders and recipients.
pub const DEFAULT_PEOPLE: &[&str] = &[
    "Dad",
    "David Blaine",
    "Joseph",
    "Mike Oxsmaul",
    "Moe Lester",
    "Mom",
    "Scatman",
    "Sean",
    "Walter White",
];

/// Candidate message bodies.
pub const DEFAULT_MESSAGES: &[&str] = &[
    "a", "aaa", "bang", "bing", "eee", "oo", "ooo", "tang", "ting", "walla", "welcome",
];

/// Builds [`Person`] values from a list of names.
pub fn people_from_names<S: AsRef<str>>(names: &[S]) -> Vec<Person> {
    names.iter().map(|n| Person::new(n.as_ref())).collect()
}

/// Default people pool as owned values.
pub fn default_people() -> Vec<Person> {
    people_from_names(DEFAULT_PEOPLE)
}

/// Default message pool as owned values.
pub fn default_messages() -> Vec<String> {
    DEFAULT_MESSAGES.iter().map(|m| m.to_string()).collect()
}
