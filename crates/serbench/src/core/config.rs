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

//! Centralized benchmark configuration.
//!
//! Holds the workload size, candidate pools, self identity, random seed and
//! codec parameters. Values can be built in code, loaded from a JSON file,
//! or mixed: every field missing from the file falls back to its default.

use crate::codec::{CodecKind, DEFAULT_COMPRESSION_LEVEL, MAX_COMPRESSION_LEVEL};
use crate::error::{validate_workload_size, BenchError, Result};
use crate::generators::{people_from_names, DEFAULT_MESSAGES, DEFAULT_PEOPLE, DEFAULT_SELF_NAME};
use crate::model::Person;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of greetings per run.
pub const DEFAULT_WORKLOAD_SIZE: usize = 100_000;

/// Benchmark configuration.
///
/// # Example
///
/// ```
/// use serbench::core::config::BenchConfig;
///
/// let config = BenchConfig::default()
///     .with_workload_size(1_000)
///     .with_seed(42)
///     .with_compression_level(9);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Greetings generated per run.
    pub workload_size: usize,
    /// Seed for the session's random source; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Name of the person who never receives a greeting.
    pub self_name: String,
    /// Candidate person names.
    pub people: Vec<String>,
    /// Candidate message bodies.
    pub messages: Vec<String>,
    /// Gzip level for the compressed codec (0-9).
    pub compression_level: u32,
    /// Compare each decoded workload against the original.
    pub verify_round_trip: bool,
}

impl BenchConfig {
    /// Sets the workload size.
    pub fn with_workload_size(mut self, size: usize) -> Self {
        self.workload_size = size;
        self
    }

    /// Sets a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the self identity.
    pub fn with_self_name(mut self, name: impl Into<String>) -> Self {
        self.self_name = name.into();
        self
    }

    /// Replaces the people pool.
    pub fn with_people<S: Into<String>>(mut self, people: impl IntoIterator<Item = S>) -> Self {
        self.people = people.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the message pool.
    pub fn with_messages<S: Into<String>>(mut self, messages: impl IntoIterator<Item = S>) -> Self {
        self.messages = messages.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the gzip level.
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = level;
        self
    }

    /// Enables or disables round-trip verification.
    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify_round_trip = verify;
        self
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// [`BenchError::Config`] if the file cannot be read or parsed.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| BenchError::Config(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| BenchError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Checks every parameter a run depends on.
    ///
    /// # Errors
    ///
    /// [`BenchError::InvalidInput`] or [`BenchError::WorkloadTooLarge`].
    pub fn validate(&self) -> Result<()> {
        validate_workload_size(self.workload_size)?;
        if self.people.is_empty() {
            return Err(BenchError::invalid_input("people pool is empty"));
        }
        if self.messages.is_empty() {
            return Err(BenchError::invalid_input("message pool is empty"));
        }
        if self.people.iter().all(|p| *p == self.self_name) {
            return Err(BenchError::invalid_input(format!(
                "no recipients left after excluding '{}'",
                self.self_name
            )));
        }
        if self.compression_level > MAX_COMPRESSION_LEVEL {
            return Err(BenchError::invalid_input(format!(
                "compression level {} out of range 0..={}",
                self.compression_level, MAX_COMPRESSION_LEVEL
            )));
        }
        Ok(())
    }

    /// People pool as [`Person`] values.
    pub fn people(&self) -> Vec<Person> {
        people_from_names(&self.people)
    }

    /// The self identity as a [`Person`].
    pub fn self_person(&self) -> Person {
        Person::new(self.self_name.as_str())
    }

    /// Codec variants configured for this run.
    pub fn codecs(&self) -> Result<Vec<CodecKind>> {
        CodecKind::all(self.compression_level)
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            workload_size: DEFAULT_WORKLOAD_SIZE,
            seed: None,
            self_name: DEFAULT_SELF_NAME.to_string(),
            people: DEFAULT_PEOPLE.iter().map(|p| p.to_string()).collect(),
            messages: DEFAULT_MESSAGES.iter().map(|m| m.to_string()).collect(),
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            verify_round_trip: true,
        }
    }
}
