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

//! Report types and structures.

use crate::core::measurement::{duration_ms, Statistics};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing of one named operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationTiming {
    /// Operation label, e.g. "Serialize and Compress".
    pub name: String,
    /// Elapsed wall-clock time.
    pub elapsed: Duration,
    /// Transport bytes per second, in MB/s, if measurable.
    pub throughput_mbs: Option<f64>,
}

impl OperationTiming {
    pub fn new(name: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            name: name.into(),
            elapsed,
            throughput_mbs: None,
        }
    }

    pub fn with_throughput(mut self, mbs: Option<f64>) -> Self {
        self.throughput_mbs = mbs;
        self
    }

    pub fn elapsed_ms(&self) -> f64 {
        duration_ms(self.elapsed)
    }
}

/// Timing of workload generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationTiming {
    /// Greetings generated.
    pub count: usize,
    /// Total generation time.
    pub elapsed: Duration,
}

impl GenerationTiming {
    pub fn elapsed_ms(&self) -> f64 {
        duration_ms(self.elapsed)
    }

    /// Average time per generated greeting, in milliseconds.
    pub fn per_item_ms(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.elapsed_ms() / self.count as f64
        }
    }
}

/// Encode/decode results for one codec variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodecResult {
    /// Codec display name.
    pub codec: String,
    /// Encode timing.
    pub encode: OperationTiming,
    /// Decode timing.
    pub decode: OperationTiming,
    /// Size of the transport value in bytes.
    pub encoded_bytes: usize,
    /// Round-trip check outcome; `None` when verification was disabled.
    pub verified: Option<bool>,
}

/// Everything measured during one benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// 1-based run number within the session.
    pub run: usize,
    /// Seed of the session's random source, if fixed.
    pub seed: Option<u64>,
    /// UNIX seconds at which the run finished.
    pub timestamp: Option<String>,
    /// Workload generation timing.
    pub generation: GenerationTiming,
    /// Per-codec results in measurement order.
    pub codecs: Vec<CodecResult>,
}

impl RunReport {
    pub fn new(run: usize, seed: Option<u64>, generation: GenerationTiming) -> Self {
        Self {
            run,
            seed,
            timestamp: None,
            generation,
            codecs: Vec::new(),
        }
    }

    /// Stamps the report with the current time.
    pub fn set_timestamp(&mut self) {
        use std::time::SystemTime;
        if let Ok(duration) = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH) {
            self.timestamp = Some(format!("{}", duration.as_secs()));
        }
    }

    pub fn add_codec(&mut self, result: CodecResult) {
        self.codecs.push(result);
    }

    /// Looks up a codec result by display name.
    pub fn codec(&self, name: &str) -> Option<&CodecResult> {
        self.codecs.iter().find(|c| c.codec == name)
    }

    /// True when every verified codec round-tripped.
    pub fn all_verified(&self) -> bool {
        self.codecs.iter().all(|c| c.verified != Some(false))
    }
}

/// Statistics of one operation across several runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationSummary {
    /// Codec name, or "Workload" for generation.
    pub group: String,
    /// Operation label.
    pub operation: String,
    /// Timing statistics.
    pub stats: Statistics,
}
