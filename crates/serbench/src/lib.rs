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

//! Serbench Benchmark Framework
//!
//! Measures the cost of converting an in-memory workload of greetings to
//! and from transportable encodings, comparing plain JSON against JSON
//! wrapped in gzip and base64.
//!
//! ## Features
//!
//! - **Workload generator**: randomized greetings drawn from fixed pools,
//!   reproducible under a seed
//! - **Codecs**: interchangeable [`codec::TextCodec`] and
//!   [`codec::CompressedCodec`] behind the [`codec::Codec`] trait, each
//!   driven by a buffered or streaming [`codec::JsonBackend`]
//! - **Harness**: single-shot timing, per-run reports, cross-run statistics
//!
//! ## Usage
//!
//! ```
//! use serbench::{print_report, BenchConfig, Session};
//!
//! let config = BenchConfig::default().with_workload_size(1_000).with_seed(42);
//! let mut session = Session::new(config)?;
//! let report = session.run()?;
//! print_report(report);
//! # Ok::<(), serbench::BenchError>(())
//! ```
//!
//! Run the criterion benchmarks:
//! ```bash
//! cargo bench --package serbench
//! ```

pub mod codec;
pub mod core;
pub mod error;
pub mod generators;
pub mod harness;
pub mod model;
pub mod reporters;

// Re-export key types for convenience
pub use codec::{Codec, CodecKind, CompressedCodec, JsonBackend, TextCodec};
pub use crate::core::{measure, BenchConfig, Measured, DEFAULT_WORKLOAD_SIZE};
pub use error::{validate_workload_size, BenchError, Result, MAX_WORKLOAD_SIZE};
pub use generators::{generate_greetings, pick_random};
pub use harness::{run_benchmark, Session, SessionState, Signal};
pub use model::{Greeting, Person, Workload};
pub use reporters::{export_json, format_report, print_report, print_summary, RunReport};

/// Standard workload sizes for benchmarks
pub mod sizes {
    /// Small workload, ~100 greetings
    pub const SMALL: usize = 100;
    /// Medium workload, ~10,000 greetings
    pub const MEDIUM: usize = 10_000;
    /// Default workload, 100,000 greetings
    pub const DEFAULT: usize = super::DEFAULT_WORKLOAD_SIZE;
}
