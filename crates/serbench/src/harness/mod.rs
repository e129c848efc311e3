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

//! Benchmark harness.
//!
//! # Modules
//!
//! - `runner`: One run: generation plus encode/decode per codec
//! - `session`: Run/continue/exit state machine over repeated runs
//! - `aggregator`: Statistics across completed runs

pub mod aggregator;
pub mod runner;
pub mod session;

pub use aggregator::{summarize, WORKLOAD_GROUP};
pub use runner::{benchmark_codec, generate_workload, run_benchmark, GENERATION_LABEL};
pub use session::{Session, SessionState, Signal};
