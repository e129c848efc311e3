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

//! Benchmark reporters.
//!
//! # Modules
//!
//! - `types`: Report data structures
//! - `console`: Column-aligned text output
//! - `json`: JSON export

pub mod console;
pub mod json;
pub mod types;

pub use console::{format_report, format_summary, format_timing_line, print_report, print_summary};
pub use json::export_json;
pub use types::{CodecResult, GenerationTiming, OperationSummary, OperationTiming, RunReport};
