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

//! Result aggregation across runs.

use crate::core::measurement::compute_statistics;
use crate::harness::runner::GENERATION_LABEL;
use crate::reporters::types::{OperationSummary, RunReport};
use std::time::Duration;

/// Group name used for the generation step.
pub const WORKLOAD_GROUP: &str = "Workload";

/// Aggregates per-operation timing statistics over a set of runs.
///
/// Operations are keyed by `(codec, label)` and returned in first-seen
/// order: generation first, then each codec's encode and decode.
pub fn summarize(reports: &[RunReport]) -> Vec<OperationSummary> {
    if reports.is_empty() {
        return Vec::new();
    }

    let mut groups: Vec<(String, String, Vec<Duration>)> = Vec::new();
    let mut push = |group: &str, operation: &str, elapsed: Duration| {
        match groups
            .iter_mut()
            .find(|(g, o, _)| g == group && o == operation)
        {
            Some((_, _, samples)) => samples.push(elapsed),
            None => groups.push((group.to_string(), operation.to_string(), vec![elapsed])),
        }
    };

    for report in reports {
        push(WORKLOAD_GROUP, GENERATION_LABEL, report.generation.elapsed);
        for codec in &report.codecs {
            push(&codec.codec, &codec.encode.name, codec.encode.elapsed);
            push(&codec.codec, &codec.decode.name, codec.decode.elapsed);
        }
    }

    groups
        .into_iter()
        .map(|(group, operation, samples)| OperationSummary {
            group,
            operation,
            stats: compute_statistics(&samples),
        })
        .collect()
}
