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

//! Benchmark runner: generate once, then encode and decode with each codec.
//!
//! Decode always consumes the transport value produced by the encode step
//! of the same run.

use crate::codec::Codec;
use crate::core::config::BenchConfig;
use crate::core::measurement::{measure, throughput_mbs};
use crate::error::Result;
use crate::generators::generate_greetings;
use crate::model::Workload;
use crate::reporters::types::{CodecResult, GenerationTiming, OperationTiming, RunReport};
use rand::Rng;
use tracing::{info, warn};

/// Label used for the generation step.
pub const GENERATION_LABEL: &str = "Generate";

/// Generates the configured workload and times it.
///
/// # Errors
///
/// Propagates generation errors unchanged.
pub fn generate_workload<R>(config: &BenchConfig, rng: &mut R) -> Result<(Workload, GenerationTiming)>
where
    R: Rng + ?Sized,
{
    let people = config.people();
    let self_person = config.self_person();

    let (workload, elapsed) = measure(GENERATION_LABEL, || {
        generate_greetings(
            config.workload_size,
            &people,
            &config.messages,
            &self_person,
            rng,
        )
    })
    .transpose()?
    .into_parts();

    let timing = GenerationTiming {
        count: workload.len(),
        elapsed,
    };
    Ok((workload, timing))
}

/// Measures `encode` then `decode` of `workload` with one codec.
///
/// When `verify` is set the decoded workload is compared with the
/// original after timing stops.
///
/// # Errors
///
/// Encode and decode errors are returned as produced by the codec; no
/// partial result is recorded.
pub fn benchmark_codec<C>(codec: &C, workload: &Workload, verify: bool) -> Result<CodecResult>
where
    C: Codec + ?Sized,
{
    let encoded = measure(codec.encode_label(), || codec.encode(workload)).transpose()?;
    let encoded_bytes = encoded.result.len();

    let decoded = measure(codec.decode_label(), || codec.decode(&encoded.result)).transpose()?;

    let verified = if verify {
        let ok = decoded.result == *workload;
        if !ok {
            warn!(codec = codec.name(), "decoded workload differs from original");
        }
        Some(ok)
    } else {
        None
    };

    Ok(CodecResult {
        codec: codec.name().to_string(),
        encode: OperationTiming::new(encoded.name, encoded.elapsed)
            .with_throughput(throughput_mbs(encoded_bytes, encoded.elapsed)),
        decode: OperationTiming::new(decoded.name, decoded.elapsed)
            .with_throughput(throughput_mbs(encoded_bytes, decoded.elapsed)),
        encoded_bytes,
        verified,
    })
}

/// Executes one complete run: generation followed by every codec.
///
/// # Errors
///
/// Configuration, generation and codec errors abort the run and are
/// returned unchanged.
pub fn run_benchmark<R>(config: &BenchConfig, rng: &mut R, run: usize) -> Result<RunReport>
where
    R: Rng + ?Sized,
{
    config.validate()?;
    let codecs = config.codecs()?;

    info!(run, count = config.workload_size, seed = ?config.seed, "starting run");

    let (workload, generation) = generate_workload(config, rng)?;
    let mut report = RunReport::new(run, config.seed, generation);

    for codec in &codecs {
        let result = benchmark_codec(codec, &workload, config.verify_round_trip)?;
        report.add_codec(result);
    }

    report.set_timestamp();
    info!(run, codecs = report.codecs.len(), "run finished");
    Ok(report)
}
