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

//! Measurement primitives.
//!
//! [`measure`] is a stateless timing wrapper: it runs an operation exactly
//! once and hands back both its result and the elapsed wall-clock time.
//! Results that are themselves `Result`s are returned untouched, so errors
//! reach the caller exactly as the operation produced them.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Result of a single measured operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Measured<R> {
    /// Name of the operation.
    pub name: String,
    /// Value returned by the operation.
    pub result: R,
    /// Wall-clock time spent in the operation.
    pub elapsed: Duration,
}

impl<R> Measured<R> {
    /// Splits into `(result, elapsed)`.
    pub fn into_parts(self) -> (R, Duration) {
        (self.result, self.elapsed)
    }

    /// Elapsed time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        duration_ms(self.elapsed)
    }
}

impl<T, E> Measured<Result<T, E>> {
    /// Lifts an inner error out, keeping the timing on success.
    pub fn transpose(self) -> Result<Measured<T>, E> {
        let Measured {
            name,
            result,
            elapsed,
        } = self;
        result.map(|result| Measured {
            name,
            result,
            elapsed,
        })
    }
}

/// Times a single invocation of `operation`.
///
/// # Example
///
/// ```
/// use serbench::core::measurement::measure;
///
/// let measured = measure("sum", || (1..=10).sum::<u32>());
/// assert_eq!(measured.result, 55);
/// println!("{} took {:.3} ms", measured.name, measured.elapsed_ms());
/// ```
pub fn measure<R, F>(name: &str, operation: F) -> Measured<R>
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = operation();
    let elapsed = start.elapsed();

    tracing::debug!(operation = name, elapsed_ms = duration_ms(elapsed), "measured");

    Measured {
        name: name.to_string(),
        result,
        elapsed,
    }
}

/// Converts a duration to fractional milliseconds.
pub fn duration_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}

/// Throughput in MB/s for `bytes` processed in `elapsed`.
///
/// Returns `None` when the elapsed time is too small to measure.
pub fn throughput_mbs(bytes: usize, elapsed: Duration) -> Option<f64> {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        Some(bytes as f64 / secs / 1_000_000.0)
    } else {
        None
    }
}

/// Statistics over repeated timings of the same operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of samples.
    pub samples: usize,
    /// Mean duration.
    pub mean: Duration,
    /// Standard deviation.
    pub std_dev: Duration,
    /// Minimum duration.
    pub min: Duration,
    /// Maximum duration.
    pub max: Duration,
    /// Median duration.
    pub median: Duration,
}

/// Computes statistics from a collection of durations.
///
/// An empty slice yields all-zero statistics.
pub fn compute_statistics(durations: &[Duration]) -> Statistics {
    if durations.is_empty() {
        return Statistics {
            samples: 0,
            mean: Duration::ZERO,
            std_dev: Duration::ZERO,
            min: Duration::ZERO,
            max: Duration::ZERO,
            median: Duration::ZERO,
        };
    }

    let mut sorted = durations.to_vec();
    sorted.sort();

    let total: Duration = sorted.iter().sum();
    let mean = total / sorted.len() as u32;

    let variance: f64 = sorted
        .iter()
        .map(|d| {
            let diff = d.as_nanos() as f64 - mean.as_nanos() as f64;
            diff * diff
        })
        .sum::<f64>()
        / sorted.len() as f64;

    Statistics {
        samples: sorted.len(),
        mean,
        std_dev: Duration::from_nanos(variance.sqrt() as u64),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        median: sorted[sorted.len() / 2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::thread;

    #[test]
    fn test_measure_returns_result_and_time() {
        let measured = measure("sleep", || {
            thread::sleep(Duration::from_millis(2));
            "done"
        });

        assert_eq!(measured.name, "sleep");
        assert_eq!(measured.result, "done");
        assert!(measured.elapsed >= Duration::from_millis(2));
    }

    #[test]
    fn test_measure_invokes_exactly_once() {
        let calls = Cell::new(0);
        let _ = measure("count", || calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_errors_pass_through_unchanged() {
        let measured = measure("fail", || -> Result<u8, String> { Err("boom".to_string()) });
        assert_eq!(measured.result, Err("boom".to_string()));
        assert_eq!(measured.transpose().unwrap_err(), "boom");
    }

    #[test]
    fn test_transpose_ok() {
        let measured = measure("ok", || -> Result<u8, String> { Ok(7) }).transpose().unwrap();
        assert_eq!(measured.result, 7);
        assert_eq!(measured.name, "ok");
    }

    #[test]
    fn test_throughput() {
        assert_eq!(throughput_mbs(1_000_000, Duration::from_secs(1)), Some(1.0));
        assert_eq!(throughput_mbs(10, Duration::ZERO), None);
    }

    #[test]
    fn test_compute_statistics() {
        let stats = compute_statistics(&[
            Duration::from_millis(30),
            Duration::from_millis(10),
            Duration::from_millis(20),
        ]);
        assert_eq!(stats.samples, 3);
        assert_eq!(stats.mean, Duration::from_millis(20));
        assert_eq!(stats.min, Duration::from_millis(10));
        assert_eq!(stats.max, Duration::from_millis(30));
        assert_eq!(stats.median, Duration::from_millis(20));
    }

    #[test]
    fn test_compute_statistics_empty() {
        let stats = compute_statistics(&[]);
        assert_eq!(stats.samples, 0);
        assert_eq!(stats.mean, Duration::ZERO);
    }
}
