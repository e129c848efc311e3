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

//! Console reporter for benchmark results.
//!
//! Every timing line has the operation name left-aligned in a 40-column
//! field followed by milliseconds right-aligned in 12 columns.

use crate::core::measurement::duration_ms;
use crate::reporters::types::{CodecResult, OperationSummary, OperationTiming, RunReport};
use std::fmt::Write;
use std::time::Duration;

/// Width of the operation-name column.
pub const NAME_WIDTH: usize = 40;

/// Formats one `name  elapsed (ms)` line.
pub fn format_timing_line(name: &str, elapsed: Duration) -> String {
    format!(
        "    {:<width$} {:>12.3} (ms)",
        name,
        duration_ms(elapsed),
        width = NAME_WIDTH
    )
}

fn format_operation(timing: &OperationTiming) -> String {
    let mut line = format_timing_line(&timing.name, timing.elapsed);
    if let Some(mbs) = timing.throughput_mbs {
        let _ = write!(line, "  {:>10.2} MB/s", mbs);
    }
    line
}

fn format_codec(out: &mut String, result: &CodecResult) {
    let _ = writeln!(out, "{}...", result.codec);
    let _ = writeln!(out, "{}", format_operation(&result.encode));
    let _ = writeln!(out, "{}", format_operation(&result.decode));
    let _ = writeln!(
        out,
        "    {:<width$} {:>12} (bytes)",
        "Transport size",
        result.encoded_bytes,
        width = NAME_WIDTH
    );
    let status = match result.verified {
        Some(true) => "ok",
        Some(false) => "MISMATCH",
        None => "skipped",
    };
    let _ = writeln!(
        out,
        "    {:<width$} {:>12}",
        "Round trip",
        status,
        width = NAME_WIDTH
    );
}

/// Renders a single run report.
pub fn format_report(report: &RunReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Total Messages Created: {}. Total Time {:.3} (ms), Average Time (per item) {:.6} (ms)",
        report.generation.count,
        report.generation.elapsed_ms(),
        report.generation.per_item_ms()
    );
    for result in &report.codecs {
        format_codec(&mut out, result);
    }
    out
}

/// Renders cross-run statistics.
pub fn format_summary(summary: &[OperationSummary]) -> String {
    let mut out = String::new();
    let runs = summary.first().map(|s| s.stats.samples).unwrap_or(0);
    let _ = writeln!(out, "Summary over {} run(s)", runs);
    let _ = writeln!(
        out,
        "    {:<width$} {:>12} {:>12} {:>12} {:>12}",
        "Operation",
        "mean (ms)",
        "min (ms)",
        "max (ms)",
        "median (ms)",
        width = NAME_WIDTH
    );
    for entry in summary {
        let label = format!("{} / {}", entry.group, entry.operation);
        let _ = writeln!(
            out,
            "    {:<width$} {:>12.3} {:>12.3} {:>12.3} {:>12.3}",
            label,
            duration_ms(entry.stats.mean),
            duration_ms(entry.stats.min),
            duration_ms(entry.stats.max),
            duration_ms(entry.stats.median),
            width = NAME_WIDTH
        );
    }
    out
}

/// Prints the run report to stdout.
pub fn print_report(report: &RunReport) {
    print!("{}", format_report(report));
}

/// Prints cross-run statistics to stdout.
pub fn print_summary(summary: &[OperationSummary]) {
    print!("{}", format_summary(summary));
}
