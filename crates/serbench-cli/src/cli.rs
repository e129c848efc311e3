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

//! Command-line arguments.

use crate::driver::DriverOptions;
use crate::error::CliError;
use clap::Parser;
use serbench::BenchConfig;
use std::path::PathBuf;

/// Serbench - serialization codec benchmarks
///
/// Generates a randomized workload of greetings, then times encoding and
/// decoding it with plain JSON and with JSON compressed and base64-encoded,
/// each through a buffered and a streaming serializer.
///
/// # Examples
///
/// ```bash
/// # Interactive: Enter runs again, q quits
/// serbench --count 50000
///
/// # One reproducible run, exported as JSON
/// serbench --once --seed 42 --json results.json
/// ```
#[derive(Parser, Debug)]
#[command(name = "serbench")]
#[command(author, version, about = "Serialization codec benchmarks", long_about = None)]
pub struct Cli {
    /// Greetings generated per run
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Seed for the random source; runs are reproducible under a fixed seed
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Gzip compression level (0-9)
    #[arg(short, long)]
    pub level: Option<u32>,

    /// Load base configuration from a JSON file; flags override it
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write every completed run report to a JSON file on exit
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Run once and exit without prompting
    #[arg(long)]
    pub once: bool,

    /// Skip comparing decoded workloads with the generated one
    #[arg(long)]
    pub no_verify: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Builds the benchmark configuration: file first, then flags.
    pub fn bench_config(&self) -> Result<BenchConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => BenchConfig::from_json_file(path)?,
            None => BenchConfig::default(),
        };

        if let Some(count) = self.count {
            config = config.with_workload_size(count);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(level) = self.level {
            config = config.with_compression_level(level);
        }
        if self.no_verify {
            config = config.with_verification(false);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn driver_options(&self) -> DriverOptions {
        DriverOptions {
            once: self.once,
            json_output: self.json.clone(),
        }
    }

    /// Default log filter directive for the requested verbosity.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "serbench=warn",
            1 => "serbench=info",
            _ => "serbench=debug",
        }
    }
}
