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

//! Structured error types for the serbench CLI.
//!
//! All driver operations return `Result<T, CliError>` so `main` has a
//! single place to report failures and pick an exit code.

use serbench::BenchError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for serbench CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// A benchmark run, session transition or config load failed.
    #[error(transparent)]
    Bench(#[from] BenchError),

    /// Writing an output file failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Reading the control stream or writing to the console failed.
    #[error("Console error: {0}")]
    Console(String),

    /// A decoded workload differed from the generated one.
    #[error("Round trip mismatch in run {run}: {}", .codecs.join(", "))]
    RoundTripMismatch {
        /// Run number
        run: usize,
        /// Codecs whose decoded workload differed
        codecs: Vec<String>,
    },
}

impl CliError {
    /// Creates an I/O error bound to `path`.
    pub fn io_error(path: impl AsRef<Path>, err: io::Error) -> Self {
        CliError::Io {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Console(err.to_string())
    }
}
