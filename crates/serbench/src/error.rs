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

//! Error types for workload generation, codecs and benchmark sessions.
//!
//! Every fallible operation in this crate returns [`Result`]. Errors are
//! surfaced to the immediate caller unchanged; nothing here retries or
//! recovers locally.

use thiserror::Error;

/// Maximum workload size (10 million greetings).
///
/// Prevents memory exhaustion from oversized workload requests.
pub const MAX_WORKLOAD_SIZE: usize = 10_000_000;

/// Result type for benchmarking operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur during benchmarking operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BenchError {
    /// Sampling from an empty pool, zero-sized workload, or an otherwise
    /// unusable parameter.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Workload size exceeds [`MAX_WORKLOAD_SIZE`].
    #[error("Workload size {requested} exceeds maximum allowed limit of {max}")]
    WorkloadTooLarge {
        /// Requested size
        requested: usize,
        /// Maximum allowed size
        max: usize,
    },

    /// Encoder failed on otherwise well-formed input.
    #[error("{codec} encode failed: {reason}")]
    Encode {
        /// Codec display name
        codec: &'static str,
        /// Underlying failure
        reason: String,
    },

    /// Transport value is not valid for the codec.
    #[error("{codec} decode failed: {reason}")]
    Decode {
        /// Codec display name
        codec: &'static str,
        /// Underlying failure
        reason: String,
    },

    /// Session operation not allowed in the current state.
    #[error("Invalid session state: {0}")]
    InvalidState(String),

    /// Configuration file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BenchError {
    /// Shorthand for [`BenchError::InvalidInput`].
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        BenchError::InvalidInput(msg.into())
    }

    /// Returns true for [`BenchError::Decode`].
    pub fn is_decode(&self) -> bool {
        matches!(self, BenchError::Decode { .. })
    }
}

/// Validate that a workload size is non-zero and within acceptable limits
///
/// # Examples
///
/// ```
/// use serbench::error::{validate_workload_size, MAX_WORKLOAD_SIZE};
///
/// assert!(validate_workload_size(1000).is_ok());
/// assert!(validate_workload_size(0).is_err());
/// assert!(validate_workload_size(MAX_WORKLOAD_SIZE + 1).is_err());
/// ```
#[inline]
pub fn validate_workload_size(size: usize) -> Result<()> {
    if size == 0 {
        Err(BenchError::invalid_input("workload count must be positive"))
    } else if size > MAX_WORKLOAD_SIZE {
        Err(BenchError::WorkloadTooLarge {
            requested: size,
            max: MAX_WORKLOAD_SIZE,
        })
    } else {
        Ok(())
    }
}
