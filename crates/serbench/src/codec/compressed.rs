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

//! Gzip-compressed JSON codec with base64 transport encoding.
//!
//! Encoding pipeline: JSON → gzip → base64 (standard alphabet, padded).
//! Decoding runs the same steps in reverse; a failure at any step is a
//! [`BenchError::Decode`]. Exactly one gzip member is accepted: a second
//! member or any other bytes after the first member's trailer are rejected.

use super::backend::JsonBackend;
use super::Codec;
use crate::error::{BenchError, Result};
use crate::model::Workload;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use flate2::bufread::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io;

/// Highest gzip compression level.
pub const MAX_COMPRESSION_LEVEL: u32 = 9;

/// Default gzip compression level.
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// JSON wrapped in gzip, carried as base64 text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressedCodec {
    level: u32,
    backend: JsonBackend,
}

impl CompressedCodec {
    /// Display name with the buffered backend.
    pub const NAME: &'static str = "Compressed JSON";
    /// Display name with the streaming backend.
    pub const STREAMING_NAME: &'static str = "Compressed JSON (streaming)";

    /// Creates a buffered codec with the given gzip level (0-9).
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidInput`] for levels above 9.
    pub fn new(level: u32) -> Result<Self> {
        if level > MAX_COMPRESSION_LEVEL {
            return Err(BenchError::invalid_input(format!(
                "compression level {} out of range 0..={}",
                level, MAX_COMPRESSION_LEVEL
            )));
        }
        Ok(Self {
            level,
            backend: JsonBackend::Buffered,
        })
    }

    /// Selects the serializer backend.
    pub fn with_backend(mut self, backend: JsonBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn backend(&self) -> JsonBackend {
        self.backend
    }

    fn encode_error(&self, reason: impl ToString) -> BenchError {
        BenchError::Encode {
            codec: self.name(),
            reason: reason.to_string(),
        }
    }

    fn decode_error(&self, reason: impl ToString) -> BenchError {
        BenchError::Decode {
            codec: self.name(),
            reason: reason.to_string(),
        }
    }

    fn read_error(&self, err: io::Error) -> BenchError {
        match err.kind() {
            io::ErrorKind::InvalidData => self.decode_error(format!("invalid JSON: {}", err)),
            _ => self.decode_error(format!("invalid gzip stream: {}", err)),
        }
    }
}

impl Default for CompressedCodec {
    fn default() -> Self {
        Self {
            level: DEFAULT_COMPRESSION_LEVEL,
            backend: JsonBackend::Buffered,
        }
    }
}

impl Codec for CompressedCodec {
    fn name(&self) -> &'static str {
        match self.backend {
            JsonBackend::Buffered => Self::NAME,
            JsonBackend::Streaming => Self::STREAMING_NAME,
        }
    }

    fn encode_label(&self) -> &'static str {
        "Serialize and Compress"
    }

    fn decode_label(&self) -> &'static str {
        "Decompress and Deserialize"
    }

    fn encode(&self, workload: &Workload) -> Result<String> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::new(self.level));
        self.backend
            .to_writer(&mut encoder, workload)
            .map_err(|e| self.encode_error(e))?;
        let compressed = encoder.finish().map_err(|e| self.encode_error(e))?;

        Ok(STANDARD.encode(compressed))
    }

    fn decode(&self, encoded: &str) -> Result<Workload> {
        let compressed = STANDARD
            .decode(encoded)
            .map_err(|e| self.decode_error(format!("invalid base64: {}", e)))?;

        // Single gzip member only; the reader stops at the member trailer.
        let mut decoder = GzDecoder::new(compressed.as_slice());
        let workload = self
            .backend
            .from_reader(&mut decoder)
            .map_err(|e| self.read_error(e))?;

        let rest = decoder.into_inner();
        if !rest.is_empty() {
            return Err(self.decode_error(format!(
                "trailing data after gzip stream ({} bytes)",
                rest.len()
            )));
        }

        Ok(workload)
    }
}
