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

//! Plain JSON codec.

use super::backend::JsonBackend;
use super::Codec;
use crate::error::{BenchError, Result};
use crate::model::Workload;

/// Encodes a workload directly as compact JSON text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCodec {
    backend: JsonBackend,
}

impl TextCodec {
    /// Display name with the buffered backend.
    pub const NAME: &'static str = "JSON";
    /// Display name with the streaming backend.
    pub const STREAMING_NAME: &'static str = "JSON (streaming)";

    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the serializer backend.
    pub fn with_backend(mut self, backend: JsonBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn backend(&self) -> JsonBackend {
        self.backend
    }

    fn decode_error(&self, reason: impl ToString) -> BenchError {
        BenchError::Decode {
            codec: self.name(),
            reason: reason.to_string(),
        }
    }
}

impl Codec for TextCodec {
    fn name(&self) -> &'static str {
        match self.backend {
            JsonBackend::Buffered => Self::NAME,
            JsonBackend::Streaming => Self::STREAMING_NAME,
        }
    }

    fn encode_label(&self) -> &'static str {
        "Serialize"
    }

    fn decode_label(&self) -> &'static str {
        "Deserialize"
    }

    fn encode(&self, workload: &Workload) -> Result<String> {
        self.backend
            .to_string(workload)
            .map_err(|e| BenchError::Encode {
                codec: self.name(),
                reason: e.to_string(),
            })
    }

    fn decode(&self, encoded: &str) -> Result<Workload> {
        self.backend
            .from_str(encoded)
            .map_err(|e| self.decode_error(e))
    }
}
