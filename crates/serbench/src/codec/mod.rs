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

//! Interchangeable encode/decode strategies.
//!
//! Every strategy implements [`Codec`]. The concrete variants are collected
//! in the closed [`CodecKind`] union so the harness can iterate over them
//! without knowing which one it is measuring.
//!
//! # Variants
//!
//! - [`TextCodec`]: compact JSON
//! - [`CompressedCodec`]: JSON → gzip → base64
//!
//! Both produce text transport values, and both take a [`JsonBackend`]
//! selecting buffered or streaming serde_json. Each codec/backend pair is
//! reported as its own section.
//!
//! # Example
//!
//! ```
//! use serbench::codec::{Codec, CodecKind};
//! use serbench::model::{Greeting, Person, Workload};
//!
//! let workload: Workload =
//!     vec![Greeting::new(Person::new("Dad"), Person::new("Mom"), "a")].into();
//!
//! for codec in CodecKind::all(6).unwrap() {
//!     let encoded = codec.encode(&workload).unwrap();
//!     assert_eq!(codec.decode(&encoded).unwrap(), workload);
//! }
//! ```

pub mod backend;
pub mod compressed;
pub mod text;

pub use backend::JsonBackend;
pub use compressed::{CompressedCodec, DEFAULT_COMPRESSION_LEVEL, MAX_COMPRESSION_LEVEL};
pub use text::TextCodec;

use crate::error::Result;
use crate::model::Workload;

/// Encode/decode capability shared by all codec variants.
pub trait Codec {
    /// Display name used in reports.
    fn name(&self) -> &'static str;

    /// Operation label for `encode`.
    fn encode_label(&self) -> &'static str;

    /// Operation label for `decode`.
    fn decode_label(&self) -> &'static str;

    /// Encodes a workload into its transport value.
    ///
    /// # Errors
    ///
    /// [`crate::BenchError::Encode`] on encoder-side failure.
    fn encode(&self, workload: &Workload) -> Result<String>;

    /// Decodes a transport value produced by [`Codec::encode`].
    ///
    /// # Errors
    ///
    /// [`crate::BenchError::Decode`] if `encoded` is not a well-formed
    /// transport value for this codec. No partial workload is returned.
    fn decode(&self, encoded: &str) -> Result<Workload>;
}

/// Closed set of codec variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecKind {
    Text(TextCodec),
    Compressed(CompressedCodec),
}

impl CodecKind {
    /// All variants in reporting order, compressed at `level`.
    ///
    /// Grouped by backend: plain then compressed for buffered, then the
    /// same pair for streaming.
    pub fn all(level: u32) -> Result<Vec<CodecKind>> {
        let compressed = CompressedCodec::new(level)?;
        Ok(JsonBackend::ALL
            .into_iter()
            .flat_map(|backend| {
                [
                    CodecKind::Text(TextCodec::new().with_backend(backend)),
                    CodecKind::Compressed(compressed.with_backend(backend)),
                ]
            })
            .collect())
    }

    /// Serializer backend of the wrapped codec.
    pub fn backend(&self) -> JsonBackend {
        match self {
            CodecKind::Text(c) => c.backend(),
            CodecKind::Compressed(c) => c.backend(),
        }
    }

    fn inner(&self) -> &dyn Codec {
        match self {
            CodecKind::Text(c) => c,
            CodecKind::Compressed(c) => c,
        }
    }
}

impl Codec for CodecKind {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn encode_label(&self) -> &'static str {
        self.inner().encode_label()
    }

    fn decode_label(&self) -> &'static str {
        self.inner().decode_label()
    }

    fn encode(&self, workload: &Workload) -> Result<String> {
        self.inner().encode(workload)
    }

    fn decode(&self, encoded: &str) -> Result<Workload> {
        self.inner().decode(encoded)
    }
}

impl From<TextCodec> for CodecKind {
    fn from(codec: TextCodec) -> Self {
        CodecKind::Text(codec)
    }
}

impl From<CompressedCodec> for CodecKind {
    fn from(codec: CompressedCodec) -> Self {
        CodecKind::Compressed(codec)
    }
}
