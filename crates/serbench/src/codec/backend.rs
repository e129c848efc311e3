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

//! JSON serializer backends.
//!
//! Both backends produce byte-identical JSON; they differ only in how the
//! text moves between serde and the transport:
//!
//! - [`JsonBackend::Buffered`]: the whole document is built as a `String`
//!   (`serde_json::to_string` / `from_str`)
//! - [`JsonBackend::Streaming`]: serde writes to and reads from an
//!   `io::Write` / `io::Read` directly (`serde_json::to_writer` /
//!   `from_reader`), so the compressed codec never holds the plain text

use crate::model::Workload;
use serde::{Deserialize, Serialize};
use std::io::{self, Read, Write};

/// How a codec drives serde_json.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonBackend {
    /// Serialize into an owned string, parse from a string slice.
    #[default]
    Buffered,
    /// Serialize into a writer, parse from a reader.
    Streaming,
}

impl JsonBackend {
    /// Every backend, in reporting order.
    pub const ALL: [JsonBackend; 2] = [JsonBackend::Buffered, JsonBackend::Streaming];

    /// Short label used in codec names and logs.
    pub fn label(&self) -> &'static str {
        match self {
            JsonBackend::Buffered => "buffered",
            JsonBackend::Streaming => "streaming",
        }
    }

    /// Encodes `workload` as JSON text.
    pub fn to_string(&self, workload: &Workload) -> serde_json::Result<String> {
        match self {
            JsonBackend::Buffered => serde_json::to_string(workload),
            JsonBackend::Streaming => {
                let mut buf = Vec::new();
                serde_json::to_writer(&mut buf, workload)?;
                // serde_json only emits UTF-8.
                String::from_utf8(buf).map_err(<serde_json::Error as serde::ser::Error>::custom)
            }
        }
    }

    /// Encodes `workload` as JSON into `writer`.
    pub fn to_writer<W: Write>(&self, mut writer: W, workload: &Workload) -> io::Result<()> {
        match self {
            JsonBackend::Buffered => {
                let text = serde_json::to_string(workload)?;
                writer.write_all(text.as_bytes())
            }
            JsonBackend::Streaming => Ok(serde_json::to_writer(writer, workload)?),
        }
    }

    /// Parses a workload from JSON text.
    pub fn from_str(&self, text: &str) -> serde_json::Result<Workload> {
        match self {
            JsonBackend::Buffered => serde_json::from_str(text),
            JsonBackend::Streaming => serde_json::from_reader(text.as_bytes()),
        }
    }

    /// Parses a workload from a reader, consuming it to the end.
    ///
    /// JSON errors surface as [`io::ErrorKind::InvalidData`].
    pub fn from_reader<R: Read>(&self, mut reader: R) -> io::Result<Workload> {
        match self {
            JsonBackend::Buffered => {
                let mut text = String::new();
                reader.read_to_string(&mut text)?;
                Ok(serde_json::from_str(&text)?)
            }
            JsonBackend::Streaming => Ok(serde_json::from_reader(reader)?),
        }
    }
}
