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

//! Round-trip tests for every codec variant.
//!
//! Decode is always fed the value produced by encode in the same test;
//! nothing here assumes the encoded form is stable across runs.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serbench::codec::{
    Codec, CodecKind, CompressedCodec, JsonBackend, TextCodec, DEFAULT_COMPRESSION_LEVEL,
};
use serbench::generators::{default_messages, default_people, generate_greetings};
use serbench::model::{Greeting, Person, Workload};

fn fixture() -> Workload {
    vec![
        Greeting::new(Person::new("Dad"), Person::new("Joseph"), "a"),
        Greeting::new(Person::new("Joseph"), Person::new("Mom"), "welcome"),
        Greeting::new(Person::new("Sean"), Person::new("Mike Oxsmaul"), "bang"),
    ]
    .into()
}

fn is_base64_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='
}

// ============================================================================
// Fixed fixture
// ============================================================================

#[test]
fn test_compressed_fixture_round_trip() {
    let codec = CompressedCodec::default();
    let encoded = codec.encode(&fixture()).unwrap();

    assert!(!encoded.is_empty());
    assert!(
        encoded.chars().all(is_base64_char),
        "transport value contains non-base64 characters: {}",
        encoded
    );
    assert_eq!(encoded.len() % 4, 0, "base64 output must be padded");

    let decoded = codec.decode(&encoded).unwrap();
    assert_eq!(decoded, fixture());
}

#[test]
fn test_text_fixture_round_trip() {
    let encoded = TextCodec::new().encode(&fixture()).unwrap();
    assert!(encoded.contains(r#""Message":"welcome""#));
    assert_eq!(TextCodec::new().decode(&encoded).unwrap(), fixture());
}

#[test]
fn test_fixture_round_trip_each_backend() {
    for backend in JsonBackend::ALL {
        let text = TextCodec::new().with_backend(backend);
        let compressed = CompressedCodec::default().with_backend(backend);

        let encoded = text.encode(&fixture()).unwrap();
        assert_eq!(text.decode(&encoded).unwrap(), fixture(), "{}", text.name());

        let encoded = compressed.encode(&fixture()).unwrap();
        assert!(encoded.chars().all(is_base64_char));
        assert_eq!(
            compressed.decode(&encoded).unwrap(),
            fixture(),
            "{}",
            compressed.name()
        );
    }
}

#[test]
fn test_backends_decode_each_others_output() {
    let buffered = TextCodec::new();
    let streaming = TextCodec::new().with_backend(JsonBackend::Streaming);
    assert_eq!(
        buffered.encode(&fixture()).unwrap(),
        streaming.encode(&fixture()).unwrap()
    );
    assert_eq!(
        streaming.decode(&buffered.encode(&fixture()).unwrap()).unwrap(),
        fixture()
    );

    let buffered = CompressedCodec::new(9).unwrap();
    let streaming = buffered.with_backend(JsonBackend::Streaming);
    assert_eq!(
        streaming.decode(&buffered.encode(&fixture()).unwrap()).unwrap(),
        fixture()
    );
    assert_eq!(
        buffered.decode(&streaming.encode(&fixture()).unwrap()).unwrap(),
        fixture()
    );
}

#[test]
fn test_every_backend_reported_separately() {
    let codecs = CodecKind::all(DEFAULT_COMPRESSION_LEVEL).unwrap();
    let names: Vec<&str> = codecs.iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        [
            TextCodec::NAME,
            CompressedCodec::NAME,
            TextCodec::STREAMING_NAME,
            CompressedCodec::STREAMING_NAME,
        ]
    );
    for backend in JsonBackend::ALL {
        assert_eq!(codecs.iter().filter(|c| c.backend() == backend).count(), 2);
    }
}

#[test]
fn test_round_trip_preserves_order_and_fields() {
    for codec in CodecKind::all(DEFAULT_COMPRESSION_LEVEL).unwrap() {
        let decoded = codec.decode(&codec.encode(&fixture()).unwrap()).unwrap();
        assert_eq!(decoded.len(), 3, "{}", codec.name());
        for (got, want) in decoded.iter().zip(fixture().iter()) {
            assert_eq!(got.from(), want.from());
            assert_eq!(got.to(), want.to());
            assert_eq!(got.message(), want.message());
        }
    }
}

// ============================================================================
// Generated workloads
// ============================================================================

#[test]
fn test_generated_workload_round_trip_all_codecs() {
    let mut rng = StdRng::seed_from_u64(2025);
    let workload = generate_greetings(
        10_000,
        &default_people(),
        &default_messages(),
        &Person::new("Joseph"),
        &mut rng,
    )
    .unwrap();

    for codec in CodecKind::all(DEFAULT_COMPRESSION_LEVEL).unwrap() {
        let encoded = codec.encode(&workload).unwrap();
        let decoded = codec.decode(&encoded).unwrap();
        assert_eq!(decoded, workload, "{} round trip", codec.name());
    }
}

#[test]
fn test_compression_shrinks_generated_workload() {
    let mut rng = StdRng::seed_from_u64(8);
    let workload = generate_greetings(
        5_000,
        &default_people(),
        &default_messages(),
        &Person::new("Joseph"),
        &mut rng,
    )
    .unwrap();

    let plain = TextCodec::new().encode(&workload).unwrap();
    let compressed = CompressedCodec::default().encode(&workload).unwrap();
    assert!(compressed.len() * 4 < plain.len());
}

#[test]
fn test_unicode_and_escapes_survive() {
    let workload: Workload = vec![Greeting::new(
        Person::new("Zoë \"Z\" O'Neil"),
        Person::new("李雷"),
        "line1\nline2\t🎉 \\ end",
    )]
    .into();

    for codec in CodecKind::all(9).unwrap() {
        let encoded = codec.encode(&workload).unwrap();
        assert_eq!(codec.decode(&encoded).unwrap(), workload);
    }
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: any workload drawn from arbitrary pools round-trips through every codec
    #[test]
    fn prop_round_trip_arbitrary_pools(
        people in prop::collection::vec(".{0,12}", 2..6),
        messages in prop::collection::vec(".{0,24}", 1..6),
        count in 1usize..200,
        seed in any::<u64>(),
        level in 0u32..=9,
    ) {
        let people: Vec<Person> = people.into_iter().map(Person::new).collect();
        let self_person = people[0].clone();
        prop_assume!(people.iter().any(|p| *p != self_person));

        let mut rng = StdRng::seed_from_u64(seed);
        let workload = generate_greetings(count, &people, &messages, &self_person, &mut rng)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        for codec in CodecKind::all(level).map_err(|e| TestCaseError::fail(e.to_string()))? {
            let encoded = codec.encode(&workload).map_err(|e| TestCaseError::fail(e.to_string()))?;
            let decoded = codec.decode(&encoded).map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert_eq!(&decoded, &workload);
        }
    }
}
