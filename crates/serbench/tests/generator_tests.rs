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

//! Workload generator invariants and sampling distribution.
//!
//! Uniformity is checked with a chi-square goodness-of-fit test at the
//! 0.001 significance level over 100,000 seeded draws.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serbench::generators::{
    default_messages, default_people, generate_greetings, pick_random, DEFAULT_SELF_NAME,
};
use serbench::model::{Person, Workload};
use std::collections::HashMap;

const DRAWS: usize = 100_000;

/// Chi-square critical values at alpha = 0.001, indexed by degrees of freedom.
fn chi_square_critical(df: usize) -> f64 {
    match df {
        7 => 24.322,
        8 => 26.124,
        10 => 29.588,
        _ => panic!("no critical value tabulated for df={}", df),
    }
}

fn chi_square<'a>(observed: impl Iterator<Item = &'a str>, categories: &[&str]) -> f64 {
    let mut counts: HashMap<&str, usize> = categories.iter().map(|c| (*c, 0)).collect();
    let mut total = 0usize;
    for value in observed {
        *counts
            .get_mut(value)
            .unwrap_or_else(|| panic!("unexpected category {}", value)) += 1;
        total += 1;
    }
    let expected = total as f64 / categories.len() as f64;
    counts
        .values()
        .map(|&o| {
            let diff = o as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

fn large_workload(seed: u64) -> Workload {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_greetings(
        DRAWS,
        &default_people(),
        &default_messages(),
        &Person::new(DEFAULT_SELF_NAME),
        &mut rng,
    )
    .unwrap()
}

// ============================================================================
// Recipient exclusion
// ============================================================================

#[test]
fn test_recipient_is_never_self() {
    let workload = large_workload(1);
    assert_eq!(workload.len(), DRAWS);
    assert!(workload.iter().all(|g| g.to().name() != DEFAULT_SELF_NAME));
}

#[test]
fn test_self_appears_as_sender() {
    let workload = large_workload(1);
    assert!(workload.iter().any(|g| g.from().name() == DEFAULT_SELF_NAME));
}

#[test]
fn test_self_outside_pool_excludes_nobody() {
    let mut rng = StdRng::seed_from_u64(4);
    let people = vec![Person::new("A"), Person::new("B")];
    let workload =
        generate_greetings(500, &people, &default_messages(), &Person::new("Z"), &mut rng)
            .unwrap();
    assert!(workload.iter().any(|g| g.to().name() == "A"));
    assert!(workload.iter().any(|g| g.to().name() == "B"));
}

// ============================================================================
// Uniformity
// ============================================================================

#[test]
fn test_sender_distribution_is_uniform() {
    let workload = large_workload(7);
    let names: Vec<&str> = serbench::generators::DEFAULT_PEOPLE.to_vec();
    let stat = chi_square(workload.iter().map(|g| g.from().name()), &names);
    assert!(
        stat < chi_square_critical(names.len() - 1),
        "sender chi-square {} too large",
        stat
    );
}

#[test]
fn test_recipient_distribution_is_uniform() {
    let workload = large_workload(7);
    let names: Vec<&str> = serbench::generators::DEFAULT_PEOPLE
        .iter()
        .copied()
        .filter(|n| *n != DEFAULT_SELF_NAME)
        .collect();
    let stat = chi_square(workload.iter().map(|g| g.to().name()), &names);
    assert!(
        stat < chi_square_critical(names.len() - 1),
        "recipient chi-square {} too large",
        stat
    );
}

#[test]
fn test_message_distribution_is_uniform() {
    let workload = large_workload(7);
    let messages: Vec<&str> = serbench::generators::DEFAULT_MESSAGES.to_vec();
    let stat = chi_square(workload.iter().map(|g| g.message()), &messages);
    assert!(
        stat < chi_square_critical(messages.len() - 1),
        "message chi-square {} too large",
        stat
    );
}

#[test]
fn test_pick_random_distribution_is_uniform() {
    let pool = serbench::generators::DEFAULT_PEOPLE;
    let mut rng = StdRng::seed_from_u64(31);
    let draws: Vec<&str> = (0..DRAWS)
        .map(|_| *pick_random(pool, &mut rng).unwrap())
        .collect();
    let stat = chi_square(draws.into_iter(), pool);
    assert!(stat < chi_square_critical(pool.len() - 1));
}

// ============================================================================
// Reproducibility
// ============================================================================

#[test]
fn test_seeded_generation_is_reproducible() {
    assert_eq!(large_workload(99), large_workload(99));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: no generated greeting is ever addressed to self
    #[test]
    fn prop_recipient_never_self(
        names in prop::collection::vec("[A-Za-z]{1,8}", 2..10),
        self_index in any::<prop::sample::Index>(),
        count in 1usize..300,
        seed in any::<u64>(),
    ) {
        let people: Vec<Person> = names.into_iter().map(Person::new).collect();
        let self_person = self_index.get(&people).clone();
        prop_assume!(people.iter().any(|p| *p != self_person));

        let mut rng = StdRng::seed_from_u64(seed);
        let workload = generate_greetings(count, &people, &default_messages(), &self_person, &mut rng)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        prop_assert_eq!(workload.len(), count);
        for g in &workload {
            prop_assert_ne!(g.to(), &self_person);
            prop_assert!(people.contains(g.from()));
        }
    }
}
