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

//! Randomized greeting workloads.
//!
//! Each greeting draws its sender from the full people pool, its recipient
//! from the people pool minus the self identity, and its message from the
//! message pool. All draws are uniform with replacement.

use super::sampling::pick_random;
use crate::error::{validate_workload_size, BenchError, Result};
use crate::model::{Greeting, Person, Workload};
use rand::Rng;

/// Generates `count` random greetings.
///
/// # Errors
///
/// - [`BenchError::InvalidInput`] if `count` is zero, either pool is empty,
///   or no recipient remains once `self_person` is excluded.
/// - [`BenchError::WorkloadTooLarge`] if `count` exceeds the workload limit.
///
/// # Example
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use serbench::generators::{default_messages, default_people, generate_greetings};
/// use serbench::model::Person;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let me = Person::new("Joseph");
/// let workload =
///     generate_greetings(100, &default_people(), &default_messages(), &me, &mut rng).unwrap();
/// assert_eq!(workload.len(), 100);
/// assert!(workload.iter().all(|g| g.to() != &me));
/// ```
pub fn generate_greetings<R>(
    count: usize,
    people: &[Person],
    messages: &[String],
    self_person: &Person,
    rng: &mut R,
) -> Result<Workload>
where
    R: Rng + ?Sized,
{
    validate_workload_size(count)?;
    if people.is_empty() {
        return Err(BenchError::invalid_input("people pool is empty"));
    }
    if messages.is_empty() {
        return Err(BenchError::invalid_input("message pool is empty"));
    }

    let recipients: Vec<&Person> = people.iter().filter(|p| *p != self_person).collect();
    if recipients.is_empty() {
        return Err(BenchError::invalid_input(format!(
            "no recipients left after excluding '{}'",
            self_person.name()
        )));
    }

    let mut greetings = Vec::with_capacity(count);
    for _ in 0..count {
        let from = pick_random(people, rng)?;
        let to = pick_random(&recipients, rng)?;
        let message = pick_random(messages, rng)?;
        greetings.push(Greeting::new(from.clone(), (*to).clone(), message.clone()));
    }

    Ok(Workload::new(greetings))
}
