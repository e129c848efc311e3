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

//! Uniform sampling from candidate pools.

use crate::error::{BenchError, Result};
use rand::Rng;

/// Picks one element uniformly at random (with replacement).
///
/// The random source is always passed in explicitly so a seeded generator
/// reproduces the same draws.
///
/// # Errors
///
/// Returns [`BenchError::InvalidInput`] if `items` is empty.
///
/// # Example
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use serbench::generators::pick_random;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let pick = pick_random(&["a", "b", "c"], &mut rng).unwrap();
/// assert!(["a", "b", "c"].contains(pick));
/// ```
pub fn pick_random<'a, T, R>(items: &'a [T], rng: &mut R) -> Result<&'a T>
where
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return Err(BenchError::invalid_input(
            "cannot pick from an empty collection",
        ));
    }
    Ok(&items[rng.gen_range(0..items.len())])
}
