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

//! Workload generation.
//!
//! - **sampling**: uniform draws from a pool using an explicit random source
//! - **pools**: static candidate people and messages
//! - **greetings**: the greeting workload generator

pub mod greetings;
pub mod pools;
pub mod sampling;

pub use greetings::generate_greetings;
pub use pools::{
    default_messages, default_people, people_from_names, DEFAULT_MESSAGES, DEFAULT_PEOPLE,
    DEFAULT_SELF_NAME,
};
pub use sampling::pick_random;
