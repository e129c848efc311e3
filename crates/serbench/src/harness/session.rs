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

//! Run/continue/exit state machine for repeated benchmark runs.
//!
//! ```text
//!            run()              signal(Continue)
//!   Ready ──────────▶ AwaitingSignal ──────────▶ Ready
//!     │                    │
//!     └── signal(Exit) ────┴── signal(Exit) ───▶ Exited
//! ```
//!
//! The session owns the single random source used by every run, so a
//! seeded session replays the same sequence of workloads. It knows nothing
//! about where signals come from; the driver translates its input into
//! [`Signal`] values.

use crate::core::config::BenchConfig;
use crate::error::{BenchError, Result};
use crate::harness::aggregator::summarize;
use crate::harness::runner::run_benchmark;
use crate::reporters::types::{OperationSummary, RunReport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// A run may be started.
    Ready,
    /// A run finished (or failed); waiting for continue or exit.
    AwaitingSignal,
    /// No further runs.
    Exited,
}

/// Driver decision after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Go again.
    Continue,
    /// Stop the session.
    Exit,
}

/// A sequence of benchmark runs sharing one configuration and RNG.
///
/// # Example
///
/// ```
/// use serbench::core::config::BenchConfig;
/// use serbench::harness::{Session, SessionState, Signal};
///
/// let config = BenchConfig::default().with_workload_size(100).with_seed(1);
/// let mut session = Session::new(config).unwrap();
///
/// let report = session.run().unwrap();
/// assert_eq!(report.generation.count, 100);
///
/// assert_eq!(session.signal(Signal::Exit).unwrap(), SessionState::Exited);
/// ```
pub struct Session {
    config: BenchConfig,
    rng: StdRng,
    state: SessionState,
    history: Vec<RunReport>,
    attempts: usize,
}

impl Session {
    /// Creates a session after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns the validation error for an unusable configuration.
    pub fn new(config: BenchConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            config,
            rng,
            state: SessionState::Ready,
            history: Vec::new(),
            attempts: 0,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Completed run reports, oldest first.
    pub fn history(&self) -> &[RunReport] {
        &self.history
    }

    /// Number of runs started, including failed ones.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Executes one run. Only legal in [`SessionState::Ready`].
    ///
    /// The session moves to [`SessionState::AwaitingSignal`] whether the
    /// run succeeds or fails; a failed run leaves no report behind.
    ///
    /// # Errors
    ///
    /// [`BenchError::InvalidState`] outside `Ready`; otherwise any error
    /// from the run itself.
    pub fn run(&mut self) -> Result<&RunReport> {
        if self.state != SessionState::Ready {
            return Err(BenchError::InvalidState(format!(
                "cannot run while {:?}",
                self.state
            )));
        }

        self.attempts += 1;
        self.state = SessionState::AwaitingSignal;
        let report = run_benchmark(&self.config, &mut self.rng, self.attempts)?;

        self.history.push(report);
        Ok(&self.history[self.history.len() - 1])
    }

    /// Applies a driver signal and returns the new state.
    ///
    /// # Errors
    ///
    /// [`BenchError::InvalidState`] for `Continue` outside
    /// `AwaitingSignal`. `Exit` is accepted in every state.
    pub fn signal(&mut self, signal: Signal) -> Result<SessionState> {
        let next = match (self.state, signal) {
            (_, Signal::Exit) => SessionState::Exited,
            (SessionState::AwaitingSignal, Signal::Continue) => SessionState::Ready,
            (state, Signal::Continue) => {
                return Err(BenchError::InvalidState(format!(
                    "cannot continue while {:?}",
                    state
                )))
            }
        };
        debug!(from = ?self.state, to = ?next, ?signal, "session transition");
        self.state = next;
        Ok(next)
    }

    /// Per-operation statistics over all completed runs.
    pub fn summary(&self) -> Vec<OperationSummary> {
        summarize(&self.history)
    }
}
