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

//! Prompt loop driving a [`Session`].
//!
//! Control is line based: an empty line (or `r`) runs again, `q`, `quit`,
//! `exit` or a line starting with ESC ends the session. End of input is
//! treated as exit.

use crate::error::CliError;
use serbench::reporters::{format_report, format_summary};
use serbench::{export_json, RunReport, Session, SessionState, Signal};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Prompt shown after every run.
pub const PROMPT: &str = "Done. Press Enter to run again, q to quit.";

const ESC: char = '\u{1b}';

/// Driver behavior not covered by the benchmark configuration.
#[derive(Debug, Clone, Default)]
pub struct DriverOptions {
    /// Exit after the first run instead of prompting.
    pub once: bool,
    /// Export completed runs here on exit.
    pub json_output: Option<PathBuf>,
}

/// Maps one control line to a signal; `None` for unrecognized input.
pub fn parse_signal(line: &str) -> Option<Signal> {
    if line.starts_with(ESC) {
        return Some(Signal::Exit);
    }
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "r" | "run" | "c" | "continue" => Some(Signal::Continue),
        "q" | "quit" | "exit" => Some(Signal::Exit),
        _ => None,
    }
}

/// Returns the mismatch error for a report whose round trip failed.
pub fn verification_failure(report: &RunReport) -> Option<CliError> {
    if report.all_verified() {
        return None;
    }
    let codecs = report
        .codecs
        .iter()
        .filter(|c| c.verified == Some(false))
        .map(|c| c.codec.clone())
        .collect();
    Some(CliError::RoundTripMismatch {
        run: report.run,
        codecs,
    })
}

/// Runs a session against a control stream and an output sink.
pub struct Driver<R, W> {
    session: Session,
    input: R,
    output: W,
    options: DriverOptions,
    failures: usize,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    pub fn new(session: Session, input: R, output: W, options: DriverOptions) -> Self {
        Self {
            session,
            input,
            output,
            options,
            failures: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs failed so far.
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Drives the session until it exits.
    ///
    /// A failed run, including one whose round trip did not verify, is
    /// reported and the driver keeps prompting; with `once` set the
    /// failure is returned instead.
    ///
    /// # Errors
    ///
    /// Console I/O failures, export failures, and run failures in
    /// `once` mode.
    pub fn run(&mut self) -> Result<(), CliError> {
        while self.session.state() != SessionState::Exited {
            self.run_once()?;

            let signal = if self.options.once {
                Signal::Exit
            } else {
                self.await_signal()?
            };
            self.session.signal(signal)?;
        }

        self.finish()
    }

    fn run_once(&mut self) -> Result<(), CliError> {
        let failure = match self.session.run() {
            Ok(report) => {
                let text = format_report(report);
                self.output.write_all(text.as_bytes())?;
                match verification_failure(report) {
                    Some(err) => err,
                    None => return Ok(()),
                }
            }
            Err(e) => e.into(),
        };

        self.failures += 1;
        error!(error = %failure, "benchmark run failed");
        if self.options.once {
            return Err(failure);
        }
        writeln!(self.output, "Run failed: {}", failure)?;
        Ok(())
    }

    fn await_signal(&mut self) -> Result<Signal, CliError> {
        loop {
            writeln!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                info!("control stream closed");
                return Ok(Signal::Exit);
            }

            match parse_signal(&line) {
                Some(signal) => return Ok(signal),
                None => warn!(input = line.trim(), "unrecognized control input"),
            }
        }
    }

    fn finish(&mut self) -> Result<(), CliError> {
        let history = self.session.history();
        if history.len() > 1 {
            let text = format_summary(&self.session.summary());
            self.output.write_all(text.as_bytes())?;
        }

        if let Some(path) = &self.options.json_output {
            export_json(history, path).map_err(|e| CliError::io_error(path, e))?;
            info!(path = %path.display(), runs = history.len(), "exported run reports");
        }

        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serbench::reporters::{CodecResult, GenerationTiming, OperationTiming};
    use serbench::BenchConfig;
    use std::io::Cursor;
    use std::time::Duration;
    use tempfile::TempDir;

    fn session(seed: u64) -> Session {
        Session::new(BenchConfig::default().with_workload_size(50).with_seed(seed)).unwrap()
    }

    fn drive(input: &str, options: DriverOptions) -> (String, Driver<Cursor<Vec<u8>>, Vec<u8>>) {
        let mut driver = Driver::new(
            session(1),
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            options,
        );
        driver.run().unwrap();
        let text = String::from_utf8(driver.output.clone()).unwrap();
        (text, driver)
    }

    #[test]
    fn test_parse_signal() {
        assert_eq!(parse_signal("\n"), Some(Signal::Continue));
        assert_eq!(parse_signal("r\n"), Some(Signal::Continue));
        assert_eq!(parse_signal("Q\n"), Some(Signal::Exit));
        assert_eq!(parse_signal("exit"), Some(Signal::Exit));
        assert_eq!(parse_signal("\u{1b}\n"), Some(Signal::Exit));
        assert_eq!(parse_signal("maybe"), None);
    }

    #[test]
    fn test_quit_after_first_run() {
        let (text, driver) = drive("q\n", DriverOptions::default());
        assert_eq!(driver.session().history().len(), 1);
        assert_eq!(driver.session().state(), SessionState::Exited);
        assert_eq!(text.matches(PROMPT).count(), 1);
        assert!(text.contains("Total Messages Created: 50."));
        assert!(!text.contains("Summary over"));
    }

    #[test]
    fn test_continue_then_quit_prints_summary() {
        let (text, driver) = drive("\nr\nq\n", DriverOptions::default());
        assert_eq!(driver.session().history().len(), 3);
        assert_eq!(text.matches("Total Messages Created").count(), 3);
        assert!(text.contains("Summary over 3 run(s)"));
    }

    #[test]
    fn test_unrecognized_input_reprompts() {
        let (text, driver) = drive("what\nq\n", DriverOptions::default());
        assert_eq!(driver.session().history().len(), 1);
        assert_eq!(text.matches(PROMPT).count(), 2);
    }

    #[test]
    fn test_eof_exits() {
        let (_, driver) = drive("", DriverOptions::default());
        assert_eq!(driver.session().history().len(), 1);
        assert_eq!(driver.session().state(), SessionState::Exited);
    }

    #[test]
    fn test_once_skips_prompt_and_exports() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        let options = DriverOptions {
            once: true,
            json_output: Some(path.clone()),
        };

        let (text, driver) = drive("", options);
        assert!(!text.contains(PROMPT));
        assert_eq!(driver.failures(), 0);

        let exported = std::fs::read_to_string(&path).unwrap();
        assert!(exported.contains("\"encoded_bytes\""));
    }

    fn report(verified: [Option<bool>; 2]) -> RunReport {
        let mut report = RunReport::new(
            3,
            None,
            GenerationTiming {
                count: 1,
                elapsed: Duration::from_millis(1),
            },
        );
        for (name, verified) in ["JSON", "Compressed JSON"].into_iter().zip(verified) {
            report.add_codec(CodecResult {
                codec: name.to_string(),
                encode: OperationTiming::new("Serialize", Duration::from_millis(1)),
                decode: OperationTiming::new("Deserialize", Duration::from_millis(1)),
                encoded_bytes: 10,
                verified,
            });
        }
        report
    }

    #[test]
    fn test_verification_failure_names_mismatched_codecs() {
        assert!(verification_failure(&report([Some(true), Some(true)])).is_none());
        assert!(verification_failure(&report([None, None])).is_none());

        match verification_failure(&report([Some(true), Some(false)])) {
            Some(CliError::RoundTripMismatch { run, codecs }) => {
                assert_eq!(run, 3);
                assert_eq!(codecs, vec!["Compressed JSON".to_string()]);
            }
            other => panic!("expected mismatch, got {:?}", other),
        }
    }
}
