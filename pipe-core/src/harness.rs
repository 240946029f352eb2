//! Test driver: owns the buffers and runs each test kind repeatedly.

use std::fmt;

use crate::buffer::WordBuffer;
use crate::config::TestConfig;
use crate::error::Result;
use crate::transfer::{multi_process_test, single_process_test};

/// The two pipe topologies under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestKind {
    /// Write and read back in one control flow
    SingleProcess,
    /// Forked writer, concurrent reader
    MultiProcess,
}

impl TestKind {
    /// Every kind, in the order a full run executes them.
    pub const ALL: [TestKind; 2] = [TestKind::SingleProcess, TestKind::MultiProcess];

    /// Human-readable name used in result lines.
    pub fn label(self) -> &'static str {
        match self {
            TestKind::SingleProcess => "single process",
            TestKind::MultiProcess => "multi process",
        }
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one iteration of one test kind.
#[derive(Debug)]
pub struct IterationOutcome {
    /// Kind of test that ran
    pub kind: TestKind,
    /// One-based iteration number
    pub iteration: u32,
    /// Number of iterations in the suite
    pub total: u32,
    /// `Ok` on pass, the failure otherwise
    pub result: Result<()>,
}

impl IterationOutcome {
    /// Returns `true` if the iteration passed.
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Receives every iteration outcome as soon as it is known.
pub trait Reporter {
    /// Called once per iteration, in order.
    fn report(&mut self, outcome: &IterationOutcome);
}

/// Reporter that discards every outcome.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _outcome: &IterationOutcome) {}
}

/// Aggregated outcome of one suite of iterations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteReport {
    /// Kind of test the suite ran
    pub kind: TestKind,
    /// Number of passed iterations
    pub passed: u32,
    /// One-based numbers of the failed iterations
    pub failed: Vec<u32>,
}

impl SuiteReport {
    /// Returns the number of iterations that ran.
    pub fn iterations(&self) -> u32 {
        self.passed + self.failed.len() as u32
    }

    /// Returns `true` if no iteration failed.
    pub fn all_passed(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Aggregated outcome of a full run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Suites in execution order
    pub suites: Vec<SuiteReport>,
}

impl RunReport {
    /// Returns the total number of failed iterations across all suites.
    pub fn failures(&self) -> usize {
        self.suites.iter().map(|suite| suite.failed.len()).sum()
    }

    /// Returns `true` if every iteration of every suite passed.
    pub fn all_passed(&self) -> bool {
        self.suites.iter().all(SuiteReport::all_passed)
    }
}

/// Owns the reference and capture buffers for a run.
///
/// The reference payload is generated once at construction. The capture
/// buffer is allocated once and zeroed before every iteration.
#[derive(Debug)]
pub struct Harness {
    config: TestConfig,
    reference: WordBuffer,
    capture: WordBuffer,
}

impl Harness {
    /// Validates `config` and generates the reference payload.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ZeroSeed`] or [`crate::Error::InvalidConfig`]
    /// if the configuration is rejected; nothing is generated in that case.
    pub fn new(config: TestConfig) -> Result<Self> {
        config.validate()?;

        let reference = WordBuffer::generate(config.words, config.payload_seed)?;
        let capture = WordBuffer::zeroed(config.words);
        tracing::debug!(
            words = config.words,
            seed = config.payload_seed,
            "generated reference payload"
        );

        Ok(Self {
            config,
            reference,
            capture,
        })
    }

    /// Returns the run configuration.
    pub fn config(&self) -> &TestConfig {
        &self.config
    }

    /// Returns the reference payload.
    pub fn reference(&self) -> &WordBuffer {
        &self.reference
    }

    /// Runs every kind in `kinds`, one suite after another.
    pub fn run_all(&mut self, kinds: &[TestKind], reporter: &mut dyn Reporter) -> RunReport {
        let mut suites = Vec::with_capacity(kinds.len());
        for &kind in kinds {
            suites.push(self.run(kind, reporter));
        }
        RunReport { suites }
    }

    /// Runs the configured number of iterations of one kind.
    pub fn run(&mut self, kind: TestKind, reporter: &mut dyn Reporter) -> SuiteReport {
        let config = self.config;
        match kind {
            TestKind::SingleProcess => self.run_suite(kind, reporter, |reference, capture, _| {
                single_process_test(reference, capture)
            }),
            TestKind::MultiProcess => self.run_suite(kind, reporter, |reference, capture, _| {
                multi_process_test(reference, capture, &config)
            }),
        }
    }

    /// Runs `runner` once per iteration, zeroing the capture buffer first.
    ///
    /// A failed iteration never stops the suite. `runner` receives the
    /// reference payload, the zeroed capture buffer and the one-based
    /// iteration number.
    pub fn run_suite<F>(
        &mut self,
        kind: TestKind,
        reporter: &mut dyn Reporter,
        mut runner: F,
    ) -> SuiteReport
    where
        F: FnMut(&WordBuffer, &mut WordBuffer, u32) -> Result<()>,
    {
        let total = self.config.iterations;
        let mut report = SuiteReport {
            kind,
            passed: 0,
            failed: Vec::new(),
        };

        for iteration in 1..=total {
            let _span =
                tracing::info_span!("test", kind = kind.label(), iteration, total).entered();

            self.capture.reset();
            let result = runner(&self.reference, &mut self.capture, iteration);

            match &result {
                Ok(()) => {
                    tracing::info!("passed");
                    report.passed += 1;
                }
                Err(err) => {
                    tracing::error!("{err} (test {iteration}/{total})");
                    report.failed.push(iteration);
                }
            }

            reporter.report(&IterationOutcome {
                kind,
                iteration,
                total,
                result,
            });
        }

        report
    }
}
