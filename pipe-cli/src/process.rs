//! High-level run orchestration.

use std::io::{self, Write};

use pipe_core::{Harness, RunReport};

use crate::config::CliConfig;
use crate::error::{Error, Result};
use crate::report::ConsoleReporter;

/// Runs the selected suites, printing result lines to `out` and `err`.
///
/// # Returns
///
/// The aggregated [`RunReport`]. Failed iterations do not make this an
/// error unless `config.strict` is set.
///
/// # Errors
///
/// - [`Error::Setup`] if the test configuration is rejected
/// - [`Error::TestsFailed`] in strict mode when any iteration failed
pub fn run<O: Write, E: Write>(config: &CliConfig, out: O, err: E) -> Result<RunReport> {
    let mut harness = Harness::new(config.test)?;
    let mut reporter = ConsoleReporter::new(out, err, config.quiet);

    let report = harness.run_all(config.selection.kinds(), &mut reporter);
    check_report(report, config.strict)
}

/// Turns a report with failures into [`Error::TestsFailed`] when `strict` is set.
pub(crate) fn check_report(report: RunReport, strict: bool) -> Result<RunReport> {
    let failures = report.failures();
    if failures > 0 {
        tracing::warn!(failures, "pipe tests failed");
        if strict {
            let iterations = report
                .suites
                .iter()
                .map(|suite| suite.iterations() as usize)
                .sum();
            return Err(Error::TestsFailed {
                failures,
                iterations,
            });
        }
    }

    Ok(report)
}

/// Runs against the process's stdout and stderr with program-prefixed errors.
///
/// # Errors
///
/// Returns the [`run`] error converted to [`io::Error`], with `program`
/// prepended to the message.
pub fn run_cli(config: &CliConfig, program: &str) -> io::Result<RunReport> {
    run(config, io::stdout().lock(), io::stderr()).map_err(|err| {
        let io_err = io::Error::from(err);
        io::Error::new(io_err.kind(), format!("{program}: {io_err}"))
    })
}
