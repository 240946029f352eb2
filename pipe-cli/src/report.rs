//! Human-readable result lines.

use std::io::Write;

use pipe_core::{IterationOutcome, Reporter};

/// Prints one line per iteration: passes to `out`, failures to `err`.
///
/// Lines look like `single process pipe test 3/10  PASSED`. A failure is
/// preceded on `err` by a line carrying the error itself.
pub struct ConsoleReporter<O, E> {
    out: O,
    err: E,
    quiet: bool,
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    /// Creates a reporter writing to the given streams.
    pub fn new(out: O, err: E, quiet: bool) -> Self {
        Self { out, err, quiet }
    }

    /// Consumes the reporter and returns its streams.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> Reporter for ConsoleReporter<O, E> {
    fn report(&mut self, outcome: &IterationOutcome) {
        let IterationOutcome {
            kind,
            iteration,
            total,
            result,
        } = outcome;

        // Reporting must not abort the run, so stream errors are dropped.
        match result {
            Ok(()) => {
                if !self.quiet {
                    let _ = writeln!(self.out, "{kind} pipe test {iteration}/{total}  PASSED");
                    let _ = self.out.flush();
                }
            }
            Err(error) => {
                let _ = writeln!(self.err, "{kind} pipe test {iteration}/{total}: {error}");
                let _ = writeln!(self.err, "{kind} pipe test {iteration}/{total} FAILED");
                let _ = self.err.flush();
            }
        }
    }
}
