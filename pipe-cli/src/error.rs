//! Error types for pipe test CLI operations.

use std::io;

use thiserror::Error;

/// Main error type for CLI runs.
#[derive(Debug, Error)]
pub enum Error {
    /// The run could not be set up
    #[error("{0}")]
    Setup(#[from] pipe_core::Error),

    /// Iterations failed and strict mode is on
    #[error("{failures} of {iterations} test iterations failed")]
    TestsFailed {
        /// Number of failed iterations
        failures: usize,
        /// Number of iterations run
        iterations: usize,
    },
}

/// Specialized `Result` type for CLI runs.
pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match &err {
            Error::Setup(pipe_core::Error::ZeroSeed | pipe_core::Error::InvalidConfig(_)) => {
                io::Error::new(io::ErrorKind::InvalidInput, err)
            }
            Error::Setup(_) | Error::TestsFailed { .. } => io::Error::other(err),
        }
    }
}
