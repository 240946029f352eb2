//! Error types used by the safe POSIX wrappers.

use std::fmt;
use std::io;

/// Type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures reported by the process-level primitives.
///
/// Plain reads and writes go through [`std::io::Read`] / [`std::io::Write`]
/// and therefore surface as [`io::Error`] directly.
#[derive(Debug)]
pub enum Error {
    /// `pipe(2)` could not create a descriptor pair.
    Pipe(io::Error),

    /// `fork(2)` could not create a child process.
    Fork(io::Error),

    /// `waitpid(2)` failed for the given child.
    Wait {
        /// Process id that was waited on
        pid: i32,
        /// Underlying OS error
        source: io::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Pipe(err) => write!(f, "pipe creation failed: {err}"),
            Error::Fork(err) => write!(f, "fork failed: {err}"),
            Error::Wait { pid, source } => write!(f, "waiting for child {pid} failed: {source}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Pipe(err) | Error::Fork(err) | Error::Wait { source: err, .. } => Some(err),
        }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        let kind = match &err {
            Error::Pipe(source) | Error::Fork(source) | Error::Wait { source, .. } => source.kind(),
        };
        io::Error::new(kind, err)
    }
}
