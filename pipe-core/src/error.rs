//! Error types and result handling for pipe transfer tests.

use std::fmt;
use std::io;
use std::process::ExitStatus;

pub use pipe_safe::Error as SysError;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Which end of the pipe an I/O failure happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The write end
    Writer,
    /// The read end
    Reader,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Writer => write!(f, "write"),
            Side::Reader => write!(f, "read"),
        }
    }
}

/// Failure modes of a single test iteration or of the run setup.
#[derive(Debug)]
pub enum Error {
    /// Pipe creation, fork or wait failed.
    Sys(SysError),

    /// A read or write call on the pipe returned an error.
    Io {
        /// End of the pipe that failed
        side: Side,
        /// Bytes already moved through this end before the failure
        offset: usize,
        /// Underlying OS error
        source: io::Error,
    },

    /// A word-sized write and the read that followed moved different amounts.
    ShortTransfer {
        /// Index of the word being transferred
        index: usize,
        /// Bytes reported by the write call
        written: usize,
        /// Bytes reported by the read call
        read: usize,
    },

    /// The reader saw end-of-stream before the whole payload arrived.
    UnexpectedEof {
        /// Bytes received before end-of-stream
        received: usize,
        /// Bytes that were expected in total
        expected: usize,
    },

    /// The writer process did not exit successfully.
    WriterFailed {
        /// Exit status reported for the writer process
        status: ExitStatus,
    },

    /// The captured payload differs from the reference payload.
    Mismatch {
        /// First index at which the buffers differ
        index: usize,
        /// Reference word at `index`
        expected: u32,
        /// Captured word at `index`
        actual: u32,
        /// Total number of differing words
        count: usize,
    },

    /// The payload generator was seeded with zero.
    ZeroSeed,

    /// The run configuration cannot drive a test.
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Sys(err) => write!(f, "{err}"),
            Error::Io {
                side,
                offset,
                source,
            } => write!(f, "pipe {side} failed at byte {offset}: {source}"),
            Error::ShortTransfer {
                index,
                written,
                read,
            } => write!(
                f,
                "{written} bytes written but only {read} bytes read (word {index})"
            ),
            Error::UnexpectedEof { received, expected } => write!(
                f,
                "pipe closed after {received} of {expected} bytes"
            ),
            Error::WriterFailed { status } => write!(f, "writer process failed: {status}"),
            Error::Mismatch {
                index,
                expected,
                actual,
                count,
            } => write!(
                f,
                "in_bytes[{index}] != out_bytes[{index}] ({expected:#010x} != {actual:#010x}, \
                 {count} mismatching words)"
            ),
            Error::ZeroSeed => write!(
                f,
                "payload seed must be non-zero; zero is a fixed point of the generator"
            ),
            Error::InvalidConfig(message) => write!(f, "invalid configuration: {message}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Sys(err) => Some(err),
            Error::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<SysError> for Error {
    fn from(err: SysError) -> Self {
        Error::Sys(err)
    }
}
