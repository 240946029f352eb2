//! Owned read and write ends of an anonymous pipe.

use std::io;
use std::os::fd::{AsFd, AsRawFd, BorrowedFd, OwnedFd, RawFd};

use crate::error::{Error, Result};
use crate::ffi;

/// Create a fresh unidirectional pipe.
///
/// # Returns
///
/// The read end and the write end, in that order. Each end is closed when
/// it is dropped.
///
/// # Errors
///
/// Returns [`Error::Pipe`] if the descriptor pair could not be created,
/// typically because the process ran out of file descriptors.
pub fn pipe() -> Result<(PipeReader, PipeWriter)> {
    let (read_fd, write_fd) = ffi::pipe().map_err(Error::Pipe)?;
    Ok((PipeReader { fd: read_fd }, PipeWriter { fd: write_fd }))
}

/// The read end of a pipe.
///
/// Every call to [`io::Read::read`] maps to exactly one `read(2)`, so the
/// returned count may be smaller than the buffer. A zero count for a
/// non-empty buffer means every write end has been closed.
#[derive(Debug)]
pub struct PipeReader {
    fd: OwnedFd,
}

/// The write end of a pipe.
///
/// Every call to [`io::Write::write`] maps to exactly one `write(2)`; short
/// writes are reported as-is.
#[derive(Debug)]
pub struct PipeWriter {
    fd: OwnedFd,
}

impl io::Read for PipeReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        ffi::read(self.fd.as_fd(), buf)
    }
}

impl io::Write for PipeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        ffi::write(self.fd.as_fd(), buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        // Pipes are unbuffered on our side
        Ok(())
    }
}

impl AsFd for PipeReader {
    fn as_fd(&self) -> BorrowedFd<'_> {
        self.fd.as_fd()
    }
}

impl AsFd for PipeWriter {
    fn as_fd(&self) -> BorrowedFd<'_> {
        self.fd.as_fd()
    }
}

impl AsRawFd for PipeReader {
    fn as_raw_fd(&self) -> RawFd {
        self.fd.as_raw_fd()
    }
}

impl AsRawFd for PipeWriter {
    fn as_raw_fd(&self) -> RawFd {
        self.fd.as_raw_fd()
    }
}

impl From<PipeReader> for OwnedFd {
    fn from(reader: PipeReader) -> Self {
        reader.fd
    }
}

impl From<PipeWriter> for OwnedFd {
    fn from(writer: PipeWriter) -> Self {
        writer.fd
    }
}
