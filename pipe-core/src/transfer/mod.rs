//! The two pipe transfer tests.

mod multi;
mod single;

pub use multi::{multi_process_test, read_chunks, write_chunks};
pub use single::{single_process_test, transfer_words};

use crate::buffer::WordBuffer;
use crate::error::{Error, Result};

/// Rejects a capture buffer that cannot hold exactly the reference payload.
fn check_lengths(reference: &WordBuffer, capture: &WordBuffer) -> Result<()> {
    if capture.len() != reference.len() {
        return Err(Error::InvalidConfig(format!(
            "capture buffer holds {} words but the payload has {}",
            capture.len(),
            reference.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io;

    /// A writer that lies about the byte count of one chosen call.
    ///
    /// The bytes are forwarded to the inner writer untouched; only the
    /// returned count is altered. Used to inject a written/read mismatch.
    pub struct MiscountingWriter<W> {
        inner: W,
        fail_on_call: usize,
        calls: usize,
    }

    impl<W> MiscountingWriter<W> {
        /// Creates a writer whose `fail_on_call`-th call (zero-based) under-reports by one.
        pub fn new(inner: W, fail_on_call: usize) -> Self {
            Self {
                inner,
                fail_on_call,
                calls: 0,
            }
        }
    }

    impl<W: io::Write> io::Write for MiscountingWriter<W> {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let written = self.inner.write(buf)?;
            let call = self.calls;
            self.calls += 1;

            if call == self.fail_on_call && written > 0 {
                Ok(written - 1)
            } else {
                Ok(written)
            }
        }

        fn flush(&mut self) -> io::Result<()> {
            self.inner.flush()
        }
    }

    /// A writer that fails with `BrokenPipe` once `fail_after` bytes went through.
    pub struct FailingWriter<W> {
        inner: W,
        fail_after: usize,
        written: usize,
    }

    impl<W> FailingWriter<W> {
        /// Creates a writer that forwards at most `fail_after` bytes.
        pub fn new(inner: W, fail_after: usize) -> Self {
            Self {
                inner,
                fail_after,
                written: 0,
            }
        }
    }

    impl<W: io::Write> io::Write for FailingWriter<W> {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written >= self.fail_after {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "Simulated write error"));
            }

            let allowed = buf.len().min(self.fail_after - self.written);
            let written = self.inner.write(&buf[..allowed])?;
            self.written += written;
            Ok(written)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.inner.flush()
        }
    }
}
