//! Multi-process transfer: a forked writer and a concurrent reader.

use std::io::{Read, Write};
use std::process::ExitStatus;

use pipe_safe::{exit_child, Fork, PipeWriter};

use crate::buffer::WordBuffer;
use crate::config::TestConfig;
use crate::error::{Error, Result, Side};
use crate::schedule::{ChunkSchedule, Role};
use crate::verify::compare_words;

/// Exit code of a writer child that finished its schedule.
const CHILD_SUCCESS: i32 = 0;

/// Exit code of a writer child that hit a write error.
const CHILD_FAILURE: i32 = 1;

/// Pushes `reference` from a forked child to the parent through a fresh pipe.
///
/// The child keeps only the write end and writes the payload in chunks
/// drawn from a [`Role::Writer`] schedule. The parent keeps only the read
/// end and reads in chunks drawn from a [`Role::Reader`] schedule. Both
/// schedules start from `config.chunk_seed`, so neither side needs to tell
/// the other how much it moves.
///
/// The parent always closes its read end and reaps the child before
/// returning, including after a failed read.
///
/// # Parameters
///
/// * `reference` - Payload to send
/// * `capture` - Zeroed buffer of the same length that receives the data
/// * `config` - Source of the chunk seed and chunk bound
///
/// # Errors
///
/// - [`Error::ZeroSeed`] or [`Error::InvalidConfig`] if `config` is rejected
///   or `capture` and `reference` differ in length
/// - [`Error::Sys`] if the pipe cannot be created, the fork fails or the
///   child cannot be waited on
/// - [`Error::Io`] if a read in the parent fails
/// - [`Error::WriterFailed`] if the child did not exit successfully
/// - [`Error::UnexpectedEof`] if the pipe closed early while the child
///   still reported success
/// - [`Error::Mismatch`] if the captured payload differs from the reference
///
/// # Panics
///
/// Does not panic in the parent. The child never returns from this
/// function; it terminates through `_exit`.
pub fn multi_process_test(
    reference: &WordBuffer,
    capture: &mut WordBuffer,
    config: &TestConfig,
) -> Result<()> {
    forked_transfer(reference, capture, config, |writer| writer)
}

/// Runs the forked transfer with the child's write end wrapped by `wrap`.
fn forked_transfer<W, F>(
    reference: &WordBuffer,
    capture: &mut WordBuffer,
    config: &TestConfig,
    wrap: F,
) -> Result<()>
where
    W: Write,
    F: FnOnce(PipeWriter) -> W,
{
    config.validate()?;
    super::check_lengths(reference, capture)?;

    let total = reference.byte_len();
    let max_chunk = u32::try_from(config.max_chunk_bytes)
        .map_err(|_| Error::InvalidConfig("chunk bound does not fit in 32 bits".into()))?;

    let (reader, writer) = pipe_safe::pipe()?;

    // SAFETY: the child touches nothing but its copy of `reference`, the
    // write end and the tracing subscriber, then leaves through `_exit`.
    match unsafe { pipe_safe::fork() }? {
        Fork::Child => {
            drop(reader);

            let schedule = ChunkSchedule::new(Role::Writer, config.chunk_seed, max_chunk, total);
            let code = match write_chunks(wrap(writer), reference.as_bytes(), schedule) {
                Ok(()) => CHILD_SUCCESS,
                Err(err) => {
                    tracing::error!(%err, "pipe write failed");
                    CHILD_FAILURE
                }
            };

            exit_child(code)
        }
        Fork::Parent(child) => {
            drop(writer);
            tracing::debug!(pid = child.id(), total, "forked writer");

            let schedule = ChunkSchedule::new(Role::Reader, config.chunk_seed, max_chunk, total);
            let received = read_chunks(reader, capture.as_bytes_mut(), schedule);

            let status = child.wait()?;
            tracing::debug!(%status, "writer exited");

            writer_outcome(received, status)?;
            compare_words(reference, capture)
        }
    }
}

/// Combines the parent's read result with the writer's exit status.
///
/// A read error wins over the status, except end-of-stream, which is only
/// a symptom when the writer itself failed.
fn writer_outcome(received: Result<()>, status: ExitStatus) -> Result<()> {
    match received {
        Err(Error::UnexpectedEof { .. }) if !status.success() => {
            Err(Error::WriterFailed { status })
        }
        Err(err) => Err(err),
        Ok(()) if !status.success() => Err(Error::WriterFailed { status }),
        Ok(()) => Ok(()),
    }
}

/// Writes `payload` in scheduled chunks, then closes the writer.
///
/// Each attempt writes at most the drawn chunk size from the current
/// offset; short writes simply advance the offset by what was accepted.
///
/// # Errors
///
/// Returns [`Error::Io`] for the first failing write.
pub fn write_chunks<W: Write>(
    mut writer: W,
    payload: &[u8],
    mut schedule: ChunkSchedule,
) -> Result<()> {
    while let Some(chunk) = schedule.next_chunk() {
        let offset = schedule.transferred();
        let written = writer
            .write(&payload[offset..offset + chunk])
            .map_err(|source| Error::Io {
                side: Side::Writer,
                offset,
                source,
            })?;

        tracing::trace!(offset, chunk, written, "write");
        schedule.record(written);
    }

    drop(writer);
    Ok(())
}

/// Reads into `out` in scheduled chunks until it is full, then closes the reader.
///
/// A zero-byte result for a non-empty request means the write end is gone.
///
/// # Errors
///
/// - [`Error::Io`] for the first failing read
/// - [`Error::UnexpectedEof`] if end-of-stream arrives before `out` is full
pub fn read_chunks<R: Read>(
    mut reader: R,
    out: &mut [u8],
    mut schedule: ChunkSchedule,
) -> Result<()> {
    while let Some(chunk) = schedule.next_chunk() {
        let offset = schedule.transferred();
        let read = reader
            .read(&mut out[offset..offset + chunk])
            .map_err(|source| Error::Io {
                side: Side::Reader,
                offset,
                source,
            })?;

        tracing::trace!(offset, chunk, read, "read");
        if read == 0 && chunk > 0 {
            return Err(Error::UnexpectedEof {
                received: offset,
                expected: out.len(),
            });
        }
        schedule.record(read);
    }

    drop(reader);
    Ok(())
}
