//! Single-process transfer: write one word, read it straight back.

use std::io::{Read, Write};

use crate::buffer::WordBuffer;
use crate::config::WORD_SIZE;
use crate::error::{Error, Result, Side};
use crate::verify::compare_words;

/// Pushes `reference` through a fresh pipe one word at a time and reads
/// each word back before writing the next.
///
/// Both pipe ends are closed before the captured payload is compared, and
/// on every early return.
///
/// # Parameters
///
/// * `reference` - Payload to send
/// * `capture` - Zeroed buffer of the same length that receives the data
///
/// # Errors
///
/// - [`Error::InvalidConfig`] if `capture` and `reference` differ in length
/// - [`Error::Sys`] if the pipe cannot be created
/// - [`Error::Io`] if a read or write call fails
/// - [`Error::ShortTransfer`] if a write and the following read report
///   different byte counts
/// - [`Error::Mismatch`] if the captured payload differs from the reference
pub fn single_process_test(reference: &WordBuffer, capture: &mut WordBuffer) -> Result<()> {
    super::check_lengths(reference, capture)?;

    let (mut reader, mut writer) = pipe_safe::pipe()?;

    transfer_words(&mut writer, &mut reader, reference, capture)?;

    drop(reader);
    drop(writer);

    compare_words(reference, capture)
}

/// Moves `reference` into `capture` word by word through a writer/reader pair.
///
/// For each word: one write of [`WORD_SIZE`] bytes, then, only if that write
/// moved anything, one read of [`WORD_SIZE`] bytes straight into the
/// matching slot of `capture`. The two counts must agree.
///
/// # Errors
///
/// - [`Error::Io`] if a read or write call fails
/// - [`Error::ShortTransfer`] on the first word whose counts differ
pub fn transfer_words<W, R>(
    writer: &mut W,
    reader: &mut R,
    reference: &WordBuffer,
    capture: &mut WordBuffer,
) -> Result<()>
where
    W: Write,
    R: Read,
{
    let words = reference
        .as_bytes()
        .chunks_exact(WORD_SIZE)
        .zip(capture.as_bytes_mut().chunks_exact_mut(WORD_SIZE));

    for (index, (word, slot)) in words.enumerate() {
        let offset = index * WORD_SIZE;

        let written = writer.write(word).map_err(|source| Error::Io {
            side: Side::Writer,
            offset,
            source,
        })?;

        let mut read = 0;
        if written > 0 {
            read = reader.read(slot).map_err(|source| Error::Io {
                side: Side::Reader,
                offset,
                source,
            })?;
        }

        if read != written {
            return Err(Error::ShortTransfer {
                index,
                written,
                read,
            });
        }
    }

    tracing::debug!(words = reference.len(), "single-process transfer complete");
    Ok(())
}
