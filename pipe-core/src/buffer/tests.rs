//! Unit tests covering word buffer allocation and byte views.

use crate::config::WORD_SIZE;
use crate::error::Error;

use super::WordBuffer;

#[test]
/// Verify that a zeroed buffer has the requested length and no data.
fn zeroed_buffer_is_all_zero() {
    let buf = WordBuffer::zeroed(2048);
    assert_eq!(buf.len(), 2048);
    assert_eq!(buf.byte_len(), 2048 * WORD_SIZE);
    assert!(buf.iter().all(|&word| word == 0));
}

#[test]
/// Test that an empty buffer reports empty views.
fn empty_buffer_has_empty_views() {
    let buf = WordBuffer::zeroed(0);
    assert!(buf.is_empty());
    assert_eq!(buf.as_bytes(), &[]);
}

#[test]
/// Test that the generated payload starts with the known xorshift words.
fn generate_uses_xorshift_sequence() {
    let buf = WordBuffer::generate(3, 1).unwrap();
    assert_eq!(buf.as_words(), &[270_369, 67_634_689, 2_647_435_461]);
}

#[test]
/// Test that generation with a zero seed fails instead of yielding zeros.
fn generate_rejects_zero_seed() {
    assert!(matches!(WordBuffer::generate(16, 0), Err(Error::ZeroSeed)));
}

#[test]
/// Test that reset clears every word but keeps the length.
fn reset_clears_contents() {
    let mut buf = WordBuffer::generate(64, 1).unwrap();
    assert!(buf.iter().any(|&word| word != 0));

    buf.reset();
    assert_eq!(buf.len(), 64);
    assert!(buf.iter().all(|&word| word == 0));
}

#[test]
/// Test that the byte view is the native-endian encoding of the words.
fn byte_view_matches_native_encoding() {
    let buf = WordBuffer::from(vec![0x0102_0304, 0xAABB_CCDD]);

    let mut expected = Vec::new();
    expected.extend_from_slice(&0x0102_0304u32.to_ne_bytes());
    expected.extend_from_slice(&0xAABB_CCDDu32.to_ne_bytes());

    assert_eq!(buf.as_bytes(), expected.as_slice());
}

#[test]
/// Test that writes through the byte view show up in the words.
fn mutable_byte_view_updates_words() {
    let mut buf = WordBuffer::zeroed(2);
    buf.as_bytes_mut()[WORD_SIZE..].copy_from_slice(&7u32.to_ne_bytes());
    assert_eq!(buf.as_words(), &[0, 7]);
}
