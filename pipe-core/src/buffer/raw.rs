//! Word buffer with a byte-level view for pipe I/O.

use std::ops::{Deref, DerefMut};

use crate::config::WORD_SIZE;
use crate::error::Result;
use crate::rng::Xorshift32;

/// A fixed-length sequence of `u32` words that can also be viewed as bytes.
///
/// [`WordBuffer`] is allocated once and reused: the driver calls
/// [`WordBuffer::reset`] between iterations instead of reallocating. The
/// byte views expose the words in native byte order, which is exactly what
/// moves through the pipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBuffer {
    /// Backing storage, never resized after construction.
    words: Vec<u32>,
}

impl WordBuffer {
    /// Allocates a zero-initialised buffer of `len` words.
    pub fn zeroed(len: usize) -> Self {
        Self {
            words: vec![0; len],
        }
    }

    /// Allocates a buffer of `len` words filled from an xorshift generator.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ZeroSeed`] if `seed` is zero. The check runs
    /// before any allocation or generation.
    pub fn generate(len: usize, seed: u32) -> Result<Self> {
        let mut rng = Xorshift32::from_seed(seed)?;
        let mut buffer = Self::zeroed(len);
        rng.fill(&mut buffer.words);
        Ok(buffer)
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the buffer holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the size of the buffer in bytes.
    pub fn byte_len(&self) -> usize {
        self.words.len() * WORD_SIZE
    }

    /// Sets every word back to zero without reallocating.
    pub fn reset(&mut self) {
        self.words.fill(0);
    }

    /// Returns the words as a slice.
    pub fn as_words(&self) -> &[u32] {
        &self.words
    }

    /// Returns the words as a mutable slice.
    pub fn as_words_mut(&mut self) -> &mut [u32] {
        &mut self.words
    }

    /// Returns an immutable byte view of the whole buffer.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: `u32` has no padding and `u8` has alignment 1, so the
        // word storage is valid as `byte_len()` initialised bytes for the
        // lifetime of the shared borrow.
        unsafe { std::slice::from_raw_parts(self.words.as_ptr().cast::<u8>(), self.byte_len()) }
    }

    /// Returns a mutable byte view of the whole buffer.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let len = self.byte_len();
        // SAFETY: as for `as_bytes`; additionally every bit pattern is a
        // valid `u32`, so arbitrary byte writes keep the words valid.
        unsafe { std::slice::from_raw_parts_mut(self.words.as_mut_ptr().cast::<u8>(), len) }
    }
}

impl Deref for WordBuffer {
    type Target = [u32];

    fn deref(&self) -> &Self::Target {
        self.as_words()
    }
}

impl DerefMut for WordBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_words_mut()
    }
}

impl From<Vec<u32>> for WordBuffer {
    fn from(words: Vec<u32>) -> Self {
        Self { words }
    }
}
