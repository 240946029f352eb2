//! Fixed parameters of the pipe tests and their runtime configuration.

use crate::error::{Error, Result};

/// Width in bytes of one payload word.
pub const WORD_SIZE: usize = std::mem::size_of::<u32>();

/// Number of words in the reference payload.
pub const NUM_WORDS: usize = 2048;

/// Size of the reference payload in bytes.
pub const NUM_BYTES: usize = NUM_WORDS * WORD_SIZE;

/// Number of iterations run for each test kind.
pub const NUM_TESTS: u32 = 10;

/// Upper bound (exclusive) in bytes for a single chunked read.
///
/// The writer divides the same draw by [`WORD_SIZE`], so its chunks are
/// four times smaller than the reader's.
pub const MAX_CHUNK_BYTES: usize = 512;

/// Seed of the payload generator. Must be non-zero.
pub const PAYLOAD_SEED: u32 = 1;

/// Seed shared by the writer's and the reader's chunk-size generators.
pub const CHUNK_SEED: u32 = 0;

/// Largest payload, in words, whose byte size still fits an allocation.
pub const MAX_WORDS: usize = isize::MAX as usize / WORD_SIZE;

/// Parameters of a full test run.
///
/// [`TestConfig::default`] reproduces the reference configuration built from
/// the constants in this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestConfig {
    /// Number of payload words
    pub words: usize,
    /// Iterations per test kind
    pub iterations: u32,
    /// Chunk size bound in bytes
    pub max_chunk_bytes: usize,
    /// Payload generator seed
    pub payload_seed: u32,
    /// Chunk-size generator seed
    pub chunk_seed: u32,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            words: NUM_WORDS,
            iterations: NUM_TESTS,
            max_chunk_bytes: MAX_CHUNK_BYTES,
            payload_seed: PAYLOAD_SEED,
            chunk_seed: CHUNK_SEED,
        }
    }
}

impl TestConfig {
    /// Returns the payload size in bytes.
    pub fn total_bytes(&self) -> usize {
        self.words * WORD_SIZE
    }

    /// Checks that the configuration can drive a complete run.
    ///
    /// # Errors
    ///
    /// - [`Error::ZeroSeed`] if `payload_seed` is zero, the fixed point of the
    ///   payload generator
    /// - [`Error::InvalidConfig`] if there are no words or no iterations,
    ///   if the payload is too large to address in bytes, or if
    ///   `max_chunk_bytes` is smaller than two words (every writer chunk
    ///   would then round down to zero bytes)
    pub fn validate(&self) -> Result<()> {
        if self.payload_seed == 0 {
            return Err(Error::ZeroSeed);
        }
        if self.words == 0 {
            return Err(Error::InvalidConfig("payload must hold at least one word".into()));
        }
        if self.words > MAX_WORDS {
            return Err(Error::InvalidConfig(format!(
                "payload of {} words exceeds the maximum of {MAX_WORDS} words",
                self.words
            )));
        }
        if self.iterations == 0 {
            return Err(Error::InvalidConfig("at least one iteration is required".into()));
        }
        if self.max_chunk_bytes < WORD_SIZE * 2 {
            return Err(Error::InvalidConfig(format!(
                "maximum chunk size of {} bytes is below the minimum of {} bytes",
                self.max_chunk_bytes,
                WORD_SIZE * 2
            )));
        }
        if u32::try_from(self.max_chunk_bytes).is_err() {
            return Err(Error::InvalidConfig(format!(
                "maximum chunk size of {} bytes does not fit in a generator word",
                self.max_chunk_bytes
            )));
        }
        Ok(())
    }
}
