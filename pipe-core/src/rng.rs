//! Deterministic pseudo-random generators used by the pipe tests.
//!
//! Two generators with different jobs:
//!
//! - [`xorshift32`] produces the reference payload. Its state must never be
//!   zero, because zero maps to itself and the payload would be all zeros.
//! - [`lcg`] produces chunk sizes. It does not touch any state; callers keep
//!   the returned word as their next state, which lets two processes seeded
//!   identically derive the same sequence without talking to each other.

use std::num::NonZeroU32;

use crate::error::{Error, Result};

/// Multiplier of the chunk-size generator.
pub const LCG_MULTIPLIER: u32 = 1_664_525;

/// Increment of the chunk-size generator.
pub const LCG_INCREMENT: u32 = 1_013_904_223;

/// Advance a 32-bit xorshift state in place and return the new word.
///
/// The `13, 17, 5` shift triple gives the maximal period of `2^32 - 1` over
/// non-zero states. A zero state stays zero forever; use [`Xorshift32`] to
/// have that rejected up front.
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Compute the successor of `state` in the linear congruential sequence
/// `state * 1664525 + 1013904223 (mod 2^32)`.
pub const fn lcg(state: u32) -> u32 {
    state
        .wrapping_mul(LCG_MULTIPLIER)
        .wrapping_add(LCG_INCREMENT)
}

/// Xorshift generator whose state is non-zero by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Creates a generator from a seed that is known to be non-zero.
    pub fn new(seed: NonZeroU32) -> Self {
        Self { state: seed.get() }
    }

    /// Creates a generator from an unchecked seed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroSeed`] if `seed` is zero.
    pub fn from_seed(seed: u32) -> Result<Self> {
        NonZeroU32::new(seed).map(Self::new).ok_or(Error::ZeroSeed)
    }

    /// Returns the current state word.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Produces the next word of the sequence.
    pub fn next_word(&mut self) -> u32 {
        xorshift32(&mut self.state)
    }

    /// Overwrites `out` with consecutive words of the sequence.
    pub fn fill(&mut self, out: &mut [u32]) {
        for word in out {
            *word = self.next_word();
        }
    }
}

impl Iterator for Xorshift32 {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.next_word())
    }
}
