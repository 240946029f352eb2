//! Chunk-size schedules for the multi-process test.
//!
//! Writer and reader each own a [`ChunkSchedule`] seeded with the same
//! value. Both advance their generator once per I/O attempt, so they walk
//! the same sequence of draws without exchanging sizes. The draw is scaled
//! differently per [`Role`]: the reader asks for up to `max_chunk_bytes`
//! bytes at once, the writer for a quarter of that. Mismatched sizes force
//! the pipe through partial reads and short writes.

use crate::config::WORD_SIZE;
use crate::rng::lcg;

/// The side of the pipe a schedule drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Owns the write end
    Writer,
    /// Owns the read end
    Reader,
}

impl Role {
    /// Maps a raw generator draw to an unclamped chunk size in bytes.
    pub fn chunk_from_draw(self, draw: u32, max_chunk_bytes: u32) -> usize {
        let bounded = (draw % max_chunk_bytes) as usize;
        match self {
            Role::Writer => bounded / WORD_SIZE,
            Role::Reader => bounded,
        }
    }
}

/// Stateful source of chunk sizes for one side of a transfer.
#[derive(Debug, Clone)]
pub struct ChunkSchedule {
    role: Role,
    state: u32,
    max_chunk_bytes: u32,
    total: usize,
    done: usize,
}

impl ChunkSchedule {
    /// Creates a schedule moving `total` bytes.
    ///
    /// `max_chunk_bytes` must be non-zero; [`crate::TestConfig::validate`]
    /// guarantees a usable bound for configured runs.
    pub fn new(role: Role, seed: u32, max_chunk_bytes: u32, total: usize) -> Self {
        debug_assert!(max_chunk_bytes > 0);
        Self {
            role,
            state: seed,
            max_chunk_bytes,
            total,
            done: 0,
        }
    }

    /// Returns the side this schedule drives.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the current generator state.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Returns the bytes recorded as transferred so far.
    pub fn transferred(&self) -> usize {
        self.done
    }

    /// Returns the bytes still to be transferred.
    pub fn remaining(&self) -> usize {
        self.total - self.done
    }

    /// Returns `true` once every byte has been recorded.
    pub fn is_complete(&self) -> bool {
        self.done >= self.total
    }

    /// Draws the size of the next I/O attempt.
    ///
    /// The generator advances on every call. The size is clamped to the
    /// remaining bytes and may be zero. Returns `None` when the transfer is
    /// complete, without advancing.
    pub fn next_chunk(&mut self) -> Option<usize> {
        if self.is_complete() {
            return None;
        }

        self.state = lcg(self.state);
        let chunk = self.role.chunk_from_draw(self.state, self.max_chunk_bytes);
        Some(chunk.min(self.remaining()))
    }

    /// Records that an attempt actually moved `bytes` bytes.
    pub fn record(&mut self, bytes: usize) {
        debug_assert!(bytes <= self.remaining());
        self.done += bytes;
    }
}

/// Simulates a schedule in which every attempt moves its full chunk.
///
/// Returns the chunk sizes in order, zero-sized attempts included.
pub fn simulate(role: Role, seed: u32, max_chunk_bytes: u32, total: usize) -> Vec<usize> {
    let mut schedule = ChunkSchedule::new(role, seed, max_chunk_bytes, total);
    let mut chunks = Vec::new();
    while let Some(chunk) = schedule.next_chunk() {
        schedule.record(chunk);
        chunks.push(chunk);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CHUNK_SEED, MAX_CHUNK_BYTES, NUM_BYTES};

    const MAX: u32 = MAX_CHUNK_BYTES as u32;

    /// Test the first chunk sizes drawn by both roles from seed 0.
    #[test]
    fn first_chunks_from_seed_zero() {
        let reader = simulate(Role::Reader, CHUNK_SEED, MAX, NUM_BYTES);
        let writer = simulate(Role::Writer, CHUNK_SEED, MAX, NUM_BYTES);

        assert_eq!(&reader[..4], &[351, 306, 233, 308]);
        assert_eq!(&writer[..4], &[87, 76, 58, 77]);
    }

    /// Test that independently advanced schedules with one seed agree.
    #[test]
    fn identical_seeds_agree() {
        for role in [Role::Writer, Role::Reader] {
            let parent = simulate(role, CHUNK_SEED, MAX, NUM_BYTES);
            let child = simulate(role, CHUNK_SEED, MAX, NUM_BYTES);
            assert_eq!(parent, child);
        }

        let mut writer = ChunkSchedule::new(Role::Writer, 99, MAX, usize::MAX);
        let mut reader = ChunkSchedule::new(Role::Reader, 99, MAX, usize::MAX);
        for _ in 0..1000 {
            writer.next_chunk();
            reader.next_chunk();
            assert_eq!(writer.state(), reader.state());
        }
    }

    /// Test that each side moves exactly the payload size.
    #[test]
    fn chunks_sum_to_total() {
        for total in [0, 1, 3, 4, 511, 512, 513, NUM_BYTES] {
            let written: usize = simulate(Role::Writer, CHUNK_SEED, MAX, total).iter().sum();
            let read: usize = simulate(Role::Reader, CHUNK_SEED, MAX, total).iter().sum();
            assert_eq!(written, total);
            assert_eq!(read, total);
        }
    }

    /// Test that chunks stay within their role's bound.
    #[test]
    fn chunks_respect_role_bounds() {
        let writer = simulate(Role::Writer, CHUNK_SEED, MAX, NUM_BYTES);
        let reader = simulate(Role::Reader, CHUNK_SEED, MAX, NUM_BYTES);

        assert!(writer.iter().all(|&c| c < MAX_CHUNK_BYTES / WORD_SIZE));
        assert!(reader.iter().all(|&c| c < MAX_CHUNK_BYTES));
        assert!(writer.len() > reader.len());
    }

    /// Test that an oversized draw is clamped exactly to the remainder.
    #[test]
    fn last_chunk_is_clamped_to_remainder() {
        // The first reader draw from seed 0 is 351 bytes.
        let mut schedule = ChunkSchedule::new(Role::Reader, CHUNK_SEED, MAX, 100);
        assert_eq!(schedule.next_chunk(), Some(100));
        schedule.record(100);
        assert!(schedule.is_complete());
        assert_eq!(schedule.next_chunk(), None);

        let mut schedule = ChunkSchedule::new(Role::Reader, CHUNK_SEED, MAX, 400);
        assert_eq!(schedule.next_chunk(), Some(351));
        schedule.record(351);
        assert_eq!(schedule.next_chunk(), Some(49));
    }

    /// Test that a short transfer keeps the remainder outstanding.
    #[test]
    fn partial_record_leaves_remainder() {
        let mut schedule = ChunkSchedule::new(Role::Reader, CHUNK_SEED, MAX, 1000);
        let chunk = schedule.next_chunk().unwrap();
        schedule.record(chunk / 2);
        assert_eq!(schedule.transferred(), chunk / 2);
        assert_eq!(schedule.remaining(), 1000 - chunk / 2);
        assert!(!schedule.is_complete());
    }
}
