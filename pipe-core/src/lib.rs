//! # pipe-core
//!
//! Byte-integrity tests for operating system pipes.
//!
//! A deterministic pseudo-random payload is pushed through a fresh pipe
//! under two process topologies and the received bytes are compared with
//! the sent ones, exactly and in order:
//!
//! - [`transfer::single_process_test`] writes and reads word by word in the
//!   same control flow;
//! - [`transfer::multi_process_test`] forks a writer child while the parent
//!   reads concurrently, both sides using randomised chunk sizes derived
//!   from identically seeded generators.
//!
//! [`harness::Harness`] owns the payload and capture buffers and runs each
//! test a configured number of times.

pub mod buffer;
pub mod config;
pub mod error;
pub mod harness;
pub mod rng;
pub mod schedule;
pub mod transfer;
pub mod verify;

pub use buffer::WordBuffer;
pub use config::TestConfig;
pub use error::{Error, Result};
pub use harness::{Harness, IterationOutcome, NullReporter, Reporter, RunReport, SuiteReport, TestKind};
