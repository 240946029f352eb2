//! Command line argument parsing for the pipetest utility.

use clap::{Parser, ValueEnum};

use pipe_cli::{CliConfig, Selection};
use pipe_core::config::{CHUNK_SEED, MAX_CHUNK_BYTES, NUM_TESTS, NUM_WORDS, PAYLOAD_SEED};
use pipe_core::TestConfig;

/// Test suites selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Only {
    /// Single-process suite
    Single,
    /// Multi-process suite
    Multi,
}

/// Pipe byte-integrity test
///
/// Without options, runs 10 single-process and 10 multi-process iterations
/// over a 2048-word payload and exits with status 0 whatever the outcome.
#[derive(Debug, Parser)]
#[command(
    name = "pipetest",
    version = "0.1.0",
    about = "Pipe byte-integrity test",
    long_about = "Pushes a deterministic pseudo-random payload through fresh pipes, first \
                 within one process and then from a forked writer to its parent, and reports \
                 PASSED or FAILED for every iteration."
)]
pub struct PipeTestOpts {
    /// Iterations per test suite
    #[arg(short = 'n', long = "iterations", value_name = "N", default_value_t = NUM_TESTS)]
    iterations: u32,

    /// Payload size in 32-bit words
    #[arg(short = 'w', long = "words", value_name = "N", default_value_t = NUM_WORDS)]
    words: usize,

    /// Upper bound in bytes for a single chunked read
    #[arg(long = "max-chunk", value_name = "BYTES", default_value_t = MAX_CHUNK_BYTES)]
    max_chunk: usize,

    /// Payload generator seed (must be non-zero)
    #[arg(short = 's', long = "seed", value_name = "N", default_value_t = PAYLOAD_SEED)]
    seed: u32,

    /// Chunk-size generator seed
    #[arg(long = "chunk-seed", value_name = "N", default_value_t = CHUNK_SEED)]
    chunk_seed: u32,

    /// Run only one test suite
    #[arg(long = "only", value_enum)]
    only: Option<Only>,

    /// Exit with status 1 if any iteration failed
    #[arg(long = "strict")]
    strict: bool,

    /// Do not print PASSED lines
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl PipeTestOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build CLI configuration from the parsed options
    pub fn config(&self) -> CliConfig {
        CliConfig {
            test: TestConfig {
                words: self.words,
                iterations: self.iterations,
                max_chunk_bytes: self.max_chunk,
                payload_seed: self.seed,
                chunk_seed: self.chunk_seed,
            },
            selection: match self.only {
                None => Selection::All,
                Some(Only::Single) => Selection::Single,
                Some(Only::Multi) => Selection::Multi,
            },
            strict: self.strict,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
