//! Command-line front end for the pipe byte-integrity tests.
//!
//! Wires [`pipe_core::Harness`] to human-readable result lines, logging
//! and an exit status. Running with the default [`CliConfig`] reproduces
//! the reference run: 10 single-process and 10 multi-process iterations
//! over a 2048-word payload.

pub mod config;
pub mod error;
pub mod logging;
pub mod process;
pub mod report;


pub use config::{CliConfig, Selection};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use process::{run, run_cli};
pub use report::ConsoleReporter;
