//! Pipe byte-integrity test
//!
//! Pushes a deterministic pseudo-random payload through fresh pipes, first
//! within one process and then from a forked writer to its parent, and
//! reports PASSED or FAILED for every iteration.

use std::process;

mod opts;

use opts::PipeTestOpts;

use pipe_cli::{init_logging, run_cli};

const PROGRAM_NAME: &str = "pipetest";

fn main() {
    let opts = PipeTestOpts::parse();
    let config = opts.config();

    init_logging(config.verbose, config.quiet);

    if let Err(err) = run_cli(&config, PROGRAM_NAME) {
        eprintln!("{err}");
        process::exit(1);
    }
}
