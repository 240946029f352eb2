//! Diagnostic logging setup.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Installs a stderr `tracing` subscriber for the process.
///
/// `RUST_LOG` takes precedence; otherwise the level follows the number of
/// `-v` flags: `warn`, `info`, `debug`, `trace`. Quiet mode keeps only
/// errors. Calling this more than once is harmless.
pub fn init_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}

/// Maps CLI verbosity to a default filter directive.
pub fn default_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
