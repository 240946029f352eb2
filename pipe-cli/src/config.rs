//! Configuration types for the pipe test CLI.

use pipe_core::{TestConfig, TestKind};

/// Which test kinds a run executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Single-process suite, then multi-process suite
    #[default]
    All,
    /// Single-process suite only
    Single,
    /// Multi-process suite only
    Multi,
}

impl Selection {
    /// Returns the kinds to run, in execution order.
    pub fn kinds(self) -> &'static [TestKind] {
        match self {
            Selection::All => &TestKind::ALL,
            Selection::Single => &[TestKind::SingleProcess],
            Selection::Multi => &[TestKind::MultiProcess],
        }
    }
}

/// Configuration for a CLI run
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Test parameters
    pub test: TestConfig,
    /// Test kinds to run
    pub selection: Selection,
    /// Exit with failure status if any iteration failed
    pub strict: bool,
    /// Suppress PASSED lines
    pub quiet: bool,
    /// Log verbosity (number of `-v` flags)
    pub verbose: u8,
}
