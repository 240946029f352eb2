use std::process::{ExitStatus, Stdio};

/// Path of the binary built by cargo for this test target
const PIPETEST_BIN: &str = env!("CARGO_BIN_EXE_pipetest");

/// Output from running a binary command
#[derive(Debug, Eq, PartialEq)]
pub struct Output {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl Output {
    /// Lines printed to stdout
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }

    /// Lines printed to stderr
    pub fn stderr_lines(&self) -> Vec<&str> {
        self.stderr.lines().collect()
    }
}

/// Run `pipetest` with the given arguments and capture its output.
///
/// `RUST_LOG` is cleared so the `-v` flags alone decide what is logged.
///
/// # Panics
///
/// Panics if the process cannot be spawned or awaited.
pub async fn run_pipetest(args: &[&str]) -> Output {
    let output = tokio::process::Command::new(PIPETEST_BIN)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await
        .unwrap();

    Output {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Expected PASSED line for one iteration
pub fn passed_line(kind: &str, iteration: u32, total: u32) -> String {
    format!("{kind} pipe test {iteration}/{total}  PASSED")
}
