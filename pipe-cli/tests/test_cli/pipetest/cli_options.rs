use crate::add_test;
use crate::common::{passed_line, run_pipetest};

// Test that --only single skips the multi-process suite
add_test!(only_single, async {
    let output = run_pipetest(&["--only", "single", "-n", "3"]).await;
    assert!(output.status.success());
    assert_eq!(
        output.stdout_lines(),
        [
            passed_line("single process", 1, 3),
            passed_line("single process", 2, 3),
            passed_line("single process", 3, 3),
        ]
    );
});

// Test that --quiet suppresses PASSED lines
add_test!(quiet_prints_nothing_on_success, async {
    let output = run_pipetest(&["-q", "-n", "2"]).await;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
});

// Test that --strict keeps exit status 0 when everything passes
add_test!(strict_success, async {
    let output = run_pipetest(&["--strict", "-n", "1"]).await;
    assert!(output.status.success());
});

// Test that -vv produces diagnostic logs on stderr
add_test!(verbose_logs_to_stderr, async {
    let output = run_pipetest(&["-vv", "--only", "single", "-n", "1", "--words", "16"]).await;
    assert!(output.status.success());
    assert!(output.stderr.contains("generated reference payload"));
    assert_eq!(output.stdout_lines(), [passed_line("single process", 1, 1)]);
});

// Test --help output
add_test!(help, async {
    let output = run_pipetest(&["--help"]).await;
    assert!(output.status.success());
    assert!(output.stdout.contains("--strict"));
    assert!(output.stdout.contains("--only"));
});
