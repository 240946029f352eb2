use crate::add_test;
use crate::common::{passed_line, run_pipetest};

// Test the reference run without arguments
add_test!(reference_run_passes, async {
    let output = run_pipetest(&[]).await;
    assert!(output.status.success());

    let mut expected = Vec::new();
    for kind in ["single process", "multi process"] {
        for iteration in 1..=10 {
            expected.push(passed_line(kind, iteration, 10));
        }
    }

    assert_eq!(output.stdout_lines(), expected);
    assert!(!output.stderr.contains("FAILED"));
});

// Test that single-process results come before multi-process results
add_test!(suites_run_in_order, async {
    let output = run_pipetest(&["-n", "2"]).await;
    assert!(output.status.success());

    assert_eq!(
        output.stdout_lines(),
        [
            passed_line("single process", 1, 2),
            passed_line("single process", 2, 2),
            passed_line("multi process", 1, 2),
            passed_line("multi process", 2, 2),
        ]
    );
});

// Test a payload larger than the pipe buffer in the multi-process suite
add_test!(large_payload_multi_process, async {
    let output = run_pipetest(&["--only", "multi", "--words", "131072", "-n", "2"]).await;
    assert!(output.status.success());
    assert_eq!(
        output.stdout_lines(),
        [passed_line("multi process", 1, 2), passed_line("multi process", 2, 2)]
    );
});
