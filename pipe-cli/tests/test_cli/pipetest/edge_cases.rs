use crate::add_test;
use crate::common::run_pipetest;

// Test that a zero payload seed is rejected before any test runs
add_test!(zero_seed_rejected, async {
    let output = run_pipetest(&["--seed", "0"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = output.stderr_lines();
    assert_eq!(stderr.len(), 1);
    assert!(stderr[0].starts_with("pipetest: payload seed must be non-zero"));
});

// Test that a chunk bound too small for the writer is rejected
add_test!(tiny_chunk_rejected, async {
    let output = run_pipetest(&["--max-chunk", "4"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.contains("invalid configuration"));
});

// Test that zero iterations are rejected
add_test!(zero_iterations_rejected, async {
    let output = run_pipetest(&["-n", "0"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
});

// Test the smallest chunk bound still transfers correctly
add_test!(smallest_chunk_bound, async {
    let output = run_pipetest(&["--max-chunk", "8", "--words", "64", "-n", "2", "--strict"]).await;
    assert!(output.status.success());
    assert!(!output.stderr.contains("FAILED"));
});

// Test that a one-word payload works for both suites
add_test!(single_word_payload, async {
    let output = run_pipetest(&["--words", "1", "-n", "1", "--strict"]).await;
    assert!(output.status.success());
    assert_eq!(output.stdout_lines().len(), 2);
});

// Test a different chunk seed
add_test!(other_chunk_seed, async {
    let output = run_pipetest(&["--chunk-seed", "12345", "-n", "3", "--strict"]).await;
    assert!(output.status.success());
});

// Test that a payload too large to allocate is rejected instead of aborting
add_test!(oversized_payload_rejected, async {
    let words = (usize::MAX / 4).to_string();
    let output = run_pipetest(&["--words", words.as_str()]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("invalid configuration"));
});
