//! Test helpers for problem documents.

use serde_json::Value;

/// Compares two problem+json documents structurally.
///
/// Key order and whitespace are ignored. Returns `false` if either side is
/// not valid JSON.
pub fn problem_eq(actual: &str, expected: &str) -> bool {
    match (
        serde_json::from_str::<Value>(actual),
        serde_json::from_str::<Value>(expected),
    ) {
        (Ok(a), Ok(e)) => a == e,
        _ => false,
    }
}

/// Asserts that two problem+json documents are structurally equal.
///
/// # Panics
///
/// Panics with both documents when they differ or either is not JSON.
#[track_caller]
pub fn assert_problem_eq(actual: &str, expected: &str) {
    assert!(
        problem_eq(actual, expected),
        "problem documents differ\n  actual: {actual}\nexpected: {expected}"
    );
}
