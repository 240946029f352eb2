//! Comparison of captured payloads against the reference payload.

use crate::error::{Error, Result};

/// Compares `actual` with `expected` word by word.
///
/// # Errors
///
/// Returns [`Error::Mismatch`] naming the first differing index and the
/// total number of differing words. Buffers of different lengths are
/// compared over their common prefix, and every missing word counts as a
/// mismatch.
pub fn compare_words(expected: &[u32], actual: &[u32]) -> Result<()> {
    let mut first = None;
    let mut count = expected.len().abs_diff(actual.len());

    for (index, (&want, &got)) in expected.iter().zip(actual).enumerate() {
        if want != got {
            count += 1;
            first.get_or_insert((index, want, got));
        }
    }

    if first.is_none() && count > 0 {
        let index = expected.len().min(actual.len());
        let want = expected.get(index).copied().unwrap_or_default();
        let got = actual.get(index).copied().unwrap_or_default();
        first = Some((index, want, got));
    }

    match first {
        None => Ok(()),
        Some((index, expected, actual)) => Err(Error::Mismatch {
            index,
            expected,
            actual,
            count,
        }),
    }
}
