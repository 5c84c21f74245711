//! Brute-force occurrence oracle.
//!
//! Quadratic reference scan used by tests and benches to pin down the
//! substring-occurrence semantics both trace generators must agree with.

/// All starting indices where `pattern` occurs in `text`, left to right.
///
/// Returns an empty list when `pattern` is longer than `text`.
#[must_use]
pub fn find_all(text: &[char], pattern: &[char]) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();
    debug_assert!(m >= 1, "caller guards against empty pattern");
    if m > n {
        return Vec::new();
    }
    (0..=n - m)
        .filter(|&s| text[s..s + m] == *pattern)
        .collect()
}
