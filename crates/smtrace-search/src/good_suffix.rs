//! Boyer–Moore good-suffix shift table, canonical two-pass border method.
//!
//! The result has length `m + 1`. The indexing convention is load-bearing and
//! must not be "normalized": `shift[j + 1]` is the shift to apply on a
//! mismatch at pattern index `j` during the right-to-left scan, and
//! `shift[0]` is the shift to apply after a **full match**.

/// Build the good-suffix shift table for `pattern` (length ≥ 1).
///
/// First pass walks right to left maintaining the border array
/// (`border_pos[i]` = start of the widest border of the suffix beginning at
/// `i`), filling `shift` entries for mismatch positions as borders break.
/// Second pass fills the still-unset entries (sentinel `m`) with the
/// prefix-border shift. All entries end up ≥ 1.
#[must_use]
pub fn build_good_suffix_table(pattern: &[char]) -> Vec<usize> {
    let m = pattern.len();
    debug_assert!(m >= 1, "caller guards against empty pattern");

    // Sentinel m means "unset"; every entry is overwritten or finalized below.
    let mut shift = vec![m; m + 1];
    let mut border_pos = vec![0usize; m + 2];

    // Pass 1: right to left, compute borders of suffixes.
    let mut i = m;
    let mut j = m + 1;
    border_pos[i] = j;
    while i > 0 {
        while j <= m && pattern[i - 1] != pattern[j - 1] {
            if shift[j] == m {
                shift[j] = j - i;
            }
            j = border_pos[j];
        }
        i -= 1;
        j -= 1;
        border_pos[i] = j;
    }

    // Pass 2: left to right, fill remaining entries from the widest border
    // of the whole pattern.
    let mut j = border_pos[0];
    for (i, s) in shift.iter_mut().enumerate() {
        if *s == m {
            *s = j;
        }
        if i == j {
            j = border_pos[j];
        }
    }

    shift
}
