//! KMP failure-function (LPS) construction.
//!
//! `lps[i]` is the length of the longest proper prefix of `pattern[0..=i]`
//! that is also a suffix of it. The builder additionally records an ordered
//! textual log of every comparison and retreat it performs, so the
//! preprocessing itself can be replayed by a consumer.

use smtrace_core::KmpTables;

/// Build the LPS table for `pattern` (length ≥ 1) together with its build log.
///
/// Two cursors: `len` is the length of the current matched border (init 0),
/// `i` walks the pattern from 1. `lps[0]` is fixed at 0 and never touched by
/// the loop.
#[must_use]
pub fn build_lps_table(pattern: &[char]) -> KmpTables {
    let m = pattern.len();
    debug_assert!(m >= 1, "caller guards against empty pattern");

    let mut lps = vec![0usize; m];
    let mut log = Vec::new();

    let mut len = 0usize;
    let mut i = 1usize;
    while i < m {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            log.push(format!(
                "pattern[{i}]='{}' == pattern[{len0}]='{}': extend border, lps[{i}] = {len}",
                pattern[i],
                pattern[len - 1],
                len0 = len - 1,
            ));
            i += 1;
        } else if len != 0 {
            let retreat = lps[len - 1];
            log.push(format!(
                "pattern[{i}]='{}' != pattern[{len}]='{}': retreat len {len} -> {retreat}",
                pattern[i], pattern[len],
            ));
            len = retreat;
        } else {
            log.push(format!(
                "pattern[{i}]='{}' != pattern[0]='{}': no border, lps[{i}] = 0",
                pattern[i], pattern[0],
            ));
            lps[i] = 0;
            i += 1;
        }
    }

    KmpTables { lps, log }
}
