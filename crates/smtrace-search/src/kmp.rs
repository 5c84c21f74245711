//! Knuth–Morris–Pratt trace generator.
//!
//! Replays the textbook KMP search over `(text, pattern)` using a prebuilt
//! LPS table, emitting exactly one [`Step::Compare`] per raw character
//! comparison plus the bookkeeping steps (fallback, increment, match) the
//! algorithm performs between them. Total comparisons are bounded by
//! `n + m` (amortized), and the emitted sequence always terminates with a
//! single [`Step::Complete`].

use smtrace_core::{Comparison, KmpTables, Step, Window};

/// Window `[start, start + m - 1]` for the current alignment.
#[inline]
fn window_at(start: usize, m: usize) -> Window {
    Window::new(start, start + m - 1)
}

/// Generate the KMP step trace and match list.
///
/// `m > n` short-circuits to a one-step trace (just `Complete`) and no
/// matches; the engine never examines any character in that case.
#[must_use]
pub fn generate_trace(text: &[char], pattern: &[char], tables: &KmpTables) -> (Vec<Step>, Vec<usize>) {
    let n = text.len();
    let m = pattern.len();
    debug_assert!(m >= 1, "caller guards against empty pattern");
    debug_assert_eq!(tables.lps.len(), m, "LPS table length must equal pattern length");

    if m > n {
        return (vec![Step::Complete], Vec::new());
    }

    let lps = &tables.lps;
    let mut steps = Vec::new();
    let mut matches = Vec::new();

    let mut i = 0usize; // text cursor
    let mut j = 0usize; // pattern cursor
    while i < n {
        let matched = text[i] == pattern[j];
        steps.push(Step::Compare {
            window: window_at(i - j, m),
            cmp: Comparison { text_index: i, pattern_index: j, matched },
            note: format!(
                "text[{i}]='{}' vs pattern[{j}]='{}': {}",
                text[i],
                pattern[j],
                if matched { "match" } else { "mismatch" },
            ),
        });

        if matched {
            i += 1;
            j += 1;
            if j == m {
                let at = i - j;
                matches.push(at);
                steps.push(Step::MatchFound { window: window_at(at, m), at });
                // Guarded fallback after a full match; `j == 0` cannot reach
                // `lps[j - 1]`. The branch is explicit on purpose, not a
                // silent default.
                j = if j == 0 { 0 } else { lps[j - 1] };
            }
        } else if j != 0 {
            let from = j;
            j = lps[j - 1];
            steps.push(Step::Fallback { window: window_at(i - j, m), from, to: j });
        } else {
            i += 1;
            steps.push(Step::Increment { window: window_at(i, m), text_index: i });
        }
    }

    steps.push(Step::Complete);
    (steps, matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lps::build_lps_table;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn run_kmp(text: &str, pattern: &str) -> (Vec<Step>, Vec<usize>) {
        let t = chars(text);
        let p = chars(pattern);
        let tables = build_lps_table(&p);
        generate_trace(&t, &p, &tables)
    }

    #[test]
    fn classic_example_matches_at_ten() {
        let (_, matches) = run_kmp("ABABDABACDABABCABAB", "ABABCABAB");
        assert_eq!(matches, vec![10]);
    }

    #[test]
    fn overlapping_occurrences_are_all_reported() {
        let (_, matches) = run_kmp("AAAA", "AA");
        assert_eq!(matches, vec![0, 1, 2]);
    }

    #[test]
    fn pattern_longer_than_text_is_complete_only() {
        let (steps, matches) = run_kmp("AB", "ABC");
        assert_eq!(steps, vec![Step::Complete]);
        assert!(matches.is_empty());
    }

    #[test]
    fn single_char_pattern_full_match_fallback() {
        // m == 1 exercises the post-match fallback boundary: j resets via
        // lps[0] == 0, and every text position is compared exactly once.
        let (steps, matches) = run_kmp("AAA", "A");
        assert_eq!(matches, vec![0, 1, 2]);
        let compares = steps.iter().filter(|s| s.comparison().is_some()).count();
        assert_eq!(compares, 3);
    }

    #[test]
    fn compare_window_tracks_alignment() {
        let (steps, _) = run_kmp("ABABAB", "ABAB");
        for s in &steps {
            if let Step::Compare { window, cmp, .. } = s {
                assert_eq!(window.end - window.start + 1, 4);
                assert_eq!(window.start, cmp.text_index - cmp.pattern_index);
                assert!(window.contains(cmp.text_index));
            }
        }
    }

    #[test]
    fn comparison_count_within_amortized_bound() {
        let (steps, _) = run_kmp("ABABABABABABAB", "ABABB");
        let compares = steps.iter().filter(|s| s.comparison().is_some()).count();
        assert!(compares <= 14 + 5);
    }

    #[test]
    fn fallback_does_not_advance_text_cursor() {
        let (steps, _) = run_kmp("ABABX", "ABABC");
        // Find the first fallback and check the next comparison re-examines
        // the same text index.
        let mut prev_cmp = None;
        for (k, s) in steps.iter().enumerate() {
            if let Step::Fallback { from, to, .. } = s {
                assert!(to < from);
                let next_cmp = steps[k + 1..]
                    .iter()
                    .find_map(Step::comparison)
                    .expect("comparison after fallback");
                let prev: Comparison = prev_cmp.expect("comparison before fallback");
                assert_eq!(next_cmp.text_index, prev.text_index);
                return;
            }
            if let Some(c) = s.comparison() {
                prev_cmp = Some(c);
            }
        }
        panic!("expected at least one fallback step");
    }
}
