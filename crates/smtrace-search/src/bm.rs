//! Boyer–Moore trace generator.
//!
//! Replays the BM search over `(text, pattern)` using prebuilt bad-character
//! and good-suffix tables. Each window alignment emits an [`Step::Align`],
//! the right-to-left scan emits one [`Step::Compare`] per character examined,
//! and every window move emits a [`Step::ShiftDecision`] recording both
//! candidate shifts and the chosen maximum. The chosen shift is ≥ 1 for every
//! decision, so the outer loop always makes forward progress.

use crate::bad_char::last_occurrence;
use smtrace_core::{BmTables, Comparison, Step, Window};

/// Generate the Boyer–Moore step trace and match list.
///
/// `m > n` short-circuits to a one-step trace (just `Complete`) and no
/// matches.
#[must_use]
pub fn generate_trace(text: &[char], pattern: &[char], tables: &BmTables) -> (Vec<Step>, Vec<usize>) {
    let n = text.len();
    let m = pattern.len();
    debug_assert!(m >= 1, "caller guards against empty pattern");
    debug_assert_eq!(
        tables.good_suffix.len(),
        m + 1,
        "good-suffix table length must be m + 1"
    );

    if m > n {
        return (vec![Step::Complete], Vec::new());
    }

    let good = &tables.good_suffix;
    let mut steps = Vec::new();
    let mut matches = Vec::new();

    let mut s = 0usize; // window start
    while s <= n - m {
        let window = Window::new(s, s + m - 1);
        steps.push(Step::Align { window });

        // Right-to-left scan; stops at the first mismatch.
        let mut j = m as isize - 1;
        while j >= 0 && pattern[j as usize] == text[s + j as usize] {
            let jj = j as usize;
            steps.push(Step::Compare {
                window,
                cmp: Comparison { text_index: s + jj, pattern_index: jj, matched: true },
                note: format!(
                    "text[{ti}]='{}' vs pattern[{jj}]='{}': match",
                    text[s + jj],
                    pattern[jj],
                    ti = s + jj,
                ),
            });
            j -= 1;
        }

        let shift = if j < 0 {
            // Full match: slide past the occurrence using the full-match
            // entry of the good-suffix table, never by less than 1.
            matches.push(s);
            steps.push(Step::MatchFound { window, at: s });
            let good_shift = good[0].max(1);
            steps.push(Step::ShiftDecision {
                window,
                bad_char: None,
                good_suffix: good_shift,
                shift: good_shift,
            });
            good_shift
        } else {
            let jj = j as usize;
            let bad = text[s + jj];
            steps.push(Step::Compare {
                window,
                cmp: Comparison { text_index: s + jj, pattern_index: jj, matched: false },
                note: format!(
                    "text[{ti}]='{bad}' vs pattern[{jj}]='{}': mismatch",
                    pattern[jj],
                    ti = s + jj,
                ),
            });

            let bad_char_shift = (j - last_occurrence(&tables.bad_char, bad)).max(1) as usize;
            let good_suffix_shift = good[jj + 1];
            let chosen = bad_char_shift.max(good_suffix_shift);
            steps.push(Step::ShiftDecision {
                window,
                bad_char: Some(bad_char_shift),
                good_suffix: good_suffix_shift,
                shift: chosen,
            });
            chosen
        };

        s += shift;
    }

    steps.push(Step::Complete);
    (steps, matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bad_char::build_bad_char_table;
    use crate::good_suffix::build_good_suffix_table;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn run_bm(text: &str, pattern: &str) -> (Vec<Step>, Vec<usize>) {
        let t = chars(text);
        let p = chars(pattern);
        let tables = BmTables {
            bad_char: build_bad_char_table(&p),
            good_suffix: build_good_suffix_table(&p),
        };
        generate_trace(&t, &p, &tables)
    }

    #[test]
    fn classic_example_matches_at_ten() {
        let (_, matches) = run_bm("ABABDABACDABABCABAB", "ABABCABAB");
        assert_eq!(matches, vec![10]);
    }

    #[test]
    fn overlapping_occurrences_are_all_reported() {
        let (_, matches) = run_bm("AAAA", "AA");
        assert_eq!(matches, vec![0, 1, 2]);
    }

    #[test]
    fn pattern_longer_than_text_is_complete_only() {
        let (steps, matches) = run_bm("AB", "ABC");
        assert_eq!(steps, vec![Step::Complete]);
        assert!(matches.is_empty());
    }

    #[test]
    fn every_shift_is_at_least_one() {
        for (text, pattern) in [
            ("THIS IS A SIMPLE EXAMPLE FOR EXAMPLE MATCHING", "EXAMPLE"),
            ("AAAAAAAAAA", "AAA"),
            ("ABCABCABC", "XYZ"),
            ("ZZZZ", "Z"),
        ] {
            let (steps, _) = run_bm(text, pattern);
            for step in &steps {
                if let Step::ShiftDecision { shift, bad_char, good_suffix, .. } = step {
                    assert!(*shift >= 1);
                    assert_eq!(*shift, bad_char.unwrap_or(0).max(*good_suffix));
                }
            }
        }
    }

    #[test]
    fn scan_is_right_to_left_within_window() {
        let (steps, _) = run_bm("ABCABC", "ABC");
        // Between two aligns, compared pattern indices strictly decrease.
        let mut last: Option<usize> = None;
        for step in &steps {
            match step {
                Step::Align { .. } => last = None,
                Step::Compare { cmp, .. } => {
                    if let Some(prev) = last {
                        assert!(cmp.pattern_index < prev);
                    }
                    last = Some(cmp.pattern_index);
                }
                _ => {}
            }
        }
    }

    #[test]
    fn absent_character_jumps_full_mismatch_distance() {
        // Text char 'X' never occurs in "ABC": bad-char shift is j + 1.
        let (steps, matches) = run_bm("XXXXXX", "ABC");
        assert!(matches.is_empty());
        let first_decision = steps
            .iter()
            .find_map(|s| match s {
                Step::ShiftDecision { bad_char, shift, .. } => Some((*bad_char, *shift)),
                _ => None,
            })
            .expect("at least one shift decision");
        assert_eq!(first_decision.0, Some(3));
        assert_eq!(first_decision.1, 3);
    }

    #[test]
    fn full_match_shift_uses_good_zero() {
        let (steps, matches) = run_bm("AAAA", "AA");
        assert_eq!(matches, vec![0, 1, 2]);
        for (k, step) in steps.iter().enumerate() {
            if matches!(step, Step::MatchFound { .. }) {
                match &steps[k + 1] {
                    Step::ShiftDecision { bad_char, shift, .. } => {
                        assert_eq!(*bad_char, None);
                        // good_suffix("AA")[0] == 1
                        assert_eq!(*shift, 1);
                    }
                    other => panic!("expected shift decision after match, got {other:?}"),
                }
            }
        }
    }
}
