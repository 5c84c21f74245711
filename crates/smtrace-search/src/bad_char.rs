//! Boyer–Moore bad-character table.
//!
//! Maps each pattern character to its **rightmost** occurrence index, built by
//! a left-to-right scan that overwrites on repeats. O(m) time, O(distinct
//! characters) space. A character absent from the map is conceptually at
//! index −1.

use std::collections::HashMap;

/// Build the rightmost-occurrence map for `pattern`.
#[must_use]
pub fn build_bad_char_table(pattern: &[char]) -> HashMap<char, usize> {
    let mut table = HashMap::with_capacity(pattern.len());
    for (i, &ch) in pattern.iter().enumerate() {
        table.insert(ch, i);
    }
    table
}

/// Rightmost occurrence of `ch` in the pattern, or −1 if absent.
///
/// Returned as `isize` so the bad-character shift `j - last_occurrence` can be
/// computed without a separate absence branch.
#[inline]
#[must_use]
pub fn last_occurrence(table: &HashMap<char, usize>, ch: char) -> isize {
    table.get(&ch).map_or(-1, |&i| i as isize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rightmost_occurrence_wins() {
        let p: Vec<char> = "ABCAB".chars().collect();
        let t = build_bad_char_table(&p);
        assert_eq!(t.get(&'A'), Some(&3));
        assert_eq!(t.get(&'B'), Some(&4));
        assert_eq!(t.get(&'C'), Some(&2));
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn absent_character_is_minus_one() {
        let p: Vec<char> = "XYZ".chars().collect();
        let t = build_bad_char_table(&p);
        assert_eq!(last_occurrence(&t, 'Q'), -1);
        assert_eq!(last_occurrence(&t, 'Y'), 1);
    }
}
