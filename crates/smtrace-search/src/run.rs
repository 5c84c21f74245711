//! Engine façade: one call builds tables, trace, match list, and step index.
//!
//! A run is a pure function of `(text, pattern, algorithm)`: rerunning with
//! identical inputs produces an identical [`SearchRun`]. There is no ambient
//! state and no partial-update path; callers rebuild on demand and discard
//! prior results.

use crate::{bad_char, bm, good_suffix, kmp, lps};
use anyhow::{ensure, Result};
use smtrace_core::{Algorithm, BmTables, StepIndex, Tables, Trace, TRACE_VERSION};

/// Everything one engine run produces: the immutable trace (steps + match
/// list), the preprocessing tables, and the derived reverse index.
#[derive(Clone, Debug)]
pub struct SearchRun {
    /// Ordered, randomly-indexable step sequence plus the match list.
    pub trace: Trace,
    /// Preprocessing tables for the algorithm that ran.
    pub tables: Tables,
    /// `(text_index, pattern_index)` → first step lookup.
    pub index: StepIndex,
}

impl SearchRun {
    /// Step-index query; `None` when the coordinate was never compared.
    #[inline]
    #[must_use]
    pub fn lookup(&self, text_index: usize, pattern_index: usize) -> Option<usize> {
        self.index.lookup(text_index, pattern_index)
    }
}

/// Run `algorithm` over `(text, pattern)` and materialize the full trace.
///
/// # Errors
/// Fails fast on an empty pattern; that is the caller's guard to uphold and
/// the engine's only hard error. A pattern longer than the text is *not* an
/// error: it yields a one-step trace (`Complete`) and an empty match list.
pub fn run(text: &str, pattern: &str, algorithm: Algorithm) -> Result<SearchRun> {
    ensure!(!pattern.is_empty(), "pattern must be non-empty");

    let text_chars: Vec<char> = text.chars().collect();
    let pattern_chars: Vec<char> = pattern.chars().collect();

    let (tables, (steps, matches)) = match algorithm {
        Algorithm::Kmp => {
            let t = lps::build_lps_table(&pattern_chars);
            let out = kmp::generate_trace(&text_chars, &pattern_chars, &t);
            (Tables::Kmp(t), out)
        }
        Algorithm::BoyerMoore => {
            let t = BmTables {
                bad_char: bad_char::build_bad_char_table(&pattern_chars),
                good_suffix: good_suffix::build_good_suffix_table(&pattern_chars),
            };
            let out = bm::generate_trace(&text_chars, &pattern_chars, &t);
            (Tables::BoyerMoore(t), out)
        }
    };

    let trace = Trace {
        version: TRACE_VERSION,
        algorithm,
        text: text.to_owned(),
        pattern: pattern.to_owned(),
        steps,
        matches,
    };
    let index = StepIndex::build(&trace);

    Ok(SearchRun { trace, tables, index })
}
