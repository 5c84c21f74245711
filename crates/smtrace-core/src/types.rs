//! Canonical core types used across the smtrace workspace.
//!
//! These live in `smtrace-core` and are broadly re-exported at the crate root
//! so other crates can import via `smtrace_core::Step`, `smtrace_core::Trace`,
//! etc.
//!
//! All indices are **character** indices into the decoded text/pattern, never
//! byte offsets. Serialized forms are kept conservative and portable (serde).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Schema version written into every persisted [`Trace`].
pub const TRACE_VERSION: u16 = 1;

/// Which search algorithm produced (or should produce) a trace.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Knuth–Morris–Pratt: left-to-right scan with LPS-driven fallbacks.
    Kmp,
    /// Boyer–Moore: right-to-left window scan with bad-character and
    /// good-suffix shift rules.
    BoyerMoore,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kmp => write!(f, "kmp"),
            Self::BoyerMoore => write!(f, "boyer-moore"),
        }
    }
}

/// Inclusive span `[start, end]` of the text currently aligned against the
/// full pattern. For a pattern of length `m`, `end - start + 1 == m`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Window {
    /// Start (leftmost) text index covered by the alignment.
    pub start: usize,
    /// End (rightmost) text index covered by the alignment (≥ `start`).
    pub end: usize,
}

impl Window {
    /// Create a new window (no validation).
    #[inline]
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the window as a count of text positions (0 if inverted).
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        if self.end >= self.start {
            self.end - self.start + 1
        } else {
            0
        }
    }

    /// Whether the window covers no positions.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `pos` lies within `[start, end]`.
    #[inline]
    #[must_use]
    pub const fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos <= self.end
    }
}

/// One atomic character comparison performed by a search algorithm.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Comparison {
    /// Text index that was examined.
    pub text_index: usize,
    /// Pattern index it was compared against.
    pub pattern_index: usize,
    /// Whether the two characters were equal.
    pub matched: bool,
}

/// One discrete event in a search trace.
///
/// Every variant carries everything a renderer needs to draw that moment
/// without cross-referencing neighboring steps: the active window where one
/// exists, and the triggering comparison where one happened.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// Window repositioned to a new start offset; no comparison yet (BM only).
    Align {
        /// The freshly aligned window.
        window: Window,
    },
    /// One character comparison inside the active window.
    Compare {
        /// Window at the moment of comparison.
        window: Window,
        /// The comparison performed.
        cmp: Comparison,
        /// Human-readable summary, e.g. `text[4]='b' vs pattern[1]='b': match`.
        note: String,
    },
    /// LPS-driven retreat of the pattern cursor after a mismatch (KMP only).
    Fallback {
        /// Window after the retreat (`start = text_index - to`).
        window: Window,
        /// Pattern index before the retreat.
        from: usize,
        /// Pattern index after the retreat (`lps[from - 1]`).
        to: usize,
    },
    /// Plain advance of the text cursor when the pattern cursor is already 0
    /// (KMP only).
    Increment {
        /// Window after the advance.
        window: Window,
        /// Text index after the advance.
        text_index: usize,
    },
    /// Window shift chosen after a mismatch or a full match (BM only).
    ShiftDecision {
        /// Window the shift was decided from.
        window: Window,
        /// Bad-character candidate shift; absent after a full match.
        bad_char: Option<usize>,
        /// Good-suffix candidate shift.
        good_suffix: usize,
        /// The chosen shift, `max` of the candidates and never 0.
        shift: usize,
    },
    /// A full occurrence of the pattern was found.
    MatchFound {
        /// The matched window.
        window: Window,
        /// Starting text index of the occurrence (== `window.start`).
        at: usize,
    },
    /// Terminal marker; the search is finished. Appears exactly once, last.
    Complete,
}

impl Step {
    /// Window bounds carried by this step, if any.
    #[inline]
    #[must_use]
    pub const fn window(&self) -> Option<Window> {
        match self {
            Self::Align { window }
            | Self::Compare { window, .. }
            | Self::Fallback { window, .. }
            | Self::Increment { window, .. }
            | Self::ShiftDecision { window, .. }
            | Self::MatchFound { window, .. } => Some(*window),
            Self::Complete => None,
        }
    }

    /// The comparison recorded by this step, if it performed one.
    #[inline]
    #[must_use]
    pub const fn comparison(&self) -> Option<Comparison> {
        match self {
            Self::Compare { cmp, .. } => Some(*cmp),
            _ => None,
        }
    }

    /// Whether this is the terminal [`Step::Complete`] marker.
    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// KMP preprocessing output: the failure function plus its build log.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct KmpTables {
    /// `lps[i]` = length of the longest proper prefix of `pattern[0..=i]`
    /// that is also a suffix of it. `lps[0] == 0` always.
    pub lps: Vec<usize>,
    /// Ordered textual log of the comparisons/retreats that built `lps`.
    pub log: Vec<String>,
}

/// Boyer–Moore preprocessing output: both shift-rule tables.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BmTables {
    /// Rightmost occurrence index per pattern character (absent ⇒ not in
    /// pattern, conceptually −1).
    pub bad_char: HashMap<char, usize>,
    /// Good-suffix shift table of length `m + 1`. `good_suffix[j + 1]` is the
    /// shift on a mismatch at pattern index `j`; `good_suffix[0]` the shift
    /// after a full match.
    pub good_suffix: Vec<usize>,
}

/// Preprocessing tables for whichever algorithm ran.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum Tables {
    /// LPS table + build log.
    Kmp(KmpTables),
    /// Bad-character map + good-suffix table.
    BoyerMoore(BmTables),
}

/// The complete, ordered, immutable record of one search run.
///
/// Supports O(1) indexed access to steps; the final step is always
/// [`Step::Complete`], exactly once.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trace {
    /// Schema/wire version for forward-compat checks.
    pub version: u16,
    /// Algorithm that produced this trace.
    pub algorithm: Algorithm,
    /// The searched text (decoded characters joined back into a string).
    pub text: String,
    /// The searched-for pattern.
    pub pattern: String,
    /// The ordered step sequence.
    pub steps: Vec<Step>,
    /// Starting indices of full occurrences, in discovery order.
    pub matches: Vec<usize>,
}

impl Trace {
    /// Number of steps.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the trace has no steps (never true for a finished trace).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// O(1) random access to step `idx`.
    #[inline]
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Step> {
        self.steps.get(idx)
    }

    /// Number of character comparisons recorded in the trace.
    #[must_use]
    pub fn comparison_count(&self) -> usize {
        self.steps.iter().filter(|s| s.comparison().is_some()).count()
    }
}
