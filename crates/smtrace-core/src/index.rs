//! Reverse navigation from a comparison coordinate to its step.
//!
//! The [`StepIndex`] is derived once from a finished [`Trace`] and maps each
//! `(text_index, pattern_index)` coordinate to the **first** step that
//! compared exactly that pair. A miss (a cell Boyer–Moore skipped, say) is an
//! ordinary [`None`], never an error.

use crate::types::Trace;
use std::collections::HashMap;

/// Key for one grid cell: `(text_index, pattern_index)`.
#[derive(Hash, Eq, PartialEq, Clone, Copy, Debug)]
struct Coord(usize, usize);

/// Lookup structure mapping comparison coordinates to step positions.
///
/// Built in O(steps), queried in O(1) amortized. Immutable after build.
#[derive(Clone, Debug, Default)]
pub struct StepIndex {
    first_step: HashMap<Coord, usize>,
}

impl StepIndex {
    /// Build the index from a finished trace.
    ///
    /// Only steps that actually recorded a comparison contribute; repeated
    /// comparisons of the same cell (possible under both algorithms) keep the
    /// earliest step.
    #[must_use]
    pub fn build(trace: &Trace) -> Self {
        let mut first_step = HashMap::with_capacity(trace.len());
        for (k, step) in trace.steps.iter().enumerate() {
            if let Some(cmp) = step.comparison() {
                first_step
                    .entry(Coord(cmp.text_index, cmp.pattern_index))
                    .or_insert(k);
            }
        }
        Self { first_step }
    }

    /// First step index that compared `(text_index, pattern_index)`, if any.
    #[inline]
    #[must_use]
    pub fn lookup(&self, text_index: usize, pattern_index: usize) -> Option<usize> {
        self.first_step.get(&Coord(text_index, pattern_index)).copied()
    }

    /// Number of distinct coordinates that were ever compared.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.first_step.len()
    }

    /// Whether no comparison was recorded at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_step.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Algorithm, Comparison, Step, Trace, Window, TRACE_VERSION};

    fn cmp_step(t: usize, p: usize, matched: bool) -> Step {
        Step::Compare {
            window: Window::new(t.saturating_sub(p), t.saturating_sub(p) + 2),
            cmp: Comparison { text_index: t, pattern_index: p, matched },
            note: String::new(),
        }
    }

    fn mini_trace(steps: Vec<Step>) -> Trace {
        Trace {
            version: TRACE_VERSION,
            algorithm: Algorithm::Kmp,
            text: "abcabc".to_owned(),
            pattern: "abc".to_owned(),
            steps,
            matches: vec![],
        }
    }

    #[test]
    fn lookup_hits_and_misses() {
        let trace = mini_trace(vec![
            cmp_step(0, 0, true),
            cmp_step(1, 1, false),
            Step::Complete,
        ]);
        let idx = StepIndex::build(&trace);
        assert_eq!(idx.lookup(0, 0), Some(0));
        assert_eq!(idx.lookup(1, 1), Some(1));
        assert_eq!(idx.lookup(2, 2), None);
        assert_eq!(idx.len(), 2);
    }

    #[test]
    fn repeated_coordinate_keeps_earliest() {
        let trace = mini_trace(vec![
            cmp_step(3, 0, false),
            cmp_step(3, 0, true),
            Step::Complete,
        ]);
        let idx = StepIndex::build(&trace);
        assert_eq!(idx.lookup(3, 0), Some(0));
    }

    #[test]
    fn non_compare_steps_do_not_contribute() {
        let trace = mini_trace(vec![
            Step::Align { window: Window::new(0, 2) },
            Step::Complete,
        ]);
        let idx = StepIndex::build(&trace);
        assert!(idx.is_empty());
        assert_eq!(idx.lookup(0, 0), None);
    }
}
