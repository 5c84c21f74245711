//! Seeded synthetic input generator used by the CLI `simulate` subcommand,
//! benches, and randomized tests.
//!
//! Inputs are drawn over a deliberately small alphabet so borders and partial
//! matches occur often enough to exercise the fallback/shift machinery.

use rand::{rngs::StdRng, Rng as _, SeedableRng};

/// Alphabet the generator draws from. Small on purpose.
const ALPHABET: &[char] = &['A', 'B', 'C', 'D'];

/// A generated `(text, pattern)` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntheticInput {
    /// Generated text of the requested length.
    pub text: String,
    /// Generated pattern of the requested length (≥ 1).
    pub pattern: String,
}

/// Generate a deterministic `(text, pattern)` pair from `seed`.
///
/// With `plant` set (and `pattern_len <= text_len`), one occurrence of the
/// pattern is copied into the text at a seeded position, guaranteeing at
/// least one match.
///
/// # Panics
/// Panics if `pattern_len == 0`.
#[must_use]
pub fn generate_input(text_len: usize, pattern_len: usize, seed: u64, plant: bool) -> SyntheticInput {
    assert!(pattern_len >= 1, "pattern_len must be >= 1");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut draw = |rng: &mut StdRng| ALPHABET[rng.random_range(0..ALPHABET.len())];

    let mut text: Vec<char> = (0..text_len).map(|_| draw(&mut rng)).collect();
    let pattern: Vec<char> = (0..pattern_len).map(|_| draw(&mut rng)).collect();

    if plant && pattern_len <= text_len {
        let at = rng.random_range(0..=text_len - pattern_len);
        text[at..at + pattern_len].copy_from_slice(&pattern);
    }

    SyntheticInput {
        text: text.into_iter().collect(),
        pattern: pattern.into_iter().collect(),
    }
}
