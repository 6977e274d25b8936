//! Candidate pool generation and random draws
//!
//! The pool starts as the full Cartesian power of the alphabet and only ever
//! shrinks: every draw removes its candidate for good, whether or not the
//! candidate goes on to survive the consistency filter.

use crate::core::{Alphabet, Sequence, Symbol};
use rand::Rng;

/// The set of sequences not yet tried as guesses
///
/// Initialized to every ordered combination with repetition of the alphabet.
/// Draws are uniform over the remaining candidates and consume them.
#[derive(Debug, Clone)]
pub struct CandidatePool {
    candidates: Vec<Sequence>,
}

impl CandidatePool {
    /// Generate the full candidate space for codes of length `size`
    ///
    /// Enumeration is canonical: alphabet order, leftmost position most
    /// significant, so the first candidate repeats the first symbol and the
    /// last repeats the last. Seeded draw streams index into this ordering,
    /// so it must stay reproducible for a given alphabet and size.
    ///
    /// # Panics
    /// Panics if `size` is zero or the alphabet is empty.
    #[must_use]
    pub fn generate(alphabet: &Alphabet, size: usize) -> Self {
        assert!(size >= 1, "code size must be at least 1");
        assert!(!alphabet.is_empty(), "alphabet must not be empty");

        Self {
            candidates: cartesian_power(alphabet.symbols(), size)
                .into_iter()
                .map(Sequence::new)
                .collect(),
        }
    }

    /// Number of candidates left
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether every candidate has been consumed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Remove and return a uniformly random candidate
    ///
    /// The removal is permanent: a drawn candidate is never re-added, even
    /// if the caller rejects it. Returns `None` once the pool is exhausted.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<Sequence> {
        if self.candidates.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.candidates.len());
        Some(self.candidates.swap_remove(index))
    }

    /// Whether a sequence is still in the pool
    #[must_use]
    pub fn contains(&self, sequence: &Sequence) -> bool {
        self.candidates.contains(sequence)
    }
}

/// Every ordered combination with repetition of `symbols`, length `size`
///
/// Builds suffixes of length `size - 1` and prefixes each symbol onto each
/// suffix, keeping the leftmost position the most significant.
fn cartesian_power(symbols: &[Symbol], size: usize) -> Vec<Vec<Symbol>> {
    if size == 1 {
        return symbols.iter().map(|s| vec![s.clone()]).collect();
    }

    let suffixes = cartesian_power(symbols, size - 1);
    symbols
        .iter()
        .flat_map(|symbol| {
            suffixes.iter().map(|suffix| {
                let mut sequence = Vec::with_capacity(size);
                sequence.push(symbol.clone());
                sequence.extend_from_slice(suffix);
                sequence
            })
        })
        .collect()
}
