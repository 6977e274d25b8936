//! Evidence accumulated over a session
//!
//! Every scored round is recorded as an immutable (guess, score) pair. The
//! register is append-only; its length is the number of rounds played. The
//! consistency filter lives here because it is a pure function of the
//! register.

use crate::core::{Score, Sequence};

/// One scored round: the guess that was emitted and the score it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evidence {
    guess: Sequence,
    score: Score,
}

impl Evidence {
    /// Create an evidence entry
    #[must_use]
    pub const fn new(guess: Sequence, score: Score) -> Self {
        Self { guess, score }
    }

    /// The guess this entry records
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Sequence {
        &self.guess
    }

    /// The score the guess received
    #[inline]
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }
}

/// Append-only record of every scored round in a session
#[derive(Debug, Clone, Default)]
pub struct EvidenceRegister {
    entries: Vec<Evidence>,
}

impl EvidenceRegister {
    /// Create an empty register
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append one scored round
    pub fn record(&mut self, guess: Sequence, score: Score) {
        self.entries.push(Evidence::new(guess, score));
    }

    /// The recorded rounds, oldest first
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Evidence] {
        &self.entries
    }

    /// Number of rounds recorded so far
    #[inline]
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.entries.len()
    }

    /// Whether any round has been recorded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `candidate` could still be the hidden code
    ///
    /// The candidate plays the role of the hidden reference: for every
    /// recorded round, scoring that round's guess against the candidate must
    /// reproduce the recorded score exactly. Stops at the first
    /// contradiction.
    #[must_use]
    pub fn admits(&self, candidate: &Sequence) -> bool {
        self.entries
            .iter()
            .all(|entry| Score::calculate(candidate, entry.guess()) == entry.score())
    }
}
