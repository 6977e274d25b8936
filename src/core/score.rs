//! Guess scoring
//!
//! A Score is the feedback for one guess against a reference code: how many
//! positions match exactly, and how many further symbols are right but
//! misplaced. Each symbol occurrence contributes to at most one of the two
//! counts.

use super::{Sequence, Symbol};
use rustc_hash::FxHashMap;
use std::fmt;

/// Feedback for a single guess
///
/// `full_match` counts exact positional hits, `partial_match` counts
/// right-symbol-wrong-position hits among the remaining occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    full_match: usize,
    partial_match: usize,
}

impl Score {
    /// Create a score from its two counts
    #[inline]
    #[must_use]
    pub const fn new(full_match: usize, partial_match: usize) -> Self {
        Self {
            full_match,
            partial_match,
        }
    }

    /// Number of exact positional matches
    #[inline]
    #[must_use]
    pub const fn full_match(self) -> usize {
        self.full_match
    }

    /// Number of correct-symbol, wrong-position matches
    #[inline]
    #[must_use]
    pub const fn partial_match(self) -> usize {
        self.partial_match
    }

    /// Whether this score means a code of length `size` has been found
    ///
    /// Evidence providers sometimes report an out-of-range full-match count
    /// as a "got it" signal, so any count at or above the code length is
    /// accepted as solved.
    #[inline]
    #[must_use]
    pub const fn solves(self, size: usize) -> bool {
        self.full_match >= size
    }

    /// Score `candidate` against `reference`
    ///
    /// # Algorithm
    /// 1. First pass: count exact positional matches; collect the symbols at
    ///    the remaining positions on both sides.
    /// 2. Second pass: walk the unmatched candidate symbols in position
    ///    order, consuming one occurrence from the unmatched reference
    ///    multiset per hit. Consuming occurrences is what keeps duplicated
    ///    symbols from being counted twice.
    ///
    /// The matching relation is symmetric: swapping `reference` and
    /// `candidate` yields the same counts.
    ///
    /// # Panics
    /// Panics if the two sequences differ in length. Equal lengths are a
    /// caller contract; a mismatch is a bug, not a runtime condition.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::{Score, Sequence, Symbol};
    ///
    /// let reference: Sequence = ["r", "y", "g", "b"].iter().map(|&s| Symbol::from(s)).collect();
    /// let candidate: Sequence = ["r", "g", "y", "o"].iter().map(|&s| Symbol::from(s)).collect();
    ///
    /// let score = Score::calculate(&reference, &candidate);
    /// assert_eq!(score.full_match(), 1);    // "r" in place
    /// assert_eq!(score.partial_match(), 2); // "y" and "g" swapped
    /// ```
    #[must_use]
    pub fn calculate(reference: &Sequence, candidate: &Sequence) -> Self {
        assert_eq!(
            reference.len(),
            candidate.len(),
            "scored sequences must have equal length"
        );

        let mut full_match = 0;
        let mut leftover: FxHashMap<&Symbol, usize> = FxHashMap::default();
        let mut unmatched: Vec<&Symbol> = Vec::new();

        for (r, c) in reference.symbols().iter().zip(candidate.symbols()) {
            if r == c {
                full_match += 1;
            } else {
                *leftover.entry(r).or_insert(0) += 1;
                unmatched.push(c);
            }
        }

        let mut partial_match = 0;
        for symbol in unmatched {
            if let Some(count) = leftover.get_mut(symbol)
                && *count > 0
            {
                *count -= 1;
                partial_match += 1;
            }
        }

        Self {
            full_match,
            partial_match,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} placed, {} misplaced", self.full_match, self.partial_match)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(texts: &[&str]) -> Sequence {
        texts.iter().map(|&t| Symbol::from(t)).collect()
    }

    #[test]
    fn score_no_overlap() {
        let score = Score::calculate(&sequence(&["r", "r", "r"]), &sequence(&["g", "g", "g"]));
        assert_eq!(score, Score::new(0, 0));
    }

    #[test]
    fn score_self_is_all_full() {
        for code in [
            sequence(&["r", "y", "g", "b", "o"]),
            sequence(&["r", "r", "r"]),
            sequence(&["1", "2"]),
        ] {
            let score = Score::calculate(&code, &code);
            assert_eq!(score, Score::new(code.len(), 0));
            assert!(score.solves(code.len()));
        }
    }

    #[test]
    fn score_all_misplaced() {
        let score = Score::calculate(&sequence(&["r", "y", "g"]), &sequence(&["g", "r", "y"]));
        assert_eq!(score, Score::new(0, 3));
    }

    #[test]
    fn score_mixed() {
        // "r" placed; "y"/"g" swapped; "o" absent from the reference
        let score = Score::calculate(
            &sequence(&["r", "y", "g", "b"]),
            &sequence(&["r", "g", "y", "o"]),
        );
        assert_eq!(score, Score::new(1, 2));
    }

    #[test]
    fn score_duplicates_counted_once_per_occurrence() {
        // Reference has a single "r": the candidate's two loose "r"s can
        // only claim one partial match between them.
        let score = Score::calculate(
            &sequence(&["r", "g", "b"]),
            &sequence(&["y", "r", "r"]),
        );
        assert_eq!(score, Score::new(0, 1));
    }

    #[test]
    fn score_duplicates_full_match_consumes_occurrence() {
        // The placed "r" uses up one of the reference's two, leaving one
        // for the misplaced "r".
        let score = Score::calculate(
            &sequence(&["r", "r", "g"]),
            &sequence(&["r", "y", "r"]),
        );
        assert_eq!(score, Score::new(1, 1));
    }

    #[test]
    fn score_symmetric() {
        let pairs = [
            (sequence(&["r", "y", "g", "b"]), sequence(&["r", "g", "y", "o"])),
            (sequence(&["r", "r", "g"]), sequence(&["r", "y", "r"])),
            (sequence(&["1", "2", "2"]), sequence(&["2", "2", "1"])),
        ];
        for (a, b) in pairs {
            assert_eq!(Score::calculate(&a, &b), Score::calculate(&b, &a));
        }
    }

    #[test]
    fn score_bounded_by_length() {
        let pairs = [
            (sequence(&["r", "r", "r"]), sequence(&["r", "r", "g"])),
            (sequence(&["r", "y", "g"]), sequence(&["g", "r", "y"])),
            (sequence(&["b", "b", "y"]), sequence(&["y", "b", "b"])),
        ];
        for (a, b) in pairs {
            let score = Score::calculate(&a, &b);
            assert!(score.full_match() + score.partial_match() <= a.len());
        }
    }

    #[test]
    fn score_solves_accepts_out_of_range_sentinel() {
        assert!(Score::new(5, 0).solves(3));
        assert!(Score::new(3, 0).solves(3));
        assert!(!Score::new(2, 1).solves(3));
    }

    #[test]
    fn score_display() {
        assert_eq!(format!("{}", Score::new(2, 1)), "2 placed, 1 misplaced");
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn score_length_mismatch_panics() {
        let _ = Score::calculate(&sequence(&["r", "y"]), &sequence(&["r", "y", "g"]));
    }
}
