//! Solving sessions
//!
//! A Session owns everything one puzzle needs: the deduplicated alphabet,
//! the code length, a per-session seeded random source, the candidate pool,
//! and the evidence register. Sessions are independent; discarding one
//! abandons it cleanly.

use super::{CandidatePool, EvidenceRegister};
use crate::core::{Alphabet, Score, Sequence, Symbol};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// Where a session stands in its round cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Ready to draw the next guess
    AwaitingGuess,
    /// A guess has been emitted and is waiting for its score
    AwaitingScore,
    /// The hidden code was found
    Solved,
    /// Every candidate has been consumed without solving
    Exhausted,
}

impl SessionState {
    /// Whether the session can make no further progress
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

/// Error type for invalid session parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Fewer than two distinct symbols remained after deduplication
    AlphabetTooSmall(usize),
    /// The requested code length is below the minimum of two
    CodeTooShort(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlphabetTooSmall(len) => {
                write!(f, "Need at least 2 distinct symbols, got {len}")
            }
            Self::CodeTooShort(size) => {
                write!(f, "Code length must be at least 2, got {size}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A single code-breaking session
///
/// The session repeatedly proposes guesses and absorbs the scores an outside
/// evidence provider reports for them. Candidate selection is random
/// elimination: a uniformly drawn candidate is consumed from the pool, kept
/// if it is consistent with all recorded evidence, and discarded for good
/// otherwise.
pub struct Session {
    alphabet: Alphabet,
    size: usize,
    seed: u64,
    rng: ChaCha8Rng,
    pool: CandidatePool,
    evidence: EvidenceRegister,
    pending: Option<Sequence>,
    state: SessionState,
}

impl Session {
    /// Create a session for codes of length `size` over `symbols`
    ///
    /// Duplicate symbols are collapsed before anything else happens. The
    /// seed fully determines the guess stream: identical symbols, size,
    /// seed, and scores reproduce identical sessions.
    ///
    /// # Errors
    /// Returns `ConfigError` if `size < 2` or fewer than two distinct
    /// symbols remain after deduplication.
    pub fn new(
        symbols: impl IntoIterator<Item = Symbol>,
        size: usize,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        if size < 2 {
            return Err(ConfigError::CodeTooShort(size));
        }

        let alphabet = Alphabet::from_symbols(symbols);
        if alphabet.len() < 2 {
            return Err(ConfigError::AlphabetTooSmall(alphabet.len()));
        }

        let pool = CandidatePool::generate(&alphabet, size);

        Ok(Self {
            alphabet,
            size,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            pool,
            evidence: EvidenceRegister::new(),
            pending: None,
            state: SessionState::AwaitingGuess,
        })
    }

    /// Create a session whose code length is the raw symbol count
    ///
    /// The length is taken before duplicates collapse, so
    /// `["1", "2", "2", "2", "2"]` gives a two-symbol alphabet with codes of
    /// length five.
    ///
    /// # Errors
    /// Same conditions as [`Session::new`].
    pub fn from_symbols(symbols: Vec<Symbol>, seed: u64) -> Result<Self, ConfigError> {
        let size = symbols.len();
        Self::new(symbols, size, seed)
    }

    /// The seed this session was created with
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// The code length
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// The deduplicated alphabet
    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Current position in the round cycle
    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// The scored rounds so far
    #[inline]
    #[must_use]
    pub const fn evidence(&self) -> &EvidenceRegister {
        &self.evidence
    }

    /// Candidates not yet consumed from the pool
    #[inline]
    #[must_use]
    pub fn remaining_candidates(&self) -> usize {
        self.pool.len()
    }

    /// Draw the next guess to probe
    ///
    /// Candidates are drawn at random and consumed unconditionally; ones
    /// that contradict recorded evidence are discarded and the draw repeats.
    /// The first consistent candidate is emitted and the session moves to
    /// awaiting its score. Returns `None` when the pool runs dry or the
    /// session is already terminal. An exhausted pool means the evidence was
    /// contradictory or the space is spent; Exhausted is the signal for
    /// that, not an error.
    ///
    /// Calling this again before scoring the previous guess abandons that
    /// guess without recording anything.
    pub fn next_guess(&mut self) -> Option<Sequence> {
        if self.state.is_terminal() {
            return None;
        }

        while let Some(candidate) = self.pool.draw(&mut self.rng) {
            if self.evidence.admits(&candidate) {
                self.pending = Some(candidate.clone());
                self.state = SessionState::AwaitingScore;
                return Some(candidate);
            }
        }

        self.pending = None;
        self.state = SessionState::Exhausted;
        None
    }

    /// Report the score for the most recent guess
    ///
    /// A full-match count at or above the code length ends the session as
    /// Solved. Any other score is appended to the evidence register and the
    /// session returns to awaiting a guess. Returns `true` once solved.
    ///
    /// The score is taken at face value: an internally impossible score is
    /// not detected here, it simply drains the pool over subsequent rounds
    /// until the session reports Exhausted.
    ///
    /// # Panics
    /// Panics if no guess is awaiting a score. That is a caller bug, not a
    /// runtime condition.
    pub fn record_score(&mut self, score: Score) -> bool {
        let guess = self
            .pending
            .take()
            .expect("no guess is awaiting a score");

        if score.solves(self.size) {
            self.state = SessionState::Solved;
            return true;
        }

        self.evidence.record(guess, score);
        self.state = SessionState::AwaitingGuess;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(texts: &[&str]) -> Vec<Symbol> {
        texts.iter().map(|&t| Symbol::from(t)).collect()
    }

    fn sequence(texts: &[&str]) -> Sequence {
        texts.iter().map(|&t| Symbol::from(t)).collect()
    }

    /// Drive a session against a known hidden code, returning the guesses
    /// in emission order. Panics if the session exhausts.
    fn drive_to_solved(session: &mut Session, hidden: &Sequence) -> Vec<Sequence> {
        let mut guesses = Vec::new();
        loop {
            let guess = session.next_guess().expect("session exhausted unexpectedly");
            guesses.push(guess.clone());
            if session.record_score(Score::calculate(hidden, &guess)) {
                return guesses;
            }
        }
    }

    #[test]
    fn construction_rejects_short_codes() {
        let result = Session::new(symbols(&["r", "y", "g"]), 1, 42);
        assert_eq!(result.err(), Some(ConfigError::CodeTooShort(1)));

        let result = Session::new(symbols(&["r", "y", "g"]), 0, 42);
        assert_eq!(result.err(), Some(ConfigError::CodeTooShort(0)));
    }

    #[test]
    fn construction_rejects_degenerate_alphabets() {
        let result = Session::new(symbols(&["r", "r", "r"]), 3, 42);
        assert_eq!(result.err(), Some(ConfigError::AlphabetTooSmall(1)));

        let result = Session::new(Vec::new(), 3, 42);
        assert_eq!(result.err(), Some(ConfigError::AlphabetTooSmall(0)));
    }

    #[test]
    fn config_error_messages() {
        assert_eq!(
            ConfigError::AlphabetTooSmall(1).to_string(),
            "Need at least 2 distinct symbols, got 1"
        );
        assert_eq!(
            ConfigError::CodeTooShort(1).to_string(),
            "Code length must be at least 2, got 1"
        );
    }

    #[test]
    fn from_symbols_takes_size_before_dedup() {
        let session = Session::from_symbols(symbols(&["1", "2", "2", "2", "2"]), 42).unwrap();
        assert_eq!(session.size(), 5);
        assert_eq!(session.alphabet().len(), 2);
        assert_eq!(session.remaining_candidates(), 32); // 2^5
    }

    #[test]
    fn new_session_starts_awaiting_guess_with_full_pool() {
        let session = Session::new(symbols(&["r", "y", "g"]), 3, 7).unwrap();
        assert_eq!(session.state(), SessionState::AwaitingGuess);
        assert_eq!(session.remaining_candidates(), 27);
        assert!(session.evidence().is_empty());
        assert_eq!(session.seed(), 7);
    }

    #[test]
    fn next_guess_moves_to_awaiting_score() {
        let mut session = Session::new(symbols(&["r", "y"]), 2, 11).unwrap();
        let guess = session.next_guess().unwrap();
        assert_eq!(guess.len(), 2);
        assert_eq!(session.state(), SessionState::AwaitingScore);
    }

    #[test]
    fn pool_shrinks_on_every_next_guess() {
        let hidden = sequence(&["g", "r", "y"]);
        let mut session = Session::new(symbols(&["r", "y", "g"]), 3, 13).unwrap();

        loop {
            let before = session.remaining_candidates();
            let Some(guess) = session.next_guess() else {
                break;
            };
            assert!(session.remaining_candidates() < before);
            if session.record_score(Score::calculate(&hidden, &guess)) {
                break;
            }
        }
    }

    #[test]
    fn emitted_guesses_are_consistent_with_prior_evidence() {
        let hidden = sequence(&["b", "r", "r", "y"]);
        let mut session = Session::new(symbols(&["r", "y", "b"]), 4, 99).unwrap();

        loop {
            let Some(guess) = session.next_guess() else {
                panic!("session exhausted against a real hidden code");
            };
            assert!(session.evidence().admits(&guess));
            if session.record_score(Score::calculate(&hidden, &guess)) {
                break;
            }
        }
    }

    #[test]
    fn solves_hidden_code_and_final_guess_matches() {
        let hidden = sequence(&["3", "1", "1"]);
        let mut session = Session::new(symbols(&["1", "2", "3"]), 3, 31638).unwrap();

        let guesses = drive_to_solved(&mut session, &hidden);

        assert_eq!(session.state(), SessionState::Solved);
        assert_eq!(guesses.last(), Some(&hidden));
    }

    #[test]
    fn identical_seeds_reproduce_identical_guess_streams() {
        let hidden = sequence(&["o", "b", "y", "o", "g"]);
        let run = || {
            let mut session =
                Session::new(symbols(&["r", "y", "g", "b", "o"]), 5, 9718).unwrap();
            drive_to_solved(&mut session, &hidden)
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn different_seeds_usually_diverge() {
        let hidden = sequence(&["r", "r", "r", "r", "b"]);
        let run = |seed: u64| {
            let mut session =
                Session::new(symbols(&["r", "y", "g", "b", "o"]), 5, seed).unwrap();
            let mut session_guesses = drive_to_solved(&mut session, &hidden);
            // Last guess is always the hidden code, drop it before comparing.
            session_guesses.pop();
            session_guesses
        };

        // 3125 candidates: two seeds opening with the same guess stream is
        // possible but not for all of these.
        let streams = [run(1), run(2), run(3), run(4)];
        assert!(streams.iter().any(|s| s != &streams[0]) || streams[0].is_empty());
    }

    #[test]
    fn out_of_range_full_match_is_accepted_as_solved() {
        let mut session = Session::new(symbols(&["1", "2", "3"]), 3, 5).unwrap();
        let _ = session.next_guess().unwrap();

        assert!(session.record_score(Score::new(5, 0)));
        assert_eq!(session.state(), SessionState::Solved);
        assert!(session.evidence().is_empty());
    }

    #[test]
    fn contradictory_scores_exhaust_the_pool() {
        let mut session = Session::new(symbols(&["a", "b"]), 2, 17).unwrap();

        while let Some(_guess) = session.next_guess() {
            // "Nothing anywhere" for every guess is unsatisfiable over a
            // two-symbol alphabet.
            let solved = session.record_score(Score::new(0, 0));
            assert!(!solved);
        }

        assert_eq!(session.state(), SessionState::Exhausted);
        assert_eq!(session.remaining_candidates(), 0);
    }

    #[test]
    fn terminal_sessions_emit_no_further_guesses() {
        let mut session = Session::new(symbols(&["a", "b"]), 2, 23).unwrap();
        let _ = session.next_guess().unwrap();
        assert!(session.record_score(Score::new(2, 0)));

        assert_eq!(session.state(), SessionState::Solved);
        assert!(session.next_guess().is_none());
        assert_eq!(session.state(), SessionState::Solved);
    }

    #[test]
    fn rounds_accumulate_in_evidence() {
        let hidden = sequence(&["y", "g", "r"]);
        let mut session = Session::new(symbols(&["r", "y", "g"]), 3, 2718).unwrap();

        let guesses = drive_to_solved(&mut session, &hidden);

        // Every guess except the solving one leaves an evidence entry.
        assert_eq!(session.evidence().rounds(), guesses.len() - 1);
    }

    #[test]
    #[should_panic(expected = "no guess is awaiting a score")]
    fn record_score_without_guess_panics() {
        let mut session = Session::new(symbols(&["a", "b"]), 2, 1).unwrap();
        let _ = session.record_score(Score::new(0, 0));
    }

    #[test]
    fn state_is_terminal() {
        assert!(SessionState::Solved.is_terminal());
        assert!(SessionState::Exhausted.is_terminal());
        assert!(!SessionState::AwaitingGuess.is_terminal());
        assert!(!SessionState::AwaitingScore.is_terminal());
    }
}
