//! Secret solving command
//!
//! Plays a session against a known secret code, scoring each guess
//! internally, and returns the solution path.

use crate::core::{Alphabet, Score, Sequence, Symbol};
use crate::solver::Session;

/// Configuration for solving a known secret
pub struct SolveConfig {
    pub symbols: Vec<Symbol>,
    pub size: usize,
    pub seed: u64,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(symbols: Vec<Symbol>, size: usize, seed: u64) -> Self {
        Self {
            symbols,
            size,
            seed,
        }
    }
}

/// A single round in the solution path
#[derive(Debug)]
pub struct RoundStep {
    pub guess: Sequence,
    pub score: Score,
    pub pool_before: usize,
    pub pool_after: usize,
}

/// Result of solving a secret
#[derive(Debug)]
pub struct SolveResult {
    pub solved: bool,
    pub rounds: Vec<RoundStep>,
    pub secret: Sequence,
    pub seed: u64,
    pub alphabet: Alphabet,
}

/// Solve a known secret code by random elimination
///
/// Builds a session from `config`, then loops: emit a guess, score it
/// against `secret`, feed the score back. With a secret drawn from the
/// session's own alphabet this always terminates in a solve: the secret
/// stays consistent with its own scores, so it survives every filter pass
/// until it is drawn.
///
/// # Errors
///
/// Returns an error if:
/// - The session parameters are invalid (short code, degenerate alphabet)
/// - The secret's length differs from the session's code length
/// - The secret uses a symbol outside the alphabet
pub fn solve_secret(config: SolveConfig, secret: &Sequence) -> Result<SolveResult, String> {
    let mut session =
        Session::new(config.symbols, config.size, config.seed).map_err(|e| e.to_string())?;

    if secret.len() != session.size() {
        return Err(format!(
            "Secret has {} symbols, expected {}",
            secret.len(),
            session.size()
        ));
    }

    if let Some(unknown) = secret
        .symbols()
        .iter()
        .find(|s| session.alphabet().position_of(s).is_none())
    {
        return Err(format!("Secret symbol \"{unknown}\" is not in the alphabet"));
    }

    let mut rounds: Vec<RoundStep> = Vec::new();

    loop {
        let pool_before = session.remaining_candidates();

        let Some(guess) = session.next_guess() else {
            // Unreachable with a validated secret; report rather than panic.
            return Ok(SolveResult {
                solved: false,
                rounds,
                secret: secret.clone(),
                seed: config.seed,
                alphabet: session.alphabet().clone(),
            });
        };

        let score = Score::calculate(secret, &guess);
        let pool_after = session.remaining_candidates();
        let solved = session.record_score(score);

        rounds.push(RoundStep {
            guess,
            score,
            pool_before,
            pool_after,
        });

        if solved {
            return Ok(SolveResult {
                solved: true,
                rounds,
                secret: secret.clone(),
                seed: config.seed,
                alphabet: session.alphabet().clone(),
            });
        }
    }
}
