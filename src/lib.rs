//! Code Breaker
//!
//! An assistant for Mastermind-style code-breaking puzzles: a hidden code of
//! symbols is found by random elimination over the full candidate space,
//! pruning everything that contradicts the scores reported so far.
//!
//! # Quick Start
//!
//! ```rust
//! use codebreaker::core::{Score, Symbol};
//! use codebreaker::solver::Session;
//!
//! let symbols = ["r", "y", "g", "b", "o"].map(Symbol::from);
//! let mut session = Session::new(symbols, 4, 42).unwrap();
//!
//! // Emit a guess, obtain its score from whoever holds the hidden code,
//! // then feed the score back.
//! let guess = session.next_guess().expect("fresh pool");
//! let solved = session.record_score(Score::new(1, 2));
//! assert!(!solved);
//! ```

// Core domain types
pub mod core;

// The deduction engine
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
