//! Core domain types for code-breaking
//!
//! This module contains the fundamental domain types with zero external
//! dependencies beyond hashing. All types here are pure, testable, and have
//! clear mathematical properties.

mod score;
mod sequence;
mod symbol;

pub use score::Score;
pub use sequence::Sequence;
pub use symbol::{Alphabet, Symbol};
