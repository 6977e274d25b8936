//! Formatting utilities for terminal output

use crate::core::{Alphabet, Score, Sequence};
use colored::{ColoredString, Colorize};

/// Color a symbol by its position in the alphabet
///
/// Positions cycle through six terminal colors; symbols outside the
/// alphabet stay uncolored.
fn colorize_symbol(text: &str, position: Option<usize>) -> ColoredString {
    match position.map(|p| p % 6) {
        Some(0) => text.red(),
        Some(1) => text.yellow(),
        Some(2) => text.green(),
        Some(3) => text.blue(),
        Some(4) => text.magenta(),
        Some(5) => text.cyan(),
        _ => text.normal(),
    }
}

/// Render a guess with one stable color per symbol
#[must_use]
pub fn render_sequence(sequence: &Sequence, alphabet: &Alphabet) -> String {
    sequence
        .symbols()
        .iter()
        .map(|symbol| colorize_symbol(symbol.as_str(), alphabet.position_of(symbol)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a score as Mastermind-style pegs
///
/// Filled pegs for exact matches, open pegs for misplaced symbols, dots for
/// the rest of the positions.
#[must_use]
pub fn score_pegs(score: Score, size: usize) -> String {
    let full = score.full_match().min(size);
    let partial = score.partial_match().min(size - full);
    let blank = size - full - partial;

    format!(
        "{}{}{}",
        "●".repeat(full),
        "○".repeat(partial),
        "·".repeat(blank)
    )
}
