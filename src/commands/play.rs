//! Interactive play mode
//!
//! The assistant proposes guesses; the player scores each one against the
//! hidden code they are holding. Thin I/O around the session state machine.

use crate::core::{Score, Symbol};
use crate::output::formatters::{render_sequence, score_pegs};
use crate::solver::Session;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// What the player typed at a prompt
enum PromptReply {
    /// A match count; empty input counts as zero
    Count(usize),
    /// Abandon the current game and start over with a fresh seed
    NewGame,
    /// Leave the program
    Quit,
}

/// Run the interactive mode
///
/// Keeps playing games until the player quits. Each game is one session;
/// starting a new game draws a fresh seed so the guess order changes.
///
/// # Errors
///
/// Returns an error if session construction fails or stdin/stdout break.
pub fn run_play(symbols: Vec<Symbol>, size: usize, seed: u64) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Code Breaker - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Think of a hidden code; I'll find it by elimination.");
    println!("After each guess, report two numbers:\n");
    println!("  - how many symbols are correct AND in the correct position");
    println!("  - how many further symbols are correct but in the wrong position\n");
    println!("Empty input counts as 0. Commands: 'quit' to exit, 'new' for a new game\n");

    let mut seed = seed;

    'game: loop {
        let mut session = Session::new(symbols.clone(), size, seed).map_err(|e| e.to_string())?;
        println!(
            "Code length {}, symbols: {}",
            session.size(),
            session.alphabet()
        );
        println!("Using random seed: {}\n", session.seed());

        let mut round = 1;

        loop {
            let Some(guess) = session.next_guess() else {
                println!(
                    "\n❌ No consistent guesses remain. Probably an error in your scores."
                );
                match prompt("'new' to start over, anything else to exit")? {
                    PromptReply::NewGame => {
                        seed = fresh_seed();
                        println!("\n🔄 New game started!\n");
                        continue 'game;
                    }
                    _ => return Ok(()),
                }
            };

            println!("────────────────────────────────────────────────────────────");
            println!(
                "Round {round}: {} candidates in reserve",
                session.remaining_candidates()
            );
            println!(
                "\n📍 Next guess: {}\n",
                render_sequence(&guess, session.alphabet())
            );

            let full = match prompt("Enter number of correct symbols in correct positions")? {
                PromptReply::Count(n) => n,
                PromptReply::NewGame => {
                    seed = fresh_seed();
                    println!("\n🔄 New game started!\n");
                    continue 'game;
                }
                PromptReply::Quit => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            };

            if full >= session.size() {
                session.record_score(Score::new(full, 0));
                print_victory(round, &session);

                match prompt("Play again? (new/quit)")? {
                    PromptReply::NewGame => {
                        seed = fresh_seed();
                        println!("\n🔄 New game started!\n");
                        continue 'game;
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }

            let partial = match prompt("Enter number of correct symbols in wrong positions")? {
                PromptReply::Count(n) => n,
                PromptReply::NewGame => {
                    seed = fresh_seed();
                    println!("\n🔄 New game started!\n");
                    continue 'game;
                }
                PromptReply::Quit => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            };

            session.record_score(Score::new(full, partial));
            round += 1;
        }
    }
}

/// Celebration banner with the guess history
fn print_victory(rounds: usize, session: &Session) {
    println!("\n{}", "═".repeat(62).bright_cyan());
    println!(
        "{}",
        "          🎉  C O D E   B R O K E N !  🎉          "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(62).bright_cyan());

    println!(
        "\n  Found in {} {}",
        rounds.to_string().bright_cyan().bold(),
        if rounds == 1 { "round" } else { "rounds" }
    );

    if !session.evidence().is_empty() {
        println!("\n  Guess history:");
        for (i, entry) in session.evidence().entries().iter().enumerate() {
            println!(
                "    {}. {} {}",
                (i + 1).to_string().bright_black(),
                render_sequence(entry.guess(), session.alphabet()),
                score_pegs(entry.score(), session.size())
            );
        }
    }

    println!("\n{}", "═".repeat(62).bright_cyan());
    println!();
}

/// Draw a fresh seed for a new game
fn fresh_seed() -> u64 {
    rand::rng().random_range(0..100_000)
}

/// Prompt until the player types a count or a command
fn prompt(message: &str) -> Result<PromptReply, String> {
    loop {
        print!("{message}: ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .map_err(|e| e.to_string())?;

        match input.trim() {
            "quit" | "q" | "exit" => return Ok(PromptReply::Quit),
            "new" | "n" => return Ok(PromptReply::NewGame),
            "" => return Ok(PromptReply::Count(0)),
            other => match other.parse::<usize>() {
                Ok(count) => return Ok(PromptReply::Count(count)),
                Err(_) => println!("❌ Enter a number, 'new', or 'quit'\n"),
            },
        }
    }
}
