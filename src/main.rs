//! Code Breaker - CLI
//!
//! Interactive assistant for Mastermind-style code-breaking puzzles.
//! Guesses are chosen by random elimination from the space of codes still
//! consistent with the scores reported so far.

use anyhow::Result;
use clap::{Parser, Subcommand};
use codebreaker::{
    commands::{SolveConfig, run_benchmark, run_play, solve_secret},
    core::{Sequence, Symbol},
    output::{print_benchmark_result, print_solve_result},
};
use rand::Rng;

#[derive(Parser)]
#[command(
    name = "codebreaker",
    about = "Assistant for Mastermind-style code-breaking puzzles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Comma-separated symbols the hidden code is built from
    #[arg(short, long, global = true, default_value = "r,y,g,b,o")]
    symbols: String,

    /// Code length (defaults to the symbol count before deduplication)
    #[arg(long, global = true)]
    size: Option<usize>,

    /// Random seed; drawn and printed when omitted
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: the assistant guesses, you score (default)
    Play,

    /// Solve a known secret code automatically
    Solve {
        /// The secret code, comma-separated
        secret: String,

        /// Show per-round candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark solving over random secrets
    Benchmark {
        /// Number of random secrets to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

/// Split a comma-separated symbol list, trimming whitespace
fn parse_symbols(input: &str) -> Vec<Symbol> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Symbol::from)
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let symbols = parse_symbols(&cli.symbols);
    // Code length defaults to the raw symbol count, duplicates included.
    let size = cli.size.unwrap_or(symbols.len());
    let seed = cli
        .seed
        .unwrap_or_else(|| rand::rng().random_range(0..100_000));

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(symbols, size, seed).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { secret, verbose } => {
            run_solve_command(symbols, size, seed, &secret, verbose)
        }
        Commands::Benchmark { count } => run_benchmark_command(&symbols, size, seed, count),
    }
}

fn run_solve_command(
    symbols: Vec<Symbol>,
    size: usize,
    seed: u64,
    secret: &str,
    verbose: bool,
) -> Result<()> {
    let secret: Sequence = parse_symbols(secret).into_iter().collect();
    let config = SolveConfig::new(symbols, size, seed);
    let result = solve_secret(config, &secret).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(symbols: &[Symbol], size: usize, seed: u64, count: usize) -> Result<()> {
    println!("Solving {count} random secrets (seed {seed})...");
    let result = run_benchmark(symbols, size, count, seed).map_err(|e| anyhow::anyhow!(e))?;

    print_benchmark_result(&result);
    Ok(())
}
