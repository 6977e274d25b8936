//! Benchmark command
//!
//! Solves batches of random secrets and reports round statistics.

use super::solve::{SolveConfig, solve_secret};
use crate::core::{Alphabet, Sequence, Symbol};
use crate::solver::ConfigError;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_secrets: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub secrets_per_second: f64,
}

/// Solve `count` random secrets and collect round statistics
///
/// Secrets are drawn from the deduplicated alphabet with the given seed;
/// each solve runs in its own session with a seed derived from its index,
/// so a benchmark is reproducible end to end regardless of how rayon
/// schedules the work.
///
/// # Errors
///
/// Returns an error if the session parameters are invalid.
///
/// # Panics
///
/// Panics only if the progress-bar template is malformed, which is a
/// compile-time constant.
pub fn run_benchmark(
    symbols: &[Symbol],
    size: usize,
    count: usize,
    seed: u64,
) -> Result<BenchmarkResult, String> {
    if size < 2 {
        return Err(ConfigError::CodeTooShort(size).to_string());
    }
    let alphabet = Alphabet::from_symbols(symbols.iter().cloned());
    if alphabet.len() < 2 {
        return Err(ConfigError::AlphabetTooSmall(alphabet.len()).to_string());
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let secrets: Vec<Sequence> = (0..count)
        .map(|_| {
            (0..size)
                .map(|_| {
                    let index = rng.random_range(0..alphabet.len());
                    alphabet.symbols()[index].clone()
                })
                .collect()
        })
        .collect();

    let bar = ProgressBar::new(count as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let round_counts: Vec<usize> = secrets
        .par_iter()
        .enumerate()
        .map(|(i, secret)| {
            let config = SolveConfig::new(symbols.to_vec(), size, seed.wrapping_add(i as u64 + 1));
            let result = solve_secret(config, secret)?;
            bar.inc(1);
            Ok(result.rounds.len())
        })
        .collect::<Result<_, String>>()?;

    bar.finish_and_clear();
    let duration = start.elapsed();

    let total_rounds: usize = round_counts.iter().sum();
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for &rounds in &round_counts {
        *distribution.entry(rounds).or_insert(0) += 1;
    }

    Ok(BenchmarkResult {
        total_secrets: count,
        total_rounds,
        average_rounds: if count == 0 {
            0.0
        } else {
            total_rounds as f64 / count as f64
        },
        min_rounds: round_counts.iter().copied().min().unwrap_or(0),
        max_rounds: round_counts.iter().copied().max().unwrap_or(0),
        distribution,
        duration,
        secrets_per_second: count as f64 / duration.as_secs_f64(),
    })
}
