//! Display functions for command results

use super::formatters::{render_sequence, score_pegs};
use crate::commands::{BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the solution path for a solved secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Breaking: {}  (seed {})",
        render_sequence(&result.secret, &result.alphabet),
        result.seed
    );
    println!("{}", "─".repeat(60).cyan());

    let size = result.secret.len();
    for (i, step) in result.rounds.iter().enumerate() {
        println!(
            "\nRound {}: {} {}",
            i + 1,
            render_sequence(&step.guess, &result.alphabet),
            score_pegs(step.score, size)
        );

        if verbose {
            println!("  Candidates: {} → {}", step.pool_before, step.pool_after);
            println!("  Score:      {}", step.score);
        }
    }

    println!();
    if result.solved {
        println!(
            "{}",
            format!("✅ Broken in {} rounds!", result.rounds.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Pool exhausted after {} rounds", result.rounds.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Secrets solved:   {}", result.total_secrets);
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Secrets/second:   {:.1}", result.secrets_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut round_counts: Vec<usize> = result.distribution.keys().copied().collect();
    round_counts.sort_unstable();
    for rounds in round_counts {
        let count = result.distribution[&rounds];
        let pct = (count as f64 / result.total_secrets as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {rounds:3} rounds: {bar} {count:4} ({pct:5.1}%)");
    }
}
