//! Display functions for command results

use super::formatters::{distribution_bar, format_bytes};
use crate::commands::{SolveReport, SweepStatistics};
use colored::Colorize;

/// Print the result of solving a single secret
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        report.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in report.steps.iter().enumerate() {
        let turn = i + 1;
        println!("\nTurn {}: {} ({})", turn, step.guess, step.feedback);

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!("  Narrowing:  {reduction:.1}x");
            }
        }
    }

    println!();
    println!(
        "{}",
        format!("✅ Solved in {} guesses!", report.tries())
            .green()
            .bold()
    );
}

/// Print the statistics of a range sweep
pub fn print_sweep_statistics(stats: &SweepStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SWEEP RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if stats.secrets == 0 {
        println!("\nNo admissible secrets in the range - nothing to solve.");
        return;
    }

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Secrets solved:   {}", stats.secrets);
    println!("   Total tries:      {}", stats.tries_sum);
    if let Some(average) = stats.average_tries() {
        println!(
            "   Average tries:    {}",
            format!("{average:.2}").bright_yellow().bold()
        );
    }
    println!(
        "   Best case:        {}",
        format!("{}", stats.tries_min).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", stats.tries_max).yellow()
    );
    println!(
        "   Solve time:       {:.2}s",
        stats.solve_time.as_secs_f64()
    );
    println!(
        "   Wall time:        {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!("   Secrets/second:   {:.1}", stats.secrets_per_second());
    println!("   Pool footprint:   {}", format_bytes(stats.pool_bytes));

    if let Some((code, tries)) = stats.easiest {
        println!(
            "\n✨ Easiest secret:   {} ({} {})",
            code.to_string().bright_green(),
            tries,
            if tries == 1 { "guess" } else { "guesses" }
        );
    }
    if let Some((code, tries)) = stats.hardest {
        println!(
            "😰 Hardest secret:   {} ({} guesses)",
            code.to_string().yellow(),
            tries
        );
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut tries_levels: Vec<usize> = stats.distribution.keys().copied().collect();
    tries_levels.sort_unstable();
    let max_count = stats.distribution.values().copied().max().unwrap_or(1);

    for tries in tries_levels {
        let count = stats.distribution[&tries];
        let pct = count as f64 / stats.secrets as f64 * 100.0;
        let bar = distribution_bar(count, max_count, 40);
        println!(
            "   {tries:>2}: {} {count:4} ({pct:5.1}%)",
            bar.green()
        );
    }
}
