//! Display functions for command results

use super::formatters::{feedback_label, format_probability, position_bar};
use crate::commands::{
    BatchStatistics, BenchmarkResult, CompareRow, PlayOutcome, ScalingRow, ShowdownResult,
};
use crate::core::Feedback;
use colored::Colorize;

/// Print the guess trace of a single game
pub fn print_play_outcome(outcome: &PlayOutcome, verbose: bool) {
    let result = &outcome.result;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Strategy: {}   Target: {}   Range: 1-{}",
        outcome.strategy.name().bright_yellow().bold(),
        result.target().to_string().green().bold(),
        result.limit()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in outcome.steps.iter().enumerate() {
        let label = feedback_label(step.feedback);
        let label = match step.feedback {
            Feedback::TooHigh => label.red(),
            Feedback::TooLow => label.blue(),
            Feedback::Correct => label.green().bold(),
        };
        println!(
            "Attempt {:3}: {:>10}  [{}]  {}",
            i + 1,
            step.guess,
            position_bar(step.guess, result.limit(), 30),
            label
        );
        if verbose {
            println!(
                "             live range {} ({} values)",
                step.range_before,
                step.range_before.span()
            );
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "✅ Found {} in {} guess{} ({} target)",
            result.target(),
            result.count(),
            if result.count() == 1 { "" } else { "es" },
            outcome.mode
        )
        .green()
        .bold()
    );
}

fn print_distribution(stats: &BatchStatistics) {
    let max_count = stats.distribution.values().copied().max().unwrap_or(1);
    for (guesses, count) in stats.sorted_distribution() {
        let pct = (count as f64 / stats.games as f64) * 100.0;
        let bar_width = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {guesses:3}: {bar} {count:6} ({pct:5.1}%)");
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let stats = &result.stats;
    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", result.strategy);
    println!("   Targets:          {}", result.mode);
    println!("   Range:            1-{}", result.limit);
    println!("   Games played:     {}", stats.games);
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    if let Some(theory) = result.theoretical {
        println!("   Theory:           {theory:.3}");
        if theory > 0.0 {
            println!(
                "   Ratio:            {:.3}",
                stats.average_guesses / theory
            );
        }
    }
    println!(
        "   Best case:        {}",
        format!("{}", stats.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", stats.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if stats.games > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        print_distribution(stats);
    }
}

/// Print the head-to-head scoreboard
pub fn print_compare_rows(rows: &[CompareRow]) {
    println!("\n{}", "═".repeat(70).cyan());
    println!(" {} ", "HEAD-TO-HEAD: BLIND vs BINARY".bright_cyan().bold());
    println!("{}", "═".repeat(70).cyan());
    println!(
        "\n   {:>10}  {:>12}  {:>12}  {:>12}  {:>10}",
        "Limit", "Blind avg", "Binary avg", "Theory log2", "Overhead"
    );

    for row in rows {
        println!(
            "   {:>10}  {:>12}  {:>12}  {:>12.3}  {:>10}",
            row.limit,
            format!("{:.3}", row.blind_average).blue(),
            format!("{:.3}", row.binary_average).green(),
            row.theory_log2,
            format!("{:.2}x", row.blind_overhead())
        );
    }

    if let Some(hardest) = rows.iter().max_by_key(|r| r.limit) {
        println!(
            "\n   At N = {}: blind search needs {:.1} more guesses than binary search (2 ln N = {:.2})",
            hardest.limit,
            hardest.blind_average - hardest.binary_average,
            hardest.theory_two_ln
        );
    }
}

/// Print the convergence table
pub fn print_scaling_rows(rows: &[ScalingRow]) {
    println!("\n{}", "═".repeat(70).cyan());
    println!(" {} ", "SCALING: BLIND SEARCH vs 2 ln N".bright_cyan().bold());
    println!("{}", "═".repeat(70).cyan());
    println!(
        "\n   {:>10}  {:>12}  {:>10}  {:>10}  {:>8}",
        "Limit", "Simulations", "Average", "2 ln N", "Ratio"
    );

    let mut last_limit = None;
    for row in rows {
        if last_limit.is_some_and(|l| l != row.limit) {
            println!();
        }
        last_limit = Some(row.limit);

        let ratio = format!("{:.3}", row.ratio);
        let ratio = if (row.ratio - 1.0).abs() < 0.1 {
            ratio.green()
        } else if (row.ratio - 1.0).abs() < 0.2 {
            ratio.yellow()
        } else {
            ratio.red()
        };
        println!(
            "   {:>10}  {:>12}  {:>10.3}  {:>10.3}  {:>8}",
            row.limit, row.simulations, row.average, row.theoretical, ratio
        );
    }
}

/// Print the human bias showdown
pub fn print_showdown_result(result: &ShowdownResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} (1-{}) ",
        "THE HUMAN ELEMENT".bright_cyan().bold(),
        result.limit
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n🧠 {}", "Most likely human picks:".bright_cyan().bold());
    let top = result.peaks.first().map_or(0.0, |&(_, p)| p);
    for &(value, p) in &result.peaks {
        let bar_width = if top > 0.0 {
            ((p / top) * 30.0) as usize
        } else {
            0
        };
        println!(
            "   {value:>8}: {} {}",
            "█".repeat(bar_width).magenta(),
            format_probability(p)
        );
    }

    println!(
        "\n⚔️  {} ({} rounds)",
        "Strategy showdown".bright_cyan().bold(),
        result.rounds
    );
    for (name, stats) in [
        ("Blind (random)", &result.random),
        ("Binary (optimal)", &result.optimal),
        ("Bayesian", &result.bayesian),
    ] {
        println!(
            "   {name:<18} avg {}  best {:>3}  worst {:>3}",
            format!("{:7.3}", stats.average_guesses).bright_yellow(),
            stats.min_guesses,
            stats.max_guesses
        );
    }

    let saved = result.optimal.average_guesses - result.bayesian.average_guesses;
    let saved_str = format!("{saved:+.3} guesses per game");
    let saved_str = if saved > 0.0 {
        saved_str.green().bold()
    } else {
        saved_str.red()
    };
    println!("\n   Bayesian vs binary: {saved_str}");
    println!(
        "   Rounds won: Bayesian {}, binary {}, tied {}",
        result.bayesian_wins,
        result.binary_wins,
        result.rounds - result.bayesian_wins - result.binary_wins
    );
}
