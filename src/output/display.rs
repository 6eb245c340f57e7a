//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_row, word_list};
use crate::commands::{ReplayResult, ScoreResult, SimulationResult};
use crate::game::{GameState, MAX_GUESSES};
use colored::Colorize;

const BAR_WIDTH: usize = 40;

/// Print a single scored guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{} → {}",
        result.guess.as_str().to_uppercase().bright_yellow().bold(),
        result.solution.as_str().to_uppercase().bright_cyan()
    );
    println!(
        "  {}  {}  {}",
        feedback_row(&result.guess, &result.feedback),
        result.feedback.to_emoji(),
        result.feedback
    );
}

/// Print every step of a replayed game
pub fn print_replay_result(result: &ReplayResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Replaying: {}",
        result.solution.as_str().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            feedback_row(&step.guess, &step.feedback),
            step.feedback.to_emoji()
        );
        println!(
            "  Candidates: {} → {}",
            step.candidates_before, step.candidates_after
        );
    }

    println!();
    match result.state {
        GameState::Won => println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        ),
        GameState::Lost => println!("{}", "❌ Out of guesses".red().bold()),
        GameState::InProgress => {
            println!(
                "⏸  Game {}, {} candidate(s) left: {}",
                result.state,
                result.remaining.len(),
                word_list(&result.remaining, 10).bright_black()
            );
        }
    }
}

/// Print aggregate results of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    let opening: Vec<String> = result
        .opening
        .iter()
        .map(|w| w.as_str().to_uppercase())
        .collect();

    println!("\n{}", "═".repeat(70));
    println!(" Simulation: {} ", opening.join(" → ").bright_yellow().bold());
    println!("{}", "═".repeat(70));

    let total = result.total_games.max(1) as f64;
    let won = result.total_games - result.unsolved;

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Games played:        {}", result.total_games);
    println!(
        "  Won by opening:      {} {}",
        won,
        format!("({:.1}%)", won as f64 / total * 100.0).green()
    );
    println!(
        "  Unsolved:            {} {}",
        result.unsolved,
        format!("({:.1}%)", result.unsolved as f64 / total * 100.0).red()
    );
    println!(
        "  Pinned to one word:  {}",
        result.solved_outright.to_string().bright_yellow()
    );
    println!(
        "  Avg candidates left: {}",
        format!("{:.2}", result.average_remaining)
            .bright_yellow()
            .bold()
    );
    if let Some(worst) = &result.worst {
        println!(
            "  Worst case:          {} ({} candidates)",
            worst.solution.as_str().to_uppercase().red(),
            worst.remaining
        );
    }
    println!(
        "  Total time:          {:.2}s",
        result.duration.as_secs_f64()
    );

    if won == 0 {
        return;
    }

    println!("\n📈 {}", "Wins by Turn".bright_cyan().bold());
    let max_count = result.wins_by_turn.values().copied().max().unwrap_or(0);
    for turn in 1..=MAX_GUESSES {
        let count = result.wins_by_turn.get(&turn).copied().unwrap_or(0);
        let bar = create_progress_bar(count as f64, max_count as f64, BAR_WIDTH);
        println!(
            "  {turn}: {} {count:5} ({:5.1}%)",
            bar.green(),
            count as f64 / total * 100.0
        );
    }
}
