//! Wordle Engine - CLI
//!
//! Play Wordle in the terminal, score guesses, replay games and simulate openings.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::io;
use std::path::{Path, PathBuf};
use wordle_engine::{
    commands::{PlayConfig, new_game, replay_game, run_play, run_simulation, score_words},
    core::Word,
    output::{print_replay_result, print_score_result, print_simulation_result},
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_engine",
    about = "Wordle game engine: play, score, replay and simulate",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding allowed-guesses.txt and allowed-solutions.txt (default: built-in lists)
    #[arg(short, long, global = true, env = "WORDLE_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game (default)
    Play {
        /// Fix the solution instead of picking one at random
        #[arg(short, long)]
        solution: Option<String>,

        /// List every remaining candidate after each guess
        #[arg(short = 'c', long)]
        show_candidates: bool,
    },

    /// Score one guess against a solution
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        solution: String,
    },

    /// Replay a sequence of guesses against a known solution
    Replay {
        /// The hidden word
        solution: String,

        /// Guesses in the order they were played
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Play a fixed opening against every solution
    Simulate {
        /// Opening guesses, played in order
        #[arg(required = true)]
        guesses: Vec<String>,

        /// Limit number of solutions to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load word lists from `--data-dir`, or fall back to the built-in lists
fn load_dictionary(data_dir: Option<&Path>) -> Result<Dictionary> {
    match data_dir {
        Some(dir) => Dictionary::load(dir)
            .with_context(|| format!("failed to load word lists from {}", dir.display())),
        None => {
            let dictionary = Dictionary::embedded();
            info!(
                "using built-in word lists ({} guesses, {} solutions)",
                dictionary.allowed_guesses().len(),
                dictionary.allowed_solutions().len()
            );
            Ok(dictionary)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        solution: None,
        show_candidates: false,
    });

    run(command, cli.data_dir.as_deref())
}

/// Dispatch a command; word lists are only loaded by commands that use them
fn run(command: Commands, data_dir: Option<&Path>) -> Result<()> {
    match command {
        Commands::Play {
            solution,
            show_candidates,
        } => run_play_command(&load_dictionary(data_dir)?, solution.as_deref(), show_candidates),
        Commands::Score { guess, solution } => {
            let result = score_words(&guess, &solution)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Replay { solution, guesses } => {
            let result = replay_game(&solution, &guesses, &load_dictionary(data_dir)?)?;
            print_replay_result(&result);
            Ok(())
        }
        Commands::Simulate { guesses, limit } => {
            run_simulate_command(&load_dictionary(data_dir)?, &guesses, limit)
        }
    }
}

fn run_play_command(
    dictionary: &Dictionary,
    solution: Option<&str>,
    show_candidates: bool,
) -> Result<()> {
    let game = new_game(dictionary, solution)?;

    let config = PlayConfig { show_candidates };
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_play(game, dictionary, config, stdin.lock(), &mut stdout)?;
    Ok(())
}

fn run_simulate_command(
    dictionary: &Dictionary,
    guesses: &[String],
    limit: Option<usize>,
) -> Result<()> {
    let opening = guesses
        .iter()
        .map(|text| dictionary.parse_guess(&text.trim().to_lowercase()))
        .collect::<Result<Vec<Word>, _>>()?;

    let solutions = dictionary.allowed_solutions();
    println!(
        "\nSimulating {} against {} solutions...",
        guesses.join(" → ").to_uppercase(),
        limit.map_or(solutions.len(), |n| n.min(solutions.len()))
    );

    let result = run_simulation(&opening, solutions, limit)?;
    print_simulation_result(&result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_dir() -> PathBuf {
        std::env::temp_dir().join(format!("wordle_engine_missing_{}", std::process::id()))
    }

    #[test]
    fn score_runs_without_word_lists() {
        let command = Commands::Score {
            guess: "trace".to_string(),
            solution: "crane".to_string(),
        };
        assert!(run(command, Some(missing_dir().as_path())).is_ok());
    }

    #[test]
    fn replay_reports_missing_word_lists() {
        let command = Commands::Replay {
            solution: "crane".to_string(),
            guesses: vec!["trace".to_string()],
        };
        let err = run(command, Some(missing_dir().as_path())).unwrap_err();
        assert!(err.to_string().contains("failed to load word lists"));
    }

    #[test]
    fn built_in_lists_load() {
        let dictionary = load_dictionary(None).unwrap();
        assert!(!dictionary.allowed_solutions().is_empty());
    }
}
