//! Interactive play mode
//!
//! Line-based game: the player types guesses, the engine answers with tiles.

use crate::core::Word;
use crate::game::{Game, GameState, MAX_GUESSES};
use crate::output::formatters::{feedback_row, word_list};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Candidate lists at or below this size are always shown
const SHOW_CANDIDATES_AT: usize = 10;

/// Options for an interactive game
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayConfig {
    /// List remaining candidates after every guess
    pub show_candidates: bool,
}

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub state: GameState,
    pub guesses: Vec<Word>,
    /// Player typed `quit` or input ended before the game finished
    pub abandoned: bool,
}

/// Set up a game for `play`
///
/// A fixed solution must be an allowed guess, otherwise the player could never
/// type it. Without one, a random solution is drawn from the dictionary.
///
/// # Errors
///
/// Returns an error if the solution is malformed or not an allowed guess, or
/// if the dictionary has no solutions to pick from.
pub fn new_game(dictionary: &Dictionary, solution: Option<&str>) -> Result<Game> {
    match solution {
        Some(text) => {
            let solution = dictionary
                .parse_guess(&text.trim().to_lowercase())
                .context("invalid solution")?;
            Ok(Game::new(solution, dictionary.allowed_solutions()))
        }
        None => Ok(Game::new_random(dictionary)?),
    }
}

/// Run one game, reading guesses from `input` and writing to `out`
///
/// Rejected input (malformed or unknown words) is reported and does not use
/// up a turn.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    mut game: Game,
    dictionary: &Dictionary,
    config: PlayConfig,
    mut input: R,
    out: &mut W,
) -> Result<PlayOutcome> {
    writeln!(out, "\n{}", "═".repeat(40).bright_cyan())?;
    writeln!(out, "{}", "  W O R D L E".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
    writeln!(
        out,
        "Guess the {}-letter word in {MAX_GUESSES} tries. Type 'quit' to give up.\n",
        crate::core::WORD_LENGTH
    )?;

    let mut abandoned = false;

    while !game.is_over() {
        write!(
            out,
            "Guess {}/{MAX_GUESSES}: ",
            game.guesses().len() + 1
        )?;
        out.flush()?;

        let mut buf = Vec::new();
        if input.read_until(b'\n', &mut buf)? == 0 {
            abandoned = true;
            writeln!(out)?;
            break;
        }

        let Ok(line) = String::from_utf8(buf) else {
            writeln!(out, "{} input is not valid UTF-8", "✗".red())?;
            continue;
        };

        let text = line.trim().to_lowercase();
        if matches!(text.as_str(), "quit" | "q" | "exit") {
            abandoned = true;
            break;
        }

        let guess = match dictionary.parse_guess(&text) {
            Ok(guess) => guess,
            Err(e) => {
                writeln!(out, "{} {e}", "✗".red())?;
                continue;
            }
        };

        let feedback = game.play_guess(guess)?;
        writeln!(
            out,
            "  {}  {}",
            feedback_row(&guess, &feedback),
            feedback.to_emoji()
        )?;

        if !game.is_over() {
            print_candidates(&game, config, out)?;
        }
    }

    print_ending(&game, abandoned, out)?;

    Ok(PlayOutcome {
        state: game.state(),
        guesses: game.guesses().to_vec(),
        abandoned,
    })
}

fn print_candidates<W: Write>(game: &Game, config: PlayConfig, out: &mut W) -> Result<()> {
    let remaining = game.remaining_candidates();
    let count = remaining.len();
    writeln!(
        out,
        "  {} possible solution{} left",
        count.to_string().bright_cyan(),
        if count == 1 { "" } else { "s" }
    )?;
    if count > 0 && (config.show_candidates || count <= SHOW_CANDIDATES_AT) {
        let max = if config.show_candidates { count } else { SHOW_CANDIDATES_AT };
        writeln!(out, "  {}", word_list(remaining, max).bright_black())?;
    }
    Ok(())
}

fn print_ending<W: Write>(game: &Game, abandoned: bool, out: &mut W) -> Result<()> {
    writeln!(out)?;
    match game.state() {
        GameState::Won => {
            let turns = game.guesses().len();
            writeln!(
                out,
                "{}",
                format!(
                    "🎉 Solved in {turns} {}!",
                    if turns == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            )?;
        }
        GameState::Lost => {
            writeln!(out, "{}", "❌ Out of guesses.".red().bold())?;
        }
        GameState::InProgress if abandoned => {
            writeln!(out, "👋 Game abandoned.")?;
        }
        GameState::InProgress => {}
    }

    if let Some(solution) = game.solution() {
        writeln!(out, "The word was {}.", solution.as_str().to_uppercase().bold())?;
    }

    if !game.guesses().is_empty() {
        writeln!(out)?;
        for (word, feedback) in game.history() {
            writeln!(out, "  {} {}", feedback.to_emoji(), word.as_str().to_uppercase())?;
        }
    }
    Ok(())
}
