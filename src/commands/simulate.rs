//! Simulate a fixed opening against every solution
//!
//! Plays the same guess sequence against each solution in the pool and
//! reports how often (and when) it wins, plus how much it narrows the pool.

use crate::core::Word;
use crate::game::{Game, GameError, MAX_GUESSES};
use anyhow::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Outcome of the opening against one solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedGame {
    pub solution: Word,
    /// Turn (1-based) on which the opening hit the solution
    pub won_at: Option<usize>,
    /// Candidates left after the last guess that was played
    pub remaining: usize,
}

/// Aggregate results of a simulation
#[derive(Debug)]
pub struct SimulationResult {
    pub opening: Vec<Word>,
    pub total_games: usize,
    pub wins_by_turn: FxHashMap<usize, usize>,
    pub unsolved: usize,
    pub average_remaining: f64,
    pub worst: Option<SimulatedGame>,
    pub solved_outright: usize,
    pub duration: Duration,
}

/// Play `opening` against every solution (or the first `limit` of them)
///
/// Games run in parallel; each worker owns its own `Game`.
///
/// # Errors
///
/// Returns an error if the opening is empty or longer than the guess limit.
pub fn run_simulation(
    opening: &[Word],
    solutions: &[Word],
    limit: Option<usize>,
) -> Result<SimulationResult> {
    if opening.is_empty() {
        bail!("an opening needs at least one guess");
    }
    if opening.len() > MAX_GUESSES {
        bail!(
            "an opening can have at most {MAX_GUESSES} guesses, got {}",
            opening.len()
        );
    }

    let targets = &solutions[..limit.unwrap_or(solutions.len()).min(solutions.len())];

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let games = targets
        .par_iter()
        .map(|&solution| {
            let game = simulate_one(opening, solution, solutions);
            pb.inc(1);
            game
        })
        .collect::<Result<Vec<SimulatedGame>, GameError>>();
    pb.finish_and_clear();
    let games = games?;

    Ok(summarize(opening, games, start.elapsed()))
}

/// Play the opening against a single solution
///
/// Guesses after a win are skipped.
///
/// # Errors
///
/// Returns the `GameError` if the opening runs past the guess limit.
pub fn simulate_one(
    opening: &[Word],
    solution: Word,
    pool: &[Word],
) -> Result<SimulatedGame, GameError> {
    let mut game = Game::new(solution, pool);
    for &guess in opening {
        if game.won() {
            break;
        }
        game.play_guess(guess)?;
    }

    Ok(SimulatedGame {
        solution,
        won_at: game.won().then(|| game.guesses().len()),
        remaining: game.remaining_candidates().len(),
    })
}

fn summarize(opening: &[Word], games: Vec<SimulatedGame>, duration: Duration) -> SimulationResult {
    let mut wins_by_turn: FxHashMap<usize, usize> = FxHashMap::default();
    for turn in games.iter().filter_map(|g| g.won_at) {
        *wins_by_turn.entry(turn).or_insert(0) += 1;
    }

    let total_games = games.len();
    let won: usize = wins_by_turn.values().sum();
    let unsolved: Vec<&SimulatedGame> = games.iter().filter(|g| g.won_at.is_none()).collect();

    let average_remaining = if unsolved.is_empty() {
        0.0
    } else {
        unsolved.iter().map(|g| g.remaining).sum::<usize>() as f64 / unsolved.len() as f64
    };

    let solved_outright = unsolved.iter().filter(|g| g.remaining == 1).count();
    let worst = unsolved.iter().max_by_key(|g| g.remaining).map(|&g| g.clone());

    SimulationResult {
        opening: opening.to_vec(),
        total_games,
        wins_by_turn,
        unsolved: total_games - won,
        average_remaining,
        worst,
        solved_outright,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn pool() -> Vec<Word> {
        words(&["crane", "crate", "grate", "slate", "irate", "trace", "hello"])
    }

    #[test]
    fn simulate_one_hits_on_second_guess() {
        let game = simulate_one(&words(&["slate", "crane"]), Word::new("crane").unwrap(), &pool())
            .unwrap();
        assert_eq!(game.won_at, Some(2));
        assert_eq!(game.remaining, 1);
    }

    #[test]
    fn simulate_one_stops_after_win() {
        let game = simulate_one(&words(&["crane", "slate"]), Word::new("crane").unwrap(), &pool())
            .unwrap();
        assert_eq!(game.won_at, Some(1));
    }

    #[test]
    fn simulate_one_unsolved_counts_candidates() {
        let game = simulate_one(&words(&["hello"]), Word::new("grate").unwrap(), &pool()).unwrap();
        assert_eq!(game.won_at, None);
        assert!(game.remaining >= 1);
    }

    #[test]
    fn simulate_one_rejects_guesses_past_the_limit() {
        let opening = words(&["hello"; MAX_GUESSES + 1]);
        let err = simulate_one(&opening, Word::new("crane").unwrap(), &pool()).unwrap_err();
        assert_eq!(err, GameError::OutOfGuesses { max: MAX_GUESSES });
    }

    #[test]
    fn simulation_covers_every_solution() {
        let pool = pool();
        let result = run_simulation(&words(&["slate"]), &pool, None).unwrap();

        assert_eq!(result.total_games, pool.len());
        assert_eq!(result.wins_by_turn.get(&1), Some(&1));
        assert_eq!(result.unsolved, pool.len() - 1);
        assert!(result.average_remaining >= 1.0);
        assert!(result.worst.is_some());
    }

    #[test]
    fn simulation_respects_limit() {
        let pool = pool();
        let result = run_simulation(&words(&["slate"]), &pool, Some(3)).unwrap();
        assert_eq!(result.total_games, 3);

        let result = run_simulation(&words(&["slate"]), &pool, Some(100)).unwrap();
        assert_eq!(result.total_games, pool.len());
    }

    #[test]
    fn simulation_rejects_bad_openings() {
        let pool = pool();
        assert!(run_simulation(&[], &pool, None).is_err());
        let too_long = words(&["crane"; MAX_GUESSES + 1]);
        assert!(run_simulation(&too_long, &pool, None).is_err());
    }
}
