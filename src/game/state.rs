//! Game session state and turn logic

use super::narrowing::retain_consistent;
use crate::core::{Feedback, Word, score};
use crate::wordlists::Dictionary;
use log::{debug, warn};
use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Number of guesses a player gets
pub const MAX_GUESSES: usize = 6;

/// Where a game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// Errors from starting or playing a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game was already won in {guesses} guesses")]
    AlreadyWon { guesses: usize },
    #[error("no guesses left (the limit is {max})")]
    OutOfGuesses { max: usize },
    #[error("cannot pick a random solution from an empty solution list")]
    EmptySolutionPool,
}

/// A single Wordle session
///
/// Owns the hidden solution, the index-aligned guess and feedback histories,
/// and the candidates still consistent with every recorded feedback.
#[derive(Clone)]
pub struct Game {
    solution: Word,
    guesses: Vec<Word>,
    feedbacks: Vec<Feedback>,
    remaining: Vec<Word>,
}

impl Game {
    /// Start a game with a chosen solution and candidate pool
    ///
    /// The pool is copied; the game never sees later changes to it. A solution
    /// outside the pool is allowed (the narrowed set may then become empty
    /// while the game is still winnable).
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Word;
    /// use wordle_engine::game::Game;
    ///
    /// let pool: Vec<Word> = ["crane", "trace", "slate"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let mut game = Game::new(pool[0], &pool);
    ///
    /// let feedback = game.play_guess(pool[1]).unwrap();
    /// assert_eq!(feedback.to_string(), "-GGYG");
    /// assert_eq!(game.remaining_candidates(), &[pool[0]]);
    /// assert!(!game.won());
    /// ```
    #[must_use]
    pub fn new(solution: Word, candidate_pool: &[Word]) -> Self {
        if !candidate_pool.contains(&solution) {
            warn!("solution {solution} is not in the candidate pool");
        }

        Self {
            solution,
            guesses: Vec::with_capacity(MAX_GUESSES),
            feedbacks: Vec::with_capacity(MAX_GUESSES),
            remaining: candidate_pool.to_vec(),
        }
    }

    /// Start a game with a uniformly random solution from the dictionary
    ///
    /// # Errors
    /// Returns `GameError::EmptySolutionPool` if the dictionary has no solutions.
    pub fn new_random(dictionary: &Dictionary) -> Result<Self, GameError> {
        Self::new_random_with(dictionary, &mut rand::rng())
    }

    /// Like [`Game::new_random`] with an explicit random source
    ///
    /// # Errors
    /// Returns `GameError::EmptySolutionPool` if the dictionary has no solutions.
    pub fn new_random_with<R: Rng + ?Sized>(
        dictionary: &Dictionary,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let solution = dictionary
            .random_solution(rng)
            .ok_or(GameError::EmptySolutionPool)?;
        Ok(Self::new(solution, dictionary.allowed_solutions()))
    }

    /// Score a guess, record it, and narrow the candidates
    ///
    /// The guess is assumed to be already validated against the dictionary.
    ///
    /// # Errors
    /// Fails without changing any state if the game is already won or lost.
    pub fn play_guess(&mut self, guess: Word) -> Result<Feedback, GameError> {
        match self.state() {
            GameState::Won => {
                return Err(GameError::AlreadyWon {
                    guesses: self.guesses.len(),
                });
            }
            GameState::Lost => return Err(GameError::OutOfGuesses { max: MAX_GUESSES }),
            GameState::InProgress => {}
        }

        let feedback = score(&guess, &self.solution);
        self.guesses.push(guess);
        self.feedbacks.push(feedback);

        let removed = retain_consistent(&mut self.remaining, &guess, &feedback);
        debug!(
            "turn {}: {guess} scored {feedback}, {removed} candidates eliminated, {} remain",
            self.guesses.len(),
            self.remaining.len()
        );

        Ok(feedback)
    }

    /// Feedback of the most recent guess, if any
    #[must_use]
    pub fn last_feedback(&self) -> Option<Feedback> {
        self.feedbacks.last().copied()
    }

    /// True iff the latest feedback is all `Correct`
    ///
    /// Only the last feedback decides this; the size of the candidate set
    /// plays no part.
    #[must_use]
    pub fn won(&self) -> bool {
        self.last_feedback()
            .is_some_and(|feedback| feedback.is_all_correct())
    }

    /// True once every guess is used without a win
    #[must_use]
    pub fn lost(&self) -> bool {
        !self.won() && self.guesses.len() >= MAX_GUESSES
    }

    /// True when no more guesses will be accepted
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state() != GameState::InProgress
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        if self.won() {
            GameState::Won
        } else if self.lost() {
            GameState::Lost
        } else {
            GameState::InProgress
        }
    }

    /// Guesses left before the game is lost (0 once the game is over)
    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        if self.is_over() {
            0
        } else {
            MAX_GUESSES - self.guesses.len()
        }
    }

    /// The hidden solution, revealed only once the game is over
    #[must_use]
    pub fn solution(&self) -> Option<Word> {
        self.is_over().then_some(self.solution)
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn feedbacks(&self) -> &[Feedback] {
        &self.feedbacks
    }

    /// Guesses paired with their feedback, oldest first
    pub fn history(&self) -> impl ExactSizeIterator<Item = (Word, Feedback)> + '_ {
        self.guesses.iter().copied().zip(self.feedbacks.iter().copied())
    }

    /// Words from the pool still consistent with every feedback so far
    #[must_use]
    pub fn remaining_candidates(&self) -> &[Word] {
        &self.remaining
    }
}

impl fmt::Debug for Game {
    /// The solution is masked while the game is in progress
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("solution", &self.solution())
            .field("state", &self.state())
            .field("guesses", &self.guesses)
            .field("feedbacks", &self.feedbacks)
            .field("remaining", &self.remaining.len())
            .finish()
    }
}
