//! Game sessions and candidate narrowing

mod narrowing;
mod state;

pub use narrowing::{consistent_candidates, is_consistent, matches_all_feedback, retain_consistent};
pub use state::{Game, GameError, GameState, MAX_GUESSES};
