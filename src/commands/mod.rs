//! Command implementations

pub mod play;
pub mod replay;
pub mod score;
pub mod simulate;

pub use play::{PlayConfig, PlayOutcome, new_game, run_play};
pub use replay::{ReplayResult, ReplayStep, replay_game};
pub use score::{ScoreResult, score_words};
pub use simulate::{SimulatedGame, SimulationResult, run_simulation, simulate_one};
