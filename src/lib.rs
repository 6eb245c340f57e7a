//! Wordle Engine
//!
//! A Wordle game engine: duplicate-aware scoring, game state tracking and
//! candidate narrowing over explicit word lists.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::{Word, score};
//! use wordle_engine::game::Game;
//! use wordle_engine::wordlists::Dictionary;
//!
//! // Score a guess directly
//! let guess = Word::new("trace").unwrap();
//! let solution = Word::new("crane").unwrap();
//! assert_eq!(score(&guess, &solution).to_string(), "-GGYG");
//!
//! // Or play a whole game against the embedded lists
//! let dictionary = Dictionary::embedded();
//! let mut game = Game::new(solution, dictionary.allowed_solutions());
//! let feedback = game.play_guess(guess).unwrap();
//! assert!(!feedback.is_all_correct());
//! assert!(game.remaining_candidates().contains(&solution));
//! ```

// Core domain types
pub mod core;

// Game sessions and narrowing
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
