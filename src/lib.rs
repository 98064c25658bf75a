//! Unscramble
//!
//! The state/logic engine of a single-screen word-scramble game: it selects
//! a random word, scrambles its letters so the result is visibly different,
//! tracks score and round count, validates guesses, and exposes observable
//! state to a presenter. A small terminal presenter ships as the `unscramble`
//! binary.
//!
//! # Quick Start
//!
//! ```rust
//! use unscramble::core::WordPool;
//! use unscramble::engine::{GameConfig, GameEngine};
//!
//! let pool = WordPool::from_slice(&["kotlin", "flow", "compose", "room", "android"]).unwrap();
//! let mut engine = GameEngine::new(pool, GameConfig::new(3, 20)).unwrap();
//!
//! // The first round is presented immediately
//! assert_eq!(engine.round_count(), 1);
//! println!("Unscramble this: {}", engine.scrambled_word());
//!
//! // Wrong guesses change nothing
//! assert!(!engine.submit_guess("swift"));
//! assert_eq!(engine.score(), 0);
//! ```

// Core domain types
pub mod core;

// The game-state engine
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
