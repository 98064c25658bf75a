//! The game-state engine
//!
//! State container, round progression, guess validation, and reset for a
//! word-scramble session. A presenter drives the engine through three
//! operations (`advance_round`, `submit_guess`, `reset`) and observes the
//! published state through getters or [`GameSnapshot`] values.

mod config;
mod game;
mod snapshot;

pub use config::{DEFAULT_MAX_ROUNDS, DEFAULT_SCORE_INCREASE, GameConfig};
pub use game::{EngineError, GameEngine};
pub use snapshot::GameSnapshot;
