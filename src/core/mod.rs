//! Core domain types for the scramble game
//!
//! This module contains the fundamental domain types with no dependency on
//! the engine or the presentation layer: validated words, the immutable
//! word pool, and the scrambling algorithm.

mod pool;
mod scramble;
mod word;

pub use pool::{PoolError, WordPool};
pub use scramble::{scramble, scramble_with};
pub use word::{Word, WordError};
