//! The game-state engine
//!
//! Owns all game state for a word-scramble session: word selection without
//! replacement, scrambling, scoring, round progression, and reset.

use super::config::GameConfig;
use super::snapshot::GameSnapshot;
use crate::core::{Word, WordPool, scramble_with};
use rand::seq::SliceRandom;
use std::fmt;

/// Error type for engine misconfiguration
///
/// Both variants are programmer errors caught at construction; a validly
/// constructed engine cannot fault at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// `max_rounds` was 0; the engine always presents a first round
    ZeroRounds,
    /// The pool cannot supply a unique word for every round
    PoolTooSmall { words: usize, rounds: usize },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroRounds => write!(f, "Game must have at least 1 round"),
            Self::PoolTooSmall { words, rounds } => {
                write!(
                    f,
                    "Word pool has {words} words but the game needs {rounds} unique words"
                )
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// The word-scramble game engine
///
/// A single-threaded, synchronous state machine. Every operation runs to
/// completion before returning, so published state (read through the
/// getters or [`snapshot`](Self::snapshot)) always reflects a fully
/// committed transition.
///
/// Words are dealt without replacement: construction (and every
/// [`reset`](Self::reset)) shuffles the pool order once, and rounds consume
/// that order sequentially. Together with the construction-time check that
/// the pool holds at least `max_rounds` words, this makes word selection
/// loop-free and each presented word unique within a session.
///
/// # Examples
/// ```
/// use unscramble::core::WordPool;
/// use unscramble::engine::{GameConfig, GameEngine};
///
/// let pool = WordPool::from_slice(&["kotlin", "flow", "compose", "room", "android"]).unwrap();
/// let engine = GameEngine::new(pool, GameConfig::new(3, 20)).unwrap();
///
/// // Round 1 is presented immediately
/// assert_eq!(engine.round_count(), 1);
/// assert_eq!(engine.score(), 0);
/// assert!(!engine.scrambled_word().is_empty());
/// ```
pub struct GameEngine {
    pool: WordPool,
    config: GameConfig,
    /// Shuffled pool indices for this session; `deal[..played]` is the
    /// presented-word history
    deal: Vec<usize>,
    /// Words presented so far; equals the round count
    played: usize,
    /// Pool index of the current answer
    current: usize,
    scrambled: String,
    score: u32,
}

impl GameEngine {
    /// Create an engine and present the first round
    ///
    /// # Errors
    /// Returns `EngineError::ZeroRounds` if `config.max_rounds` is 0 and
    /// `EngineError::PoolTooSmall` if the pool holds fewer words than
    /// `config.max_rounds`.
    pub fn new(pool: WordPool, config: GameConfig) -> Result<Self, EngineError> {
        if config.max_rounds == 0 {
            return Err(EngineError::ZeroRounds);
        }

        if pool.len() < config.max_rounds {
            return Err(EngineError::PoolTooSmall {
                words: pool.len(),
                rounds: config.max_rounds,
            });
        }

        let mut engine = Self {
            deal: (0..pool.len()).collect(),
            pool,
            config,
            played: 0,
            current: 0,
            scrambled: String::new(),
            score: 0,
        };

        engine.deal.shuffle(&mut rand::rng());
        engine.present_next_word();

        Ok(engine)
    }

    /// Advance to the next round
    ///
    /// Presents a fresh scrambled word and returns `true`, unless the round
    /// limit has been reached, in which case nothing changes and `false` is
    /// returned. Calling again after `false` stays a safe no-op.
    pub fn advance_round(&mut self) -> bool {
        if self.played < self.config.max_rounds {
            self.present_next_word();
            true
        } else {
            false
        }
    }

    /// Validate a guess against the current word
    ///
    /// Comparison is case-insensitive and exact. A correct guess adds the
    /// configured score increase and returns `true`; a wrong guess changes
    /// nothing and returns `false`. The round does not advance either way;
    /// that is the caller's explicit [`advance_round`](Self::advance_round)
    /// call. Submitting the correct word again before advancing scores
    /// again.
    pub fn submit_guess(&mut self, candidate: &str) -> bool {
        if self.current_word().matches(candidate) {
            self.score += self.config.score_increase;
            true
        } else {
            false
        }
    }

    /// Restart the game
    ///
    /// Zeroes the score, redeals the full pool, and presents a fresh round
    /// 1. Words from the previous session may appear again.
    pub fn reset(&mut self) {
        self.score = 0;
        self.played = 0;
        self.deal.shuffle(&mut rand::rng());
        self.present_next_word();
    }

    /// Total points scored this session
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// How many words have been presented this session
    ///
    /// Also the 1-based number of the current round.
    #[inline]
    #[must_use]
    pub const fn round_count(&self) -> usize {
        self.played
    }

    /// Scrambled display form of the current word
    #[inline]
    #[must_use]
    pub fn scrambled_word(&self) -> &str {
        &self.scrambled
    }

    /// The engine's fixed configuration
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Take an immutable snapshot of the published state
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            score: self.score,
            round_count: self.played,
            scrambled_word: self.scrambled.clone(),
        }
    }

    /// Present the next dealt word
    ///
    /// Precondition: `played < max_rounds <= deal.len()`, upheld by the
    /// constructor checks and the `advance_round` guard.
    fn present_next_word(&mut self) {
        let index = self.deal[self.played];
        self.played += 1;
        self.current = index;
        self.scrambled = scramble_with(&self.pool.words()[index], &mut rand::rng());
    }

    fn current_word(&self) -> &Word {
        &self.pool.words()[self.current]
    }

    /// Words presented so far, in presentation order
    fn used_words(&self) -> impl Iterator<Item = &Word> {
        self.deal[..self.played]
            .iter()
            .map(|&index| &self.pool.words()[index])
    }
}

impl fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The answer is kept out of Debug output so a presenter logging the
        // engine cannot leak it.
        f.debug_struct("GameEngine")
            .field("score", &self.score)
            .field("round_count", &self.played)
            .field("scrambled", &self.scrambled)
            .field("max_rounds", &self.config.max_rounds)
            .finish_non_exhaustive()
    }
}
