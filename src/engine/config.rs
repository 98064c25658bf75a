//! Engine configuration

/// Default number of rounds in a full game
pub const DEFAULT_MAX_ROUNDS: usize = 10;

/// Default points awarded per correct guess
pub const DEFAULT_SCORE_INCREASE: u32 = 20;

/// Fixed-at-construction game parameters
///
/// The round limit and per-guess score are constants for the lifetime of an
/// engine; a new configuration means a new engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of words presented per session
    pub max_rounds: usize,
    /// Points added to the score for each correct guess
    pub score_increase: u32,
}

impl GameConfig {
    /// Create a configuration
    ///
    /// # Parameters
    /// - `max_rounds`: words presented per session (must be at least 1,
    ///   enforced at engine construction)
    /// - `score_increase`: points per correct guess
    #[must_use]
    pub const fn new(max_rounds: usize, score_increase: u32) -> Self {
        Self {
            max_rounds,
            score_increase,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROUNDS, DEFAULT_SCORE_INCREASE)
    }
}
