//! Published game state

/// An immutable snapshot of the engine's observable state
///
/// This is the whole contract between the engine and a presenter: the
/// score, the round counter, and the scrambled display form of the current
/// word. The unscrambled answer is deliberately absent.
///
/// A snapshot is taken from fully-committed state only, so an observer can
/// never see a half-applied transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Total points scored this session
    pub score: u32,
    /// How many words have been presented this session (1-based round number)
    pub round_count: usize,
    /// Scrambled display form of the current word
    pub scrambled_word: String,
}
