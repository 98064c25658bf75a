//! Word lists for the scramble game
//!
//! Provides the embedded word pool compiled into the binary plus loading
//! utilities for custom pools.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DEFAULT_MAX_ROUNDS;
    use rustc_hash::FxHashSet;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        // Every pool word should be lowercase ASCII letters only
        for &word in WORDS {
            assert!(!word.is_empty(), "Empty word in pool");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_have_no_duplicates() {
        let unique: FxHashSet<&str> = WORDS.iter().copied().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn words_are_scrambleable() {
        // Words with a single distinct letter have no visibly different
        // permutation and are kept out of the built-in pool
        for &word in WORDS {
            let distinct: FxHashSet<char> = word.chars().collect();
            assert!(
                distinct.len() >= 2,
                "Word '{word}' cannot be visibly scrambled"
            );
        }
    }

    #[test]
    fn pool_covers_a_full_default_game() {
        assert!(WORDS_COUNT >= DEFAULT_MAX_ROUNDS);
    }

    #[test]
    fn expected_count() {
        assert_eq!(WORDS_COUNT, 137, "Expected 137 pool words");
    }
}
