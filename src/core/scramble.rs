//! Word scrambling
//!
//! Produces a random permutation of a word's letters that is guaranteed to
//! differ from the original ordering, with a bounded amount of work.

use super::word::Word;
use rand::Rng;
use rand::seq::SliceRandom;

/// How many uniform shuffles to try before falling back to a rotation
const SHUFFLE_ATTEMPTS: usize = 8;

/// Scramble a word using the thread-local RNG
///
/// See [`scramble_with`] for the guarantees.
#[must_use]
pub fn scramble(word: &Word) -> String {
    scramble_with(word, &mut rand::rng())
}

/// Scramble a word using the given RNG
///
/// The result is always a permutation of the word's letters. Whenever the
/// word has at least 2 distinct letters, the result differs from the
/// original ordering (case-sensitive sequence comparison).
///
/// A word with a single distinct letter has no visibly different
/// permutation and is returned unchanged.
///
/// Termination is bounded: after `SHUFFLE_ATTEMPTS` uniform shuffles that
/// all reproduce the original ordering, the letters are rotated left by
/// one instead. A sequence equals its own rotation-by-one only when all
/// its characters are equal, so the rotation is different by construction.
///
/// # Examples
/// ```
/// use unscramble::core::{Word, scramble};
///
/// let word = Word::new("kotlin").unwrap();
/// let scrambled = scramble(&word);
/// assert_ne!(scrambled, word.text());
/// assert_eq!(scrambled.len(), word.len());
/// ```
#[must_use]
pub fn scramble_with<R: Rng + ?Sized>(word: &Word, rng: &mut R) -> String {
    if word.distinct_letters() < 2 {
        return word.text().to_string();
    }

    let original = word.text().as_bytes();
    let mut letters = original.to_vec();

    for _ in 0..SHUFFLE_ATTEMPTS {
        letters.shuffle(rng);
        if letters != original {
            return String::from_utf8(letters).expect("permutation of ASCII letters");
        }
    }

    // Every shuffle reproduced the original ordering; rotate instead.
    letters.rotate_left(1);
    String::from_utf8(letters).expect("permutation of ASCII letters")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_bytes(s: &str) -> Vec<u8> {
        let mut bytes = s.as_bytes().to_vec();
        bytes.sort_unstable();
        bytes
    }

    #[test]
    fn scramble_is_permutation() {
        let word = Word::new("kotlin").unwrap();

        for _ in 0..100 {
            let scrambled = scramble(&word);
            assert_eq!(sorted_bytes(&scrambled), sorted_bytes(word.text()));
        }
    }

    #[test]
    fn scramble_differs_from_original() {
        let word = Word::new("kotlin").unwrap();

        for _ in 0..100 {
            assert_ne!(scramble(&word), word.text());
        }
    }

    #[test]
    fn scramble_two_letter_word() {
        // Only one other permutation exists, so it must be chosen
        let word = Word::new("ab").unwrap();

        for _ in 0..20 {
            assert_eq!(scramble(&word), "ba");
        }
    }

    #[test]
    fn scramble_repeated_letters_still_differs() {
        // "aab" has 3 byte-permutations, 2 of them distinct from the original
        let word = Word::new("aab").unwrap();

        for _ in 0..100 {
            let scrambled = scramble(&word);
            assert_ne!(scrambled, "aab");
            assert_eq!(sorted_bytes(&scrambled), sorted_bytes("aab"));
        }
    }

    #[test]
    fn scramble_single_distinct_letter_unchanged() {
        let word = Word::new("aaa").unwrap();
        assert_eq!(scramble(&word), "aaa");

        let single = Word::new("a").unwrap();
        assert_eq!(scramble(&single), "a");
    }

    #[test]
    fn rotation_fallback_differs() {
        // Forcing every shuffle to reproduce the identity permutation is
        // impractical with a real RNG, so verify the fallback's correctness
        // argument directly on tricky shapes.
        for text in ["ab", "aab", "aba", "abab", "letter"] {
            let mut letters = text.as_bytes().to_vec();
            letters.rotate_left(1);
            assert_ne!(letters, text.as_bytes(), "rotation of '{text}' must differ");
        }
    }
}
