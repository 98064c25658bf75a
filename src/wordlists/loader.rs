//! Word list loading utilities
//!
//! Provides functions to load word pools from files or use the embedded
//! constants.

use crate::core::{PoolError, Word, WordPool};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping empty and invalid
/// lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use unscramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use unscramble::wordlists::loader::words_from_slice;
/// use unscramble::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Build the pool of built-in words
///
/// # Errors
///
/// Returns a `PoolError` if the embedded list is empty or contains
/// duplicates. The list is checked by this crate's tests, so in practice
/// this only fails for a broken local modification of `data/words.txt`.
pub fn embedded_pool() -> Result<WordPool, PoolError> {
    WordPool::new(words_from_slice(super::WORDS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["kotlin", "flow", "compose"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "kotlin");
        assert_eq!(words[1].text(), "flow");
        assert_eq!(words[2].text(), "compose");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["kotlin", "x-ray", "42", "flow"];
        let words = words_from_slice(input);

        // Only the alphabetic entries survive
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "kotlin");
        assert_eq!(words[1].text(), "flow");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn embedded_pool_builds() {
        let pool = embedded_pool().unwrap();
        assert_eq!(pool.len(), super::super::WORDS.len());
    }
}
