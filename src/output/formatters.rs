//! Formatting utilities for terminal output

/// Format a scrambled word as spaced capital letters
///
/// `"ltokni"` becomes `"L T O K N I"`, which is much easier to scan for
/// anagram solving than a run-together string.
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    let mut result = String::with_capacity(word.len() * 2);

    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c.to_ascii_uppercase());
    }

    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format round progress as a bar
#[must_use]
pub fn round_progress(round: usize, max_rounds: usize, width: usize) -> String {
    create_progress_bar(round, max_rounds, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_letters_uppercases_and_spaces() {
        assert_eq!(spaced_letters("ltokni"), "L T O K N I");
    }

    #[test]
    fn spaced_letters_single_char() {
        assert_eq!(spaced_letters("a"), "A");
    }

    #[test]
    fn spaced_letters_empty() {
        assert_eq!(spaced_letters(""), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0, 10, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(10, 10, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(5, 10, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn round_progress_scales_to_width() {
        let bar = round_progress(1, 3, 12);
        assert_eq!(bar, "████░░░░░░░░");
    }
}
