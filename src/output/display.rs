//! Display functions for the game presenter

use super::formatters::{round_progress, spaced_letters};
use crate::core::Word;
use crate::engine::GameSnapshot;
use colored::Colorize;

/// Print the banner for the current round
pub fn print_round_header(snapshot: &GameSnapshot, max_rounds: usize) {
    let bar = round_progress(snapshot.round_count, max_rounds, 20);

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Round {} of {}  [{}]  Score: {}",
        snapshot.round_count.to_string().bright_cyan().bold(),
        max_rounds,
        bar.green(),
        snapshot.score.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n🔀 Unscramble: {}\n",
        spaced_letters(&snapshot.scrambled_word).bright_white().bold()
    );
}

/// Print feedback for a correct guess
pub fn print_correct_guess(word: &str, score: u32) {
    println!(
        "\n{} {} is right! Score: {}\n",
        "✅".green(),
        word.to_uppercase().bright_green().bold(),
        score.to_string().bright_yellow().bold()
    );
}

/// Print feedback for a wrong guess
pub fn print_wrong_guess() {
    println!("\n{} Not quite, try again!\n", "❌".red());
}

/// Print feedback for a skipped round
///
/// The engine never reveals the unscrambled answer, so a skip just moves
/// on.
pub fn print_skipped() {
    println!("\n{} Word skipped, no points awarded.\n", "⏭".yellow());
}

/// Print the end-of-game screen with the final score
pub fn print_game_over(snapshot: &GameSnapshot, max_rounds: usize, score_increase: u32) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "    🎉  G A M E   O V E R  🎉    ".bright_green().bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    let max_score = u32::try_from(max_rounds)
        .unwrap_or(u32::MAX)
        .saturating_mul(score_increase);
    let verdict = if snapshot.score == 0 {
        "Better luck next time!"
    } else if snapshot.score >= max_score {
        "Perfect game!"
    } else {
        "Well played!"
    };

    println!("\n  {}", verdict.bright_white());
    println!(
        "\n  Final score: {} after {} rounds",
        snapshot.score.to_string().bright_yellow().bold(),
        snapshot.round_count
    );
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!();
}

/// Print the built-in word pool
pub fn print_word_pool(words: &[Word]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} words ",
        "BUILT-IN POOL:".bright_cyan().bold(),
        words.len().to_string().bright_yellow()
    );
    println!("{}", "═".repeat(60).cyan());
    println!();

    for chunk in words.chunks(4) {
        let row: Vec<String> = chunk.iter().map(|w| format!("{:<14}", w.text())).collect();
        println!("  {}", row.join(" "));
    }
    println!();
}
