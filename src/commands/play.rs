//! Interactive play mode
//!
//! Text-based game loop on stdin. This is the presenter collaborator: it
//! only invokes the engine's published operations and reads its published
//! state.

use crate::engine::GameEngine;
use crate::output::{
    print_correct_guess, print_game_over, print_round_header, print_skipped, print_wrong_guess,
};
use std::io::{self, Write};

/// Run the interactive game loop
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_play(engine: &mut GameEngine) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Unscramble - Word Scramble                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Each round shows a scrambled word. Guess the original word to");
    println!("score points, then the next round starts automatically.\n");
    println!("Commands: 'skip' for the next word, 'new' to restart, 'quit' to exit\n");

    'game: loop {
        print_round_header(&engine.snapshot(), engine.config().max_rounds);

        loop {
            let input = get_user_input("Your guess")?;

            match input.to_lowercase().as_str() {
                "" => {}
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    engine.reset();
                    println!("\n🔄 New game started!\n");
                    continue 'game;
                }
                "skip" | "s" => {
                    if engine.advance_round() {
                        print_skipped();
                        continue 'game;
                    }
                    if !offer_new_game(engine)? {
                        return Ok(());
                    }
                    continue 'game;
                }
                _ => {
                    if engine.submit_guess(&input) {
                        print_correct_guess(&input, engine.score());
                        if engine.advance_round() {
                            continue 'game;
                        }
                        if !offer_new_game(engine)? {
                            return Ok(());
                        }
                        continue 'game;
                    }
                    print_wrong_guess();
                }
            }
        }
    }
}

/// Show the final score and ask whether to start over
///
/// Returns `true` if a fresh game was started.
fn offer_new_game(engine: &mut GameEngine) -> Result<bool, String> {
    let config = *engine.config();
    print_game_over(&engine.snapshot(), config.max_rounds, config.score_increase);

    match get_user_input("Play again? (yes/no)")?
        .to_lowercase()
        .as_str()
    {
        "yes" | "y" => {
            engine.reset();
            println!("\n🔄 New game started!\n");
            Ok(true)
        }
        _ => {
            println!("\n👋 Thanks for playing!\n");
            Ok(false)
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
