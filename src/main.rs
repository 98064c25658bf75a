//! Unscramble - CLI
//!
//! Terminal front-end for the word-scramble game engine.

use anyhow::Result;
use clap::{Parser, Subcommand};
use unscramble::{
    commands::run_play,
    core::{Word, WordPool, scramble},
    engine::{DEFAULT_MAX_ROUNDS, DEFAULT_SCORE_INCREASE, GameConfig, GameEngine},
    output::print_word_pool,
    wordlists::loader::{embedded_pool, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "unscramble",
    about = "Word-scramble game: guess the original word behind the shuffled letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Rounds per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ROUNDS)]
    rounds: usize,

    /// Points per correct guess
    #[arg(short, long, global = true, default_value_t = DEFAULT_SCORE_INCREASE)]
    points: u32,

    /// Wordlist: 'embedded' (default, built-in pool) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game interactively (default)
    Play,

    /// Print one scramble of a word
    Scramble {
        /// Word to scramble
        word: String,
    },

    /// List the word pool in use
    Words,
}

/// Load the word pool based on the -w flag
///
/// - "embedded": the built-in pool compiled into the binary
/// - "<path>": load a custom pool from a file, one word per line
fn load_pool(wordlist_mode: &str) -> Result<WordPool> {
    match wordlist_mode {
        "embedded" => Ok(embedded_pool()?),
        path => {
            let words = load_from_file(path)?;
            Ok(WordPool::new(words)?)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let pool = load_pool(&cli.wordlist)?;
            let config = GameConfig::new(cli.rounds, cli.points);
            let mut engine = GameEngine::new(pool, config)?;
            run_play(&mut engine).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Scramble { word } => {
            let word = Word::new(word)?;
            println!("{}", scramble(&word));
            Ok(())
        }
        Commands::Words => {
            let pool = load_pool(&cli.wordlist)?;
            print_word_pool(pool.words());
            Ok(())
        }
    }
}
