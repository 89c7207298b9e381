//! Wordle Game - CLI
//!
//! Terminal Wordle with TUI and plain CLI modes, plus an adversarial
//! Absurdle variant.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::{run_simple, score_guess},
    game::Mode,
    interactive::{App, run_tui},
    output::print_score_result,
    wordlists::Vocabulary,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Terminal Wordle with official, extreme, and adversarial (Absurdle) modes",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Mode: official (default), extreme, absurdle
    #[arg(short, long, global = true, default_value = "official")]
    mode: String,

    /// Path to a custom accepted-guess list (one word per line)
    #[arg(long, global = true, requires = "answers_file")]
    allowed_file: Option<String>,

    /// Path to a custom answers list (one word per line)
    #[arg(long, global = true, requires = "allowed_file")]
    answers_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain line-oriented CLI mode
    Simple,

    /// Score one guess against one target and explain the verdict
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

/// Load the vocabulary, preferring user-supplied files
///
/// Falls back to the embedded lists when no files are given or the given
/// files cannot be used.
fn load_vocabulary(allowed_file: Option<&str>, answers_file: Option<&str>) -> Vocabulary {
    match (allowed_file, answers_file) {
        (Some(allowed), Some(answers)) => Vocabulary::from_files_or_embedded(allowed, answers),
        _ => Vocabulary::embedded(),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let vocabulary = load_vocabulary(cli.allowed_file.as_deref(), cli.answers_file.as_deref());
    let mode = Mode::from_name(&cli.mode);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&vocabulary, mode),
        Commands::Simple => run_simple(&vocabulary, mode).map_err(|e| anyhow::anyhow!(e)),
        Commands::Score { guess, target } => run_score_command(&guess, &target),
    }
}

fn run_play_command(vocabulary: &Vocabulary, mode: Mode) -> Result<()> {
    let app = App::new(vocabulary, mode);
    run_tui(app)
}

fn run_score_command(guess: &str, target: &str) -> Result<()> {
    let result = score_guess(guess, target).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result);
    Ok(())
}
