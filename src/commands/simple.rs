//! Simple interactive CLI mode
//!
//! Line-oriented play loop without the TUI.

use crate::game::{GameSession, GameStatus, GuessError, Mode, Stats};
use crate::output::{colorize_guess, print_game_summary, print_stats};
use crate::wordlists::Vocabulary;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(vocabulary: &Vocabulary, mode: Mode) -> Result<(), String> {
    let mode_name = mode.to_string();
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   WORDLE - {mode_name:<8} mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden five-letter word.");
    match mode {
        Mode::Official => println!("The secret is a common word. You have 6 tries."),
        Mode::Extreme => {
            println!("The secret can be ANY accepted guess word. You have 6 tries.");
        }
        Mode::Absurdle => {
            println!("The word isn't chosen yet - I dodge your guesses for as long");
            println!("as the dictionary lets me. You have 10 tries.");
        }
    }
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut stats = Stats::new();
    let mut rng = rand::rng();
    let mut session = GameSession::start(mode, vocabulary, &mut rng);

    loop {
        let prompt = format!(
            "Guess {}/{}",
            session.attempts_used() + 1,
            session.max_attempts()
        );
        let input = get_user_input(&prompt)?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session = GameSession::start(mode, vocabulary, &mut rng);
                println!("\nNew game started!\n");
                continue;
            }
            _ => {}
        }

        let report = match session.submit(&input, vocabulary) {
            Ok(report) => report,
            Err(e @ (GuessError::InvalidLength(_) | GuessError::NotInVocabulary(_))) => {
                println!("  {}", e.to_string().bright_red());
                continue;
            }
            Err(GuessError::GameOver) => {
                // Should be unreachable: a finished game is replaced below
                println!("  {}", "The game is over".bright_red());
                continue;
            }
        };

        println!("  {}", colorize_guess(&report.guess, report.pattern));
        if let Some(remaining) = report.pool_remaining {
            println!("  {}", format!("{remaining} words remaining").bright_black());
        }

        if session.is_over() {
            stats.record(report.status == GameStatus::Won, report.attempt);
            print_game_summary(&session);
            print_stats(&stats);
            if !ask_play_again()? {
                return Ok(());
            }
            session = GameSession::start(mode, vocabulary, &mut rng);
        }
    }
}

fn ask_play_again() -> Result<bool, String> {
    match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
        "yes" | "y" => {
            println!("\nNew game started!\n");
            Ok(true)
        }
        _ => {
            println!("\nThanks for playing!\n");
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
