//! Terminal display of game results and statistics

use super::formatters::{colorize_guess, histogram_bar, pattern_to_emoji};
use crate::commands::ScoreResult;
use crate::core::LetterResult;
use crate::game::{GameSession, GameStatus, Stats};
use colored::Colorize;

/// Print the verdict of one guess scored against one target
pub fn print_score_result(result: &ScoreResult) {
    println!();
    println!("  Target: {}", result.target.text().to_uppercase().bold());
    println!("  Guess:  {}", colorize_guess(&result.guess, result.pattern));
    println!("          {}", pattern_to_emoji(result.pattern));
    println!();

    for (ch, letter) in result
        .guess
        .text()
        .to_uppercase()
        .chars()
        .zip(result.pattern.results())
    {
        let verdict = match letter {
            LetterResult::Correct => "correct position".bright_green(),
            LetterResult::Present => "in the word, wrong position".bright_yellow(),
            LetterResult::Absent => "not in the word".bright_black(),
        };
        println!("  {ch}  {verdict}");
    }
    println!();
}

/// Print the end-of-game board and outcome
pub fn print_game_summary(session: &GameSession) {
    println!();
    for (i, (guess, pattern)) in session.history().iter().enumerate() {
        println!(
            "  {}. {}  {}",
            i + 1,
            colorize_guess(guess, *pattern),
            pattern_to_emoji(*pattern)
        );
    }
    println!();

    match session.status() {
        GameStatus::Won => {
            let attempts = session.attempts_used();
            println!(
                "  {} in {attempts}/{}",
                "You win!".bright_green().bold(),
                session.max_attempts()
            );
        }
        GameStatus::Lost => {
            let reveal = session
                .reveal()
                .map_or_else(String::new, |w| w.text().to_uppercase());
            println!(
                "  {} The word was {}",
                "Out of tries!".bright_red().bold(),
                reveal.bold()
            );
        }
        GameStatus::InProgress => {}
    }
    println!();
}

/// Print cumulative statistics with a guess-count histogram
pub fn print_stats(stats: &Stats) {
    println!();
    println!("  {}", "STATISTICS".bold());
    println!(
        "  Played {}   Win % {}   Streak {}   Max streak {}",
        stats.played(),
        stats.win_pct(),
        stats.current_streak(),
        stats.max_streak()
    );
    println!();
    println!("  {}", "GUESS DISTRIBUTION".bold());

    let max = stats
        .distribution()
        .iter()
        .copied()
        .chain(std::iter::once(stats.losses()))
        .max()
        .unwrap_or(0);

    for (i, &count) in stats.distribution().iter().enumerate() {
        println!("  {:>2} {} {count}", i + 1, histogram_bar(count, max, 20));
    }
    println!(
        "   X {} {}",
        histogram_bar(stats.losses(), max, 20),
        stats.losses()
    );
    println!();
}
