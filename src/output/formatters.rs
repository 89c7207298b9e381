//! Formatting utilities for terminal output

use crate::core::{LetterResult, Pattern, Word};
use colored::Colorize;

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: Pattern) -> String {
    let mut result = String::with_capacity(20);

    for letter in pattern.results() {
        result.push(match letter {
            LetterResult::Absent => '⬛',
            LetterResult::Present => '🟨',
            LetterResult::Correct => '🟩',
        });
    }

    result
}

/// Render a guess with each letter colored by its verdict
#[must_use]
pub fn colorize_guess(guess: &Word, pattern: Pattern) -> String {
    guess
        .text()
        .to_uppercase()
        .chars()
        .zip(pattern.results())
        .map(|(ch, result)| {
            let cell = format!(" {ch} ");
            match result {
                LetterResult::Correct => cell.black().on_bright_green().to_string(),
                LetterResult::Present => cell.black().on_bright_yellow().to_string(),
                LetterResult::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a histogram bar string
///
/// Non-zero counts get at least one filled cell so they stay visible.
#[must_use]
pub fn histogram_bar(count: usize, max: usize, width: usize) -> String {
    let max = max.max(1);
    let mut filled = count * width / max;
    if count > 0 {
        filled = filled.max(1);
    }
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_to_emoji_all_absent() {
        let emoji = pattern_to_emoji(Pattern::new(0));
        assert_eq!(emoji, "⬛⬛⬛⬛⬛");
    }

    #[test]
    fn pattern_to_emoji_all_correct() {
        let emoji = pattern_to_emoji(Pattern::PERFECT);
        assert_eq!(emoji, "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn pattern_to_emoji_mixed() {
        let guess = Word::new("speed").unwrap();
        let target = Word::new("erase").unwrap();
        let emoji = pattern_to_emoji(Pattern::evaluate(&guess, &target));
        assert_eq!(emoji, "🟨⬛🟨🟨⬛");
    }

    #[test]
    fn histogram_bar_empty() {
        assert_eq!(histogram_bar(0, 10, 10), "░░░░░░░░░░");
    }

    #[test]
    fn histogram_bar_full() {
        assert_eq!(histogram_bar(10, 10, 10), "██████████");
    }

    #[test]
    fn histogram_bar_nonzero_counts_stay_visible() {
        let bar = histogram_bar(1, 100, 10);
        assert!(bar.starts_with('█'));
    }

    #[test]
    fn colorize_guess_uppercases_letters() {
        let guess = Word::new("crane").unwrap();
        let rendered = colorize_guess(&guess, Pattern::PERFECT);
        for ch in ['C', 'R', 'A', 'N', 'E'] {
            assert!(rendered.contains(ch));
        }
    }
}
