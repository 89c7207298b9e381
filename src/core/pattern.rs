//! Guess feedback pattern calculation and representation
//!
//! A pattern encodes the per-letter verdict of one guess using base-3
//! encoding:
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::Word;
use std::fmt;

/// Fixed word length for the whole game
pub const WORD_LEN: usize = 5;

/// Verdict for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterResult {
    /// Letter does not occur in the target (after budget accounting)
    Absent,
    /// Letter occurs in the target, but not at this position
    Present,
    /// Letter matches the target at this position
    Correct,
}

impl LetterResult {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// Feedback pattern for one guess
///
/// Represents the five per-letter verdicts as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All correct (winning pattern)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is the winning pattern (all letters correct)
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.0 == 242
    }

    /// Score `guess` against `target`
    ///
    /// This implements Wordle's exact feedback rules, including proper
    /// handling of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches Correct and consume that
    ///    letter's budget in the target. The pass completes in full before
    ///    pass two, because Correct matches take precedence over Present.
    /// 2. Second pass: for positions not Correct, mark Present while budget
    ///    remains, otherwise leave Absent.
    /// 3. Encode as a base-3 number.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Word, Pattern, LetterResult};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let target = Word::new("crane").unwrap();
    /// let pattern = Pattern::evaluate(&guess, &target);
    ///
    /// use LetterResult::{Absent, Correct, Present};
    /// assert_eq!(
    ///     pattern.results(),
    ///     [Absent, Correct, Correct, Present, Correct]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut digits = [0u8; WORD_LEN];
        let mut budget = target.letter_counts();

        // First pass: exact position matches
        for i in 0..WORD_LEN {
            if guess.chars()[i] == target.chars()[i] {
                digits[i] = 2;
                budget[usize::from(guess.chars()[i] - b'a')] -= 1;
            }
        }

        // Second pass: displaced letters, while budget remains
        for i in 0..WORD_LEN {
            if digits[i] == 0 {
                let slot = usize::from(guess.chars()[i] - b'a');
                if budget[slot] > 0 {
                    digits[i] = 1;
                    budget[slot] -= 1;
                }
            }
        }

        // Encode as base-3 number
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for &digit in &digits {
            value += digit * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }

        Self(value)
    }

    /// Build a pattern from five per-letter verdicts
    #[must_use]
    pub fn from_results(results: [LetterResult; WORD_LEN]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for result in results {
            value += result.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(value)
    }

    /// Decode the pattern into ordered per-letter verdicts
    #[must_use]
    pub fn results(self) -> [LetterResult; WORD_LEN] {
        let mut results = [LetterResult::Absent; WORD_LEN];
        let mut val = self.0;

        for result in &mut results {
            *result = LetterResult::from_digit(val % 3);
            val /= 3;
        }

        results
    }
}

impl fmt::Display for Pattern {
    /// Compact text form: `.` absent, `y` present, `G` correct
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in self.results() {
            f.write_str(match result {
                LetterResult::Absent => ".",
                LetterResult::Present => "y",
                LetterResult::Correct => "G",
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterResult::{Absent, Correct, Present};

    #[test]
    fn pattern_perfect_constant() {
        assert_eq!(Pattern::PERFECT.value(), 242);
        assert!(Pattern::PERFECT.is_win());
        assert_eq!(Pattern::PERFECT.results(), [Correct; 5]);
    }

    #[test]
    fn pattern_all_absent_for_disjoint_words() {
        let guess = Word::new("abcde").unwrap();
        let target = Word::new("fghij").unwrap();
        let pattern = Pattern::evaluate(&guess, &target);

        assert_eq!(pattern.value(), 0);
        assert_eq!(pattern.results(), [Absent; 5]);
    }

    #[test]
    fn pattern_self_match_is_win() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert_eq!(Pattern::evaluate(&w, &w), Pattern::PERFECT);
        }
    }

    #[test]
    fn pattern_duplicate_letters_budgeted() {
        // SPEED vs ERASE
        // S is in ERASE but misplaced; ERASE has exactly two E's, so both
        // guessed E's are Present and no third mark could ever appear.
        let guess = Word::new("speed").unwrap();
        let target = Word::new("erase").unwrap();
        let pattern = Pattern::evaluate(&guess, &target);

        assert_eq!(
            pattern.results(),
            [Present, Absent, Present, Present, Absent]
        );
        // 1 + 0×3 + 1×9 + 1×27 + 0×81 = 37
        assert_eq!(pattern.value(), 37);
    }

    #[test]
    fn pattern_excess_repeats_are_absent() {
        // EERIE has three E's; ERASE has only two, so exactly two get marked.
        let guess = Word::new("eerie").unwrap();
        let target = Word::new("erase").unwrap();
        let pattern = Pattern::evaluate(&guess, &target);

        let marked = pattern
            .results()
            .iter()
            .filter(|r| **r != Absent)
            .count();
        assert_eq!(marked, 3); // two E's and the R marked; third E absent
        assert_eq!(pattern.results()[1], Absent);
    }

    #[test]
    fn pattern_correct_consumes_budget_first() {
        // ROBOT vs FLOOR: first O yields to the positionally-correct second O
        // only after greens are settled, so both O's still get marked.
        let guess = Word::new("robot").unwrap();
        let target = Word::new("floor").unwrap();
        let pattern = Pattern::evaluate(&guess, &target);

        assert_eq!(
            pattern.results(),
            [Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn pattern_trace_vs_crane() {
        let guess = Word::new("trace").unwrap();
        let target = Word::new("crane").unwrap();
        let pattern = Pattern::evaluate(&guess, &target);

        assert_eq!(
            pattern.results(),
            [Absent, Correct, Correct, Present, Correct]
        );
    }

    #[test]
    fn pattern_present_never_exceeds_remaining_budget() {
        let words = ["erase", "speed", "llama", "aaaaa", "eagle", "crane"];
        for guess_text in words {
            for target_text in words {
                let guess = Word::new(guess_text).unwrap();
                let target = Word::new(target_text).unwrap();
                let results = Pattern::evaluate(&guess, &target).results();

                // Per letter: correct + present marks never exceed the
                // target's multiplicity of that letter.
                for letter in b'a'..=b'z' {
                    let marked = results
                        .iter()
                        .zip(guess.chars())
                        .filter(|(r, ch)| **ch == letter && **r != Absent)
                        .count();
                    let available = target
                        .chars()
                        .iter()
                        .filter(|&&ch| ch == letter)
                        .count();
                    assert!(marked <= available, "{guess_text} vs {target_text}");
                }
            }
        }
    }

    #[test]
    fn pattern_results_roundtrip() {
        let results = [Present, Correct, Absent, Correct, Present];
        let pattern = Pattern::from_results(results);
        assert_eq!(pattern.results(), results);
    }

    #[test]
    fn pattern_display_compact() {
        let guess = Word::new("speed").unwrap();
        let target = Word::new("erase").unwrap();
        let pattern = Pattern::evaluate(&guess, &target);
        assert_eq!(pattern.to_string(), "y.yy.");
    }
}
