//! One-shot guess scoring
//!
//! Evaluates a single guess against a single target and hands the verdict to
//! the output layer. Useful for settling arguments about the scoring rules.

use crate::core::{Pattern, Word};

/// Verdict of one guess against one target
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub pattern: Pattern,
}

/// Score a guess against a target
///
/// # Errors
/// Returns an error message if either word is not a valid five-letter word.
pub fn score_guess(guess: &str, target: &str) -> Result<ScoreResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let target = Word::new(target).map_err(|e| format!("Invalid target: {e}"))?;

    let pattern = Pattern::evaluate(&guess, &target);

    Ok(ScoreResult {
        guess,
        target,
        pattern,
    })
}
