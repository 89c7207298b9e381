//! Core domain types
//!
//! Words and the feedback patterns produced by scoring a guess.

mod pattern;
mod word;

pub use pattern::{LetterResult, Pattern, WORD_LEN};
pub use word::{Word, WordError};
