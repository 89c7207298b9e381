//! Wordle Game
//!
//! A terminal Wordle with three play modes: official (curated secrets),
//! extreme (any accepted word can be the secret), and absurdle (no secret at
//! all - an adversary narrows the candidate pool as slowly as possible).
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Word, Pattern, LetterResult};
//!
//! let guess = Word::new("trace").unwrap();
//! let target = Word::new("crane").unwrap();
//!
//! let pattern = Pattern::evaluate(&guess, &target);
//! assert!(!pattern.is_win());
//! assert_eq!(pattern.results()[1], LetterResult::Correct);
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
