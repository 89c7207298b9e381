//! Word lists for the game
//!
//! Embedded lists compiled into the binary, a file loader, and the
//! `Vocabulary` wrapper that owns both lists and their invariants.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use log::warn;
use rustc_hash::FxHashSet;
use std::fmt;
use std::path::Path;

/// Why a vocabulary could not be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    EmptyAllowedList,
    EmptyAnswerList,
    /// An answer word missing from the accepted-guess list
    AnswerNotAllowed(String),
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAllowedList => write!(f, "accepted-guess list is empty"),
            Self::EmptyAnswerList => write!(f, "answer list is empty"),
            Self::AnswerNotAllowed(word) => {
                write!(f, "answer '{word}' is not in the accepted-guess list")
            }
        }
    }
}

impl std::error::Error for VocabularyError {}

/// The two word lists every game needs
///
/// `allowed` is every word a player may guess; `answers` is the subset
/// eligible to become a fixed secret. Built once at startup, read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    allowed: Vec<Word>,
    answers: Vec<Word>,
    allowed_set: FxHashSet<Word>,
}

impl Vocabulary {
    /// Build a vocabulary, enforcing its invariants
    ///
    /// # Errors
    /// Returns `VocabularyError` if either list is empty or an answer is
    /// missing from the allowed list.
    pub fn new(allowed: Vec<Word>, answers: Vec<Word>) -> Result<Self, VocabularyError> {
        if allowed.is_empty() {
            return Err(VocabularyError::EmptyAllowedList);
        }
        if answers.is_empty() {
            return Err(VocabularyError::EmptyAnswerList);
        }

        let allowed_set: FxHashSet<Word> = allowed.iter().cloned().collect();

        if let Some(stray) = answers.iter().find(|a| !allowed_set.contains(a)) {
            return Err(VocabularyError::AnswerNotAllowed(stray.text().to_string()));
        }

        Ok(Self {
            allowed,
            answers,
            allowed_set,
        })
    }

    /// Build from the embedded word lists
    ///
    /// # Panics
    /// Will not panic - the embedded lists are validated by tests and checked
    /// again here at startup.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            loader::words_from_slice(ALLOWED),
            loader::words_from_slice(ANSWERS),
        )
        .expect("embedded word lists satisfy the vocabulary invariants")
    }

    /// Load from user-supplied files, falling back to the embedded lists
    ///
    /// If either file cannot be read or the loaded lists violate an
    /// invariant, logs a warning and substitutes the embedded vocabulary.
    #[must_use]
    pub fn from_files_or_embedded<P: AsRef<Path>>(allowed_path: P, answers_path: P) -> Self {
        let loaded = loader::load_from_file(&allowed_path)
            .and_then(|allowed| Ok((allowed, loader::load_from_file(&answers_path)?)));

        match loaded {
            Ok((allowed, answers)) => match Self::new(allowed, answers) {
                Ok(vocabulary) => vocabulary,
                Err(e) => {
                    warn!("word list files rejected ({e}); using embedded lists");
                    Self::embedded()
                }
            },
            Err(e) => {
                warn!("failed to read word list files ({e}); using embedded lists");
                Self::embedded()
            }
        }
    }

    /// Every accepted guess word
    #[must_use]
    pub fn allowed(&self) -> &[Word] {
        &self.allowed
    }

    /// Words eligible to be a fixed secret
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Whether a word may be guessed
    #[must_use]
    pub fn is_allowed(&self, word: &Word) -> bool {
        self.allowed_set.contains(word)
    }
}
