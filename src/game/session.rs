//! Game session state and guess handling
//!
//! A session is an explicit value owned by the caller. It holds the mode,
//! the target (fixed word or live candidate pool), the guess history, and
//! the win/loss status. Nothing lives in ambient globals, so independent
//! sessions never contaminate each other.

use super::absurdle::narrow;
use super::mode::Mode;
use crate::core::{Pattern, Word, WordError};
use crate::wordlists::Vocabulary;
use log::debug;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// What a guess is scored against
#[derive(Debug, Clone)]
pub enum Target {
    /// One secret word chosen at game start
    Fixed(Word),
    /// Live candidate pool, narrowed adversarially on every guess
    Adaptive(Vec<Word>),
}

/// Session outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Why a guess was rejected
///
/// Rejected guesses consume no attempt and leave the session untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Guess is not exactly five letters
    InvalidLength(usize),
    /// Guess is not in the accepted-guess list
    NotInVocabulary(String),
    /// The session has already finished
    GameOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => write!(f, "Need 5 letters, got {len}"),
            Self::NotInVocabulary(word) => write!(f, "'{word}' is not in the word list"),
            Self::GameOver => write!(f, "The game is over"),
        }
    }
}

impl std::error::Error for GuessError {}

/// Result of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub guess: Word,
    pub pattern: Pattern,
    /// 1-based attempt number this guess consumed
    pub attempt: usize,
    pub status: GameStatus,
    /// Surviving candidate count, adaptive mode only
    pub pool_remaining: Option<usize>,
}

/// One game from first guess to win or loss
#[derive(Debug, Clone)]
pub struct GameSession {
    mode: Mode,
    target: Target,
    history: Vec<(Word, Pattern)>,
    status: GameStatus,
}

impl GameSession {
    /// Start a new game in the given mode
    ///
    /// Official draws a random secret from the answers list, Extreme from the
    /// full accepted-guess list. Absurdle fixes nothing: its pool starts as
    /// the full accepted-guess list.
    ///
    /// # Panics
    /// Will not panic - `Vocabulary` guarantees non-empty lists.
    #[must_use]
    pub fn start<R: Rng + ?Sized>(mode: Mode, vocabulary: &Vocabulary, rng: &mut R) -> Self {
        let target = match mode {
            Mode::Official => Target::Fixed(
                vocabulary
                    .answers()
                    .choose(rng)
                    .expect("answers list is non-empty")
                    .clone(),
            ),
            Mode::Extreme => Target::Fixed(
                vocabulary
                    .allowed()
                    .choose(rng)
                    .expect("allowed list is non-empty")
                    .clone(),
            ),
            Mode::Absurdle => Target::Adaptive(vocabulary.allowed().to_vec()),
        };

        debug!("new {mode} game started");

        Self {
            mode,
            target,
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Start a game against a caller-chosen fixed secret
    ///
    /// Used by the score command and by tests; the secret bypasses random
    /// selection but the mode's attempt budget still applies.
    #[must_use]
    pub fn with_secret(mode: Mode, secret: Word) -> Self {
        Self {
            mode,
            target: Target::Fixed(secret),
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Submit one guess
    ///
    /// Validates length and vocabulary membership before scoring; a rejected
    /// guess changes nothing. An accepted guess is scored against the fixed
    /// secret or, in absurdle mode, fed to the narrower, which replaces the
    /// pool wholesale.
    ///
    /// # Errors
    /// Returns `GuessError` if the session is finished, the guess is not
    /// exactly five letters, or the guess is not an accepted word.
    pub fn submit(
        &mut self,
        raw_guess: &str,
        vocabulary: &Vocabulary,
    ) -> Result<GuessReport, GuessError> {
        if self.status != GameStatus::InProgress {
            return Err(GuessError::GameOver);
        }

        let guess = Word::new(raw_guess.trim()).map_err(|e| match e {
            WordError::InvalidLength(len) => GuessError::InvalidLength(len),
            // Words with non-letters can never be in the vocabulary
            WordError::NonAscii | WordError::InvalidCharacters => {
                GuessError::NotInVocabulary(raw_guess.trim().to_string())
            }
        })?;

        if !vocabulary.is_allowed(&guess) {
            return Err(GuessError::NotInVocabulary(guess.text().to_string()));
        }

        let (pattern, pool_remaining) = match &mut self.target {
            Target::Fixed(secret) => (Pattern::evaluate(&guess, secret), None),
            Target::Adaptive(pool) => {
                let (pattern, survivors) = narrow(&guess, std::mem::take(pool));
                *pool = survivors;
                (pattern, Some(pool.len()))
            }
        };

        self.history.push((guess.clone(), pattern));
        let attempt = self.history.len();

        if pattern.is_win() {
            self.status = GameStatus::Won;
        } else if attempt >= self.mode.max_attempts() {
            self.status = GameStatus::Lost;
        }

        debug!(
            "guess {attempt}/{}: {guess} -> {pattern} ({:?})",
            self.mode.max_attempts(),
            self.status,
        );

        Ok(GuessReport {
            guess,
            pattern,
            attempt,
            status: self.status,
            pool_remaining,
        })
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.status, GameStatus::InProgress)
    }

    /// Attempts used so far (rejected guesses never count)
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.mode.max_attempts()
    }

    /// Accepted guesses and their patterns, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Pattern)] {
        &self.history
    }

    /// Surviving candidate count, adaptive mode only
    #[must_use]
    pub fn pool_remaining(&self) -> Option<usize> {
        match &self.target {
            Target::Fixed(_) => None,
            Target::Adaptive(pool) => Some(pool.len()),
        }
    }

    /// The word to show when the game is lost
    ///
    /// A fixed-target game reveals its secret. An adaptive game reveals one
    /// surviving candidate; every pool member is consistent with everything
    /// revealed, so any of them is an honest answer.
    #[must_use]
    pub fn reveal(&self) -> Option<&Word> {
        match &self.target {
            Target::Fixed(secret) => Some(secret),
            Target::Adaptive(pool) => pool.first(),
        }
    }
}
