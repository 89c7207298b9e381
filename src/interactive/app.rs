//! TUI application state and logic

use crate::core::{LetterResult, WORD_LEN};
use crate::game::{GameSession, GameStatus, Mode, Stats};
use crate::wordlists::Vocabulary;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub vocabulary: &'a Vocabulary,
    pub mode: Mode,
    pub session: GameSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Stats,
    pub should_quit: bool,
    rng: ThreadRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary, mode: Mode) -> Self {
        let mut rng = rand::rng();
        let session = GameSession::start(mode, vocabulary, &mut rng);

        let mut app = Self {
            vocabulary,
            mode,
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Stats::new(),
            should_quit: false,
            rng,
        };

        app.add_message(
            &format!("Welcome! Guess the word in {} tries.", app.session.max_attempts()),
            MessageStyle::Info,
        );
        if mode.is_adaptive() {
            app.add_message(
                "Absurdle: the word dodges your guesses for as long as it can.",
                MessageStyle::Info,
            );
        }

        app
    }

    /// Type one letter into the current guess
    pub fn push_letter(&mut self, c: char) {
        if !self.session.is_over() && self.input_buffer.len() < WORD_LEN && c.is_ascii_alphabetic()
        {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn pop_letter(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the typed guess
    pub fn submit_current(&mut self) {
        if self.session.is_over() {
            return;
        }

        let guess = self.input_buffer.clone();
        match self.session.submit(&guess, self.vocabulary) {
            Ok(report) => {
                self.input_buffer.clear();

                if let Some(remaining) = report.pool_remaining
                    && report.status == GameStatus::InProgress
                {
                    self.add_message(
                        &format!("{remaining} words remaining"),
                        MessageStyle::Info,
                    );
                }

                match report.status {
                    GameStatus::InProgress => {}
                    GameStatus::Won => {
                        self.stats.record(true, report.attempt);
                        let celebration = match report.attempt {
                            1 => "Unbelievable! Got it in one!",
                            2 => "Magnificent! Two guesses!",
                            3 => "Splendid! Three guesses!",
                            4 => "Great job!",
                            5 | 6 => "Nice work!",
                            _ => "Phew! Got it!",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    GameStatus::Lost => {
                        self.stats.record(false, report.attempt);
                        let reveal = self
                            .session
                            .reveal()
                            .map_or_else(String::new, |w| w.text().to_uppercase());
                        self.add_message(
                            &format!("Out of tries! The word was {reveal}"),
                            MessageStyle::Error,
                        );
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                }
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn new_game(&mut self) {
        self.session = GameSession::start(self.mode, self.vocabulary, &mut self.rng);
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Best-known verdict per letter across the whole game
    ///
    /// Priority correct > present > absent, the usual keyboard coloring rule.
    #[must_use]
    pub fn letter_hints(&self) -> [Option<LetterResult>; 26] {
        let mut hints: [Option<LetterResult>; 26] = [None; 26];

        for (guess, pattern) in self.session.history() {
            for (&ch, result) in guess.chars().iter().zip(pattern.results()) {
                let slot = &mut hints[usize::from(ch - b'a')];
                let better = match *slot {
                    None => true,
                    Some(LetterResult::Correct) => false,
                    Some(LetterResult::Present) => result == LetterResult::Correct,
                    Some(LetterResult::Absent) => result != LetterResult::Absent,
                };
                if better {
                    *slot = Some(result);
                }
            }
        }

        hints
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else if app.session.is_over() {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                }
            } else {
                match key.code {
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char(c) => app.push_letter(c),
                    KeyCode::Backspace => app.pop_letter(),
                    KeyCode::Enter => app.submit_current(),
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn vocabulary() -> Vocabulary {
        let allowed = ["crane", "crate", "trace", "slate", "zebra"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let answers = vec![Word::new("crane").unwrap()];
        Vocabulary::new(allowed, answers).unwrap()
    }

    #[test]
    fn input_buffer_caps_at_word_length() {
        let vocab = vocabulary();
        let mut app = App::new(&vocab, Mode::Official);

        for c in "slatex".chars() {
            app.push_letter(c);
        }
        assert_eq!(app.input_buffer, "slate");

        app.pop_letter();
        assert_eq!(app.input_buffer, "slat");
    }

    #[test]
    fn submit_clears_buffer_on_accepted_guess() {
        let vocab = vocabulary();
        let mut app = App::new(&vocab, Mode::Official);

        for c in "slate".chars() {
            app.push_letter(c);
        }
        app.submit_current();

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.attempts_used(), 1);
    }

    #[test]
    fn submit_keeps_buffer_on_rejected_guess() {
        let vocab = vocabulary();
        let mut app = App::new(&vocab, Mode::Official);

        for c in "sla".chars() {
            app.push_letter(c);
        }
        app.submit_current();

        assert_eq!(app.input_buffer, "sla");
        assert_eq!(app.session.attempts_used(), 0);
    }

    #[test]
    fn letter_hints_prefer_correct() {
        // Official mode always picks "crane" (only answer); guessing "crate"
        // marks c/r/a correct, t absent (crane has no t), e correct.
        let vocab = vocabulary();
        let mut app = App::new(&vocab, Mode::Official);

        for c in "crate".chars() {
            app.push_letter(c);
        }
        app.submit_current();

        let hints = app.letter_hints();
        assert_eq!(hints[usize::from(b'c' - b'a')], Some(LetterResult::Correct));
        assert_eq!(hints[usize::from(b't' - b'a')], Some(LetterResult::Absent));
        assert_eq!(hints[usize::from(b'z' - b'a')], None);
    }

    #[test]
    fn new_game_resets_session() {
        let vocab = vocabulary();
        let mut app = App::new(&vocab, Mode::Official);

        for c in "slate".chars() {
            app.push_letter(c);
        }
        app.submit_current();
        assert_eq!(app.session.attempts_used(), 1);

        app.new_game();
        assert_eq!(app.session.attempts_used(), 0);
        assert!(app.input_buffer.is_empty());
    }
}
