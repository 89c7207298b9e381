//! TUI rendering with ratatui
//!
//! Board, keyboard, and statistics panels for the game interface.

use super::app::{App, MessageStyle};
use crate::core::{LetterResult, Pattern, WORD_LEN, Word};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Main content area - board left, info right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(" WORDLE - {} mode ", app.mode);
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(result: LetterResult) -> Style {
    match result {
        LetterResult::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterResult::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterResult::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn scored_row(guess: &Word, pattern: Pattern) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LEN * 2);
    for (&ch, result) in guess.chars().iter().zip(pattern.results()) {
        spans.push(Span::styled(
            format!(" {} ", ch.to_ascii_uppercase() as char),
            tile_style(result),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn input_row(buffer: &str) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LEN * 2);
    for i in 0..WORD_LEN {
        let ch = buffer
            .as_bytes()
            .get(i)
            .map_or(' ', |b| b.to_ascii_uppercase() as char);
        spans.push(Span::styled(
            format!(" {ch} "),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn empty_row() -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LEN * 2);
    for _ in 0..WORD_LEN {
        spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::default()];

    for (guess, pattern) in app.session.history() {
        lines.push(scored_row(guess, *pattern));
        lines.push(Line::default());
    }

    let mut rows_shown = app.session.attempts_used();
    if !app.session.is_over() {
        lines.push(input_row(&app.input_buffer));
        lines.push(Line::default());
        rows_shown += 1;
    }

    for _ in rows_shown..app.session.max_attempts() {
        lines.push(empty_row());
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Min(5),    // Messages
            Constraint::Length(6), // Statistics
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_stats(f, app, chunks[2]);
}

fn key_style(hint: Option<LetterResult>) -> Style {
    match hint {
        Some(result) => tile_style(result),
        None => Style::default().fg(Color::White),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.letter_hints();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for ch in row.chars() {
                let hint = hints[usize::from(ch as u8 - b'a')];
                spans.push(Span::styled(
                    format!("{}", ch.to_ascii_uppercase()),
                    key_style(hint),
                ));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let lines = vec![
        Line::from(format!(
            "Played {}   Win % {}",
            stats.played(),
            stats.win_pct()
        )),
        Line::from(format!(
            "Streak {}   Max streak {}",
            stats.current_streak(),
            stats.max_streak()
        )),
        Line::from(format!("Losses {}", stats.losses())),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let attempts_text = format!(
        "Attempt: {}/{}",
        app.session.attempts_used(),
        app.session.max_attempts()
    );
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let pool_text = app
        .session
        .pool_remaining()
        .map_or_else(String::new, |n| format!("Words remaining: {n}"));
    let pool = Paragraph::new(pool_text).alignment(Alignment::Center);
    f.render_widget(pool, chunks[1]);

    let help_text = if app.session.is_over() {
        "n: New Game | q: Quit"
    } else {
        "Type letters | Enter: Submit | Backspace | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
