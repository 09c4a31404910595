//! TUI rendering with ratatui
//!
//! Board, keyboard and side panels for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{KEYBOARD_ROWS, KeyboardState, LetterState, MAX_ATTEMPTS, Verdict};
use crate::game::Mode;
use crate::selector::Clock;
use crate::stats::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and side panels
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app.mode(), chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Stats and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, mode: Mode, area: Rect) {
    let title = match mode {
        Mode::Daily => "🧠 BRAINRODLE - Daily",
        Mode::Unlimited => "🧠 BRAINRODLE - Unlimited",
    };
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

fn verdict_style(verdict: Verdict) -> Style {
    let bg = match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn scored_tile(letter: char, verdict: Verdict) -> Span<'static> {
    Span::styled(format!(" {letter} "), verdict_style(verdict))
}

fn open_tile(letter: Option<char>, is_cursor: bool) -> Span<'static> {
    let text = format!(" {} ", letter.unwrap_or('_'));
    let style = if is_cursor {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::White)
    };
    Span::styled(text, style)
}

/// Interleave tiles with single spaces
fn tile_line(tiles: Vec<Span<'static>>) -> Line<'static> {
    let mut spans = Vec::with_capacity(tiles.len() * 2);
    for (i, tile) in tiles.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(tile);
    }
    Line::from(spans)
}

fn board_lines<S: KeyValueStore, C: Clock>(app: &App<S, C>) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);

    let Some(session) = &app.session else {
        // Already played: show the stored rows
        for row in &app.previous_rows {
            lines.push(tile_line(
                row.iter().map(|&(c, v)| scored_tile(c, v)).collect(),
            ));
            lines.push(Line::from(""));
        }
        return lines;
    };

    let len = session.word_len();
    let pending: Vec<char> = session.pending().chars().collect();

    for index in 0..MAX_ATTEMPTS {
        let tiles = if let Some(row) = session.rows().get(index) {
            row.guess
                .text()
                .chars()
                .zip(row.feedback.verdicts())
                .map(|(c, &v)| scored_tile(c, v))
                .collect()
        } else if index == session.rows().len() && !session.is_over() {
            (0..len)
                .map(|i| open_tile(pending.get(i).copied(), i == session.cursor()))
                .collect()
        } else {
            (0..len).map(|_| open_tile(None, false)).collect()
        };
        lines.push(tile_line(tiles));
        lines.push(Line::from(""));
    }

    if let Some(target) = session.revealed_target()
        && session.rows().last().is_some_and(|r| !r.feedback.is_win())
    {
        lines.push(Line::from(vec![
            Span::raw("The word was "),
            Span::styled(
                target.text().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    lines
}

fn render_board<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let title = match &app.session {
        Some(session) => format!(
            " Guess {}/{} ",
            (session.attempt_index() + 1).min(MAX_ATTEMPTS),
            MAX_ATTEMPTS
        ),
        None => " Today's guesses ".to_string(),
    };

    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(board, area);
}

fn render_info_panel<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Stats
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_stats(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_stats<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let stats = &app.stats;
    let mut content = vec![
        Line::from(format!("Played:   {}", stats.games_played())),
        Line::from(format!("Win %:    {}", stats.win_percentage())),
        Line::from(format!("Streak:   {}", stats.current_streak())),
        Line::from(format!("Best:     {}", stats.best_streak())),
    ];

    if let Some(distribution) = stats.distribution() {
        let most = distribution.values().copied().max().unwrap_or(0).max(1);
        content.push(Line::from(""));
        for (attempts, &count) in distribution {
            let width = (count * 12 / most) as usize;
            content.push(Line::from(vec![
                Span::raw(format!("{attempts} ")),
                Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
                Span::raw(format!(" {count}")),
            ]));
        }
    }

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_messages<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
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

fn key_style(state: LetterState) -> Style {
    match state {
        LetterState::Correct => verdict_style(Verdict::Correct),
        LetterState::Present => verdict_style(Verdict::Present),
        LetterState::Absent => Style::default().fg(Color::DarkGray),
        LetterState::Unknown => Style::default().fg(Color::White),
    }
}

fn render_keyboard<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let keyboard = app
        .session
        .as_ref()
        .map(crate::core::GameSession::keyboard)
        .unwrap_or_default();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| keyboard_line(&keyboard, row))
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(widget, area);
}

fn keyboard_line(keyboard: &KeyboardState, row: &str) -> Line<'static> {
    tile_line(
        row.chars()
            .map(|key| Span::styled(format!(" {key} "), key_style(keyboard.state(key))))
            .collect(),
    )
}

fn render_status<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Mode: {}", app.mode())).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats = Paragraph::new(format!(
        "Games: {} | Win Rate: {}%",
        app.stats.games_played(),
        app.stats.win_percentage()
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match (app.input_mode, app.mode()) {
        (InputMode::Playing, _) => "Type letters | Backspace: Delete | Enter: Submit | Esc: Quit",
        (InputMode::GameOver, Mode::Unlimited) => "n: New Game | q: Quit",
        (InputMode::GameOver | InputMode::AlreadyPlayed, _) => "q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
