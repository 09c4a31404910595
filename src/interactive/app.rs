//! TUI application state and logic

use crate::core::{GameSession, MAX_ATTEMPTS, Outcome, Verdict};
use crate::game::{Game, Mode, ModeStats, Start};
use crate::output::formatters::{split_stored_row, win_message};
use crate::selector::{Clock, format_countdown};
use crate::stats::KeyValueStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<S: KeyValueStore, C: Clock> {
    pub game: Game<S, C>,
    /// Session being played; `None` when today's daily word is already done
    pub session: Option<GameSession>,
    /// Stored rows shown when the daily puzzle was already played
    pub previous_rows: Vec<Vec<(char, Verdict)>>,
    pub messages: Vec<Message>,
    pub stats: ModeStats,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing guesses
    Playing,
    /// Session won or lost
    GameOver,
    /// Daily puzzle already recorded today
    AlreadyPlayed,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: KeyValueStore, C: Clock> App<S, C> {
    /// Create the app and start the first game
    #[must_use]
    pub fn new(game: Game<S, C>) -> Self {
        let stats = game.load_stats();
        let mut app = Self {
            game,
            session: None,
            previous_rows: Vec::new(),
            messages: Vec::new(),
            stats,
            input_mode: InputMode::Playing,
            should_quit: false,
        };
        app.new_game();
        app
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.game.mode()
    }

    pub fn new_game(&mut self) {
        self.messages.clear();
        self.previous_rows.clear();

        let start = self.game.start();
        let notice = start.notice();
        match start {
            Start::Play(session) => {
                self.add_message(
                    &format!(
                        "Guess the {}-letter word in {MAX_ATTEMPTS} tries!",
                        session.word_len()
                    ),
                    MessageStyle::Info,
                );
                self.session = Some(session);
                self.input_mode = InputMode::Playing;
            }
            Start::AlreadyPlayed { last_guesses, .. } => {
                self.previous_rows = last_guesses
                    .iter()
                    .filter_map(|row| split_stored_row(row))
                    .collect();
                if let Some(notice) = notice {
                    for line in notice.lines().take(2) {
                        self.add_message(line, MessageStyle::Info);
                    }
                }
                self.session = None;
                self.input_mode = InputMode::AlreadyPlayed;
            }
        }
        self.stats = self.game.load_stats();
    }

    pub fn type_letter(&mut self, letter: char) {
        if let Some(session) = &self.session {
            self.session = Some(session.with_letter(letter));
        }
    }

    pub fn delete_letter(&mut self) {
        if let Some(session) = &self.session {
            self.session = Some(session.without_letter());
        }
    }

    /// Submit the typed row
    pub fn submit(&mut self) {
        let Some(session) = self.session.clone() else {
            return;
        };

        match self.game.submit_pending(&session) {
            Ok(submission) => {
                match &submission.outcome {
                    Outcome::Continue => {}
                    Outcome::Win { attempts_used } => {
                        self.add_message(win_message(*attempts_used), MessageStyle::Success);
                        self.finish();
                    }
                    Outcome::Loss { target } => {
                        self.add_message(
                            &format!("Game over! The word was {target}"),
                            MessageStyle::Error,
                        );
                        self.finish();
                    }
                }
                self.session = Some(submission.session);
            }
            Err(e) => {
                debug!("guess rejected: {e}");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish(&mut self) {
        self.input_mode = InputMode::GameOver;
        self.stats = self.game.load_stats();
        match self.mode() {
            Mode::Daily => {
                self.add_message(
                    &format!(
                        "Next word in: {}",
                        format_countdown(self.game.time_until_next_word())
                    ),
                    MessageStyle::Info,
                );
                self.add_message("Press 'q' to quit.", MessageStyle::Info);
            }
            Mode::Unlimited => {
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
        }
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

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Playing => match key.code {
                KeyCode::Char(c) if c.is_ascii_alphabetic() => self.type_letter(c),
                KeyCode::Backspace => self.delete_letter(),
                KeyCode::Enter => self.submit(),
                _ => {}
            },
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') if self.mode() == Mode::Unlimited => self.new_game(),
                _ => {}
            },
            InputMode::AlreadyPlayed => {
                if key.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore, C: Clock>(app: App<S, C>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

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

fn run_app<B, S, C>(terminal: &mut Terminal<B>, mut app: App<S, C>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: KeyValueStore,
    C: Clock,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
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
    use crate::core::{Dictionary, Word};
    use crate::selector::{FixedClock, ReferenceZone};
    use crate::stats::MemoryStore;
    use chrono::{DateTime, Utc};

    fn app(mode: Mode) -> App<MemoryStore, FixedClock> {
        let words = ["RATIO", "SIGMA", "RIZZY", "SUSSY"].map(|w| Word::new(w).unwrap());
        let clock = FixedClock(
            DateTime::parse_from_rfc3339("2025-05-01T12:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        );
        App::new(Game::new(
            mode,
            Dictionary::from_words(words).unwrap(),
            MemoryStore::new(),
            clock,
            ReferenceZone::CentralEuropean,
        ))
    }

    fn press(app: &mut App<MemoryStore, FixedClock>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<MemoryStore, FixedClock>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn target(app: &App<MemoryStore, FixedClock>) -> String {
        app.session.as_ref().unwrap().target().text().to_string()
    }

    #[test]
    fn typing_fills_the_open_row() {
        let mut app = app(Mode::Daily);
        for c in ['r', 'a', '1', 't'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.as_ref().unwrap().pending(), "RA");
    }

    #[test]
    fn rejected_guess_shows_error() {
        let mut app = app(Mode::Daily);
        type_word(&mut app, "abc");
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, "Word must be 5 letters!");
        assert_eq!(app.input_mode, InputMode::Playing);
    }

    #[test]
    fn daily_win_then_replay_is_refused() {
        let mut app = app(Mode::Daily);
        let word = target(&app);
        type_word(&mut app, &word);

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won(), 1);

        // 'n' does nothing in daily mode
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::GameOver);

        app.new_game();
        assert_eq!(app.input_mode, InputMode::AlreadyPlayed);
        assert!(app.session.is_none());
        assert_eq!(app.previous_rows.len(), 1);
        assert!(app.messages.iter().any(|m| m.text.starts_with("Next word in:")));
    }

    #[test]
    fn unlimited_new_game_after_win() {
        let mut app = app(Mode::Unlimited);
        let word = target(&app);
        type_word(&mut app, &word);
        assert_eq!(app.input_mode, InputMode::GameOver);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Playing);
        assert!(app.session.as_ref().unwrap().rows().is_empty());
        assert_eq!(app.stats.games_played(), 1);
    }

    #[test]
    fn escape_quits() {
        let mut app = app(Mode::Daily);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
