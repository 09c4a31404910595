//! Game session state
//!
//! A [`GameSession`] is a value: every accepted action returns a new session and
//! leaves the old one untouched, so each transition can be tested on its own.

use super::{Dictionary, Feedback, GuessError, KeyboardState, Word, evaluate};
use chrono::NaiveDate;
use log::debug;

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
}

/// Result of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Not solved yet; the next row is open
    Continue,
    /// Solved on attempt `attempts_used` (1-based)
    Win { attempts_used: usize },
    /// Out of attempts; the target is revealed
    Loss { target: Word },
}

/// A submitted row: the guess and its verdicts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    pub guess: Word,
    pub feedback: Feedback,
}

impl GuessRow {
    /// Letter-then-glyph rendering, e.g. `R🟩A🟨`
    #[must_use]
    pub fn render(&self) -> String {
        self.feedback.render_row(&self.guess)
    }
}

/// What [`GameSession::submit`] hands back
#[derive(Debug, Clone)]
pub struct Submission {
    pub feedback: Feedback,
    pub outcome: Outcome,
    pub session: GameSession,
}

/// One game against one target word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    target: Word,
    dealt_on: Option<NaiveDate>,
    rows: Vec<GuessRow>,
    pending: String,
    status: SessionStatus,
}

impl GameSession {
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            dealt_on: None,
            rows: Vec::with_capacity(MAX_ATTEMPTS),
            pending: String::new(),
            status: SessionStatus::InProgress,
        }
    }

    /// Tag the session with the reference date its word was dealt for
    #[must_use]
    pub fn dealt_on(mut self, date: NaiveDate) -> Self {
        self.dealt_on = Some(date);
        self
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    /// Reference date of a daily deal; `None` for unlimited play
    #[inline]
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        self.dealt_on
    }

    /// Length every guess must have
    #[inline]
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.target.len()
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != SessionStatus::InProgress
    }

    /// Zero-based index of the row being played (0..=5)
    ///
    /// Once the game is over this stays on the final submitted row.
    #[must_use]
    pub fn attempt_index(&self) -> usize {
        if self.is_over() {
            self.rows.len().saturating_sub(1)
        } else {
            self.rows.len()
        }
    }

    /// Letters typed into the open row
    #[inline]
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Tile cursor within the open row
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.pending.len()
    }

    /// The target, once it may be shown to the player
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        self.is_over().then_some(&self.target)
    }

    /// Keyboard colouring across every submitted row
    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        KeyboardState::from_history(self.rows.iter().map(|r| (&r.guess, &r.feedback)))
    }

    /// Rows rendered as stored in stats
    #[must_use]
    pub fn rendered_rows(&self) -> Vec<String> {
        self.rows.iter().map(GuessRow::render).collect()
    }

    /// Type a letter into the open row
    ///
    /// Non-letters, a full row, or a finished game leave the session unchanged.
    #[must_use]
    pub fn with_letter(&self, letter: char) -> Self {
        if self.is_over() || !letter.is_ascii_alphabetic() || self.cursor() >= self.word_len() {
            return self.clone();
        }
        let mut next = self.clone();
        next.pending.push(letter.to_ascii_uppercase());
        next
    }

    /// Erase the last typed letter; no-op at the start of the row
    #[must_use]
    pub fn without_letter(&self) -> Self {
        let mut next = self.clone();
        if !self.is_over() {
            next.pending.pop();
        }
        next
    }

    /// Submit the letters typed so far
    ///
    /// # Errors
    /// See [`GameSession::submit`].
    pub fn submit_pending(&self, dictionary: &Dictionary) -> Result<Submission, GuessError> {
        self.submit(&self.pending, dictionary)
    }

    /// Submit a whole guess row
    ///
    /// On success the returned session has the row appended, the typed letters
    /// cleared, and its status updated. On error `self` is still the session to play.
    ///
    /// # Errors
    /// - [`GuessError::GameOver`] if the session is already won or lost
    /// - any validation error from [`evaluate`]
    pub fn submit(&self, raw_guess: &str, dictionary: &Dictionary) -> Result<Submission, GuessError> {
        if self.is_over() {
            return Err(GuessError::GameOver);
        }

        let (guess, feedback) = evaluate(&self.target, raw_guess, dictionary)?;

        let mut next = self.clone();
        next.pending.clear();
        next.rows.push(GuessRow {
            guess,
            feedback: feedback.clone(),
        });

        let attempts_used = next.rows.len();
        let outcome = if feedback.is_win() {
            next.status = SessionStatus::Won;
            Outcome::Win { attempts_used }
        } else if attempts_used >= MAX_ATTEMPTS {
            next.status = SessionStatus::Lost;
            Outcome::Loss {
                target: self.target.clone(),
            }
        } else {
            Outcome::Continue
        };

        debug!("attempt {attempts_used}/{MAX_ATTEMPTS}: {feedback} -> {outcome:?}");

        Ok(Submission {
            feedback,
            outcome,
            session: next,
        })
    }
}
