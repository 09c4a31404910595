//! On-screen keyboard state derived from guess feedback

use super::{Feedback, Verdict, Word};
use rustc_hash::FxHashMap;

/// Best known state of a single letter key
///
/// Ordered by precedence: `Unknown < Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterState {
    #[default]
    Unknown,
    Absent,
    Present,
    Correct,
}

impl From<Verdict> for LetterState {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Absent => Self::Absent,
            Verdict::Present => Self::Present,
            Verdict::Correct => Self::Correct,
        }
    }
}

/// Keyboard rows in QWERTY order, as the frontends draw them
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Aggregated per-letter state across all guesses of a session
///
/// A key only ever moves up the precedence order; a later Absent or Present
/// never downgrades a key that is already Correct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: FxHashMap<u8, LetterState>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the keyboard
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &verdict) in guess.letters().iter().zip(feedback.verdicts()) {
            let slot = self.keys.entry(letter).or_default();
            *slot = (*slot).max(LetterState::from(verdict));
        }
    }

    /// Current state of a letter key (case-insensitive)
    #[must_use]
    pub fn state(&self, letter: char) -> LetterState {
        let key = letter.to_ascii_uppercase() as u8;
        self.keys.get(&key).copied().unwrap_or_default()
    }

    /// Build the keyboard from a full guess history
    pub fn from_history<'a>(history: impl IntoIterator<Item = (&'a Word, &'a Feedback)>) -> Self {
        let mut keyboard = Self::new();
        for (guess, feedback) in history {
            keyboard.apply(guess, feedback);
        }
        keyboard
    }
}
