//! Guess feedback calculation and representation
//!
//! Feedback is one [`Verdict`] per letter of the guess:
//! - Absent (letter not in word, or all its occurrences already credited)
//! - Present (letter in word, wrong position)
//! - Correct (letter in correct position)

use super::Word;
use log::trace;
use std::fmt;
use thiserror::Error;

/// Per-letter classification of a guess
///
/// Ordered by precedence: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

impl Verdict {
    /// Glyph used in stored and shared guess rows
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }

    /// Inverse of [`Verdict::glyph`]
    #[must_use]
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '🟩' => Some(Self::Correct),
            '🟨' => Some(Self::Present),
            '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Reasons a submitted guess is rejected
///
/// All of them are recoverable: the session stays on the same row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Word must be {expected} letters!")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Word not in list!")]
    NotInDictionary(String),
    #[error("Invalid word: {0}")]
    InvalidWord(#[from] super::WordError),
    #[error("The game is already over")]
    GameOver,
}

/// Feedback for one guess against one target
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Verdict>);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Implements the exact duplicate-letter rules: a letter is credited at most as
    /// many times as it occurs in the target, and exact matches take priority.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches Correct and remove them from the pool
    /// 2. Second pass: Mark Present from the remaining pool, Absent once exhausted
    ///
    /// # Errors
    /// Returns [`GuessError::LengthMismatch`] if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use brainrodle::core::{Feedback, Verdict, Word};
    ///
    /// let target = Word::new("ratio").unwrap();
    /// let guess = Word::new("rizzy").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target).unwrap();
    ///
    /// assert_eq!(feedback.verdicts()[0], Verdict::Correct);
    /// assert_eq!(feedback.verdicts()[1], Verdict::Present);
    /// assert_eq!(feedback.to_emoji(), "🟩🟨⬛⬛⬛");
    /// ```
    pub fn calculate(guess: &Word, target: &Word) -> Result<Self, GuessError> {
        if guess.len() != target.len() {
            return Err(GuessError::LengthMismatch {
                expected: target.len(),
                actual: guess.len(),
            });
        }

        let mut result = vec![Verdict::Absent; target.len()];
        let mut matched = vec![false; target.len()];
        let mut target_available = target.char_counts();

        // First pass: exact position matches
        for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
            if g == t {
                result[i] = Verdict::Correct;
                matched[i] = true;
                if let Some(count) = target_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but letter still available
        for (i, &letter) in guess.letters().iter().enumerate() {
            if matched[i] {
                continue;
            }
            if let Some(count) = target_available.get_mut(&letter)
                && *count > 0
            {
                result[i] = Verdict::Present;
                *count -= 1;
            }
        }

        let feedback = Self(result);
        trace!("scored {guess} against {target}: {}", feedback.to_emoji());
        Ok(feedback)
    }

    /// Per-position verdicts
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.0
    }

    /// Check if every letter is Correct
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&v| v == Verdict::Correct)
    }

    /// Convert feedback to an emoji string like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.glyph()).collect()
    }

    /// Render a guess row as letter-then-glyph per tile, e.g. `R🟩A🟨T⬛`
    ///
    /// This is the shape stored in the stats record's last guesses.
    #[must_use]
    pub fn render_row(&self, guess: &Word) -> String {
        guess
            .text()
            .chars()
            .zip(&self.0)
            .flat_map(|(letter, verdict)| [letter, verdict.glyph()])
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
