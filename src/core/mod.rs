//! Core domain types for the guessing game
//!
//! Words, feedback scoring, keyboard aggregation and the game session value.
//! Everything here is pure and testable without a clock or a store.

mod dictionary;
mod evaluator;
mod feedback;
mod keyboard;
mod session;
mod word;

pub use dictionary::{Dictionary, DictionaryError, Entry};
pub use evaluator::evaluate;
pub use feedback::{Feedback, GuessError, Verdict};
pub use keyboard::{KEYBOARD_ROWS, KeyboardState, LetterState};
pub use session::{GameSession, GuessRow, MAX_ATTEMPTS, Outcome, SessionStatus, Submission};
pub use word::{MAX_WORD_LEN, Word, WordError};
