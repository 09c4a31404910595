//! Brainrodle
//!
//! A word-guessing game with one shared daily word and an unlimited practice mode.
//! The daily word is derived from the calendar date in a fixed reference zone, so
//! every player gets the same puzzle on the same day.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use brainrodle::core::{Dictionary, GameSession, Outcome, Word};
//!
//! let dictionary =
//!     Dictionary::from_words(["RATIO", "SIGMA"].map(|w| Word::new(w).unwrap())).unwrap();
//! let session = GameSession::new(Word::new("RATIO").unwrap());
//!
//! let submission = session.submit("sigma", &dictionary).unwrap();
//! println!("{}", submission.feedback.render_row(&Word::new("SIGMA").unwrap()));
//! assert_eq!(submission.outcome, Outcome::Continue);
//! ```

// Core domain types
pub mod core;

// Daily and random word selection
pub mod selector;

// Persistent statistics
pub mod stats;

// Game engine tying the pieces together
pub mod game;

// Configuration file
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
