//! Main game interface
//!
//! Composes word selection, guess evaluation and stats persistence for one mode.
//! Frontends only talk to [`Game`].

use super::{Mode, ModeStats};
use crate::core::{Dictionary, GameSession, GuessError, Outcome, Submission, Word};
use crate::selector::{
    Clock, ReferenceZone, SystemClock, format_countdown, select_daily_word, select_random_word,
};
use crate::stats::{
    DailyStats, KeyValueStore, StorageError, UnlimitedStats, load_stats, save_stats,
};
use chrono::{Duration, NaiveDate};
use log::{error, info};

/// How a new game starts
#[derive(Debug, Clone)]
pub enum Start {
    /// A fresh session to play
    Play(GameSession),
    /// Today's daily puzzle is already recorded
    AlreadyPlayed {
        until_next_word: Duration,
        last_guesses: Vec<String>,
    },
}

impl Start {
    /// Player-facing notice for [`Start::AlreadyPlayed`]
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::Play(_) => None,
            Self::AlreadyPlayed {
                until_next_word,
                last_guesses,
            } => {
                let mut notice = format!(
                    "You've already played today!\nNext word in: {}",
                    format_countdown(*until_next_word)
                );
                if !last_guesses.is_empty() {
                    notice.push_str("\n\nYour guesses:\n");
                    notice.push_str(&last_guesses.join("\n"));
                }
                Some(notice)
            }
        }
    }
}

/// Game coordinator for one mode
///
/// Generic over the stats store and the clock so tests can run against an
/// in-memory store and a frozen instant.
pub struct Game<S: KeyValueStore, C: Clock = SystemClock> {
    mode: Mode,
    dictionary: Dictionary,
    store: S,
    clock: C,
    zone: ReferenceZone,
}

impl<S: KeyValueStore, C: Clock> Game<S, C> {
    pub fn new(
        mode: Mode,
        dictionary: Dictionary,
        store: S,
        clock: C,
        zone: ReferenceZone,
    ) -> Self {
        Self {
            mode,
            dictionary,
            store,
            clock,
            zone,
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Current date in the reference zone
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.zone.date_at(self.clock.now())
    }

    /// Daily word for `date`
    #[must_use]
    pub fn daily_word(&self, date: NaiveDate) -> &Word {
        select_daily_word(date, &self.dictionary)
    }

    /// Random word for unlimited play
    #[must_use]
    pub fn random_word(&self) -> &Word {
        select_random_word(&self.dictionary)
    }

    /// Time left until the daily word changes
    #[must_use]
    pub fn time_until_next_word(&self) -> Duration {
        self.zone.time_until_next_day(self.clock.now())
    }

    /// Load this mode's stats, defaults if missing or corrupt
    #[must_use]
    pub fn load_stats(&self) -> ModeStats {
        match self.mode {
            Mode::Daily => ModeStats::Daily(load_stats::<DailyStats>(&self.store)),
            Mode::Unlimited => ModeStats::Unlimited(load_stats::<UnlimitedStats>(&self.store)),
        }
    }

    /// Store a stats record under its mode's key
    ///
    /// # Errors
    /// Returns [`StorageError`] if the record cannot be written.
    pub fn save_stats(&mut self, stats: &ModeStats) -> Result<(), StorageError> {
        match stats {
            ModeStats::Daily(s) => save_stats(&mut self.store, s),
            ModeStats::Unlimited(s) => save_stats(&mut self.store, s),
        }
    }

    /// Start a game
    ///
    /// Daily mode refuses a second game on the same reference day. Unlimited
    /// mode deals a random word and clears the previous game's rows.
    pub fn start(&mut self) -> Start {
        match self.mode {
            Mode::Daily => {
                let today = self.today();
                let stats = load_stats::<DailyStats>(&self.store);
                if stats.has_played(today) {
                    info!("daily puzzle for {today} already played");
                    return Start::AlreadyPlayed {
                        until_next_word: self.time_until_next_word(),
                        last_guesses: stats.last_guesses,
                    };
                }
                Start::Play(GameSession::new(self.daily_word(today).clone()).dealt_on(today))
            }
            Mode::Unlimited => {
                let stats = load_stats::<UnlimitedStats>(&self.store).begin_game();
                self.persist(&ModeStats::Unlimited(stats));
                Start::Play(GameSession::new(self.random_word().clone()))
            }
        }
    }

    /// Submit a whole guess row
    ///
    /// When the guess ends the game, the result is recorded and saved before
    /// returning.
    ///
    /// # Errors
    /// Any [`GuessError`]; the passed session is still the one to play.
    pub fn submit_guess(
        &mut self,
        session: &GameSession,
        raw_guess: &str,
    ) -> Result<Submission, GuessError> {
        let submission = session.submit(raw_guess, &self.dictionary)?;
        self.record(&submission);
        Ok(submission)
    }

    /// Submit the letters typed into the open row
    ///
    /// # Errors
    /// See [`Game::submit_guess`].
    pub fn submit_pending(&mut self, session: &GameSession) -> Result<Submission, GuessError> {
        self.submit_guess(session, session.pending())
    }

    fn record(&mut self, submission: &Submission) {
        let won = match &submission.outcome {
            Outcome::Continue => return,
            Outcome::Win { .. } => true,
            Outcome::Loss { .. } => false,
        };
        let session = &submission.session;
        let rows = session.rendered_rows();

        let stats = match self.load_stats() {
            ModeStats::Daily(stats) => {
                // A game finished past midnight still counts for the day it was dealt
                let date = session.date().unwrap_or_else(|| self.today());
                ModeStats::Daily(stats.record_result(won, session.rows().len(), date, rows))
            }
            ModeStats::Unlimited(stats) => ModeStats::Unlimited(stats.record_result(won, rows)),
        };

        info!(
            "{} game over: {} in {} guesses",
            self.mode,
            if won { "won" } else { "lost" },
            session.rows().len()
        );
        self.persist(&stats);
    }

    /// Save, logging instead of failing: play must go on without storage
    fn persist(&mut self, stats: &ModeStats) {
        if let Err(e) = self.save_stats(stats) {
            error!("failed to save {} stats: {e}", self.mode);
        }
    }
}
