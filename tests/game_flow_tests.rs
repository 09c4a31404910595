//! Integration tests for full games against on-disk stats

use brainrodle::core::{Dictionary, MAX_ATTEMPTS, Outcome, Word};
use brainrodle::game::{Game, Mode, Start};
use brainrodle::selector::{FixedClock, ReferenceZone, select_daily_word};
use brainrodle::stats::{DailyStats, FileStore, load_stats, save_stats};
use brainrodle::wordlists::loader::load_from_file;
use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
use std::fs;
use tempfile::TempDir;

const WORDS: [&str; 7] = ["RATIO", "SIGMA", "RIZZY", "SUSSY", "YIKES", "BRUHH", "SLAYZ"];

fn dictionary() -> Dictionary {
    Dictionary::from_words(WORDS.map(|w| Word::new(w).unwrap())).unwrap()
}

/// Noon UTC on `date`, well inside the same Warsaw calendar day
fn noon(date: NaiveDate) -> FixedClock {
    FixedClock(Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0).unwrap()))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn daily_game(dir: &TempDir, today: NaiveDate) -> Game<FileStore, FixedClock> {
    Game::new(
        Mode::Daily,
        dictionary(),
        FileStore::new(dir.path()),
        noon(today),
        ReferenceZone::CentralEuropean,
    )
}

fn start(game: &mut Game<FileStore, FixedClock>) -> brainrodle::core::GameSession {
    match game.start() {
        Start::Play(session) => session,
        Start::AlreadyPlayed { .. } => panic!("expected a fresh game"),
    }
}

/// First date from 2025-01-01 whose daily word is `word`
fn date_with_word(word: &str) -> NaiveDate {
    let dict = dictionary();
    (0..3650)
        .filter_map(|offset| date(2025, 1, 1).checked_add_days(Days::new(offset)))
        .find(|&d| select_daily_word(d, &dict).text() == word)
        .expect("word is scheduled within ten years")
}

#[test]
fn test_ratio_first_guess_win() {
    let dir = TempDir::new().unwrap();
    let today = date_with_word("RATIO");
    let mut game = daily_game(&dir, today);
    let session = start(&mut game);
    assert_eq!(session.target().text(), "RATIO");

    let submission = game.submit_guess(&session, "ratio").unwrap();
    assert_eq!(submission.outcome, Outcome::Win { attempts_used: 1 });

    let stats: DailyStats = load_stats(&FileStore::new(dir.path()));
    assert_eq!(stats.games_played, 1);
    assert_eq!(stats.games_won, 1);
    assert_eq!(stats.guess_distribution[&1], 1);
    assert_eq!(stats.last_played_date, Some(today));
    assert_eq!(stats.last_guesses, vec!["R🟩A🟩T🟩I🟩O🟩".to_string()]);
}

#[test]
fn test_ratio_six_misses_lose() {
    let dir = TempDir::new().unwrap();
    let today = date_with_word("RATIO");
    let mut game = daily_game(&dir, today);
    let mut session = start(&mut game);

    let misses = ["SIGMA", "RIZZY", "SUSSY", "YIKES", "BRUHH", "SLAYZ"];
    for (i, guess) in misses.iter().enumerate() {
        let submission = game.submit_guess(&session, guess).unwrap();
        if i + 1 < MAX_ATTEMPTS {
            assert_eq!(submission.outcome, Outcome::Continue);
        } else {
            assert_eq!(
                submission.outcome,
                Outcome::Loss {
                    target: Word::new("RATIO").unwrap()
                }
            );
        }
        session = submission.session;
    }
    assert_eq!(session.revealed_target().unwrap().text(), "RATIO");

    let stats: DailyStats = load_stats(&FileStore::new(dir.path()));
    assert_eq!(stats.games_played, 1);
    assert_eq!(stats.games_won, 0);
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.last_guesses.len(), MAX_ATTEMPTS);

    // Same day: no second attempt
    assert!(matches!(game.start(), Start::AlreadyPlayed { .. }));
}

fn win_today_after(previous: DailyStats, today: NaiveDate) -> DailyStats {
    let dir = TempDir::new().unwrap();
    save_stats(&mut FileStore::new(dir.path()), &previous).unwrap();

    let mut game = daily_game(&dir, today);
    let session = start(&mut game);
    let target = session.target().text().to_string();
    game.submit_guess(&session, &target).unwrap();

    load_stats(&FileStore::new(dir.path()))
}

#[test]
fn test_streak_continues_from_yesterday() {
    let today = date(2025, 5, 10);
    let previous = DailyStats {
        games_played: 3,
        games_won: 3,
        current_streak: 3,
        max_streak: 3,
        last_played_date: Some(date(2025, 5, 9)),
        ..DailyStats::default()
    };

    let stats = win_today_after(previous, today);
    assert_eq!(stats.current_streak, 4);
    assert_eq!(stats.max_streak, 4);
    assert_eq!(stats.games_played, 4);
}

#[test]
fn test_streak_resets_after_gap() {
    let today = date(2025, 5, 10);
    let previous = DailyStats {
        games_played: 3,
        games_won: 3,
        current_streak: 3,
        max_streak: 3,
        last_played_date: Some(date(2025, 5, 7)),
        last_guesses: vec!["S🟩".to_string()],
        ..DailyStats::default()
    };

    let stats = win_today_after(previous, today);
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.max_streak, 3);
    assert_eq!(stats.last_guesses.len(), 1);
    assert_ne!(stats.last_guesses[0], "S🟩");
}

#[test]
fn test_daily_word_flips_at_reference_midnight() {
    let dir = TempDir::new().unwrap();
    let zone = ReferenceZone::CentralEuropean;

    // 22:30 UTC in summer is already 00:30 the next day in Warsaw
    let late = DateTime::parse_from_rfc3339("2025-07-14T22:30:00Z")
        .unwrap()
        .with_timezone(&Utc);
    let game = Game::new(
        Mode::Daily,
        dictionary(),
        FileStore::new(dir.path()),
        FixedClock(late),
        zone,
    );
    assert_eq!(game.today(), date(2025, 7, 15));
    assert_eq!(game.time_until_next_word().num_minutes(), 23 * 60 + 30);
}

#[test]
fn test_custom_word_list_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(
        &path,
        "# custom list\nRATIO|Getting outnumbered in replies\n\nsigma\nnot a word!\nstraße\n",
    )
    .unwrap();

    let dict = load_from_file(&path).unwrap();
    assert_eq!(dict.len(), 2);
    let ratio = Word::new("RATIO").unwrap();
    assert_eq!(
        dict.description(&ratio),
        Some("Getting outnumbered in replies")
    );

    let mut game = Game::new(
        Mode::Unlimited,
        dict,
        FileStore::new(dir.path()),
        noon(date(2025, 1, 1)),
        ReferenceZone::CentralEuropean,
    );
    let session = start(&mut game);
    assert!(["RATIO", "SIGMA"].contains(&session.target().text()));
}
