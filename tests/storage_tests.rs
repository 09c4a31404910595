//! Integration tests for stats persistence

use brainrodle::stats::{
    DailyStats, FileStore, KeyValueStore, UnlimitedStats, load_stats, save_stats,
};
use chrono::NaiveDate;
use std::fs;
use tempfile::TempDir;

fn setup_store() -> (TempDir, FileStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileStore::new(temp_dir.path().join("data"));
    (temp_dir, store)
}

#[test]
fn test_file_store_roundtrip() {
    let (_temp_dir, mut store) = setup_store();

    let stats = DailyStats::default().record_result(
        true,
        3,
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        vec!["R🟩A🟩T🟩I🟩O🟩".to_string()],
    );
    save_stats(&mut store, &stats).unwrap();

    let loaded: DailyStats = load_stats(&store);
    assert_eq!(loaded, stats);
    assert_eq!(loaded.guess_distribution[&3], 1);
}

#[test]
fn test_file_store_writes_readable_json() {
    let (_temp_dir, mut store) = setup_store();
    save_stats(&mut store, &UnlimitedStats::default().record_result(true, vec![])).unwrap();

    let path = store.dir().join("brainrodle_unlimited_stats.json");
    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"gamesPlayed\": 1"), "unexpected JSON: {raw}");
    assert!(raw.contains("\"bestStreak\": 1"));

    // No temporary file is left behind
    let leftovers: Vec<_> = fs::read_dir(store.dir())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn test_missing_directory_loads_defaults() {
    let (_temp_dir, store) = setup_store();
    assert!(store.get("brainrodle_stats").unwrap().is_none());

    let loaded: DailyStats = load_stats(&store);
    assert_eq!(loaded, DailyStats::default());
}

#[test]
fn test_corrupt_record_loads_defaults() {
    let (_temp_dir, mut store) = setup_store();
    store.set("brainrodle_stats", "{ not json").unwrap();

    let loaded: DailyStats = load_stats(&store);
    assert_eq!(loaded, DailyStats::default());
}

#[test]
fn test_partial_record_fills_defaults() {
    let (_temp_dir, mut store) = setup_store();
    store
        .set(
            "brainrodle_stats",
            r#"{"gamesPlayed": 4, "gamesWon": 9, "currentStreak": 2, "lastPlayedDate": "2025-04-30"}"#,
        )
        .unwrap();

    let loaded: DailyStats = load_stats(&store);
    assert_eq!(loaded.games_played, 4);
    // Clamped back into range
    assert_eq!(loaded.games_won, 4);
    assert_eq!(loaded.max_streak, 2);
    assert_eq!(
        loaded.last_played_date,
        Some(NaiveDate::from_ymd_opt(2025, 4, 30).unwrap())
    );
    assert_eq!(loaded.guess_distribution.len(), 6);
}

#[test]
fn test_modes_use_distinct_keys() {
    let (_temp_dir, mut store) = setup_store();

    let daily = DailyStats {
        games_played: 7,
        games_won: 7,
        ..DailyStats::default()
    };
    let unlimited = UnlimitedStats {
        games_played: 2,
        ..UnlimitedStats::default()
    };
    save_stats(&mut store, &daily).unwrap();
    save_stats(&mut store, &unlimited).unwrap();

    assert_eq!(load_stats::<DailyStats>(&store).games_played, 7);
    assert_eq!(load_stats::<UnlimitedStats>(&store).games_played, 2);
    assert!(store.dir().join("brainrodle_stats.json").exists());
    assert!(store.dir().join("brainrodle_unlimited_stats.json").exists());
}
