//! Integration tests for the journal store and the operations built on it.
//!
//! These tests use a file-backed database in a temp directory so that data is
//! read back through a fresh handle, the way a second CLI invocation sees it.

use mindcaps::db::aggregate::GroupBy;
use mindcaps::db::lock::StoreLock;
use mindcaps::db::moods::{count_moods, list_moods};
use mindcaps::db::Database;
use mindcaps::errors::{AppError, LockError};
use mindcaps::journal_core::{MoodSet, SleepQuality};
use mindcaps::ops::{self, FixedChoice, MoodInput};
use mindcaps::sentiment::Sentiment;
use std::collections::BTreeMap;
use tempfile::TempDir;

fn open(temp: &TempDir) -> Database {
    let db = Database::open(&temp.path().join("mindcaps.db")).expect("open database");
    db.initialize_schema().expect("initialize schema");
    db
}

fn save(db: &Database, mood: &str, note: &str) -> i64 {
    let input = MoodInput {
        mood: Some(mood.to_string()),
        intensity: 5,
        note: note.to_string(),
    };
    ops::save_mood_entry(db, &MoodSet::default(), &input, &mut FixedChoice(0))
        .expect("save entry")
        .id
}

#[test]
fn test_entries_survive_reopen() {
    let temp = TempDir::new().expect("create temp dir");
    {
        let db = open(&temp);
        save(&db, "Happy", "I feel happy and calm");
        save(&db, "Sad", "I am sad and tired");
        ops::add_gratitude(&db, "a long walk").unwrap();
        ops::log_sleep(&db, 6.5, SleepQuality::Fair).unwrap();
    }

    let db = open(&temp);
    let conn = db.get_conn().unwrap();
    let moods = list_moods(&conn).unwrap();
    assert_eq!(moods.len(), 2);
    assert_eq!(moods[0].sentiment, Sentiment::Positive);
    assert_eq!(moods[1].sentiment, Sentiment::Negative);
    assert!(moods[1].id > moods[0].id);
    assert!(moods[1].recorded_at >= moods[0].recorded_at);
}

#[test]
fn test_rejected_entry_leaves_store_unchanged() {
    let temp = TempDir::new().unwrap();
    let db = open(&temp);
    save(&db, "Calm", "fine");
    let before = count_moods(&db.get_conn().unwrap()).unwrap();

    let input = MoodInput {
        mood: Some("Calm".to_string()),
        intensity: 5,
        note: "  ".to_string(),
    };
    let err = ops::save_mood_entry(&db, &MoodSet::default(), &input, &mut FixedChoice(0)).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(count_moods(&db.get_conn().unwrap()).unwrap(), before);
}

#[test]
fn test_newest_entry_is_listed_last() {
    let temp = TempDir::new().unwrap();
    let db = open(&temp);
    save(&db, "Calm", "one");
    let newest = save(&db, "Excited", "two");

    let moods = list_moods(&db.get_conn().unwrap()).unwrap();
    let last = moods.last().unwrap();
    assert_eq!(last.id, newest);
    assert!(moods.iter().all(|m| m.id <= newest));
}

#[test]
fn test_distribution_by_every_field() {
    let temp = TempDir::new().unwrap();
    let db = open(&temp);
    for _ in 0..3 {
        save(&db, "Happy", "happy");
    }
    for _ in 0..2 {
        save(&db, "Sad", "sad");
    }
    ops::log_sleep(&db, 8.0, SleepQuality::Great).unwrap();

    let expected: BTreeMap<String, usize> =
        [("Happy".to_string(), 3), ("Sad".to_string(), 2)].into_iter().collect();
    assert_eq!(ops::distribution(&db, GroupBy::Mood).unwrap(), expected);

    let expected: BTreeMap<String, usize> =
        [("negative".to_string(), 2), ("positive".to_string(), 3)].into_iter().collect();
    assert_eq!(ops::distribution(&db, GroupBy::Sentiment).unwrap(), expected);

    let by_intensity = ops::distribution(&db, GroupBy::Intensity).unwrap();
    assert_eq!(by_intensity.get("5"), Some(&5));

    let by_quality = ops::distribution(&db, GroupBy::SleepQuality).unwrap();
    assert_eq!(by_quality.get("Great"), Some(&1));
    assert_eq!(by_quality.values().sum::<usize>(), 1);
}

#[test]
fn test_second_lock_holder_is_refused() {
    let temp = TempDir::new().unwrap();
    let first = StoreLock::acquire(temp.path()).expect("first lock");

    match StoreLock::acquire(temp.path()) {
        Err(AppError::Lock(LockError::StoreBusy { .. })) => {}
        other => panic!("Expected StoreBusy, got {:?}", other.map(|_| ())),
    }

    drop(first);
    StoreLock::acquire(temp.path()).expect("lock after release");
}
