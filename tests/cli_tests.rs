use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// Helper function to set up a test Command instance against a private data dir
fn set_up_command(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mindcaps").unwrap();
    cmd.env_clear()
        .env("HOME", "/tmp")
        .env("MINDCAPS_DIR", dir)
        .env("RUST_LOG", "warn");
    cmd
}

fn log_mood(dir: &Path, mood: &str, intensity: &str, note: &str) {
    set_up_command(dir)
        .args(["log", "--mood", mood, "--intensity", intensity, "--note", note])
        .assert()
        .success();
}

#[test]
fn test_cli_no_args_shows_usage() {
    let temp = TempDir::new().unwrap();
    set_up_command(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_log_prints_feedback() {
    let temp = TempDir::new().unwrap();
    set_up_command(temp.path())
        .args(["log", "--mood", "Happy", "--intensity", "8", "--note", "I feel happy and calm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Journal saved! Sentiment: positive"));

    assert!(temp.path().join("mindcaps.db").exists());
}

#[test]
fn test_cli_log_empty_note_fails_once() {
    let temp = TempDir::new().unwrap();
    set_up_command(temp.path())
        .args(["log", "--mood", "Happy", "--note", "   "])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:").count(1));

    set_up_command(temp.path())
        .args(["list", "moods"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet"));
}

#[test]
fn test_cli_log_rejects_unknown_mood_and_bad_intensity() {
    let temp = TempDir::new().unwrap();
    set_up_command(temp.path())
        .args(["log", "--mood", "Bored", "--note", "meh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bored"));

    set_up_command(temp.path())
        .args(["log", "--mood", "Calm", "--intensity", "11", "--note", "fine"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_cli_custom_moods_from_env() {
    let temp = TempDir::new().unwrap();
    set_up_command(temp.path())
        .env("MINDCAPS_MOODS", "Focused,Tired")
        .args(["log", "--mood", "focused", "--note", "deep work"])
        .assert()
        .success();

    set_up_command(temp.path())
        .env("MINDCAPS_MOODS", "Focused,Tired")
        .args(["log", "--mood", "Happy", "--note", "deep work"])
        .assert()
        .failure();
}

#[test]
fn test_cli_list_shows_newest_last_with_limit() {
    let temp = TempDir::new().unwrap();
    log_mood(temp.path(), "Happy", "5", "first note");
    log_mood(temp.path(), "Sad", "4", "second note");
    log_mood(temp.path(), "Calm", "6", "third note");

    let output = set_up_command(temp.path())
        .args(["list", "moods"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let first = stdout.find("first note").unwrap();
    let third = stdout.find("third note").unwrap();
    assert!(first < third);

    set_up_command(temp.path())
        .args(["list", "moods", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("third note"))
        .stdout(predicate::str::contains("first note").not());
}

#[test]
fn test_cli_gratitude_and_sleep() {
    let temp = TempDir::new().unwrap();
    set_up_command(temp.path())
        .args(["gratitude", "morning coffee"])
        .assert()
        .success();
    set_up_command(temp.path())
        .args(["sleep", "--hours", "7.5", "--quality", "great"])
        .assert()
        .success();
    set_up_command(temp.path())
        .args(["sleep", "--hours", "30"])
        .assert()
        .failure();

    set_up_command(temp.path())
        .args(["list", "gratitude"])
        .assert()
        .success()
        .stdout(predicate::str::contains("morning coffee"));
    set_up_command(temp.path())
        .args(["list", "sleep"])
        .assert()
        .success()
        .stdout(predicate::str::contains("7.5h (Great)"));
}

#[test]
fn test_cli_analytics_bar_and_pie() {
    let temp = TempDir::new().unwrap();
    for _ in 0..3 {
        log_mood(temp.path(), "Happy", "7", "good");
    }
    for _ in 0..2 {
        log_mood(temp.path(), "Sad", "3", "sad");
    }

    set_up_command(temp.path())
        .args(["analytics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Happy |"))
        .stdout(predicate::str::contains("Sad   |"));

    set_up_command(temp.path())
        .args(["analytics", "--chart", "pie"])
        .assert()
        .success()
        .stdout(predicate::str::contains("60.0% (3)"))
        .stdout(predicate::str::contains("40.0% (2)"));
}

#[test]
fn test_cli_analytics_empty_store() {
    let temp = TempDir::new().unwrap();
    set_up_command(temp.path())
        .args(["analytics", "--by", "sentiment"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet"));
}

#[test]
fn test_cli_export_to_path() {
    let temp = TempDir::new().unwrap();
    log_mood(temp.path(), "Happy", "8", "happy day");
    log_mood(temp.path(), "Stressed", "6", "so stressed");
    set_up_command(temp.path())
        .args(["gratitude", "friends"])
        .assert()
        .success();

    let out = temp.path().join("backup.json");
    set_up_command(temp.path())
        .arg("export")
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 entries"));

    let document: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let records = document.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["sentiment"], "positive");
    assert_eq!(records[1]["sentiment"], "negative");
    assert_eq!(records[2]["type"], "gratitude");
}

#[test]
fn test_cli_export_prompt_blank_cancels() {
    let temp = TempDir::new().unwrap();
    log_mood(temp.path(), "Happy", "8", "happy day");

    set_up_command(temp.path())
        .arg("export")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("mindcaps_backup_"))
        .stdout(predicate::str::contains("Export cancelled."));

    let json_files = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().map_or(false, |ext| ext == "json"))
        .count();
    assert_eq!(json_files, 0);
}

#[test]
fn test_cli_export_prompt_answer_is_used() {
    let temp = TempDir::new().unwrap();
    log_mood(temp.path(), "Calm", "5", "quiet");
    let out = temp.path().join("answer.json");

    set_up_command(temp.path())
        .arg("export")
        .write_stdin(format!("{}\n", out.display()))
        .assert()
        .success();
    assert!(out.exists());
}

#[test]
fn test_cli_summary() {
    let temp = TempDir::new().unwrap();
    log_mood(temp.path(), "Happy", "9", "great");
    set_up_command(temp.path())
        .args(["sleep", "--hours", "8"])
        .assert()
        .success();

    set_up_command(temp.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Streak: 1 day"))
        .stdout(predicate::str::contains("Average sleep: 8.0h"));
}

#[test]
fn test_cli_dir_flag_overrides_env() {
    let env_dir = TempDir::new().unwrap();
    let flag_dir = TempDir::new().unwrap();

    set_up_command(env_dir.path())
        .arg("--dir")
        .arg(flag_dir.path())
        .args(["gratitude", "sunsets"])
        .assert()
        .success();

    assert!(flag_dir.path().join("mindcaps.db").exists());
    assert!(!env_dir.path().join("mindcaps.db").exists());
}

#[test]
fn test_cli_short_breathing_session() {
    let temp = TempDir::new().unwrap();
    set_up_command(temp.path())
        .args(["breathe", "--cycles", "1", "--dwell", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/1] Inhale..."))
        .stdout(predicate::str::contains("[1/1] Exhale..."))
        .stdout(predicate::str::contains("Well done."));

    // Exercises do not create the store
    assert!(!temp.path().join("mindcaps.db").exists());
}

#[test]
fn test_cli_zero_minute_meditation() {
    let temp = TempDir::new().unwrap();
    set_up_command(temp.path())
        .args(["meditate", "--minutes", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Meditation session complete!"));
}

#[test]
fn test_cli_json_logging() {
    let temp = TempDir::new().unwrap();
    set_up_command(temp.path())
        .args(["--log-format", "json", "--log-level", "info", "gratitude", "rain"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\":\"INFO\""));
}
