//! Integration tests for quick entry mode

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{daily_note_cmd, serve_once, today, SAMPLE_WEATHER};

#[test]
fn test_quick_entry_prints_without_saving() {
    let temp = TempDir::new().unwrap();
    let url = serve_once("200 OK", SAMPLE_WEATHER);

    daily_note_cmd()
        .current_dir(temp.path())
        .env("DAILY_NOTE_WEATHER_URL", &url)
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("---\n"))
        .stdout(predicate::str::contains(format!(
            "title: Quick Entry - {}\n",
            today()
        )))
        .stdout(predicate::str::contains("mood: 3\nmood_desc: Okay\n"))
        .stdout(predicate::str::contains("energy: 3\nenergy_desc: Okay\n"))
        .stdout(predicate::str::contains("location_title: Somewhere\n"))
        .stdout(predicate::str::contains("city: Leeds\n"))
        .stdout(predicate::str::contains("Diary entry created").not());

    assert!(!temp.path().join("Daily_Notes").exists());
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_quick_entry_keeps_supplied_title() {
    let temp = TempDir::new().unwrap();
    let url = serve_once("200 OK", SAMPLE_WEATHER);

    daily_note_cmd()
        .current_dir(temp.path())
        .env("DAILY_NOTE_WEATHER_URL", &url)
        .args(["--quick", "Train home"])
        .assert()
        .success()
        .stdout(predicate::str::contains("title: Train home\n"))
        .stdout(predicate::str::contains("# Train home\n"));

    assert!(!temp.path().join("Daily_Notes").exists());
}

#[test]
fn test_quick_entry_leaves_existing_entry_alone() {
    let temp = TempDir::new().unwrap();
    let notes_dir = temp.path().join("Daily_Notes");
    fs::create_dir(&notes_dir).unwrap();
    let path = notes_dir.join(format!("{}.md", today()));
    fs::write(&path, "untouched").unwrap();

    let url = serve_once("200 OK", SAMPLE_WEATHER);

    daily_note_cmd()
        .current_dir(temp.path())
        .env("DAILY_NOTE_WEATHER_URL", &url)
        .arg("--quick")
        .assert()
        .success()
        .stdout(predicate::str::contains("overwrite").not());

    assert_eq!(fs::read_to_string(&path).unwrap(), "untouched");
}
