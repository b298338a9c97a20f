#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use expense_tracker::{config::TrackerConfig, domain::NewExpense, Tracker};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a fresh data directory that outlives the calling test.
pub fn temp_data_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Tracker backed by JSON files in an isolated directory.
pub fn setup_tracker() -> (Tracker, PathBuf) {
    let dir = temp_data_dir();
    let tracker = Tracker::open(TrackerConfig::in_dir(&dir)).expect("open tracker");
    (tracker, dir)
}

pub fn add(tracker: &Tracker, amount: f64, category: &str, description: &str) -> String {
    tracker
        .add_expense(NewExpense::new(amount, category, description))
        .expect("add expense")
        .id
}
