mod common;

use std::fs;

use assert_fs::prelude::*;
use expense_tracker::{
    config::TrackerConfig,
    domain::{CategoryRegistry, NewExpense},
    storage::{JsonStorage, StorageBackend},
    Tracker, TrackerError,
};

#[test]
fn missing_files_load_as_empty_collections() {
    let dir = assert_fs::TempDir::new().unwrap();
    let storage = JsonStorage::from_config(&TrackerConfig::in_dir(dir.path())).unwrap();

    assert!(storage.load_expenses().unwrap().is_empty());
    assert!(storage.load_categories().unwrap().is_empty());
    assert!(!storage.categories_exist());
    dir.child("expenses.json").assert(predicates::path::missing());
}

#[test]
fn ledger_survives_reopening() {
    let (tracker, dir) = common::setup_tracker();
    common::add(&tracker, 12.5, "Transport", "Metro");
    common::add(&tracker, 30.0, "Loisirs", "Cinema");
    let before = tracker.expenses().unwrap();
    drop(tracker);

    let reopened = Tracker::open(TrackerConfig::in_dir(&dir)).unwrap();
    assert_eq!(reopened.expenses().unwrap(), before);
}

#[test]
fn files_are_pretty_printed_json_arrays() {
    let (tracker, dir) = common::setup_tracker();
    common::add(&tracker, 9.99, "Santé", "Pharmacie");

    let expenses = fs::read_to_string(dir.join("expenses.json")).unwrap();
    assert!(expenses.starts_with("[\n"));
    assert!(expenses.contains("\"category\": \"Santé\""));
    assert!(!expenses.contains("updated_at"));

    let categories: Vec<String> =
        serde_json::from_str(&fs::read_to_string(dir.join("categories.json")).unwrap()).unwrap();
    assert_eq!(categories.len(), 8);
    assert_eq!(categories[0], "Alimentation");
}

#[test]
fn no_temporary_file_is_left_behind() {
    let (tracker, dir) = common::setup_tracker();
    common::add(&tracker, 1.0, "Autres", "");
    assert!(!dir.join("expenses.json.tmp").exists());
    assert!(!dir.join("categories.json.tmp").exists());
}

#[test]
fn failed_save_preserves_original_file() {
    let (tracker, dir) = common::setup_tracker();
    common::add(&tracker, 5.0, "Transport", "Bus");
    let original = fs::read_to_string(dir.join("expenses.json")).unwrap();

    // A directory at the temp path makes the write fail before the rename.
    fs::create_dir_all(dir.join("expenses.json.tmp")).unwrap();
    let result = tracker.add_expense(NewExpense::new(6.0, "Nouveau", "Bus"));
    assert!(result.is_err());

    let current = fs::read_to_string(dir.join("expenses.json")).unwrap();
    assert_eq!(current, original);
    assert!(!tracker.categories().unwrap().contains("Nouveau"));
}

#[test]
fn corrupt_ledger_is_reported_with_its_path() {
    let (tracker, dir) = common::setup_tracker();
    fs::write(dir.join("expenses.json"), "{ not json").unwrap();

    match tracker.expenses() {
        Err(TrackerError::InvalidFormat { path, .. }) => {
            assert_eq!(path, dir.join("expenses.json"));
        }
        other => panic!("expected InvalidFormat, got {other:?}"),
    }
    // Nothing was overwritten.
    assert_eq!(
        fs::read_to_string(dir.join("expenses.json")).unwrap(),
        "{ not json"
    );
}

#[test]
fn registry_round_trips_in_order() {
    let dir = assert_fs::TempDir::new().unwrap();
    let storage = JsonStorage::from_config(&TrackerConfig::in_dir(dir.path())).unwrap();
    let registry = CategoryRegistry::from_names(["Zèbre", "Alpha", "Milieu"]);

    storage.save_categories(&registry).unwrap();

    assert!(storage.categories_exist());
    assert_eq!(storage.load_categories().unwrap(), registry);
}
