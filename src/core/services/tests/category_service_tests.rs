use super::{date, expense};
use crate::core::errors::TrackerError;
use crate::core::services::{CategoryRemoval, CategoryService};
use crate::domain::{CategoryRegistry, FALLBACK_CATEGORY};

#[test]
fn add_grows_registry_once() {
    let mut registry = CategoryRegistry::defaults();

    assert!(CategoryService::add(&mut registry, "Cadeaux").unwrap());
    assert!(!CategoryService::add(&mut registry, "Cadeaux").unwrap());

    assert_eq!(registry.len(), 9);
}

#[test]
fn add_trims_and_rejects_blank_names() {
    let mut registry = CategoryRegistry::new();
    CategoryService::add(&mut registry, "  Sport ").unwrap();
    assert!(registry.contains("Sport"));

    let err = CategoryService::add(&mut registry, "   ").unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput(_)));
}

#[test]
fn resolve_or_create_reports_creation() {
    let mut registry = CategoryRegistry::defaults();

    let known = CategoryService::resolve_or_create(&mut registry, "Transport").unwrap();
    assert!(!known.created);

    let fresh = CategoryService::resolve_or_create(&mut registry, "Voyages").unwrap();
    assert!(fresh.created);
    assert_eq!(fresh.name, "Voyages");
    assert_eq!(registry.len(), 9);
}

#[test]
fn rename_relabels_matching_expenses() {
    let mut registry = CategoryRegistry::from_names(["Transport", "Loisirs"]);
    let mut expenses = vec![
        expense("1", 12.5, "Transport", date(2024, 1, 1)),
        expense("2", 7.0, "Transport", date(2024, 1, 2)),
        expense("3", 30.0, "Loisirs", date(2024, 1, 3)),
    ];

    let relabeled =
        CategoryService::rename(&mut registry, &mut expenses, "Transport", "Mobilité").unwrap();

    assert_eq!(relabeled, 2);
    assert_eq!(registry.position("Mobilité"), Some(0));
    assert!(!registry.contains("Transport"));
    assert_eq!(expenses[0].category, "Mobilité");
    assert_eq!(expenses[1].category, "Mobilité");
    assert_eq!(expenses[2].category, "Loisirs");
}

#[test]
fn rename_to_existing_name_changes_nothing() {
    let mut registry = CategoryRegistry::from_names(["Transport", "Loisirs"]);
    let mut expenses = vec![expense("1", 12.5, "Transport", date(2024, 1, 1))];
    let registry_before = registry.clone();
    let expenses_before = expenses.clone();

    let err = CategoryService::rename(&mut registry, &mut expenses, "Transport", "Loisirs")
        .unwrap_err();

    assert!(matches!(err, TrackerError::CategoryExists(ref name) if name == "Loisirs"));
    assert_eq!(registry, registry_before);
    assert_eq!(expenses, expenses_before);
}

#[test]
fn rename_rejects_blank_and_unknown_names() {
    let mut registry = CategoryRegistry::from_names(["Transport"]);
    let mut expenses = vec![expense("1", 3.0, "Transport", date(2024, 1, 1))];

    let blank = CategoryService::rename(&mut registry, &mut expenses, "Transport", "  ");
    assert!(matches!(blank, Err(TrackerError::InvalidInput(_))));

    let unknown = CategoryService::rename(&mut registry, &mut expenses, "Nope", "Other");
    assert!(matches!(unknown, Err(TrackerError::CategoryNotFound(_))));
}

#[test]
fn remove_moves_expenses_to_fallback() {
    let mut registry = CategoryRegistry::defaults();
    let mut expenses = vec![
        expense("1", 12.5, "Transport", date(2024, 1, 1)),
        expense("2", 7.0, "Transport", date(2024, 1, 2)),
    ];

    let removal =
        CategoryService::remove(&mut registry, &mut expenses, "Transport", FALLBACK_CATEGORY)
            .unwrap();

    assert_eq!(
        removal,
        CategoryRemoval {
            relabeled: 2,
            fallback_created: false
        }
    );
    assert!(expenses.iter().all(|e| e.category == FALLBACK_CATEGORY));
    assert!(!registry.contains("Transport"));
    assert_eq!(
        registry.iter().filter(|name| *name == FALLBACK_CATEGORY).count(),
        1
    );
}

#[test]
fn remove_creates_missing_fallback_only_when_needed() {
    let mut registry = CategoryRegistry::from_names(["Transport", "Loisirs"]);
    let mut expenses = vec![expense("1", 5.0, "Transport", date(2024, 1, 1))];

    let unused =
        CategoryService::remove(&mut registry, &mut expenses, "Loisirs", FALLBACK_CATEGORY)
            .unwrap();
    assert!(!unused.fallback_created);
    assert!(!registry.contains(FALLBACK_CATEGORY));

    let used =
        CategoryService::remove(&mut registry, &mut expenses, "Transport", FALLBACK_CATEGORY)
            .unwrap();
    assert!(used.fallback_created);
    assert_eq!(registry.names(), &[FALLBACK_CATEGORY.to_string()]);
}

#[test]
fn remove_refuses_referenced_fallback() {
    let mut registry = CategoryRegistry::defaults();
    let mut expenses = vec![expense("1", 5.0, FALLBACK_CATEGORY, date(2024, 1, 1))];

    let err = CategoryService::remove(
        &mut registry,
        &mut expenses,
        FALLBACK_CATEGORY,
        FALLBACK_CATEGORY,
    )
    .unwrap_err();

    assert!(matches!(err, TrackerError::InvalidInput(_)));
    assert!(registry.contains(FALLBACK_CATEGORY));
}

#[test]
fn remove_unknown_category_is_not_found() {
    let mut registry = CategoryRegistry::defaults();
    let err = CategoryService::remove(&mut registry, &mut [], "Ghost", FALLBACK_CATEGORY)
        .unwrap_err();
    assert!(matches!(err, TrackerError::CategoryNotFound(ref name) if name == "Ghost"));
}

#[test]
fn remove_relabels_expenses_of_unlisted_category() {
    let mut registry = CategoryRegistry::from_names(["Alimentation", FALLBACK_CATEGORY]);
    let mut expenses = vec![expense("1", 40.0, "Cadeaux", date(2024, 2, 1))];

    let removal =
        CategoryService::remove(&mut registry, &mut expenses, "Cadeaux", FALLBACK_CATEGORY)
            .unwrap();

    assert_eq!(removal.relabeled, 1);
    assert!(!removal.fallback_created);
    assert_eq!(expenses[0].category, FALLBACK_CATEGORY);
    assert_eq!(registry.len(), 2);
}
