use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use expense_tracker::core::services::SummaryService;
use expense_tracker::domain::{CategoryRegistry, Expense, DEFAULT_CATEGORIES};
use expense_tracker::storage::json_backend::{load_collection, save_collection};
use tempfile::tempdir;

fn build_sample_ledger(count: usize) -> Vec<Expense> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();

    (0..count)
        .map(|idx| Expense {
            id: format!("{}", 1_704_096_000_000_000_u64 + idx as u64),
            amount: 5.0 + (idx % 100) as f64,
            category: DEFAULT_CATEGORIES[idx % DEFAULT_CATEGORIES.len()].to_string(),
            description: format!("Expense {idx}"),
            date: start + Duration::days((idx % 365) as i64),
            created_at: created + Duration::seconds(idx as i64),
            updated_at: None,
        })
        .collect()
}

fn bench_store_io(c: &mut Criterion) {
    let expenses = build_sample_ledger(black_box(10_000));
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("expenses.json");

    c.bench_function("expenses_save_10k", |b| {
        b.iter(|| {
            save_collection(expenses.as_slice(), &path).expect("save expenses");
        })
    });

    save_collection(expenses.as_slice(), &path).expect("seed");

    c.bench_function("expenses_load_10k", |b| {
        b.iter(|| {
            let loaded: Option<Vec<Expense>> = load_collection(&path).expect("load expenses");
            black_box(loaded);
        })
    });
}

fn bench_reports(c: &mut Criterion) {
    let expenses = build_sample_ledger(10_000);
    let registry = CategoryRegistry::defaults();

    c.bench_function("report_10k", |b| {
        b.iter(|| black_box(SummaryService::report(black_box(&expenses), &registry)))
    });

    c.bench_function("sorted_listing_10k", |b| {
        b.iter(|| {
            black_box(expense_tracker::core::services::ExpenseService::sorted(
                black_box(&expenses),
            ))
        })
    });
}

criterion_group!(benches, bench_store_io, bench_reports);
criterion_main!(benches);
