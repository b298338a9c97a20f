//! Aggregations recomputed from a freshly loaded ledger.

use std::collections::BTreeMap;

use crate::core::services::{CategoryService, ExpenseService};
use crate::domain::{
    CategoryRegistry, CategoryTotal, CategoryUsage, Dashboard, Expense, MonthlyTotal, Report,
    Stats,
};

/// Pure reporting helpers; no persisted aggregate state.
pub struct SummaryService;

impl SummaryService {
    pub fn total(expenses: &[Expense]) -> f64 {
        expenses.iter().map(|expense| expense.amount).sum()
    }

    /// Mean amount rounded to cents; zero for an empty ledger.
    pub fn average(expenses: &[Expense]) -> f64 {
        if expenses.is_empty() {
            return 0.0;
        }
        round_cents(Self::total(expenses) / expenses.len() as f64)
    }

    pub fn stats(expenses: &[Expense], registry: &CategoryRegistry) -> Stats {
        Stats {
            total_amount: Self::total(expenses),
            total_count: expenses.len(),
            categories_count: registry.len(),
            average_expense: Self::average(expenses),
        }
    }

    /// Totals for every registered category plus any unregistered category still
    /// referenced by an expense, largest total first.
    pub fn category_totals(expenses: &[Expense], registry: &CategoryRegistry) -> Vec<CategoryTotal> {
        let mut names: Vec<&str> = registry.iter().collect();
        for expense in expenses {
            if !names.contains(&expense.category.as_str()) {
                names.push(&expense.category);
            }
        }

        let mut totals: Vec<CategoryTotal> = names
            .into_iter()
            .map(|name| {
                let (total, count) = expenses
                    .iter()
                    .filter(|expense| expense.category == name)
                    .fold((0.0, 0), |(sum, count), expense| {
                        (sum + expense.amount, count + 1)
                    });
                CategoryTotal {
                    name: name.to_string(),
                    total,
                    count,
                }
            })
            .collect();
        totals.sort_by(|a, b| b.total.total_cmp(&a.total));
        totals
    }

    /// Totals per `YYYY-MM`, newest month first.
    pub fn monthly_totals(expenses: &[Expense]) -> Vec<MonthlyTotal> {
        let mut buckets: BTreeMap<String, (f64, usize)> = BTreeMap::new();
        for expense in expenses {
            let entry = buckets.entry(expense.month_key()).or_insert((0.0, 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }
        buckets
            .into_iter()
            .rev()
            .map(|(month, (total, count))| MonthlyTotal { month, total, count })
            .collect()
    }

    pub fn report(expenses: &[Expense], registry: &CategoryRegistry) -> Report {
        Report {
            total: Self::total(expenses),
            count: expenses.len(),
            average: Self::average(expenses),
            categories: Self::category_totals(expenses, registry),
            months: Self::monthly_totals(expenses),
        }
    }

    pub fn dashboard(
        expenses: &[Expense],
        registry: &CategoryRegistry,
        recent_limit: usize,
    ) -> Dashboard {
        Dashboard {
            total: Self::total(expenses),
            recent: ExpenseService::recent(expenses, recent_limit),
            categories: registry.names().to_vec(),
        }
    }

    /// Registry entries paired with how many expenses use them, followed by
    /// categories that expenses reference but the registry does not list.
    pub fn category_usage(expenses: &[Expense], registry: &CategoryRegistry) -> Vec<CategoryUsage> {
        let mut usage: Vec<CategoryUsage> = registry
            .iter()
            .map(|name| CategoryUsage {
                name: name.to_string(),
                count: CategoryService::usage(expenses, name),
            })
            .collect();
        for expense in expenses {
            if registry.contains(&expense.category) {
                continue;
            }
            match usage.iter_mut().find(|entry| entry.name == expense.category) {
                Some(entry) => entry.count += 1,
                None => usage.push(CategoryUsage {
                    name: expense.category.clone(),
                    count: 1,
                }),
            }
        }
        usage
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
