//! Aggregated views computed from the ledger on every request.

use serde::Serialize;

use super::expense::Expense;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Stats {
    pub total_amount: f64,
    pub total_count: usize,
    pub categories_count: usize,
    pub average_expense: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryTotal {
    pub name: String,
    pub total: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlyTotal {
    pub month: String,
    pub total: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Report {
    pub total: f64,
    pub count: usize,
    pub average: f64,
    pub categories: Vec<CategoryTotal>,
    pub months: Vec<MonthlyTotal>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Dashboard {
    pub total: f64,
    pub recent: Vec<Expense>,
    pub categories: Vec<String>,
}

/// Category name with the number of expenses filed under it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryUsage {
    pub name: String,
    pub count: usize,
}
