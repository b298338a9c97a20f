//! Ledger mutations and queries.

use chrono::{DateTime, NaiveDate, Utc};

use crate::core::errors::TrackerError;
use crate::core::services::ServiceResult;
use crate::domain::{generate_id, Expense, ExpensePatch, NewExpense};

/// Validated operations for [`Expense`] records.
///
/// Category names must already be resolved through
/// [`crate::core::services::CategoryService::resolve_or_create`].
pub struct ExpenseService;

impl ExpenseService {
    /// Appends a new record dated `input.date` or `today`.
    pub fn add(
        expenses: &mut Vec<Expense>,
        input: NewExpense,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> ServiceResult<Expense> {
        Self::validate_amount(input.amount)?;
        let category = input.category.trim();
        if category.is_empty() {
            return Err(TrackerError::InvalidInput(
                "category must not be empty".into(),
            ));
        }

        let expense = Expense {
            id: Self::unique_id(expenses, now),
            amount: input.amount,
            category: category.to_string(),
            description: input.description.trim().to_string(),
            date: input.date.unwrap_or(today),
            created_at: now,
            updated_at: None,
        };
        expenses.push(expense.clone());
        Ok(expense)
    }

    /// Applies the non-empty fields of `patch` and stamps `updated_at`.
    pub fn edit(
        expenses: &mut [Expense],
        id: &str,
        patch: &ExpensePatch,
        now: DateTime<Utc>,
    ) -> ServiceResult<Expense> {
        if let Some(amount) = patch.amount {
            Self::validate_amount(amount)?;
        }
        let expense = expenses
            .iter_mut()
            .find(|expense| expense.id == id)
            .ok_or_else(|| TrackerError::NotFound(id.to_string()))?;

        if let Some(amount) = patch.amount {
            expense.amount = amount;
        }
        if let Some(category) = patch.category_value() {
            expense.category = category.to_string();
        }
        if let Some(description) = patch.description_value() {
            expense.description = description.to_string();
        }
        if let Some(date) = patch.date {
            expense.date = date;
        }
        expense.touch(now);
        Ok(expense.clone())
    }

    pub fn delete(expenses: &mut Vec<Expense>, id: &str) -> ServiceResult<Expense> {
        let index = expenses
            .iter()
            .position(|expense| expense.id == id)
            .ok_or_else(|| TrackerError::NotFound(id.to_string()))?;
        Ok(expenses.remove(index))
    }

    pub fn find<'a>(expenses: &'a [Expense], id: &str) -> ServiceResult<&'a Expense> {
        expenses
            .iter()
            .find(|expense| expense.id == id)
            .ok_or_else(|| TrackerError::NotFound(id.to_string()))
    }

    /// Newest date first; same-day entries newest `created_at` first.
    pub fn sorted(expenses: &[Expense]) -> Vec<Expense> {
        let mut sorted = expenses.to_vec();
        sorted.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        sorted
    }

    pub fn recent(expenses: &[Expense], limit: usize) -> Vec<Expense> {
        let mut sorted = Self::sorted(expenses);
        sorted.truncate(limit);
        sorted
    }

    pub fn validate_amount(amount: f64) -> ServiceResult<()> {
        if amount.is_finite() && amount > 0.0 {
            Ok(())
        } else {
            Err(TrackerError::InvalidInput(format!(
                "amount must be a positive number, got {amount}"
            )))
        }
    }

    /// Parses user-typed amounts, accepting a decimal comma.
    pub fn parse_amount(raw: &str) -> ServiceResult<f64> {
        let normalized = raw.trim().replace(',', ".");
        let amount: f64 = normalized.parse().map_err(|_| {
            TrackerError::InvalidInput(format!("`{}` is not a valid amount", raw.trim()))
        })?;
        Self::validate_amount(amount)?;
        Ok(amount)
    }

    pub fn parse_date(raw: &str) -> ServiceResult<NaiveDate> {
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
            TrackerError::InvalidInput(format!(
                "`{}` is not a date in YYYY-MM-DD form",
                raw.trim()
            ))
        })
    }

    fn unique_id(expenses: &[Expense], now: DateTime<Utc>) -> String {
        let base = generate_id(now);
        let taken = |candidate: &str| expenses.iter().any(|expense| expense.id == candidate);
        if !taken(&base) {
            return base;
        }
        let mut suffix = 1;
        loop {
            let candidate = format!("{base}-{suffix}");
            if !taken(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }
}
