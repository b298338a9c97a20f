//! Business rules that keep the category registry and the ledger consistent.

use crate::core::errors::TrackerError;
use crate::core::services::ServiceResult;
use crate::domain::{CategoryRegistry, Expense};

/// Outcome of the first step of filing an expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryResolution {
    pub name: String,
    pub created: bool,
}

/// Outcome of [`CategoryService::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRemoval {
    pub relabeled: usize,
    pub fallback_created: bool,
}

/// Stateless operations over an in-memory registry and ledger.
///
/// Callers own loading and saving; nothing here touches the disk.
pub struct CategoryService;

impl CategoryService {
    /// Registers `name` if it is new. Returns whether the registry grew.
    pub fn add(registry: &mut CategoryRegistry, name: &str) -> ServiceResult<bool> {
        let name = Self::validate_name(name)?;
        Ok(registry.insert(name.to_string()))
    }

    /// Maps user input onto a registered category, registering it when unseen.
    pub fn resolve_or_create(
        registry: &mut CategoryRegistry,
        name: &str,
    ) -> ServiceResult<CategoryResolution> {
        let name = Self::validate_name(name)?;
        let created = registry.insert(name.to_string());
        Ok(CategoryResolution {
            name: name.to_string(),
            created,
        })
    }

    /// Renames `old` in place and re-labels every expense filed under it.
    ///
    /// Returns the number of re-labeled expenses. Leaves both collections
    /// untouched on error.
    pub fn rename(
        registry: &mut CategoryRegistry,
        expenses: &mut [Expense],
        old: &str,
        new: &str,
    ) -> ServiceResult<usize> {
        if !registry.contains(old) {
            return Err(TrackerError::CategoryNotFound(old.to_string()));
        }
        let new = Self::validate_name(new)?;
        if registry.contains(new) {
            return Err(TrackerError::CategoryExists(new.to_string()));
        }

        registry.replace(old, new.to_string());
        Ok(Self::relabel(expenses, old, new))
    }

    /// Removes `name`, moving its expenses to `fallback` first.
    ///
    /// A name still used by expenses but missing from the registry is
    /// accepted too, so orphaned expenses can be moved to the fallback.
    pub fn remove(
        registry: &mut CategoryRegistry,
        expenses: &mut [Expense],
        name: &str,
        fallback: &str,
    ) -> ServiceResult<CategoryRemoval> {
        let referenced = Self::usage(expenses, name);
        if referenced == 0 && !registry.contains(name) {
            return Err(TrackerError::CategoryNotFound(name.to_string()));
        }
        if referenced > 0 && name == fallback {
            return Err(TrackerError::InvalidInput(format!(
                "`{fallback}` still holds {referenced} expense(s) and cannot be deleted"
            )));
        }

        let mut fallback_created = false;
        let mut relabeled = 0;
        if referenced > 0 {
            relabeled = Self::relabel(expenses, name, fallback);
            fallback_created = registry.insert(fallback.to_string());
        }
        registry.remove(name);

        Ok(CategoryRemoval {
            relabeled,
            fallback_created,
        })
    }

    /// Number of expenses filed under `name`.
    pub fn usage(expenses: &[Expense], name: &str) -> usize {
        expenses
            .iter()
            .filter(|expense| expense.category == name)
            .count()
    }

    fn relabel(expenses: &mut [Expense], from: &str, to: &str) -> usize {
        let mut count = 0;
        for expense in expenses.iter_mut().filter(|expense| expense.category == from) {
            expense.category = to.to_string();
            count += 1;
        }
        count
    }

    fn validate_name(candidate: &str) -> ServiceResult<&str> {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            Err(TrackerError::InvalidInput(
                "category name must not be empty".into(),
            ))
        } else {
            Ok(trimmed)
        }
    }
}
