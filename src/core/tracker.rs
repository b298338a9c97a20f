use chrono::{Local, Utc};

use crate::config::TrackerConfig;
use crate::core::errors::{Result, TrackerError};
use crate::core::services::{CategoryRemoval, CategoryService, ExpenseService, SummaryService};
use crate::domain::{
    CategoryRegistry, CategoryUsage, Dashboard, Expense, ExpensePatch, NewExpense, Report, Stats,
};
use crate::storage::{JsonStorage, StorageBackend};

/// Facade shared by both front ends.
///
/// Holds no ledger state: every call loads what it needs from storage,
/// applies a service operation and writes the touched collections back.
pub struct Tracker {
    storage: Box<dyn StorageBackend>,
    config: TrackerConfig,
}

impl Tracker {
    pub fn new(storage: Box<dyn StorageBackend>, config: TrackerConfig) -> Self {
        Self { storage, config }
    }

    /// Opens JSON storage at the paths named by `config`.
    pub fn open(config: TrackerConfig) -> Result<Self> {
        config.validate()?;
        let storage = JsonStorage::from_config(&config)?;
        tracing::debug!(
            expenses = %config.expenses_path().display(),
            categories = %config.categories_path().display(),
            "tracker opened"
        );
        Ok(Self::new(Box::new(storage), config))
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn storage(&self) -> &dyn StorageBackend {
        self.storage.as_ref()
    }

    /// Seeds the registry file with the configured defaults when it does not exist.
    pub fn ensure_default(&self) -> Result<CategoryRegistry> {
        if self.storage.categories_exist() {
            return self.storage.load_categories();
        }
        let registry = CategoryRegistry::from_names(self.config.default_categories.iter().cloned());
        self.storage.save_categories(&registry)?;
        tracing::info!(count = registry.len(), "seeded default categories");
        Ok(registry)
    }

    pub fn categories(&self) -> Result<CategoryRegistry> {
        self.ensure_default()
    }

    /// Ledger in insertion order.
    pub fn expenses(&self) -> Result<Vec<Expense>> {
        self.storage.load_expenses()
    }

    /// Ledger sorted newest first.
    pub fn list(&self) -> Result<Vec<Expense>> {
        Ok(ExpenseService::sorted(&self.storage.load_expenses()?))
    }

    pub fn recent(&self, limit: usize) -> Result<Vec<Expense>> {
        Ok(ExpenseService::recent(&self.storage.load_expenses()?, limit))
    }

    pub fn expense(&self, id: &str) -> Result<Expense> {
        let expenses = self.storage.load_expenses()?;
        ExpenseService::find(&expenses, id).cloned()
    }

    /// Resolves (or registers) the category, then appends the expense.
    pub fn add_expense(&self, input: NewExpense) -> Result<Expense> {
        ExpenseService::validate_amount(input.amount)?;
        let mut registry = self.ensure_default()?;
        let mut expenses = self.storage.load_expenses()?;

        let resolution = CategoryService::resolve_or_create(&mut registry, &input.category)?;
        let input = NewExpense {
            category: resolution.name,
            ..input
        };
        let expense = ExpenseService::add(
            &mut expenses,
            input,
            Local::now().date_naive(),
            Utc::now(),
        )?;

        // Ledger first: a failed ledger write must not leave an unused category behind.
        self.storage.save_expenses(&expenses)?;
        if resolution.created {
            self.storage.save_categories(&registry)?;
            tracing::info!(category = %expense.category, "category registered on first use");
        }
        tracing::info!(id = %expense.id, amount = expense.amount, "expense added");
        Ok(expense)
    }

    pub fn edit_expense(&self, id: &str, patch: ExpensePatch) -> Result<Expense> {
        let mut expenses = self.storage.load_expenses()?;
        ExpenseService::find(&expenses, id)?;

        let mut registry_changed = None;
        if let Some(category) = patch.category_value() {
            let mut registry = self.ensure_default()?;
            if CategoryService::resolve_or_create(&mut registry, category)?.created {
                registry_changed = Some(registry);
            }
        }

        let edited = ExpenseService::edit(&mut expenses, id, &patch, Utc::now())?;
        self.storage.save_expenses(&expenses)?;
        if let Some(registry) = registry_changed {
            self.storage.save_categories(&registry)?;
        }
        tracing::info!(id = %edited.id, "expense updated");
        Ok(edited)
    }

    pub fn delete_expense(&self, id: &str) -> Result<Expense> {
        let mut expenses = self.storage.load_expenses()?;
        let removed = ExpenseService::delete(&mut expenses, id)?;
        self.storage.save_expenses(&expenses)?;
        tracing::info!(id = %removed.id, "expense deleted");
        Ok(removed)
    }

    /// Returns `true` when the registry grew.
    pub fn add_category(&self, name: &str) -> Result<bool> {
        let mut registry = self.ensure_default()?;
        let created = CategoryService::add(&mut registry, name)?;
        if created {
            self.storage.save_categories(&registry)?;
            tracing::info!(category = name.trim(), "category added");
        }
        Ok(created)
    }

    /// Returns the number of re-labeled expenses.
    pub fn rename_category(&self, old: &str, new: &str) -> Result<usize> {
        let mut registry = self.ensure_default()?;
        let mut expenses = self.storage.load_expenses()?;
        let relabeled = CategoryService::rename(&mut registry, &mut expenses, old, new)
            .map_err(|err| self.with_suggestion(err, &registry))?;

        self.storage.save_categories(&registry)?;
        self.storage.save_expenses(&expenses)?;
        tracing::info!(old, new = new.trim(), relabeled, "category renamed");
        Ok(relabeled)
    }

    pub fn delete_category(&self, name: &str) -> Result<CategoryRemoval> {
        let mut registry = self.ensure_default()?;
        let mut expenses = self.storage.load_expenses()?;
        let removal = CategoryService::remove(
            &mut registry,
            &mut expenses,
            name,
            &self.config.fallback_category,
        )
        .map_err(|err| self.with_suggestion(err, &registry))?;

        self.storage.save_categories(&registry)?;
        if removal.relabeled > 0 {
            self.storage.save_expenses(&expenses)?;
        }
        tracing::info!(
            category = name,
            relabeled = removal.relabeled,
            fallback = %self.config.fallback_category,
            "category deleted"
        );
        Ok(removal)
    }

    pub fn category_usage(&self) -> Result<Vec<CategoryUsage>> {
        let registry = self.ensure_default()?;
        let expenses = self.storage.load_expenses()?;
        Ok(SummaryService::category_usage(&expenses, &registry))
    }

    pub fn report(&self) -> Result<Report> {
        let registry = self.ensure_default()?;
        let expenses = self.storage.load_expenses()?;
        Ok(SummaryService::report(&expenses, &registry))
    }

    pub fn stats(&self) -> Result<Stats> {
        let registry = self.ensure_default()?;
        let expenses = self.storage.load_expenses()?;
        Ok(SummaryService::stats(&expenses, &registry))
    }

    pub fn dashboard(&self) -> Result<Dashboard> {
        let registry = self.ensure_default()?;
        let expenses = self.storage.load_expenses()?;
        Ok(SummaryService::dashboard(
            &expenses,
            &registry,
            self.config.recent_limit,
        ))
    }

    fn with_suggestion(&self, err: TrackerError, registry: &CategoryRegistry) -> TrackerError {
        match err {
            TrackerError::CategoryNotFound(name) => match registry.suggest(&name) {
                Some(hint) => {
                    TrackerError::CategoryNotFound(format!("{name} (did you mean `{hint}`?)"))
                }
                None => TrackerError::CategoryNotFound(name),
            },
            other => other,
        }
    }
}
