pub mod json_backend;

use crate::{
    core::errors::Result,
    domain::{CategoryRegistry, Expense},
};

/// Abstraction over the persistence of the ledger and the category registry.
///
/// Every call goes to the backing medium; implementations keep no cache.
pub trait StorageBackend: Send + Sync {
    /// Returns an empty ledger when nothing has been written yet.
    fn load_expenses(&self) -> Result<Vec<Expense>>;
    fn save_expenses(&self, expenses: &[Expense]) -> Result<()>;

    /// Returns an empty registry when nothing has been written yet.
    fn load_categories(&self) -> Result<CategoryRegistry>;
    fn save_categories(&self, categories: &CategoryRegistry) -> Result<()>;
    fn categories_exist(&self) -> bool;
}

pub use json_backend::JsonStorage;
