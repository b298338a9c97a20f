//! Plain data types shared by the services, the store and both front ends.

pub mod category;
pub mod expense;
pub mod summary;

pub use category::{CategoryRegistry, DEFAULT_CATEGORIES, FALLBACK_CATEGORY};
pub use expense::{generate_id, Expense, ExpensePatch, NewExpense};
pub use summary::{CategoryTotal, CategoryUsage, Dashboard, MonthlyTotal, Report, Stats};
