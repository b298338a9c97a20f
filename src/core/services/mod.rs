pub mod category_service;
pub mod expense_service;
pub mod summary_service;

pub use category_service::{CategoryRemoval, CategoryResolution, CategoryService};
pub use expense_service::ExpenseService;
pub use summary_service::SummaryService;

use crate::core::errors::TrackerError;

pub type ServiceResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests;
