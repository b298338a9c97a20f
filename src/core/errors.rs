use std::{path::PathBuf, result::Result as StdResult};

use thiserror::Error;

/// Unified error type for the domain, service and storage layers.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Expense not found: {0}")]
    NotFound(String),
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
    #[error("Category already exists: {0}")]
    CategoryExists(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid format in {}: {message}", path.display())]
    InvalidFormat { path: PathBuf, message: String },
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = StdResult<T, TrackerError>;

impl TrackerError {
    /// Whether the error was caused by the caller rather than by the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            TrackerError::NotFound(_)
                | TrackerError::CategoryNotFound(_)
                | TrackerError::CategoryExists(_)
                | TrackerError::InvalidInput(_)
        )
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::StorageError(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        TrackerError::StorageError(err.to_string())
    }
}
