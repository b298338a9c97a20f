//! Full-ledger dumps used by the export menu and the `/export/*` routes.

use std::{fs, path::Path};

use crate::core::errors::{Result, TrackerError};
use crate::domain::Expense;

pub const CSV_HEADER: [&str; 4] = ["Date", "Amount", "Category", "Description"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }

    pub fn render(self, expenses: &[Expense]) -> Result<String> {
        match self {
            ExportFormat::Csv => to_csv(expenses),
            ExportFormat::Json => to_json(expenses),
        }
    }
}

pub fn to_csv(expenses: &[Expense]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for expense in expenses {
        writer.write_record([
            expense.date.to_string(),
            format!("{:.2}", expense.amount),
            expense.category.clone(),
            expense.description.clone(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| TrackerError::StorageError(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| TrackerError::StorageError(err.to_string()))
}

pub fn to_json(expenses: &[Expense]) -> Result<String> {
    Ok(serde_json::to_string_pretty(expenses)?)
}

/// Writes `expenses` into `dir` as `expenses_export.<ext>` and returns the path.
pub fn write_export(
    expenses: &[Expense],
    format: ExportFormat,
    dir: &Path,
) -> Result<std::path::PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("expenses_export.{}", format.extension()));
    fs::write(&path, format.render(expenses)?)?;
    tracing::info!(path = %path.display(), count = expenses.len(), "ledger exported");
    Ok(path)
}
