use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::TrackerConfig,
    core::errors::{Result, TrackerError},
    domain::{CategoryRegistry, Expense},
};

use super::StorageBackend;

const TMP_SUFFIX: &str = "tmp";

/// Pretty-printed JSON files on local disk, one per collection.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    expenses_path: PathBuf,
    categories_path: PathBuf,
}

impl JsonStorage {
    pub fn new(expenses_path: PathBuf, categories_path: PathBuf) -> Self {
        Self {
            expenses_path,
            categories_path,
        }
    }

    pub fn from_config(config: &TrackerConfig) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)?;
        Ok(Self::new(config.expenses_path(), config.categories_path()))
    }

    pub fn expenses_path(&self) -> &Path {
        &self.expenses_path
    }

    pub fn categories_path(&self) -> &Path {
        &self.categories_path
    }
}

impl StorageBackend for JsonStorage {
    fn load_expenses(&self) -> Result<Vec<Expense>> {
        Ok(load_collection(&self.expenses_path)?.unwrap_or_default())
    }

    fn save_expenses(&self, expenses: &[Expense]) -> Result<()> {
        save_collection(expenses, &self.expenses_path)
    }

    fn load_categories(&self) -> Result<CategoryRegistry> {
        Ok(load_collection(&self.categories_path)?.unwrap_or_default())
    }

    fn save_categories(&self, categories: &CategoryRegistry) -> Result<()> {
        save_collection(categories, &self.categories_path)
    }

    fn categories_exist(&self) -> bool {
        self.categories_path.exists()
    }
}

/// Reads and parses `path`; `Ok(None)` when the file does not exist.
pub fn load_collection<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no file yet, using empty collection");
        return Ok(None);
    }
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data)
        .map(Some)
        .map_err(|err| TrackerError::InvalidFormat {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
}

/// Serializes the whole collection and swaps it into place via a temporary file.
pub fn save_collection<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(value)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    tracing::debug!(path = %path.display(), bytes = json.len(), "collection saved");
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let config = TrackerConfig::in_dir(temp.path());
        let storage = JsonStorage::from_config(&config).expect("json storage");
        (storage, temp)
    }

    fn sample_expense() -> Expense {
        Expense {
            id: "1700000000000001".into(),
            amount: 42.0,
            category: "Logement".into(),
            description: "Rent share".into(),
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            created_at: Utc.with_ymd_and_hms(2024, 2, 1, 9, 30, 0).unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn missing_files_load_as_empty() {
        let (storage, _guard) = storage_with_temp_dir();
        assert!(storage.load_expenses().unwrap().is_empty());
        assert!(storage.load_categories().unwrap().is_empty());
        assert!(!storage.categories_exist());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (storage, _guard) = storage_with_temp_dir();
        let expenses = vec![sample_expense()];
        storage.save_expenses(&expenses).expect("save");
        assert_eq!(storage.load_expenses().expect("load"), expenses);
    }

    #[test]
    fn files_are_pretty_printed() {
        let (storage, _guard) = storage_with_temp_dir();
        storage
            .save_categories(&CategoryRegistry::from_names(["A", "B"]))
            .unwrap();
        let raw = fs::read_to_string(storage.categories_path()).unwrap();
        assert_eq!(raw, "[\n  \"A\",\n  \"B\"\n]");
    }

    #[test]
    fn corrupt_file_is_reported() {
        let (storage, _guard) = storage_with_temp_dir();
        fs::write(storage.expenses_path(), "[{ broken").unwrap();
        let err = storage.load_expenses().unwrap_err();
        assert!(
            matches!(err, TrackerError::InvalidFormat { ref path, .. } if path == storage.expenses_path()),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn temp_file_does_not_linger() {
        let (storage, guard) = storage_with_temp_dir();
        storage.save_expenses(&[sample_expense()]).unwrap();
        let leftovers: Vec<_> = fs::read_dir(guard.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
