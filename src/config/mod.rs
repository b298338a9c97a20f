//! Runtime configuration: where the JSON files live, the seed categories and the
//! web bind address.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, TrackerError};
use crate::domain::{DEFAULT_CATEGORIES, FALLBACK_CATEGORY};

pub const HOME_ENV: &str = "EXPENSE_TRACKER_HOME";
pub const HOST_ENV: &str = "EXPENSE_TRACKER_HOST";
pub const PORT_ENV: &str = "EXPENSE_TRACKER_PORT";
pub const CONFIG_FILE_NAME: &str = "expense_tracker.json";

/// Settings handed to the store at construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackerConfig {
    #[serde(default = "TrackerConfig::default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "TrackerConfig::default_expenses_file")]
    pub expenses_file: String,
    #[serde(default = "TrackerConfig::default_categories_file")]
    pub categories_file: String,
    #[serde(default = "TrackerConfig::default_categories")]
    pub default_categories: Vec<String>,
    #[serde(default = "TrackerConfig::default_fallback_category")]
    pub fallback_category: String,
    #[serde(default = "TrackerConfig::default_recent_limit")]
    pub recent_limit: usize,
    #[serde(default)]
    pub web: WebConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: Self::default_data_dir(),
            expenses_file: Self::default_expenses_file(),
            categories_file: Self::default_categories_file(),
            default_categories: Self::default_categories(),
            fallback_category: Self::default_fallback_category(),
            recent_limit: Self::default_recent_limit(),
            web: WebConfig::default(),
        }
    }
}

impl TrackerConfig {
    /// Configuration rooted at `dir`, everything else default.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: dir.into(),
            ..Self::default()
        }
    }

    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(".")
    }

    pub fn default_expenses_file() -> String {
        "expenses.json".into()
    }

    pub fn default_categories_file() -> String {
        "categories.json".into()
    }

    pub fn default_categories() -> Vec<String> {
        DEFAULT_CATEGORIES.iter().map(|name| name.to_string()).collect()
    }

    pub fn default_fallback_category() -> String {
        FALLBACK_CATEGORY.into()
    }

    pub fn default_recent_limit() -> usize {
        5
    }

    pub fn expenses_path(&self) -> PathBuf {
        self.data_dir.join(&self.expenses_file)
    }

    pub fn categories_path(&self) -> PathBuf {
        self.data_dir.join(&self.categories_file)
    }

    pub fn validate(&self) -> Result<()> {
        if self.fallback_category.trim().is_empty() {
            return Err(TrackerError::ConfigError(
                "fallback_category must not be empty".into(),
            ));
        }
        if self.expenses_file.trim().is_empty() || self.categories_file.trim().is_empty() {
            return Err(TrackerError::ConfigError(
                "file names must not be empty".into(),
            ));
        }
        if self.expenses_file == self.categories_file {
            return Err(TrackerError::ConfigError(
                "expenses and categories must use different files".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebConfig {
    #[serde(default = "WebConfig::default_host")]
    pub host: String,
    #[serde(default = "WebConfig::default_port")]
    pub port: u16,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl WebConfig {
    pub fn default_host() -> String {
        "127.0.0.1".into()
    }

    pub fn default_port() -> u16 {
        4567
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Locates and loads the optional configuration file.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base_dir: PathBuf,
    config_path: PathBuf,
}

impl ConfigManager {
    /// Uses `EXPENSE_TRACKER_HOME` when set, the current directory otherwise.
    pub fn new() -> Self {
        let base = env::var_os(HOME_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::with_base_dir(base)
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        let config_path = base.join(CONFIG_FILE_NAME);
        Self {
            base_dir: base,
            config_path,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Reads the config file if present and resolves `data_dir` against the base directory.
    pub fn load(&self) -> Result<TrackerConfig> {
        let mut config = if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            serde_json::from_str::<TrackerConfig>(&data)
                .map_err(|err| TrackerError::ConfigError(err.to_string()))?
        } else {
            TrackerConfig::default()
        };
        config.data_dir = resolve_data_dir(&self.base_dir, &config.data_dir);
        config.validate()?;
        tracing::debug!(
            data_dir = %config.data_dir.display(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Like [`ConfigManager::load`], with host/port environment overrides applied.
    pub fn load_with_env(&self) -> Result<TrackerConfig> {
        let mut config = self.load()?;
        if let Ok(host) = env::var(HOST_ENV) {
            if !host.trim().is_empty() {
                config.web.host = host.trim().to_string();
            }
        }
        if let Ok(port) = env::var(PORT_ENV) {
            config.web.port = port.trim().parse().map_err(|_| {
                TrackerError::ConfigError(format!("{PORT_ENV} must be a port number, got `{port}`"))
            })?;
        }
        Ok(config)
    }

    pub fn save(&self, config: &TrackerConfig) -> Result<()> {
        fs::create_dir_all(&self.base_dir)?;
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.config_path, json)?;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_data_dir(base: &Path, data_dir: &Path) -> PathBuf {
    if let Ok(stripped) = data_dir.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    if data_dir.is_absolute() {
        data_dir.to_path_buf()
    } else if data_dir == Path::new(".") {
        base.to_path_buf()
    } else {
        base.join(data_dir)
    }
}
