use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::LedgerError;

const HOME_ENV: &str = "BUDGET_LEDGER_HOME";
const APP_DIR_NAME: &str = "BudgetApp";
const CONFIG_FILE: &str = "config.json";
const DATA_FILE: &str = "data.json";

/// Engine settings read from `config.json` in the application directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Overrides the budget document location. Relative paths resolve against
    /// the application directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    /// Tracing filter directive, e.g. `budget_ledger=debug`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Config {
    pub fn data_path(&self, base: &Path) -> PathBuf {
        match &self.data_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => base.join(path),
            None => base.join(DATA_FILE),
        }
    }
}

/// Resolves the per-user application directory and loads [`Config`] from it.
pub struct ConfigManager {
    base_dir: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn path(&self) -> PathBuf {
        self.base_dir.join(CONFIG_FILE)
    }

    /// Returns defaults when no config file exists yet.
    pub fn load(&self) -> Result<Config, LedgerError> {
        let path = self.path();
        if path.exists() {
            let raw = fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&raw)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), LedgerError> {
        fs::create_dir_all(&self.base_dir)?;
        let json = serde_json::to_string_pretty(config)?;
        fs::write(self.path(), json)?;
        Ok(())
    }

    /// Location of the budget document under the loaded configuration.
    pub fn data_path(&self, config: &Config) -> PathBuf {
        config.data_path(&self.base_dir)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the application directory: `$BUDGET_LEDGER_HOME`, else the
/// platform data directory joined with `BudgetApp`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}
