use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{config::Config, errors::LedgerError, ledger::BudgetData};

use super::{Result, StorageBackend};

const TMP_SUFFIX: &str = "tmp";

/// Stores the budget document as pretty-printed JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the data file named by `config`, relative to `base_dir`.
    pub fn from_config(config: &Config, base_dir: &Path) -> Self {
        Self::new(config.data_path(base_dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<Option<BudgetData>> {
        if !self.path.exists() {
            return Ok(None);
        }
        load_data_from_path(&self.path).map(Some)
    }

    fn save(&self, data: &BudgetData) -> Result<()> {
        save_data_to_path(data, &self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Writes the document by staging to a sibling temp file, then renaming over `path`.
pub fn save_data_to_path(data: &BudgetData, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(data)?;
    let tmp = tmp_path(path);
    write_file(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

pub fn load_data_from_path(path: &Path) -> Result<BudgetData> {
    let raw = fs::read_to_string(path)?;
    let data: BudgetData = serde_json::from_str(&raw)?;
    Ok(data)
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|err| {
        LedgerError::Persistence(format!("cannot create `{}`: {}", dir.display(), err))
    })
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

fn write_file(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
