use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CREWBOOK_PATH environment variable (with tilde expansion)
/// 3. Platform data directory
/// 4. ~/.crewbook
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("CREWBOOK_PATH")
        && !env_path.trim().is_empty()
    {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("crewbook"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".crewbook"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or platform data directory found"
            .to_string(),
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Resolve `file` against `base` unless it is already absolute.
fn under(base: &Path, file: &str) -> PathBuf {
    let path = expand_tilde(file);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Live store file, relative to the data directory.
    pub file: String,
    /// Template copied into place when the store file is missing.
    pub seed: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            file: "crewbook.db".to_string(),
            seed: Some("crewbook_empty.db".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Lower bound of report date ranges when none is given.
    pub default_from: NaiveDate,
    /// Row limit for the worker editor list.
    pub search_limit: usize,
    /// Row limit for worker pickers.
    pub picker_limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_from: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            search_limit: 200,
            picker_limit: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub reports: ReportConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }

    pub fn store_path(&self, data_dir: &Path) -> PathBuf {
        under(data_dir, &self.store.file)
    }

    pub fn seed_path(&self, data_dir: &Path) -> Option<PathBuf> {
        self.store
            .seed
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(|seed| under(data_dir, seed))
    }

    /// Name of the single entry inside backup archives.
    pub fn store_file_name(&self) -> String {
        Path::new(&self.store.file)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.store.file.clone())
    }
}
