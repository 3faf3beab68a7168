use crewbook_store::Store;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::Result;
use crate::backup::{self, BackupInfo};
use crate::config::Config;
use crate::export::ExportService;
use crate::ops::{CrewService, IncidentService, PpeService, ReportService, WorkerService};

/// Outcome of `Workspace::init`.
#[derive(Debug, Clone, Serialize)]
pub struct InitResult {
    pub data_dir: PathBuf,
    pub config_path: PathBuf,
    pub config_created: bool,
    pub store_path: PathBuf,
    pub seeded: bool,
}

/// A data directory: its configuration and the store it points at.
pub struct Workspace {
    data_dir: PathBuf,
    config: Config,
    store: Store,
}

impl Workspace {
    /// Load `config.toml` (defaults if absent) and open the store,
    /// copying the seed template into place on first run.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        let config = Config::load_from(&Config::path_in(&data_dir))?;
        let store = Store::bootstrap(
            config.store_path(&data_dir),
            config.seed_path(&data_dir).as_deref(),
        )?;

        Ok(Self {
            data_dir,
            config,
            store,
        })
    }

    /// Write a default `config.toml` if there is none, then open the store.
    pub fn init(data_dir: impl Into<PathBuf>) -> Result<InitResult> {
        let data_dir = data_dir.into();
        let config_path = Config::path_in(&data_dir);
        let config_created = !config_path.exists();
        if config_created {
            Config::default().save_to(&config_path)?;
            info!(path = %config_path.display(), "config written");
        }

        let config = Config::load_from(&config_path)?;
        let store_path = config.store_path(&data_dir);
        let seeded = !store_path.exists()
            && config
                .seed_path(&data_dir)
                .is_some_and(|seed| seed.is_file());
        let workspace = Self::open(data_dir.clone())?;

        Ok(InitResult {
            data_dir,
            config_path,
            config_created,
            store_path: workspace.store.path().to_path_buf(),
            seeded,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn crews(&self) -> CrewService<'_> {
        CrewService::new(&self.store)
    }

    pub fn workers(&self) -> WorkerService<'_> {
        WorkerService::new(&self.store)
    }

    pub fn ppe(&self) -> PpeService<'_> {
        PpeService::new(&self.store)
    }

    pub fn incidents(&self) -> IncidentService<'_> {
        IncidentService::new(&self.store)
    }

    pub fn reports(&self) -> ReportService<'_> {
        ReportService::new(&self.store, &self.config.reports)
    }

    pub fn exports(&self) -> ExportService<'_> {
        ExportService::new(&self.store)
    }

    /// Archive the live store. Without `dest` the archive gets a
    /// timestamped name in the current directory.
    pub fn create_backup(&self, dest: Option<&Path>) -> Result<BackupInfo> {
        let archive = match dest {
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(backup::default_backup_name()),
        };
        backup::create_backup(self.store.path(), &self.config.store_file_name(), &archive)
    }

    /// Overwrite the live store from an archive made by `create_backup`.
    pub fn restore_backup(&self, archive: &Path) -> Result<BackupInfo> {
        backup::restore_backup(archive, &self.config.store_file_name(), self.store.path())
    }
}
