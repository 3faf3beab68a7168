use crewbook_runtime::{BackupInfo, ExportedTable, InitResult};
use crewbook_store::{Company, Crew, DeletedHistory, PpeSnapshot, Table, Worker, WorkerListing};
use serde::Serialize;
use std::path::PathBuf;

// ViewModels hold raw data; views decide layout.

#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T>
where
    T: Serialize,
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<StatusBadge>,

    pub content: T,
}

impl<T> CommandResultViewModel<T>
where
    T: Serialize,
{
    pub fn new(content: T) -> Self {
        Self {
            badge: None,
            content,
        }
    }

    pub fn with_badge(mut self, badge: StatusBadge) -> Self {
        self.badge = Some(badge);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBadge {
    pub level: StatusLevel,
    pub label: String,
}

impl StatusBadge {
    pub fn success(label: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Success,
            label: label.into(),
        }
    }

    pub fn info(label: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            label: label.into(),
        }
    }

    pub fn warning(label: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            label: label.into(),
        }
    }

    pub fn error(label: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            label: label.into(),
        }
    }

    pub fn icon(&self) -> &str {
        match self.level {
            StatusLevel::Success => "✅",
            StatusLevel::Info => "ℹ️",
            StatusLevel::Warning => "⚠️",
            StatusLevel::Error => "❌",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// A freshly inserted row.
#[derive(Debug, Serialize)]
pub struct CreatedViewModel {
    pub entity: &'static str,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct CompanyListViewModel {
    pub companies: Vec<Company>,
}

#[derive(Debug, Serialize)]
pub struct CrewListViewModel {
    pub company_id: i64,
    pub crews: Vec<Crew>,
}

#[derive(Debug, Serialize)]
pub struct WorkerListViewModel {
    pub workers: Vec<WorkerListing>,
}

#[derive(Debug, Serialize)]
pub struct WorkerViewModel {
    pub worker: Worker,
}

#[derive(Debug, Serialize)]
pub struct DeactivatedViewModel {
    pub id: i64,
    pub termination_date: String,
}

#[derive(Debug, Serialize)]
pub struct DeletedViewModel {
    pub id: i64,
    pub deleted: DeletedHistory,
}

#[derive(Debug, Serialize)]
pub struct SnapshotViewModel {
    pub worker_id: i64,
    pub ppe: PpeSnapshot,
}

/// History rows, optional per-worker totals, and any CSV files written.
#[derive(Debug, Serialize)]
pub struct ReportViewModel {
    pub history: Table,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totals: Option<Table>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub written: Vec<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct TableViewModel {
    pub rows: Table,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub written: Vec<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct BackupViewModel {
    pub backup: BackupInfo,
}

#[derive(Debug, Serialize)]
pub struct ExportViewModel {
    pub dir: PathBuf,
    pub tables: Vec<ExportedTable>,
}

#[derive(Debug, Serialize)]
pub struct StatusViewModel {
    pub data_dir: PathBuf,
    pub store_path: PathBuf,
    pub store_exists: bool,
    pub worker_count: i64,
}

#[derive(Debug, Serialize)]
pub struct InitViewModel {
    pub init: InitResult,
}

#[derive(Debug, Serialize)]
pub struct ErrorViewModel {
    pub kind: &'static str,
    pub message: String,
}
