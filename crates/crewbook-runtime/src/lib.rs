pub mod backup;
pub mod config;
pub mod error;
pub mod export;
pub mod ops;
pub mod workspace;

pub use backup::BackupInfo;
pub use config::{Config, ReportConfig, StoreConfig, resolve_data_dir};
pub use error::{Error, Result};
pub use export::{EXPORT_TABLES, ExportService, ExportedTable, csv_bytes, write_csv};
pub use ops::{
    CrewService, DEFAULT_SICK_HOURS, DELETE_CONFIRMATION, DateField, HistoryReport,
    IncidentService, NewAccident, NewSickHours, NewWarning, NewWorker, PpeMovement, PpeService,
    PpeSnapshotEdit, ReportService, WorkerService, WorkerUpdate,
};
pub use workspace::{InitResult, Workspace};
