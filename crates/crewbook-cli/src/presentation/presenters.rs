use crewbook_runtime::{BackupInfo, ExportedTable, HistoryReport, InitResult};
use crewbook_store::{Company, Crew, DeletedHistory, PpeSnapshot, Table, Worker, WorkerListing};
use std::path::PathBuf;

use super::view_models::{
    BackupViewModel, CommandResultViewModel, CompanyListViewModel, CreatedViewModel,
    CrewListViewModel, DeactivatedViewModel, DeletedViewModel, ExportViewModel, InitViewModel,
    ReportViewModel, SnapshotViewModel, StatusBadge, StatusViewModel, TableViewModel,
    WorkerListViewModel, WorkerViewModel,
};

pub fn present_created(entity: &'static str, id: i64) -> CommandResultViewModel<CreatedViewModel> {
    CommandResultViewModel::new(CreatedViewModel { entity, id })
        .with_badge(StatusBadge::success(format!("{} saved", entity)))
}

pub fn present_companies(companies: Vec<Company>) -> CommandResultViewModel<CompanyListViewModel> {
    let badge = StatusBadge::info(format!("{} companies", companies.len()));
    CommandResultViewModel::new(CompanyListViewModel { companies }).with_badge(badge)
}

pub fn present_crews(
    company_id: i64,
    crews: Vec<Crew>,
) -> CommandResultViewModel<CrewListViewModel> {
    let badge = if crews.is_empty() {
        StatusBadge::info("This company has no crews yet")
    } else {
        StatusBadge::info(format!("{} crews", crews.len()))
    };
    CommandResultViewModel::new(CrewListViewModel { company_id, crews }).with_badge(badge)
}

pub fn present_workers(workers: Vec<WorkerListing>) -> CommandResultViewModel<WorkerListViewModel> {
    let badge = StatusBadge::info(format!("{} workers", workers.len()));
    CommandResultViewModel::new(WorkerListViewModel { workers }).with_badge(badge)
}

pub fn present_worker(worker: Worker, label: &str) -> CommandResultViewModel<WorkerViewModel> {
    CommandResultViewModel::new(WorkerViewModel { worker }).with_badge(StatusBadge::info(label))
}

pub fn present_deactivated(
    id: i64,
    termination_date: String,
) -> CommandResultViewModel<DeactivatedViewModel> {
    CommandResultViewModel::new(DeactivatedViewModel {
        id,
        termination_date,
    })
    .with_badge(StatusBadge::success("Worker deactivated"))
}

pub fn present_deleted(
    id: i64,
    deleted: DeletedHistory,
) -> CommandResultViewModel<DeletedViewModel> {
    CommandResultViewModel::new(DeletedViewModel { id, deleted })
        .with_badge(StatusBadge::warning("Worker permanently deleted"))
}

pub fn present_snapshot(
    worker_id: i64,
    ppe: PpeSnapshot,
) -> CommandResultViewModel<SnapshotViewModel> {
    CommandResultViewModel::new(SnapshotViewModel { worker_id, ppe })
        .with_badge(StatusBadge::success("PPE updated"))
}

pub fn present_report(
    title: &str,
    report: HistoryReport,
    written: Vec<PathBuf>,
) -> CommandResultViewModel<ReportViewModel> {
    let badge = StatusBadge::info(format!("{}: {} rows", title, report.history.len()));
    CommandResultViewModel::new(ReportViewModel {
        history: report.history,
        totals: report.totals,
        written,
    })
    .with_badge(badge)
}

pub fn present_table(
    title: &str,
    rows: Table,
    written: Vec<PathBuf>,
) -> CommandResultViewModel<TableViewModel> {
    let badge = StatusBadge::info(format!("{}: {} rows", title, rows.len()));
    CommandResultViewModel::new(TableViewModel { rows, written }).with_badge(badge)
}

pub fn present_backup(
    backup: BackupInfo,
    restored: bool,
) -> CommandResultViewModel<BackupViewModel> {
    let badge = if restored {
        StatusBadge::success("Store restored")
    } else {
        StatusBadge::success("Backup created")
    };
    CommandResultViewModel::new(BackupViewModel { backup }).with_badge(badge)
}

pub fn present_export(
    dir: PathBuf,
    tables: Vec<ExportedTable>,
) -> CommandResultViewModel<ExportViewModel> {
    let badge = StatusBadge::success(format!("Exported {} tables", tables.len()));
    CommandResultViewModel::new(ExportViewModel { dir, tables }).with_badge(badge)
}

pub fn present_status(status: StatusViewModel) -> CommandResultViewModel<StatusViewModel> {
    CommandResultViewModel::new(status)
}

pub fn present_init(init: InitResult) -> CommandResultViewModel<InitViewModel> {
    let badge = if init.config_created {
        StatusBadge::success("Initialized")
    } else {
        StatusBadge::info("Already initialized")
    };
    CommandResultViewModel::new(InitViewModel { init }).with_badge(badge)
}
