mod crew;
mod incident;
mod ppe;
mod report;
mod worker;

pub use crew::CrewService;
pub use incident::{DEFAULT_SICK_HOURS, IncidentService, NewAccident, NewSickHours, NewWarning};
pub use ppe::{DateField, PpeMovement, PpeService, PpeSnapshotEdit};
pub use report::{HistoryReport, ReportService};
pub use worker::{DELETE_CONFIRMATION, NewWorker, WorkerService, WorkerUpdate};

use crate::{Error, Result};
use crewbook_store::Store;
use crewbook_types::{required_text, selected};

/// A picker id must be a real selection and the worker must exist.
pub(crate) fn require_worker(store: &Store, worker_id: i64) -> Result<i64> {
    let id = selected(worker_id).ok_or_else(|| Error::validation("Select a worker"))?;
    if !store.worker_exists(id)? {
        return Err(Error::NotFound(format!("worker {}", id)));
    }
    Ok(id)
}

pub(crate) fn require_text<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    required_text(value).ok_or_else(|| Error::validation(format!("{} is required", field)))
}
