use crewbook_types::{PpeAction, PpeItem, WarningType};
use serde::Serialize;

/// Company row. Names are unique byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
}

/// Crew row. `(company_id, crew_code)` is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crew {
    pub id: i64,
    pub company_id: i64,
    pub crew_code: String,
    /// Foreman display name; may be empty.
    pub foreman_name: Option<String>,
}

/// Worker list entry for pickers and the editor search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerListing {
    pub id: i64,
    pub full_name: String,
    pub company: String,
    pub crew: String,
    pub start_date: Option<String>,
    pub termination_date: Option<String>,
    pub active: bool,
}

/// Complete worker row.
///
/// `active == true` is expected to come with no termination date, but the
/// store does not enforce it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Worker {
    pub id: i64,
    pub full_name: String,
    pub company_id: i64,
    pub crew_id: i64,
    /// ISO-8601 date.
    pub start_date: Option<String>,
    /// ISO-8601 date, set by a soft delete.
    pub termination_date: Option<String>,
    pub active: bool,
    pub ppe: PpeSnapshot,
    pub notes: Option<String>,
}

/// The four PPE date columns kept on the worker row.
///
/// Edited directly, never derived from `ppe_events`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PpeSnapshot {
    pub gloves_issued_date: Option<String>,
    pub gloves_returned_date: Option<String>,
    pub sleeves_issued_date: Option<String>,
    pub sleeves_returned_date: Option<String>,
}

/// Insert payload for a new worker (always active).
#[derive(Debug, Clone)]
pub struct NewWorkerRecord {
    pub full_name: String,
    pub company_id: i64,
    pub crew_id: i64,
    pub start_date: String,
    pub gloves_issued_date: Option<String>,
    pub sleeves_issued_date: Option<String>,
}

/// The fields a worker edit may change.
#[derive(Debug, Clone)]
pub struct WorkerEdit {
    pub full_name: String,
    pub start_date: String,
    pub notes: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct WarningRecord {
    pub worker_id: i64,
    pub warn_date: String,
    pub warn_type: WarningType,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AccidentRecord {
    pub worker_id: i64,
    pub accident_date: String,
    pub injury_type: String,
    pub description: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SickHourRecord {
    pub worker_id: i64,
    pub sick_date: String,
    pub hours: f64,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PpeEventRecord {
    pub worker_id: i64,
    pub item: PpeItem,
    pub action: PpeAction,
    pub date: String,
    pub qty: f64,
    /// Glove size; always `None` for sleeves.
    pub size: Option<String>,
    pub notes: Option<String>,
}

/// Row counts removed by a hard delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeletedHistory {
    pub warnings: usize,
    pub accidents: usize,
    pub sick_hours: usize,
    pub ppe_events: usize,
    pub workers: usize,
}
