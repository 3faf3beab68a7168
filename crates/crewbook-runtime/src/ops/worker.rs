use chrono::NaiveDate;
use crewbook_store::{
    DeletedHistory, NewWorkerRecord, Store, Worker, WorkerEdit, WorkerListing, WorkerOrder,
};
use crewbook_types::{iso_date, optional_text, selected, today};
use tracing::{info, warn};

use super::{require_text, require_worker};
use crate::{Error, Result};

/// Literal the user must type to confirm a hard delete.
pub const DELETE_CONFIRMATION: &str = "DELETE";

/// Input for hiring a worker.
#[derive(Debug, Clone)]
pub struct NewWorker {
    pub company_id: i64,
    pub crew_id: i64,
    pub full_name: String,
    pub start_date: NaiveDate,
    /// Sets the gloves snapshot issue date at hire.
    pub gloves_issued: Option<NaiveDate>,
    /// Sets the sleeves snapshot issue date at hire.
    pub sleeves_issued: Option<NaiveDate>,
}

/// Editable worker fields.
#[derive(Debug, Clone)]
pub struct WorkerUpdate {
    pub full_name: String,
    pub start_date: NaiveDate,
    pub notes: Option<String>,
    pub active: bool,
}

pub struct WorkerService<'a> {
    store: &'a Store,
}

impl<'a> WorkerService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn add(&self, worker: &NewWorker) -> Result<i64> {
        let company_id =
            selected(worker.company_id).ok_or_else(|| Error::validation("Select a company"))?;
        let crew_id = selected(worker.crew_id).ok_or_else(|| Error::validation("Select a crew"))?;
        let full_name = require_text(&worker.full_name, "Full name")?;

        let crew = self
            .store
            .get_crew(crew_id)?
            .ok_or_else(|| Error::NotFound(format!("crew {}", crew_id)))?;
        if crew.company_id != company_id {
            return Err(Error::validation(format!(
                "Crew '{}' does not belong to company {}",
                crew.crew_code, company_id
            )));
        }

        let id = self.store.insert_worker(&NewWorkerRecord {
            full_name: full_name.to_string(),
            company_id,
            crew_id,
            start_date: iso_date(worker.start_date),
            gloves_issued_date: worker.gloves_issued.map(iso_date),
            sleeves_issued_date: worker.sleeves_issued.map(iso_date),
        })?;
        Ok(id)
    }

    /// Editor list: newest first, optional name substring.
    pub fn search(&self, name_contains: Option<&str>, limit: usize) -> Result<Vec<WorkerListing>> {
        Ok(self
            .store
            .search_workers(name_contains, WorkerOrder::NewestFirst, limit)?)
    }

    /// Picker list: alphabetical, optional name substring.
    pub fn picker(&self, name_contains: Option<&str>, limit: usize) -> Result<Vec<WorkerListing>> {
        Ok(self
            .store
            .search_workers(name_contains, WorkerOrder::ByName, limit)?)
    }

    pub fn get(&self, worker_id: i64) -> Result<Worker> {
        let id = selected(worker_id).ok_or_else(|| Error::validation("Select a worker"))?;
        self.store
            .get_worker(id)?
            .ok_or_else(|| Error::NotFound(format!("worker {}", id)))
    }

    /// Change name, start date, notes and the active flag. Blank notes are cleared.
    pub fn update(&self, worker_id: i64, update: &WorkerUpdate) -> Result<()> {
        let id = require_worker(self.store, worker_id)?;
        let full_name = require_text(&update.full_name, "Full name")?;

        self.store.update_worker(
            id,
            &WorkerEdit {
                full_name: full_name.to_string(),
                start_date: iso_date(update.start_date),
                notes: optional_text(update.notes.as_deref()),
                active: update.active,
            },
        )?;
        info!(worker_id = id, active = update.active, "worker updated");
        Ok(())
    }

    /// Soft delete. History is kept and the worker can be reactivated.
    pub fn deactivate(
        &self,
        worker_id: i64,
        termination_date: Option<NaiveDate>,
    ) -> Result<NaiveDate> {
        let id = require_worker(self.store, worker_id)?;
        let date = termination_date.unwrap_or_else(today);
        self.store.deactivate_worker(id, &iso_date(date))?;
        Ok(date)
    }

    /// Hard delete of the worker and every history row, in one transaction.
    ///
    /// `confirmation` must be exactly [`DELETE_CONFIRMATION`] once trimmed.
    pub fn delete(&self, worker_id: i64, confirmation: &str) -> Result<DeletedHistory> {
        let id = require_worker(self.store, worker_id)?;
        if confirmation.trim() != DELETE_CONFIRMATION {
            warn!(worker_id = id, "hard delete not confirmed");
            return Err(Error::Confirmation(format!(
                "type {} to permanently remove worker {}",
                DELETE_CONFIRMATION, id
            )));
        }

        let deleted = self.store.delete_worker_with_history(id)?;
        if deleted.workers == 0 {
            return Err(Error::NotFound(format!("worker {}", id)));
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::CrewService;
    use tempfile::TempDir;

    struct Setup {
        _dir: TempDir,
        store: Store,
        acme: i64,
        crew: i64,
    }

    fn setup() -> Setup {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path().join("crewbook.db")).unwrap();
        let crews = CrewService::new(&store);
        let acme = crews.add_company("Acme").unwrap();
        let crew = crews.add_crew(acme, "C1", "Rosa").unwrap();
        Setup {
            _dir: dir,
            store,
            acme,
            crew,
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn hire(setup: &Setup, name: &str) -> i64 {
        WorkerService::new(&setup.store)
            .add(&NewWorker {
                company_id: setup.acme,
                crew_id: setup.crew,
                full_name: name.to_string(),
                start_date: day("2025-01-06"),
                gloves_issued: Some(day("2025-01-06")),
                sleeves_issued: None,
            })
            .unwrap()
    }

    #[test]
    fn test_add_sets_issue_dates_and_active() {
        let setup = setup();
        let id = hire(&setup, " Ana Lopez ");

        let worker = WorkerService::new(&setup.store).get(id).unwrap();
        assert_eq!(worker.full_name, "Ana Lopez");
        assert!(worker.active);
        assert_eq!(worker.ppe.gloves_issued_date.as_deref(), Some("2025-01-06"));
        assert_eq!(worker.ppe.sleeves_issued_date, None);
    }

    #[test]
    fn test_add_rejects_crew_of_other_company() {
        let setup = setup();
        let crews = CrewService::new(&setup.store);
        let birch = crews.add_company("Birch").unwrap();

        let err = WorkerService::new(&setup.store)
            .add(&NewWorker {
                company_id: birch,
                crew_id: setup.crew,
                full_name: "Ana".to_string(),
                start_date: day("2025-01-06"),
                gloves_issued: None,
                sleeves_issued: None,
            })
            .unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(setup.store.count_workers().unwrap(), 0);
    }

    #[test]
    fn test_add_requires_selection_and_name() {
        let setup = setup();
        let workers = WorkerService::new(&setup.store);
        let mut worker = NewWorker {
            company_id: setup.acme,
            crew_id: -1,
            full_name: "Ana".to_string(),
            start_date: day("2025-01-06"),
            gloves_issued: None,
            sleeves_issued: None,
        };
        assert!(matches!(workers.add(&worker), Err(Error::Validation(_))));

        worker.crew_id = setup.crew;
        worker.full_name = "  ".to_string();
        assert!(matches!(workers.add(&worker), Err(Error::Validation(_))));
    }

    #[test]
    fn test_update_clears_blank_notes_and_reactivates() {
        let setup = setup();
        let id = hire(&setup, "Ana");
        let workers = WorkerService::new(&setup.store);

        workers.deactivate(id, Some(day("2025-03-01"))).unwrap();
        workers
            .update(
                id,
                &WorkerUpdate {
                    full_name: "Ana".to_string(),
                    start_date: day("2025-01-06"),
                    notes: Some("   ".to_string()),
                    active: true,
                },
            )
            .unwrap();

        let worker = workers.get(id).unwrap();
        assert!(worker.active);
        assert_eq!(worker.notes, None);
        assert_eq!(worker.termination_date.as_deref(), Some("2025-03-01"));
    }

    #[test]
    fn test_delete_requires_exact_confirmation() {
        let setup = setup();
        let id = hire(&setup, "Ana");
        let workers = WorkerService::new(&setup.store);

        let err = workers.delete(id, "delete").unwrap_err();
        assert!(matches!(err, Error::Confirmation(_)));
        assert!(setup.store.worker_exists(id).unwrap());

        let deleted = workers.delete(id, " DELETE ").unwrap();
        assert_eq!(deleted.workers, 1);
        assert!(!setup.store.worker_exists(id).unwrap());
    }

    #[test]
    fn test_unknown_worker_is_not_found() {
        let setup = setup();
        let workers = WorkerService::new(&setup.store);

        assert!(matches!(workers.get(99), Err(Error::NotFound(_))));
        assert!(matches!(workers.delete(99, "DELETE"), Err(Error::NotFound(_))));
        assert!(matches!(workers.deactivate(0, None), Err(Error::Validation(_))));
    }
}
