use rusqlite::{OptionalExtension, ToSql, params};
use tracing::info;

use crate::{
    Result, Store,
    records::{DeletedHistory, NewWorkerRecord, PpeSnapshot, Worker, WorkerEdit, WorkerListing},
};

/// Sort order for worker lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkerOrder {
    /// Most recently added first (the editor list).
    #[default]
    NewestFirst,
    /// Alphabetical by full name (pickers).
    ByName,
}

impl Store {
    pub fn insert_worker(&self, worker: &NewWorkerRecord) -> Result<i64> {
        let id = self.insert(
            r#"
            INSERT INTO workers(full_name, company_id, crew_id, start_date,
                                gloves_issued_date, sleeves_issued_date, active)
            VALUES(?1, ?2, ?3, ?4, ?5, ?6, 1)
            "#,
            params![
                &worker.full_name,
                worker.company_id,
                worker.crew_id,
                &worker.start_date,
                &worker.gloves_issued_date,
                &worker.sleeves_issued_date
            ],
        )?;
        info!(worker_id = id, "worker added");
        Ok(id)
    }

    pub fn get_worker(&self, worker_id: i64) -> Result<Option<Worker>> {
        let conn = self.connect()?;
        let worker = conn
            .query_row(
                r#"
            SELECT id, full_name, company_id, crew_id, start_date, termination_date, active,
                   gloves_issued_date, gloves_returned_date,
                   sleeves_issued_date, sleeves_returned_date, notes
            FROM workers
            WHERE id = ?1
            "#,
                [worker_id],
                |row| {
                    Ok(Worker {
                        id: row.get(0)?,
                        full_name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                        company_id: row.get(2)?,
                        crew_id: row.get(3)?,
                        start_date: row.get(4)?,
                        termination_date: row.get(5)?,
                        active: row.get::<_, Option<i64>>(6)?.unwrap_or(1) == 1,
                        ppe: PpeSnapshot {
                            gloves_issued_date: row.get(7)?,
                            gloves_returned_date: row.get(8)?,
                            sleeves_issued_date: row.get(9)?,
                            sleeves_returned_date: row.get(10)?,
                        },
                        notes: row.get(11)?,
                    })
                },
            )
            .optional()?;

        Ok(worker)
    }

    pub fn worker_exists(&self, worker_id: i64) -> Result<bool> {
        let count =
            self.scalar_i64("SELECT COUNT(*) FROM workers WHERE id = ?1", params![worker_id])?;
        Ok(count > 0)
    }

    pub fn count_workers(&self) -> Result<i64> {
        self.scalar_i64("SELECT COUNT(*) FROM workers", &[])
    }

    /// Workers joined to their company and crew, optionally filtered by a
    /// name substring (SQLite `LIKE` semantics).
    pub fn search_workers(
        &self,
        name_contains: Option<&str>,
        order: WorkerOrder,
        limit: usize,
    ) -> Result<Vec<WorkerListing>> {
        let mut where_clause = String::from("WHERE 1=1");
        let mut params: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(term) = name_contains.map(str::trim).filter(|t| !t.is_empty()) {
            where_clause.push_str(" AND w.full_name LIKE ?");
            params.push(Box::new(format!("%{}%", term)));
        }

        let order_clause = match order {
            WorkerOrder::NewestFirst => "ORDER BY w.id DESC",
            WorkerOrder::ByName => "ORDER BY w.full_name",
        };

        let query = format!(
            r#"
            SELECT w.id, w.full_name, c.name, cr.crew_code, w.start_date, w.termination_date, w.active
            FROM workers w
            JOIN companies c ON c.id = w.company_id
            JOIN crews cr ON cr.id = w.crew_id
            {}
            {}
            LIMIT {}
            "#,
            where_clause, order_clause, limit
        );

        let conn = self.connect()?;
        let mut stmt = conn.prepare(&query)?;
        let param_refs: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();
        let workers = stmt
            .query_map(param_refs.as_slice(), |row| {
                Ok(WorkerListing {
                    id: row.get(0)?,
                    full_name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                    company: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    crew: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                    start_date: row.get(4)?,
                    termination_date: row.get(5)?,
                    active: row.get::<_, Option<i64>>(6)?.unwrap_or(1) == 1,
                })
            })?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(workers)
    }

    /// Update name, start date, notes and the active flag. Company, crew,
    /// termination date and the PPE snapshot are left alone.
    pub fn update_worker(&self, worker_id: i64, edit: &WorkerEdit) -> Result<usize> {
        self.execute(
            "UPDATE workers SET full_name = ?1, start_date = ?2, notes = ?3, active = ?4 WHERE id = ?5",
            params![
                &edit.full_name,
                &edit.start_date,
                &edit.notes,
                if edit.active { 1 } else { 0 },
                worker_id
            ],
        )
    }

    /// Soft delete: mark inactive and stamp the termination date.
    pub fn deactivate_worker(&self, worker_id: i64, termination_date: &str) -> Result<usize> {
        let changed = self.execute(
            "UPDATE workers SET active = 0, termination_date = ?1 WHERE id = ?2",
            params![termination_date, worker_id],
        )?;
        info!(worker_id, termination_date, "worker deactivated");
        Ok(changed)
    }

    /// Overwrite all four PPE snapshot columns.
    pub fn set_ppe_snapshot(&self, worker_id: i64, snapshot: &PpeSnapshot) -> Result<usize> {
        self.execute(
            r#"
            UPDATE workers SET
                gloves_issued_date = ?1, gloves_returned_date = ?2,
                sleeves_issued_date = ?3, sleeves_returned_date = ?4
            WHERE id = ?5
            "#,
            params![
                &snapshot.gloves_issued_date,
                &snapshot.gloves_returned_date,
                &snapshot.sleeves_issued_date,
                &snapshot.sleeves_returned_date,
                worker_id
            ],
        )
    }

    /// Hard delete: every history row of the worker, then the worker, in
    /// one transaction. Nothing is removed unless all statements succeed.
    pub fn delete_worker_with_history(&self, worker_id: i64) -> Result<DeletedHistory> {
        let deleted = self.transaction(|tx| {
            Ok(DeletedHistory {
                warnings: tx.execute("DELETE FROM warnings WHERE worker_id = ?1", [worker_id])?,
                accidents: tx.execute("DELETE FROM accidents WHERE worker_id = ?1", [worker_id])?,
                sick_hours: tx
                    .execute("DELETE FROM sick_hours WHERE worker_id = ?1", [worker_id])?,
                ppe_events: tx
                    .execute("DELETE FROM ppe_events WHERE worker_id = ?1", [worker_id])?,
                workers: tx.execute("DELETE FROM workers WHERE id = ?1", [worker_id])?,
            })
        })?;
        info!(worker_id, ?deleted, "worker and history deleted");
        Ok(deleted)
    }
}
