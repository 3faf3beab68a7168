use rusqlite::params;

use crate::{
    Result, Store,
    records::{AccidentRecord, PpeEventRecord, SickHourRecord, WarningRecord},
};

// Append-only history rows. Each insert is its own autocommitted statement.

impl Store {
    pub fn insert_warning(&self, warning: &WarningRecord) -> Result<i64> {
        self.insert(
            "INSERT INTO warnings(worker_id, warn_date, warn_type, notes) VALUES(?1, ?2, ?3, ?4)",
            params![
                warning.worker_id,
                &warning.warn_date,
                warning.warn_type.as_str(),
                &warning.notes
            ],
        )
    }

    pub fn insert_accident(&self, accident: &AccidentRecord) -> Result<i64> {
        self.insert(
            r#"
            INSERT INTO accidents(worker_id, accident_date, injury_type, description, notes)
            VALUES(?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                accident.worker_id,
                &accident.accident_date,
                &accident.injury_type,
                &accident.description,
                &accident.notes
            ],
        )
    }

    pub fn insert_sick_hours(&self, sick: &SickHourRecord) -> Result<i64> {
        self.insert(
            "INSERT INTO sick_hours(worker_id, sick_date, hours, notes) VALUES(?1, ?2, ?3, ?4)",
            params![sick.worker_id, &sick.sick_date, sick.hours, &sick.notes],
        )
    }

    /// Append a PPE movement. The worker's snapshot columns are not touched.
    pub fn insert_ppe_event(&self, event: &PpeEventRecord) -> Result<i64> {
        self.insert(
            r#"
            INSERT INTO ppe_events(worker_id, item, action, date, qty, size, notes)
            VALUES(?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                event.worker_id,
                event.item.as_str(),
                event.action.as_str(),
                &event.date,
                event.qty,
                &event.size,
                &event.notes
            ],
        )
    }
}
