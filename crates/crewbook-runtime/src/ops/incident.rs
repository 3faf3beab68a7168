use chrono::NaiveDate;
use crewbook_store::{AccidentRecord, SickHourRecord, Store, WarningRecord};
use crewbook_types::{WarningType, iso_date, optional_text};
use tracing::info;

use super::{require_text, require_worker};
use crate::{Error, Result};

/// Hours recorded for a sick day when none are given.
pub const DEFAULT_SICK_HOURS: f64 = 8.0;

#[derive(Debug, Clone)]
pub struct NewWarning {
    pub worker_id: i64,
    pub date: NaiveDate,
    pub warn_type: WarningType,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewAccident {
    pub worker_id: i64,
    pub date: NaiveDate,
    pub injury_type: String,
    pub description: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewSickHours {
    pub worker_id: i64,
    pub date: NaiveDate,
    pub hours: f64,
    pub notes: Option<String>,
}

/// Warnings, accidents and sick hours. Each record is a single append.
pub struct IncidentService<'a> {
    store: &'a Store,
}

impl<'a> IncidentService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn record_warning(&self, warning: &NewWarning) -> Result<i64> {
        let worker_id = require_worker(self.store, warning.worker_id)?;
        let id = self.store.insert_warning(&WarningRecord {
            worker_id,
            warn_date: iso_date(warning.date),
            warn_type: warning.warn_type,
            notes: optional_text(warning.notes.as_deref()),
        })?;
        info!(warning_id = id, worker_id, warn_type = %warning.warn_type, "warning recorded");
        Ok(id)
    }

    pub fn record_accident(&self, accident: &NewAccident) -> Result<i64> {
        let worker_id = require_worker(self.store, accident.worker_id)?;
        let injury_type = require_text(&accident.injury_type, "Injury type")?;
        let id = self.store.insert_accident(&AccidentRecord {
            worker_id,
            accident_date: iso_date(accident.date),
            injury_type: injury_type.to_string(),
            description: optional_text(accident.description.as_deref()),
            notes: optional_text(accident.notes.as_deref()),
        })?;
        info!(accident_id = id, worker_id, "accident recorded");
        Ok(id)
    }

    pub fn record_sick_hours(&self, sick: &NewSickHours) -> Result<i64> {
        let worker_id = require_worker(self.store, sick.worker_id)?;
        if !sick.hours.is_finite() || sick.hours < 0.0 {
            return Err(Error::validation("Hours must be zero or more"));
        }
        let id = self.store.insert_sick_hours(&SickHourRecord {
            worker_id,
            sick_date: iso_date(sick.date),
            hours: sick.hours,
            notes: optional_text(sick.notes.as_deref()),
        })?;
        info!(sick_id = id, worker_id, hours = sick.hours, "sick hours recorded");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{CrewService, NewWorker, WorkerService};
    use tempfile::TempDir;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn with_worker() -> (TempDir, Store, i64) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path().join("crewbook.db")).unwrap();
        let crews = CrewService::new(&store);
        let acme = crews.add_company("Acme").unwrap();
        let crew = crews.add_crew(acme, "C1", "Rosa").unwrap();
        let id = WorkerService::new(&store)
            .add(&NewWorker {
                company_id: acme,
                crew_id: crew,
                full_name: "Ana".to_string(),
                start_date: day("2025-01-01"),
                gloves_issued: None,
                sleeves_issued: None,
            })
            .unwrap();
        (dir, store, id)
    }

    fn count(store: &Store, table: &str) -> i64 {
        store
            .scalar_i64(&format!("SELECT COUNT(*) FROM {}", table), &[])
            .unwrap()
    }

    #[test]
    fn test_accident_requires_injury_type() {
        let (_dir, store, id) = with_worker();
        let incidents = IncidentService::new(&store);
        let mut accident = NewAccident {
            worker_id: id,
            date: day("2025-03-01"),
            injury_type: "  ".to_string(),
            description: Some("ladder".to_string()),
            notes: None,
        };

        assert!(matches!(
            incidents.record_accident(&accident),
            Err(Error::Validation(_))
        ));
        assert_eq!(count(&store, "accidents"), 0);

        accident.injury_type = "sprain".to_string();
        incidents.record_accident(&accident).unwrap();
        assert_eq!(count(&store, "accidents"), 1);
    }

    #[test]
    fn test_sick_hours_bounds() {
        let (_dir, store, id) = with_worker();
        let incidents = IncidentService::new(&store);
        let sick = |hours| NewSickHours {
            worker_id: id,
            date: day("2025-03-01"),
            hours,
            notes: Some(" ".to_string()),
        };

        incidents.record_sick_hours(&sick(DEFAULT_SICK_HOURS)).unwrap();
        incidents.record_sick_hours(&sick(0.0)).unwrap();
        assert!(matches!(
            incidents.record_sick_hours(&sick(-0.5)),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            incidents.record_sick_hours(&sick(f64::NAN)),
            Err(Error::Validation(_))
        ));
        assert_eq!(count(&store, "sick_hours"), 2);
    }

    #[test]
    fn test_unselected_worker_rejected() {
        let (_dir, store, _id) = with_worker();
        let warning = NewWarning {
            worker_id: -1,
            date: day("2025-03-01"),
            warn_type: WarningType::Other,
            notes: None,
        };

        let err = IncidentService::new(&store).record_warning(&warning).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(count(&store, "warnings"), 0);
    }

    #[test]
    fn test_missing_worker_is_not_found() {
        let (_dir, store, id) = with_worker();
        let warning = NewWarning {
            worker_id: id + 100,
            date: day("2025-03-01"),
            warn_type: WarningType::LowProduction,
            notes: None,
        };

        let err = IncidentService::new(&store).record_warning(&warning).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
