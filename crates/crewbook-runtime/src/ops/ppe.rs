use chrono::NaiveDate;
use crewbook_store::{PpeEventRecord, PpeSnapshot, Store};
use crewbook_types::{GLOVE_SIZES, PpeAction, PpeItem, iso_date, optional_text, parse_iso_date};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::require_worker;
use crate::{Error, Result};

/// One snapshot date as entered in the PPE editor.
///
/// `blank` forces the stored value to null, whatever `date` holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateField {
    pub blank: bool,
    pub date: Option<NaiveDate>,
    /// Stored text that is not an ISO date, written back untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stored: Option<String>,
}

impl DateField {
    pub fn set(date: NaiveDate) -> Self {
        Self {
            blank: false,
            date: Some(date),
            stored: None,
        }
    }

    pub fn blank() -> Self {
        Self {
            blank: true,
            date: None,
            stored: None,
        }
    }

    /// Load a stored column. Text that does not parse as a date is kept.
    pub fn from_stored(value: Option<&str>) -> Self {
        match (value, parse_iso_date(value)) {
            (_, Some(date)) => Self::set(date),
            (None, None) => Self::blank(),
            (Some(text), None) => Self {
                blank: false,
                date: None,
                stored: Some(text.to_string()),
            },
        }
    }

    /// Stored value: null when blanked or empty, the ISO date otherwise.
    pub fn resolve(&self) -> Option<String> {
        if self.blank {
            return None;
        }
        self.date.map(iso_date).or_else(|| self.stored.clone())
    }
}

/// The four fields of the PPE editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PpeSnapshotEdit {
    pub gloves_issued: DateField,
    pub gloves_returned: DateField,
    pub sleeves_issued: DateField,
    pub sleeves_returned: DateField,
}

impl PpeSnapshotEdit {
    /// Start from the stored snapshot so untouched fields keep their value.
    pub fn from_snapshot(snapshot: &PpeSnapshot) -> Self {
        let field = |value: &Option<String>| DateField::from_stored(value.as_deref());
        Self {
            gloves_issued: field(&snapshot.gloves_issued_date),
            gloves_returned: field(&snapshot.gloves_returned_date),
            sleeves_issued: field(&snapshot.sleeves_issued_date),
            sleeves_returned: field(&snapshot.sleeves_returned_date),
        }
    }

    pub fn resolve(&self) -> PpeSnapshot {
        PpeSnapshot {
            gloves_issued_date: self.gloves_issued.resolve(),
            gloves_returned_date: self.gloves_returned.resolve(),
            sleeves_issued_date: self.sleeves_issued.resolve(),
            sleeves_returned_date: self.sleeves_returned.resolve(),
        }
    }
}

/// One issue or return for the movement ledger.
#[derive(Debug, Clone)]
pub struct PpeMovement {
    pub worker_id: i64,
    pub item: PpeItem,
    pub action: PpeAction,
    pub date: NaiveDate,
    pub qty: f64,
    pub size: Option<String>,
    pub notes: Option<String>,
}

/// PPE snapshot editor and movement ledger. The two never update each other.
pub struct PpeService<'a> {
    store: &'a Store,
}

impl<'a> PpeService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Overwrite all four snapshot dates on the worker row.
    pub fn set_snapshot(&self, worker_id: i64, edit: &PpeSnapshotEdit) -> Result<PpeSnapshot> {
        let id = require_worker(self.store, worker_id)?;
        let snapshot = edit.resolve();
        self.store.set_ppe_snapshot(id, &snapshot)?;
        info!(worker_id = id, "ppe snapshot updated");
        Ok(snapshot)
    }

    /// Append to the ledger. The snapshot columns are left alone.
    pub fn record_event(&self, movement: &PpeMovement) -> Result<i64> {
        let worker_id = require_worker(self.store, movement.worker_id)?;
        if !movement.qty.is_finite() || movement.qty < 0.0 {
            return Err(Error::validation("Quantity must be zero or more"));
        }

        let size = match optional_text(movement.size.as_deref()) {
            None => None,
            Some(_) if !movement.item.is_sized() => {
                return Err(Error::validation(format!(
                    "Size only applies to {}",
                    PpeItem::Gloves
                )));
            }
            Some(size) if GLOVE_SIZES.contains(&size.as_str()) => Some(size),
            Some(size) => {
                return Err(Error::validation(format!(
                    "Unknown glove size '{}' (expected one of: {})",
                    size,
                    GLOVE_SIZES.join(", ")
                )));
            }
        };

        let id = self.store.insert_ppe_event(&PpeEventRecord {
            worker_id,
            item: movement.item,
            action: movement.action,
            date: iso_date(movement.date),
            qty: movement.qty,
            size,
            notes: optional_text(movement.notes.as_deref()),
        })?;
        info!(
            event_id = id,
            worker_id,
            item = %movement.item,
            action = %movement.action,
            "ppe movement recorded"
        );
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
        let crew = crews.add_crew(acme, "C1", "").unwrap();
        let id = WorkerService::new(&store)
            .add(&NewWorker {
                company_id: acme,
                crew_id: crew,
                full_name: "Ana".to_string(),
                start_date: day("2025-01-01"),
                gloves_issued: Some(day("2025-01-01")),
                sleeves_issued: None,
            })
            .unwrap();
        (dir, store, id)
    }

    fn movement(worker_id: i64, item: PpeItem, size: Option<&str>) -> PpeMovement {
        PpeMovement {
            worker_id,
            item,
            action: PpeAction::Issue,
            date: day("2025-02-01"),
            qty: 1.0,
            size: size.map(str::to_string),
            notes: None,
        }
    }

    #[test]
    fn test_blank_wins_over_date() {
        let field = DateField {
            blank: true,
            date: Some(day("2025-02-01")),
            ..Default::default()
        };
        assert_eq!(field.resolve(), None);
        assert_eq!(DateField::set(day("2025-02-01")).resolve().as_deref(), Some("2025-02-01"));
        assert_eq!(DateField::default().resolve(), None);
    }

    #[test]
    fn test_editor_sets_returned_date_alongside_issued() {
        let (_dir, store, id) = with_worker();
        let ppe = PpeService::new(&store);

        let worker = store.get_worker(id).unwrap().unwrap();
        let mut edit = PpeSnapshotEdit::from_snapshot(&worker.ppe);
        assert!(edit.gloves_returned.blank);
        edit.gloves_returned = DateField::set(day("2025-02-01"));
        ppe.set_snapshot(id, &edit).unwrap();

        let worker = store.get_worker(id).unwrap().unwrap();
        assert_eq!(worker.ppe.gloves_issued_date.as_deref(), Some("2025-01-01"));
        assert_eq!(worker.ppe.gloves_returned_date.as_deref(), Some("2025-02-01"));
        assert_eq!(worker.ppe.sleeves_issued_date, None);
    }

    #[test]
    fn test_blank_toggle_clears_stored_date() {
        let (_dir, store, id) = with_worker();
        let edit = PpeSnapshotEdit {
            gloves_issued: DateField {
                blank: true,
                date: Some(day("2025-01-01")),
                ..Default::default()
            },
            ..Default::default()
        };

        let snapshot = PpeService::new(&store).set_snapshot(id, &edit).unwrap();
        assert_eq!(snapshot, PpeSnapshot::default());
        let worker = store.get_worker(id).unwrap().unwrap();
        assert_eq!(worker.ppe.gloves_issued_date, None);
    }

    #[test]
    fn test_editor_keeps_unparseable_stored_text() {
        let (_dir, store, id) = with_worker();
        store
            .set_ppe_snapshot(
                id,
                &PpeSnapshot {
                    gloves_issued_date: Some("2025-01-01".to_string()),
                    sleeves_issued_date: Some("2025/01/06".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let worker = store.get_worker(id).unwrap().unwrap();
        let mut edit = PpeSnapshotEdit::from_snapshot(&worker.ppe);
        assert!(!edit.sleeves_issued.blank);
        edit.gloves_returned = DateField::set(day("2025-02-01"));
        PpeService::new(&store).set_snapshot(id, &edit).unwrap();

        let worker = store.get_worker(id).unwrap().unwrap();
        assert_eq!(worker.ppe.sleeves_issued_date.as_deref(), Some("2025/01/06"));
        assert_eq!(worker.ppe.gloves_returned_date.as_deref(), Some("2025-02-01"));

        edit.sleeves_issued = DateField::blank();
        PpeService::new(&store).set_snapshot(id, &edit).unwrap();
        let worker = store.get_worker(id).unwrap().unwrap();
        assert_eq!(worker.ppe.sleeves_issued_date, None);
    }

    #[test]
    fn test_movement_leaves_snapshot_alone() {
        let (_dir, store, id) = with_worker();
        PpeService::new(&store)
            .record_event(&movement(id, PpeItem::Sleeves, None))
            .unwrap();

        let worker = store.get_worker(id).unwrap().unwrap();
        assert_eq!(worker.ppe.sleeves_issued_date, None);
    }

    #[test]
    fn test_movement_size_rules() {
        let (_dir, store, id) = with_worker();
        let ppe = PpeService::new(&store);

        ppe.record_event(&movement(id, PpeItem::Gloves, Some("10.5"))).unwrap();
        ppe.record_event(&movement(id, PpeItem::Gloves, Some(""))).unwrap();
        assert!(matches!(
            ppe.record_event(&movement(id, PpeItem::Gloves, Some("13"))),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            ppe.record_event(&movement(id, PpeItem::Sleeves, Some("10"))),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_movement_rejects_negative_quantity() {
        let (_dir, store, id) = with_worker();
        let mut negative = movement(id, PpeItem::Gloves, None);
        negative.qty = -1.0;

        let err = PpeService::new(&store).record_event(&negative).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
