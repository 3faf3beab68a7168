use chrono::NaiveDate;
use crewbook_store::{DateRange, HistoryFilter, PpeFilter, RosterFilter, Store, Table};
use crewbook_types::{selected, today};
use serde::Serialize;

use crate::config::ReportConfig;
use crate::{Error, Result};

/// A history table and, for reports that have one, its per-worker totals.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryReport {
    pub history: Table,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totals: Option<Table>,
}

pub struct ReportService<'a> {
    store: &'a Store,
    defaults: &'a ReportConfig,
}

impl<'a> ReportService<'a> {
    pub fn new(store: &'a Store, defaults: &'a ReportConfig) -> Self {
        Self { store, defaults }
    }

    /// Fill in a missing bound: `reports.default_from` and today.
    pub fn range(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> DateRange {
        DateRange::new(
            from.unwrap_or(self.defaults.default_from),
            to.unwrap_or_else(today),
        )
    }

    pub fn sick_hours(&self, filter: &HistoryFilter) -> Result<HistoryReport> {
        Ok(HistoryReport {
            history: self.store.sick_history(filter)?,
            totals: Some(self.store.sick_totals(filter)?),
        })
    }

    pub fn warnings(&self, filter: &HistoryFilter) -> Result<HistoryReport> {
        Ok(HistoryReport {
            history: self.store.warning_history(filter)?,
            totals: Some(self.store.warning_totals(filter)?),
        })
    }

    pub fn accidents(&self, filter: &HistoryFilter) -> Result<HistoryReport> {
        Ok(HistoryReport {
            history: self.store.accident_history(filter)?,
            totals: Some(self.store.accident_totals(filter)?),
        })
    }

    pub fn ppe_movements(&self, filter: &PpeFilter) -> Result<HistoryReport> {
        Ok(HistoryReport {
            history: self.store.ppe_history(filter)?,
            totals: None,
        })
    }

    pub fn roster(&self, filter: &RosterFilter) -> Result<Table> {
        Ok(self.store.crew_roster(filter)?)
    }

    /// Print-ready crew listing; both pickers must hold a real selection.
    pub fn crew_listing(&self, company_id: i64, crew_id: i64) -> Result<Table> {
        if selected(company_id).is_none() || selected(crew_id).is_none() {
            return Err(Error::validation("Select a company and a crew"));
        }
        Ok(self.store.crew_listing(company_id, crew_id)?)
    }
}
