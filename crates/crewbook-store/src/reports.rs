use chrono::NaiveDate;
use crewbook_types::{PpeAction, PpeItem, RosterStatus, iso_date, selected};
use rusqlite::ToSql;
use serde::Serialize;

use crate::{Error, Result, Store, Table};

// NOTE: Report shape
//
// Every history view is: entity -> workers -> companies -> crews, filtered by an
// inclusive date range compared as ISO-8601 strings, an optional name substring
// (SQLite LIKE), optional enum filters, newest date first then newest id.
// The companion totals query reuses the same WHERE clause and parameters.

/// Inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }
}

/// Filters shared by the sick hour, warning and accident reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryFilter {
    pub range: DateRange,
    pub name_contains: Option<String>,
}

impl HistoryFilter {
    pub fn new(range: DateRange) -> Self {
        Self {
            range,
            name_contains: None,
        }
    }

    pub fn with_name(mut self, name_contains: impl Into<String>) -> Self {
        self.name_contains = Some(name_contains.into());
        self
    }
}

/// PPE movement report filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PpeFilter {
    pub history: HistoryFilter,
    pub item: Option<PpeItem>,
    pub action: Option<PpeAction>,
}

/// Crew roster filters. Company and crew use the picker sentinel: any id
/// `<= 0` means "all".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterFilter {
    pub company_id: i64,
    pub crew_id: i64,
    pub status: RosterStatus,
    /// Only consulted for `RosterStatus::Inactive`, against termination dates.
    pub range: DateRange,
}

struct Aggregate {
    expr: &'static str,
    alias: &'static str,
    order: &'static str,
}

struct HistoryShape {
    table: &'static str,
    alias: &'static str,
    date_column: &'static str,
    columns: &'static str,
    aggregate: Option<Aggregate>,
}

const SICK_HOURS: HistoryShape = HistoryShape {
    table: "sick_hours",
    alias: "s",
    date_column: "sick_date",
    columns: "s.id, s.sick_date, s.hours, s.notes",
    aggregate: Some(Aggregate {
        expr: "SUM(s.hours)",
        alias: "total_hours",
        order: "w.full_name",
    }),
};

const WARNINGS: HistoryShape = HistoryShape {
    table: "warnings",
    alias: "wr",
    date_column: "warn_date",
    columns: "wr.id, wr.warn_date, wr.warn_type, wr.notes",
    aggregate: Some(Aggregate {
        expr: "COUNT(*)",
        alias: "total_warnings",
        order: "total_warnings DESC, w.full_name",
    }),
};

const ACCIDENTS: HistoryShape = HistoryShape {
    table: "accidents",
    alias: "a",
    date_column: "accident_date",
    columns: "a.id, a.accident_date, a.injury_type, a.description, a.notes",
    aggregate: Some(Aggregate {
        expr: "COUNT(*)",
        alias: "total_accidents",
        order: "total_accidents DESC, w.full_name",
    }),
};

const PPE_EVENTS: HistoryShape = HistoryShape {
    table: "ppe_events",
    alias: "pe",
    date_column: "date",
    columns: "pe.id, pe.date, pe.item, pe.action, pe.qty, pe.size, pe.notes",
    aggregate: None,
};

/// WHERE clause accumulator with positional parameters.
struct Filter {
    clauses: Vec<String>,
    params: Vec<Box<dyn ToSql>>,
}

impl Filter {
    fn new() -> Self {
        Self {
            clauses: Vec::new(),
            params: Vec::new(),
        }
    }

    fn push(&mut self, clause: impl Into<String>) {
        self.clauses.push(clause.into());
    }

    fn bind(&mut self, clause: impl Into<String>, param: impl ToSql + 'static) {
        self.clauses.push(clause.into());
        self.params.push(Box::new(param));
    }

    fn between(&mut self, column: &str, range: &DateRange) {
        self.clauses.push(format!("{} BETWEEN ? AND ?", column));
        self.params.push(Box::new(iso_date(range.from)));
        self.params.push(Box::new(iso_date(range.to)));
    }

    fn name_contains(&mut self, term: Option<&str>) {
        if let Some(term) = term.map(str::trim).filter(|t| !t.is_empty()) {
            self.bind("w.full_name LIKE ?", format!("%{}%", term));
        }
    }

    fn sql(&self) -> String {
        if self.clauses.is_empty() {
            "WHERE 1=1".to_string()
        } else {
            format!("WHERE {}", self.clauses.join(" AND "))
        }
    }

    fn params(&self) -> Vec<&dyn ToSql> {
        self.params.iter().map(|p| p.as_ref()).collect()
    }
}

fn history_filter(shape: &HistoryShape, filter: &HistoryFilter) -> Filter {
    let mut conditions = Filter::new();
    conditions.between(&format!("{}.{}", shape.alias, shape.date_column), &filter.range);
    conditions.name_contains(filter.name_contains.as_deref());
    conditions
}

impl Store {
    fn history(&self, shape: &HistoryShape, conditions: &Filter) -> Result<Table> {
        let query = format!(
            r#"
            SELECT {columns}, w.full_name AS worker, c.name AS company, cr.crew_code AS crew
            FROM {table} {alias}
            JOIN workers w ON w.id = {alias}.worker_id
            JOIN companies c ON c.id = w.company_id
            JOIN crews cr ON cr.id = w.crew_id
            {where_clause}
            ORDER BY {alias}.{date} DESC, {alias}.id DESC
            "#,
            columns = shape.columns,
            table = shape.table,
            alias = shape.alias,
            date = shape.date_column,
            where_clause = conditions.sql(),
        );
        self.query(&query, &conditions.params())
    }

    fn totals(&self, shape: &HistoryShape, conditions: &Filter) -> Result<Table> {
        let Some(aggregate) = &shape.aggregate else {
            return Err(Error::Query(format!("{} has no totals report", shape.table)));
        };
        let query = format!(
            r#"
            SELECT w.full_name AS worker, {expr} AS {total}
            FROM {table} {alias}
            JOIN workers w ON w.id = {alias}.worker_id
            {where_clause}
            GROUP BY {alias}.worker_id
            ORDER BY {order}
            "#,
            expr = aggregate.expr,
            total = aggregate.alias,
            table = shape.table,
            alias = shape.alias,
            where_clause = conditions.sql(),
            order = aggregate.order,
        );
        self.query(&query, &conditions.params())
    }

    /// Columns: id, sick_date, hours, notes, worker, company, crew.
    pub fn sick_history(&self, filter: &HistoryFilter) -> Result<Table> {
        self.history(&SICK_HOURS, &history_filter(&SICK_HOURS, filter))
    }

    /// Columns: worker, total_hours; ordered by worker name.
    pub fn sick_totals(&self, filter: &HistoryFilter) -> Result<Table> {
        self.totals(&SICK_HOURS, &history_filter(&SICK_HOURS, filter))
    }

    /// Columns: id, warn_date, warn_type, notes, worker, company, crew.
    pub fn warning_history(&self, filter: &HistoryFilter) -> Result<Table> {
        self.history(&WARNINGS, &history_filter(&WARNINGS, filter))
    }

    /// Columns: worker, total_warnings; most warnings first.
    pub fn warning_totals(&self, filter: &HistoryFilter) -> Result<Table> {
        self.totals(&WARNINGS, &history_filter(&WARNINGS, filter))
    }

    /// Columns: id, accident_date, injury_type, description, notes, worker, company, crew.
    pub fn accident_history(&self, filter: &HistoryFilter) -> Result<Table> {
        self.history(&ACCIDENTS, &history_filter(&ACCIDENTS, filter))
    }

    /// Columns: worker, total_accidents; most accidents first.
    pub fn accident_totals(&self, filter: &HistoryFilter) -> Result<Table> {
        self.totals(&ACCIDENTS, &history_filter(&ACCIDENTS, filter))
    }

    /// Columns: id, date, item, action, qty, size, notes, worker, company, crew.
    pub fn ppe_history(&self, filter: &PpeFilter) -> Result<Table> {
        let mut conditions = history_filter(&PPE_EVENTS, &filter.history);
        if let Some(item) = filter.item {
            conditions.bind("pe.item = ?", item.as_str());
        }
        if let Some(action) = filter.action {
            conditions.bind("pe.action = ?", action.as_str());
        }
        self.history(&PPE_EVENTS, &conditions)
    }

    /// Workers of a company/crew with their PPE snapshot, by status.
    pub fn crew_roster(&self, filter: &RosterFilter) -> Result<Table> {
        let mut conditions = Filter::new();
        if let Some(company_id) = selected(filter.company_id) {
            conditions.bind("w.company_id = ?", company_id);
        }
        if let Some(crew_id) = selected(filter.crew_id) {
            conditions.bind("w.crew_id = ?", crew_id);
        }
        match filter.status {
            RosterStatus::Active => conditions.push("w.active = 1"),
            RosterStatus::Inactive => {
                conditions.push("w.active = 0");
                conditions.between("w.termination_date", &filter.range);
            }
            RosterStatus::All => {}
        }

        let query = format!(
            r#"
            SELECT w.full_name AS worker, w.start_date, w.termination_date,
                   CASE WHEN w.active = 1 THEN 'Yes' ELSE 'No' END AS active,
                   c.name AS company, cr.crew_code AS crew, cr.foreman_name AS foreman,
                   w.gloves_issued_date, w.gloves_returned_date,
                   w.sleeves_issued_date, w.sleeves_returned_date, w.notes
            FROM workers w
            JOIN companies c ON c.id = w.company_id
            JOIN crews cr ON cr.id = w.crew_id
            {}
            ORDER BY w.full_name
            "#,
            conditions.sql()
        );
        self.query(&query, &conditions.params())
    }

    /// Print-ready listing of one crew. Both company and crew must be selected.
    pub fn crew_listing(&self, company_id: i64, crew_id: i64) -> Result<Table> {
        let (Some(company_id), Some(crew_id)) = (selected(company_id), selected(crew_id)) else {
            return Err(Error::Query(
                "select a company and a crew for the listing".to_string(),
            ));
        };

        self.query(
            r#"
            SELECT w.full_name AS worker,
                   COALESCE(w.start_date, '') AS start_date,
                   CASE WHEN w.active = 1 THEN 'Yes' ELSE 'No' END AS active,
                   COALESCE(w.gloves_issued_date, '') AS gloves_issued,
                   COALESCE(w.gloves_returned_date, '') AS gloves_returned,
                   COALESCE(w.sleeves_issued_date, '') AS sleeves_issued,
                   COALESCE(w.sleeves_returned_date, '') AS sleeves_returned
            FROM workers w
            WHERE w.company_id = ?1 AND w.crew_id = ?2
            ORDER BY w.full_name
            "#,
            rusqlite::params![company_id, crew_id],
        )
    }
}
