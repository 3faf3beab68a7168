use rusqlite::Connection;
use std::path::Path;
use tracing::info;

use crate::Result;

/// Every table in the store, parents first.
pub const TABLES: &[&str] = &[
    "companies",
    "crews",
    "workers",
    "warnings",
    "accidents",
    "sick_hours",
    "ppe_events",
];

// NOTE: Store layout
//
// - Tables are created if absent and never altered; there is no migration path.
// - No FOREIGN KEY clauses: references are advisory and the callers only ever
//   pass ids they looked up first.
// - Dates are TEXT in zero-padded ISO-8601 so BETWEEN on strings is calendar order.
// - The PPE columns on workers are a snapshot edited on their own; ppe_events is
//   an independent append-only ledger. Nothing keeps the two in sync.

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS companies (
            id INTEGER PRIMARY KEY,
            name TEXT UNIQUE
        );

        CREATE TABLE IF NOT EXISTS crews (
            id INTEGER PRIMARY KEY,
            company_id INT,
            crew_code TEXT,
            foreman_name TEXT,
            UNIQUE (company_id, crew_code)
        );

        CREATE TABLE IF NOT EXISTS workers (
            id INTEGER PRIMARY KEY,
            full_name TEXT,
            company_id INT,
            crew_id INT,
            start_date TEXT,
            termination_date TEXT,
            active INT DEFAULT 1,
            gloves_issued_date TEXT,
            gloves_returned_date TEXT,
            sleeves_issued_date TEXT,
            sleeves_returned_date TEXT,
            notes TEXT
        );

        CREATE TABLE IF NOT EXISTS warnings (
            id INTEGER PRIMARY KEY,
            worker_id INT,
            warn_date TEXT,
            warn_type TEXT,
            notes TEXT
        );

        CREATE TABLE IF NOT EXISTS accidents (
            id INTEGER PRIMARY KEY,
            worker_id INT,
            accident_date TEXT,
            injury_type TEXT,
            description TEXT,
            notes TEXT
        );

        CREATE TABLE IF NOT EXISTS sick_hours (
            id INTEGER PRIMARY KEY,
            worker_id INT,
            sick_date TEXT,
            hours REAL,
            notes TEXT
        );

        CREATE TABLE IF NOT EXISTS ppe_events (
            id INTEGER PRIMARY KEY,
            worker_id INT,
            item TEXT,
            action TEXT,
            date TEXT,
            qty REAL DEFAULT 1,
            size TEXT,
            notes TEXT
        );
        "#,
    )?;

    Ok(())
}

/// First-run bootstrap: when the store file is missing and a seed template
/// exists, copy the template into place. Returns whether a copy happened.
pub fn bootstrap_from_seed(store_path: &Path, seed_path: Option<&Path>) -> Result<bool> {
    if store_path.exists() {
        return Ok(false);
    }

    let Some(seed) = seed_path.filter(|p| p.exists()) else {
        return Ok(false);
    };

    if let Some(parent) = store_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::copy(seed, store_path)?;
    info!(seed = %seed.display(), store = %store_path.display(), "store seeded from template");

    Ok(true)
}
