// SQLite record store
// One store file, seven tables, a fresh connection per call

mod db;
mod error;
mod queries;
mod records;
mod reports;
mod schema;
mod table;

// Public API
pub use db::Store;
pub use error::{Error, Result};
pub use queries::worker::WorkerOrder;
pub use records::{
    AccidentRecord, Company, Crew, DeletedHistory, NewWorkerRecord, PpeEventRecord, PpeSnapshot,
    SickHourRecord, WarningRecord, Worker, WorkerEdit, WorkerListing,
};
pub use reports::{DateRange, HistoryFilter, PpeFilter, RosterFilter};
pub use schema::{TABLES, bootstrap_from_seed, init_schema};
pub use table::{Table, format_value};

pub use rusqlite::ToSql;
pub use rusqlite::types::Value;
