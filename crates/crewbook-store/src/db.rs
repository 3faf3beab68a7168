use rusqlite::types::Value;
use rusqlite::{Connection, ToSql, Transaction};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{Result, Table, schema};

/// Handle to the store file.
///
/// Holds only the location. Every call opens its own connection, runs, and
/// closes it again: no pooling and nothing shared between calls. Writes run
/// in autocommit mode, so each statement is durable as soon as it returns.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Open the store at `path`, creating any missing tables.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self { path: path.into() };
        if let Some(parent) = store.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = store.connect()?;
        schema::init_schema(&conn)?;
        Ok(store)
    }

    /// Copy `seed` into place if the store file does not exist yet, then open.
    pub fn bootstrap(path: impl Into<PathBuf>, seed: Option<&Path>) -> Result<Self> {
        let path = path.into();
        schema::bootstrap_from_seed(&path, seed)?;
        Self::open(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    /// Run a read and return every row eagerly along with the column names.
    ///
    /// There is no paging; callers put any LIMIT in the SQL text.
    pub fn query(&self, sql: &str, params: &[&dyn ToSql]) -> Result<Table> {
        debug!(sql = sql.trim(), params = params.len(), "query");
        let conn = self.connect()?;
        let mut stmt = conn.prepare(sql)?;

        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        let width = columns.len();

        let rows = stmt
            .query_map(params, |row| {
                (0..width)
                    .map(|i| row.get::<_, Value>(i))
                    .collect::<rusqlite::Result<Vec<_>>>()
            })?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(Table { columns, rows })
    }

    /// Run a single write statement and return the number of changed rows.
    pub fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> Result<usize> {
        debug!(sql = sql.trim(), params = params.len(), "execute");
        let conn = self.connect()?;
        let changed = conn.execute(sql, params)?;
        Ok(changed)
    }

    /// Run an INSERT and return the new row id.
    pub fn insert(&self, sql: &str, params: &[&dyn ToSql]) -> Result<i64> {
        debug!(sql = sql.trim(), params = params.len(), "insert");
        let conn = self.connect()?;
        conn.execute(sql, params)?;
        Ok(conn.last_insert_rowid())
    }

    /// Run `f` on one connection inside a transaction.
    ///
    /// Commits when `f` returns `Ok`; any error drops the transaction,
    /// which rolls every statement in it back.
    pub fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T>,
    {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let value = f(&tx)?;
        tx.commit()?;
        Ok(value)
    }

    /// Run a single-value query such as `SELECT COUNT(*)`.
    pub fn scalar_i64(&self, sql: &str, params: &[&dyn ToSql]) -> Result<i64> {
        let conn = self.connect()?;
        let value = conn.query_row(sql, params, |row| row.get(0))?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::params;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path().join("crewbook.db")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_open_creates_all_tables() {
        let (_dir, store) = temp_store();

        let table = store
            .query(
                "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
                &[],
            )
            .unwrap();
        let names: Vec<String> = (0..table.len())
            .filter_map(|i| table.text(i, "name"))
            .collect();

        for expected in crate::TABLES {
            assert!(names.iter().any(|n| n == expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_open_twice_keeps_data() {
        let (dir, store) = temp_store();
        store
            .execute("INSERT INTO companies(name) VALUES(?1)", params!["Acme"])
            .unwrap();

        let reopened = Store::open(dir.path().join("crewbook.db")).unwrap();
        let count = reopened
            .scalar_i64("SELECT COUNT(*) FROM companies", &[])
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_query_returns_columns_for_empty_result() {
        let (_dir, store) = temp_store();
        let table = store.query("SELECT id, name FROM companies", &[]).unwrap();

        assert_eq!(table.columns, vec!["id", "name"]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_insert_returns_row_id() {
        let (_dir, store) = temp_store();
        let first = store
            .insert("INSERT INTO companies(name) VALUES(?1)", params!["Acme"])
            .unwrap();
        let second = store
            .insert("INSERT INTO companies(name) VALUES(?1)", params!["Birch"])
            .unwrap();

        assert_eq!(second, first + 1);
    }

    #[test]
    fn test_transaction_rolls_back_on_error() {
        let (_dir, store) = temp_store();

        let result: Result<()> = store.transaction(|tx| {
            tx.execute("INSERT INTO companies(name) VALUES('Acme')", [])?;
            tx.execute("INSERT INTO companies(name) VALUES('Acme')", [])?;
            Ok(())
        });

        assert!(result.unwrap_err().is_unique_violation());
        let count = store
            .scalar_i64("SELECT COUNT(*) FROM companies", &[])
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_bootstrap_copies_seed_only_when_store_missing() {
        let dir = TempDir::new().unwrap();
        let seed_path = dir.path().join("seed.db");
        let seed = Store::open(&seed_path).unwrap();
        seed.execute("INSERT INTO companies(name) VALUES('Seeded')", &[])
            .unwrap();

        let store_path = dir.path().join("live.db");
        let store = Store::bootstrap(&store_path, Some(&seed_path)).unwrap();
        assert_eq!(store.list_companies().unwrap()[0].name, "Seeded");

        store
            .execute("INSERT INTO companies(name) VALUES('Local')", &[])
            .unwrap();
        let again = Store::bootstrap(&store_path, Some(&seed_path)).unwrap();
        assert_eq!(again.list_companies().unwrap().len(), 2);
    }

    #[test]
    fn test_bootstrap_without_seed_creates_empty_store() {
        let dir = TempDir::new().unwrap();
        let store_path = dir.path().join("live.db");
        let missing_seed = dir.path().join("nope.db");

        let store = Store::bootstrap(&store_path, Some(&missing_seed)).unwrap();
        assert!(store_path.exists());
        assert!(store.list_companies().unwrap().is_empty());
    }
}
