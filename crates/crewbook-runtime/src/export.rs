use crewbook_store::{Store, Table};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::Result;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Full-table exports and the order each one is written in.
pub const EXPORT_TABLES: &[(&str, &str)] = &[
    ("companies", "SELECT * FROM companies ORDER BY name"),
    ("crews", "SELECT * FROM crews ORDER BY company_id, crew_code"),
    ("workers", "SELECT * FROM workers ORDER BY id DESC"),
    ("warnings", "SELECT * FROM warnings ORDER BY id DESC"),
    ("accidents", "SELECT * FROM accidents ORDER BY id DESC"),
    (
        "sick_hours",
        "SELECT * FROM sick_hours ORDER BY sick_date DESC, id DESC",
    ),
    (
        "ppe_events",
        "SELECT * FROM ppe_events ORDER BY date DESC, id DESC",
    ),
];

/// Encode a result set as spreadsheet-friendly CSV.
///
/// UTF-8 with a byte-order mark, CRLF line endings, a header row, then one
/// line per row. An empty table encodes to zero bytes, header included.
pub fn csv_bytes(table: &Table) -> Result<Vec<u8>> {
    if table.is_empty() {
        return Ok(Vec::new());
    }

    let mut buf = UTF8_BOM.to_vec();
    {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(&mut buf);
        writer.write_record(&table.columns)?;
        for row in table.string_rows() {
            writer.write_record(&row)?;
        }
        writer.flush()?;
    }
    Ok(buf)
}

/// Write `table` to `path` as CSV, creating parent directories.
pub fn write_csv(table: &Table, path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, csv_bytes(table)?)?;
    Ok(table.len())
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportedTable {
    pub table: &'static str,
    pub path: PathBuf,
    pub rows: usize,
}

pub struct ExportService<'a> {
    store: &'a Store,
}

impl<'a> ExportService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// One `<table>.csv` per table in `dir`.
    pub fn export_all(&self, dir: &Path) -> Result<Vec<ExportedTable>> {
        std::fs::create_dir_all(dir)?;
        let mut exported = Vec::with_capacity(EXPORT_TABLES.len());
        for &(name, sql) in EXPORT_TABLES {
            let table = self.store.query(sql, &[])?;
            let path = dir.join(format!("{}.csv", name));
            let rows = write_csv(&table, &path)?;
            info!(table = name, rows, path = %path.display(), "table exported");
            exported.push(ExportedTable {
                table: name,
                path,
                rows,
            });
        }
        Ok(exported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewbook_store::Value;

    fn table(rows: Vec<Vec<Value>>) -> Table {
        Table {
            columns: vec!["id".into(), "sick_date".into(), "hours".into(), "notes".into()],
            rows,
        }
    }

    #[test]
    fn test_empty_table_is_zero_bytes() {
        assert!(csv_bytes(&table(Vec::new())).unwrap().is_empty());
    }

    #[test]
    fn test_csv_has_bom_header_and_one_line_per_row() {
        let rows = vec![
            vec![
                Value::Integer(2),
                Value::Text("2025-03-04".into()),
                Value::Real(8.0),
                Value::Null,
            ],
            vec![
                Value::Integer(1),
                Value::Text("2025-03-03".into()),
                Value::Real(2.5),
                Value::Text("flu, fever".into()),
            ],
        ];
        let bytes = csv_bytes(&table(rows)).unwrap();

        assert!(bytes.starts_with(UTF8_BOM));
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(text.matches("\r\n").count(), 3);
        assert_eq!(text.lines().count(), 3);

        insta::assert_snapshot!(text.replace("\r\n", "\n"), @r#"
        id,sick_date,hours,notes
        2,2025-03-04,8.0,
        1,2025-03-03,2.5,"flu, fever"
        "#);
    }
}
