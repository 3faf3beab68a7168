use rusqlite::params;

use crate::{Result, Store, records::Company};

impl Store {
    /// Insert a company. A repeated name fails with a UNIQUE violation.
    pub fn insert_company(&self, name: &str) -> Result<i64> {
        self.insert("INSERT INTO companies(name) VALUES(?1)", params![name])
    }

    pub fn list_companies(&self) -> Result<Vec<Company>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, name
            FROM companies
            ORDER BY name
            "#,
        )?;

        let companies = stmt
            .query_map([], |row| {
                Ok(Company {
                    id: row.get(0)?,
                    name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                })
            })?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(companies)
    }
}
