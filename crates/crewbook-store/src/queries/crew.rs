use crewbook_types::selected;
use rusqlite::{OptionalExtension, Row, params};

use crate::{Result, Store, records::Crew};

fn crew_from_row(row: &Row<'_>) -> rusqlite::Result<Crew> {
    Ok(Crew {
        id: row.get(0)?,
        company_id: row.get(1)?,
        crew_code: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        foreman_name: row.get(3)?,
    })
}

impl Store {
    /// Insert a crew. A repeated `(company, code)` fails with a UNIQUE violation.
    pub fn insert_crew(&self, company_id: i64, crew_code: &str, foreman_name: &str) -> Result<i64> {
        self.insert(
            "INSERT INTO crews(company_id, crew_code, foreman_name) VALUES(?1, ?2, ?3)",
            params![company_id, crew_code, foreman_name],
        )
    }

    /// Crews of one company ordered by code; empty when nothing is selected.
    pub fn crews_for_company(&self, company_id: i64) -> Result<Vec<Crew>> {
        let Some(company_id) = selected(company_id) else {
            return Ok(Vec::new());
        };

        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, company_id, crew_code, foreman_name
            FROM crews
            WHERE company_id = ?1
            ORDER BY crew_code
            "#,
        )?;

        let crews = stmt
            .query_map([company_id], crew_from_row)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(crews)
    }

    pub fn get_crew(&self, crew_id: i64) -> Result<Option<Crew>> {
        let conn = self.connect()?;
        let crew = conn
            .query_row(
                r#"
            SELECT id, company_id, crew_code, foreman_name
            FROM crews
            WHERE id = ?1
            "#,
                [crew_id],
                crew_from_row,
            )
            .optional()?;

        Ok(crew)
    }
}
