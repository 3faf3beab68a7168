use crewbook_store::{Company, Crew, Store};
use crewbook_types::selected;
use tracing::info;

use super::require_text;
use crate::{Error, Result};

/// Companies and crews: append-only, with uniqueness reported as `Duplicate`.
pub struct CrewService<'a> {
    store: &'a Store,
}

impl<'a> CrewService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn add_company(&self, name: &str) -> Result<i64> {
        let name = require_text(name, "Company name")?;
        match self.store.insert_company(name) {
            Ok(id) => {
                info!(company_id = id, name, "company added");
                Ok(id)
            }
            Err(err) if err.is_unique_violation() => {
                Err(Error::Duplicate(format!("Company '{}'", name)))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn list_companies(&self) -> Result<Vec<Company>> {
        Ok(self.store.list_companies()?)
    }

    pub fn add_crew(&self, company_id: i64, crew_code: &str, foreman: &str) -> Result<i64> {
        let company_id =
            selected(company_id).ok_or_else(|| Error::validation("Select a company"))?;
        let crew_code = require_text(crew_code, "Crew code")?;
        match self.store.insert_crew(company_id, crew_code, foreman.trim()) {
            Ok(id) => {
                info!(crew_id = id, company_id, crew_code, "crew added");
                Ok(id)
            }
            Err(err) if err.is_unique_violation() => Err(Error::Duplicate(format!(
                "Crew '{}' for company {}",
                crew_code, company_id
            ))),
            Err(err) => Err(err.into()),
        }
    }

    /// Crews of a company by code; empty when no company is selected.
    pub fn list_crews(&self, company_id: i64) -> Result<Vec<Crew>> {
        Ok(self.store.crews_for_company(company_id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path().join("crewbook.db")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_company_added_once() {
        let (_dir, store) = store();
        let crews = CrewService::new(&store);

        crews.add_company("  Acme ").unwrap();
        let err = crews.add_company("Acme").unwrap_err();

        assert!(matches!(err, Error::Duplicate(_)));
        let companies = crews.list_companies().unwrap();
        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0].name, "Acme");
    }

    #[test]
    fn test_blank_company_rejected() {
        let (_dir, store) = store();
        let err = CrewService::new(&store).add_company("   ").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(store.list_companies().unwrap().is_empty());
    }

    #[test]
    fn test_crew_requires_company_and_code() {
        let (_dir, store) = store();
        let crews = CrewService::new(&store);
        let acme = crews.add_company("Acme").unwrap();

        assert!(matches!(
            crews.add_crew(-1, "C1", "Rosa"),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            crews.add_crew(acme, " ", "Rosa"),
            Err(Error::Validation(_))
        ));

        crews.add_crew(acme, "C1", " Rosa ").unwrap();
        assert!(matches!(
            crews.add_crew(acme, "C1", "Pablo"),
            Err(Error::Duplicate(_))
        ));

        let list = crews.list_crews(acme).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].foreman_name.as_deref(), Some("Rosa"));
    }
}
