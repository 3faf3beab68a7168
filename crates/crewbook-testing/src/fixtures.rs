//! Sample records created through the CLI itself.

use anyhow::Result;

use crate::assertions::created_id;
use crate::world::TestWorld;

/// Company "Acme" with crews A and B; Ana Lopez works in A and Luis Perez in B.
#[derive(Debug, Clone, Copy)]
pub struct CrewFixture {
    pub company: i64,
    pub crew_a: i64,
    pub crew_b: i64,
    pub ana: i64,
    pub luis: i64,
}

impl CrewFixture {
    pub fn create(world: &TestWorld) -> Result<Self> {
        let company = created_id(&world.run_json(&["company", "add", "Acme"])?)?;
        let company_arg = company.to_string();

        let crew_a = created_id(&world.run_json(&[
            "crew", "add", "--company", &company_arg, "A", "--foreman", "Rosa",
        ])?)?;
        let crew_b =
            created_id(&world.run_json(&["crew", "add", "--company", &company_arg, "B"])?)?;

        let ana = hire(world, company, crew_a, "Ana Lopez", "2025-01-06")?;
        let luis = hire(world, company, crew_b, "Luis Perez", "2025-02-03")?;

        Ok(Self {
            company,
            crew_a,
            crew_b,
            ana,
            luis,
        })
    }
}

/// Hire a worker and return the new id.
pub fn hire(world: &TestWorld, company: i64, crew: i64, name: &str, start: &str) -> Result<i64> {
    let company = company.to_string();
    let crew = crew.to_string();
    created_id(&world.run_json(&[
        "worker", "add", "--company", &company, "--crew", &crew, name, "--start", start,
    ])?)
}
