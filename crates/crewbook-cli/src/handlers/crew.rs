use super::HandlerContext;
use crate::presentation::presenters::{present_created, present_crews};
use anyhow::Result;
use crewbook_runtime::Workspace;

pub fn add(
    workspace: &Workspace,
    company_id: i64,
    code: &str,
    foreman: &str,
    ctx: &HandlerContext,
) -> Result<()> {
    let id = workspace.crews().add_crew(company_id, code, foreman)?;
    ctx.render(present_created("crew", id))
}

pub fn list(workspace: &Workspace, company_id: i64, ctx: &HandlerContext) -> Result<()> {
    let crews = workspace.crews().list_crews(company_id)?;
    ctx.render(present_crews(company_id, crews))
}
