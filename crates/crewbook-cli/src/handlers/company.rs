use super::HandlerContext;
use crate::presentation::presenters::{present_companies, present_created};
use anyhow::Result;
use crewbook_runtime::Workspace;

pub fn add(workspace: &Workspace, name: &str, ctx: &HandlerContext) -> Result<()> {
    let id = workspace.crews().add_company(name)?;
    ctx.render(present_created("company", id))
}

pub fn list(workspace: &Workspace, ctx: &HandlerContext) -> Result<()> {
    let companies = workspace.crews().list_companies()?;
    ctx.render(present_companies(companies))
}
