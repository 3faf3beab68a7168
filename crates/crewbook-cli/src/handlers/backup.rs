use super::HandlerContext;
use crate::presentation::presenters::present_backup;
use anyhow::Result;
use crewbook_runtime::Workspace;
use std::path::Path;

pub fn create(workspace: &Workspace, output: Option<&Path>, ctx: &HandlerContext) -> Result<()> {
    let info = workspace.create_backup(output)?;
    ctx.render(present_backup(info, false))
}

/// Overwrites the live store.
pub fn restore(workspace: &Workspace, archive: &Path, ctx: &HandlerContext) -> Result<()> {
    let info = workspace.restore_backup(archive)?;
    ctx.render(present_backup(info, true))
}
