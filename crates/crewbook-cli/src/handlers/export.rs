use super::HandlerContext;
use crate::presentation::presenters::present_export;
use anyhow::Result;
use crewbook_runtime::Workspace;
use std::path::Path;

pub fn handle(workspace: &Workspace, dir: &Path, ctx: &HandlerContext) -> Result<()> {
    let tables = workspace.exports().export_all(dir)?;
    ctx.render(present_export(dir.to_path_buf(), tables))
}
