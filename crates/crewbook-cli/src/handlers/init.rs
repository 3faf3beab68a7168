use super::HandlerContext;
use crate::presentation::presenters::present_init;
use anyhow::Result;
use crewbook_runtime::Workspace;
use std::path::Path;

pub fn handle(data_dir: &Path, ctx: &HandlerContext) -> Result<()> {
    let init = Workspace::init(data_dir)?;
    ctx.render(present_init(init))
}
