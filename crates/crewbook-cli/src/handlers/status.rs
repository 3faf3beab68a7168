use super::HandlerContext;
use crate::presentation::presenters::present_status;
use crate::presentation::view_models::StatusViewModel;
use anyhow::Result;
use crewbook_runtime::Workspace;

pub fn handle(workspace: &Workspace, ctx: &HandlerContext) -> Result<()> {
    let store_path = workspace.store().path().to_path_buf();
    let status = StatusViewModel {
        data_dir: workspace.data_dir().to_path_buf(),
        store_exists: store_path.exists(),
        store_path,
        worker_count: workspace.store().count_workers()?,
    };
    ctx.render(present_status(status))
}
