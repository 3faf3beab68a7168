use super::{HandlerContext, history_filter, maybe_csv};
use crate::args::{HistoryArgs, SnapshotArgs, SnapshotFlag};
use crate::presentation::presenters::{present_created, present_report, present_snapshot};
use anyhow::Result;
use chrono::NaiveDate;
use crewbook_runtime::{DateField, PpeMovement, PpeSnapshotEdit, Workspace};
use crewbook_store::PpeFilter;
use crewbook_types::{PpeAction, PpeItem, today};

/// Overlay one command-line flag on the field loaded from the store.
fn apply(field: &mut DateField, flag: SnapshotFlag) {
    if flag.blank {
        *field = DateField::blank();
    } else if let Some(date) = flag.date {
        *field = DateField::set(date);
    }
}

/// Fields without a flag keep their stored value.
pub fn set(
    workspace: &Workspace,
    worker_id: i64,
    fields: &SnapshotArgs,
    ctx: &HandlerContext,
) -> Result<()> {
    let worker = workspace.workers().get(worker_id)?;
    let mut edit = PpeSnapshotEdit::from_snapshot(&worker.ppe);

    let [gloves_issued, gloves_returned, sleeves_issued, sleeves_returned] = fields.flags();
    apply(&mut edit.gloves_issued, gloves_issued);
    apply(&mut edit.gloves_returned, gloves_returned);
    apply(&mut edit.sleeves_issued, sleeves_issued);
    apply(&mut edit.sleeves_returned, sleeves_returned);

    let ppe = workspace.ppe().set_snapshot(worker.id, &edit)?;
    ctx.render(present_snapshot(worker.id, ppe))
}

pub struct LogArgs {
    pub worker_id: i64,
    pub item: PpeItem,
    pub action: PpeAction,
    pub date: Option<NaiveDate>,
    pub qty: f64,
    pub size: Option<String>,
    pub notes: Option<String>,
}

pub fn log(workspace: &Workspace, args: LogArgs, ctx: &HandlerContext) -> Result<()> {
    let id = workspace.ppe().record_event(&PpeMovement {
        worker_id: args.worker_id,
        item: args.item,
        action: args.action,
        date: args.date.unwrap_or_else(today),
        qty: args.qty,
        size: args.size,
        notes: args.notes,
    })?;
    ctx.render(present_created("PPE event", id))
}

pub fn history(
    workspace: &Workspace,
    args: &HistoryArgs,
    item: Option<PpeItem>,
    action: Option<PpeAction>,
    ctx: &HandlerContext,
) -> Result<()> {
    let filter = PpeFilter {
        history: history_filter(workspace, args),
        item,
        action,
    };
    let report = workspace.reports().ppe_movements(&filter)?;

    let mut written = Vec::new();
    maybe_csv(&report.history, args.csv.as_deref(), &mut written)?;
    ctx.render(present_report("PPE movements", report, written))
}
