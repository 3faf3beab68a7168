use super::{HandlerContext, history_filter, maybe_csv};
use crate::args::TotalsArgs;
use crate::presentation::presenters::{present_created, present_report};
use anyhow::Result;
use chrono::NaiveDate;
use crewbook_runtime::{NewSickHours, Workspace};
use crewbook_types::today;

pub fn add(
    workspace: &Workspace,
    worker_id: i64,
    date: Option<NaiveDate>,
    hours: f64,
    notes: Option<String>,
    ctx: &HandlerContext,
) -> Result<()> {
    let id = workspace.incidents().record_sick_hours(&NewSickHours {
        worker_id,
        date: date.unwrap_or_else(today),
        hours,
        notes,
    })?;
    ctx.render(present_created("sick hours", id))
}

pub fn history(workspace: &Workspace, args: &TotalsArgs, ctx: &HandlerContext) -> Result<()> {
    let filter = history_filter(workspace, &args.history);
    let report = workspace.reports().sick_hours(&filter)?;

    let mut written = Vec::new();
    maybe_csv(&report.history, args.history.csv.as_deref(), &mut written)?;
    if let Some(totals) = &report.totals {
        maybe_csv(totals, args.totals_csv.as_deref(), &mut written)?;
    }
    ctx.render(present_report("Sick hours", report, written))
}
