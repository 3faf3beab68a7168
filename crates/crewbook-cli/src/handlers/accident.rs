use super::{HandlerContext, history_filter, maybe_csv};
use crate::args::TotalsArgs;
use crate::presentation::presenters::{present_created, present_report};
use anyhow::Result;
use chrono::NaiveDate;
use crewbook_runtime::{NewAccident, Workspace};
use crewbook_types::today;

pub struct AddArgs {
    pub worker_id: i64,
    pub injury: String,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub notes: Option<String>,
}

pub fn add(workspace: &Workspace, args: AddArgs, ctx: &HandlerContext) -> Result<()> {
    let id = workspace.incidents().record_accident(&NewAccident {
        worker_id: args.worker_id,
        date: args.date.unwrap_or_else(today),
        injury_type: args.injury,
        description: args.description,
        notes: args.notes,
    })?;
    ctx.render(present_created("accident", id))
}

pub fn history(workspace: &Workspace, args: &TotalsArgs, ctx: &HandlerContext) -> Result<()> {
    let filter = history_filter(workspace, &args.history);
    let report = workspace.reports().accidents(&filter)?;

    let mut written = Vec::new();
    maybe_csv(&report.history, args.history.csv.as_deref(), &mut written)?;
    if let Some(totals) = &report.totals {
        maybe_csv(totals, args.totals_csv.as_deref(), &mut written)?;
    }
    ctx.render(present_report("Accidents", report, written))
}
