use super::{HandlerContext, maybe_csv};
use crate::presentation::presenters::present_table;
use crate::types::StatusArg;
use anyhow::Result;
use chrono::NaiveDate;
use crewbook_runtime::Workspace;
use crewbook_store::RosterFilter;
use std::path::Path;

pub struct HistoryArgs<'a> {
    pub company_id: i64,
    pub crew_id: i64,
    pub status: StatusArg,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub csv: Option<&'a Path>,
}

pub fn history(workspace: &Workspace, args: HistoryArgs<'_>, ctx: &HandlerContext) -> Result<()> {
    let reports = workspace.reports();
    let filter = RosterFilter {
        company_id: args.company_id,
        crew_id: args.crew_id,
        status: args.status.into(),
        range: reports.range(args.from, args.to),
    };
    let rows = reports.roster(&filter)?;

    let mut written = Vec::new();
    maybe_csv(&rows, args.csv, &mut written)?;
    ctx.render(present_table("Crew history", rows, written))
}

pub fn print(
    workspace: &Workspace,
    company_id: i64,
    crew_id: i64,
    csv: Option<&Path>,
    ctx: &HandlerContext,
) -> Result<()> {
    let rows = workspace.reports().crew_listing(company_id, crew_id)?;

    let mut written = Vec::new();
    maybe_csv(&rows, csv, &mut written)?;
    ctx.render(present_table("Crew listing", rows, written))
}
