use super::HandlerContext;
use crate::presentation::presenters::{
    present_created, present_deactivated, present_deleted, present_worker, present_workers,
};
use anyhow::Result;
use chrono::NaiveDate;
use crewbook_runtime::{NewWorker, Workspace, WorkerUpdate};
use crewbook_types::{iso_date, parse_iso_date, today};

pub struct AddArgs {
    pub company_id: i64,
    pub crew_id: i64,
    pub name: String,
    pub start: Option<NaiveDate>,
    pub gloves_issued: Option<NaiveDate>,
    pub sleeves_issued: Option<NaiveDate>,
}

pub fn add(workspace: &Workspace, args: AddArgs, ctx: &HandlerContext) -> Result<()> {
    let id = workspace.workers().add(&NewWorker {
        company_id: args.company_id,
        crew_id: args.crew_id,
        full_name: args.name,
        start_date: args.start.unwrap_or_else(today),
        gloves_issued: args.gloves_issued,
        sleeves_issued: args.sleeves_issued,
    })?;
    ctx.render(present_created("worker", id))
}

pub fn list(
    workspace: &Workspace,
    name: Option<&str>,
    by_name: bool,
    limit: Option<usize>,
    ctx: &HandlerContext,
) -> Result<()> {
    let limits = &workspace.config().reports;
    let workers = if by_name {
        workspace
            .workers()
            .picker(name, limit.unwrap_or(limits.picker_limit))?
    } else {
        workspace
            .workers()
            .search(name, limit.unwrap_or(limits.search_limit))?
    };
    ctx.render(present_workers(workers))
}

pub fn show(workspace: &Workspace, id: i64, ctx: &HandlerContext) -> Result<()> {
    let worker = workspace.workers().get(id)?;
    ctx.render(present_worker(worker, "Worker"))
}

pub struct UpdateArgs {
    pub name: Option<String>,
    pub start: Option<NaiveDate>,
    pub notes: Option<String>,
    pub active: Option<bool>,
}

/// Fields left out keep their stored value.
pub fn update(
    workspace: &Workspace,
    id: i64,
    args: UpdateArgs,
    ctx: &HandlerContext,
) -> Result<()> {
    let workers = workspace.workers();
    let current = workers.get(id)?;

    let update = WorkerUpdate {
        full_name: args.name.unwrap_or(current.full_name),
        start_date: args
            .start
            .or_else(|| parse_iso_date(current.start_date.as_deref()))
            .unwrap_or_else(today),
        notes: args.notes.or(current.notes),
        active: args.active.unwrap_or(current.active),
    };
    workers.update(id, &update)?;

    let worker = workers.get(id)?;
    ctx.render(present_worker(worker, "Worker updated"))
}

pub fn deactivate(
    workspace: &Workspace,
    id: i64,
    date: Option<NaiveDate>,
    ctx: &HandlerContext,
) -> Result<()> {
    let date = workspace.workers().deactivate(id, date)?;
    ctx.render(present_deactivated(id, iso_date(date)))
}

pub fn delete(
    workspace: &Workspace,
    id: i64,
    confirmation: &str,
    ctx: &HandlerContext,
) -> Result<()> {
    let deleted = workspace.workers().delete(id, confirmation)?;
    ctx.render(present_deleted(id, deleted))
}
