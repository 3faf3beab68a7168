mod context;

pub mod accident;
pub mod backup;
pub mod company;
pub mod crew;
pub mod export;
pub mod init;
pub mod ppe;
pub mod roster;
pub mod sick;
pub mod status;
pub mod warning;
pub mod worker;

pub use context::HandlerContext;

use crate::args::HistoryArgs;
use crewbook_runtime::{Workspace, write_csv};
use crewbook_store::{HistoryFilter, Table};
use std::path::{Path, PathBuf};

fn history_filter(workspace: &Workspace, args: &HistoryArgs) -> HistoryFilter {
    let range = workspace.reports().range(args.from, args.to);
    let filter = HistoryFilter::new(range);
    match args.name.as_deref() {
        Some(name) => filter.with_name(name),
        None => filter,
    }
}

/// Write `table` when a CSV path was requested, recording the path.
fn maybe_csv(table: &Table, path: Option<&Path>, written: &mut Vec<PathBuf>) -> anyhow::Result<()> {
    if let Some(path) = path {
        write_csv(table, path)?;
        written.push(path.to_path_buf());
    }
    Ok(())
}
