use super::common::{HistoryArgs, SnapshotArgs, TotalsArgs};
use crate::types::StatusArg;
use chrono::NaiveDate;
use clap::Subcommand;
use crewbook_types::{PpeAction, PpeItem, WarningType};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Write a default config.toml and create the store")]
    Init,

    #[command(about = "Show the data directory, store file and worker count")]
    Status,

    #[command(about = "Add and list companies")]
    Company {
        #[command(subcommand)]
        command: CompanyCommand,
    },

    #[command(about = "Add and list crews of a company")]
    Crew {
        #[command(subcommand)]
        command: CrewCommand,
    },

    #[command(about = "Hire, edit, deactivate or delete workers")]
    Worker {
        #[command(subcommand)]
        command: WorkerCommand,
    },

    #[command(about = "Record sick hours and view their history")]
    Sick {
        #[command(subcommand)]
        command: SickCommand,
    },

    #[command(about = "Edit PPE dates, log PPE movements and view their history")]
    Ppe {
        #[command(subcommand)]
        command: PpeCommand,
    },

    #[command(about = "Record warnings and view their history")]
    Warning {
        #[command(subcommand)]
        command: WarningCommand,
    },

    #[command(about = "Record accidents and view their history")]
    Accident {
        #[command(subcommand)]
        command: AccidentCommand,
    },

    #[command(about = "Crew history by status and printable crew listings")]
    Roster {
        #[command(subcommand)]
        command: RosterCommand,
    },

    #[command(about = "Create or restore a zip backup of the store")]
    Backup {
        #[command(subcommand)]
        command: BackupCommand,
    },

    #[command(about = "Export every table to CSV")]
    Export {
        /// Output directory
        #[arg(long, default_value = "export")]
        dir: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum CompanyCommand {
    Add { name: String },
    List,
}

#[derive(Subcommand)]
pub enum CrewCommand {
    Add {
        #[arg(long)]
        company: i64,

        code: String,

        #[arg(long, default_value = "")]
        foreman: String,
    },
    List {
        #[arg(long)]
        company: i64,
    },
}

#[derive(Subcommand)]
pub enum WorkerCommand {
    #[command(about = "Hire a worker into a company crew")]
    Add {
        #[arg(long)]
        company: i64,

        #[arg(long)]
        crew: i64,

        name: String,

        /// Start date (default: today)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Gloves issued at hire on this date
        #[arg(long)]
        gloves_issued: Option<NaiveDate>,

        /// Sleeves issued at hire on this date
        #[arg(long)]
        sleeves_issued: Option<NaiveDate>,
    },

    #[command(about = "List workers, newest first")]
    List {
        #[arg(long)]
        name: Option<String>,

        /// Sort by name instead of newest first
        #[arg(long)]
        by_name: bool,

        /// Row limit (default: reports.search_limit, or picker_limit with --by-name)
        #[arg(long)]
        limit: Option<usize>,
    },

    #[command(about = "Show one worker with the PPE snapshot")]
    Show { id: i64 },

    #[command(about = "Change name, start date, notes or active flag")]
    Update {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        start: Option<NaiveDate>,

        /// New notes; an empty value clears them
        #[arg(long)]
        notes: Option<String>,

        #[arg(long)]
        active: Option<bool>,
    },

    #[command(about = "Mark inactive with a termination date (keeps history)")]
    Deactivate {
        id: i64,

        /// Termination date (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    #[command(about = "Permanently remove a worker and all history")]
    Delete {
        id: i64,

        /// Must be exactly DELETE
        #[arg(long)]
        confirm: String,
    },
}

#[derive(Subcommand)]
pub enum SickCommand {
    Add {
        #[arg(long)]
        worker: i64,

        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long, default_value_t = crewbook_runtime::DEFAULT_SICK_HOURS)]
        hours: f64,

        #[arg(long)]
        notes: Option<String>,
    },
    History(TotalsArgs),
}

#[derive(Subcommand)]
pub enum PpeCommand {
    #[command(about = "Edit the four PPE snapshot dates of a worker")]
    Set {
        worker: i64,

        #[command(flatten)]
        fields: SnapshotArgs,
    },

    #[command(about = "Log a PPE issue or return")]
    Log {
        #[arg(long)]
        worker: i64,

        #[arg(long)]
        item: PpeItem,

        #[arg(long)]
        action: PpeAction,

        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long, default_value_t = 1.0)]
        qty: f64,

        /// Glove size (8.5 to 12)
        #[arg(long)]
        size: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    History {
        #[command(flatten)]
        history: HistoryArgs,

        #[arg(long)]
        item: Option<PpeItem>,

        #[arg(long)]
        action: Option<PpeAction>,
    },
}

#[derive(Subcommand)]
pub enum WarningCommand {
    Add {
        #[arg(long)]
        worker: i64,

        #[arg(long = "type")]
        warn_type: WarningType,

        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long)]
        notes: Option<String>,
    },
    History(TotalsArgs),
}

#[derive(Subcommand)]
pub enum AccidentCommand {
    Add {
        #[arg(long)]
        worker: i64,

        #[arg(long)]
        injury: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long)]
        notes: Option<String>,
    },
    History(TotalsArgs),
}

#[derive(Subcommand)]
pub enum RosterCommand {
    #[command(about = "Workers by company, crew and status")]
    History {
        #[arg(long, default_value_t = crewbook_types::NONE_SELECTED)]
        company: i64,

        #[arg(long, default_value_t = crewbook_types::NONE_SELECTED)]
        crew: i64,

        #[arg(long, value_enum, default_value_t = StatusArg::Active)]
        status: StatusArg,

        /// Termination dates from (inactive only)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Termination dates to (inactive only)
        #[arg(long)]
        to: Option<NaiveDate>,

        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,
    },

    #[command(about = "Printable listing of one crew")]
    Print {
        #[arg(long)]
        company: i64,

        #[arg(long)]
        crew: i64,

        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum BackupCommand {
    Create {
        /// Archive path (default: backup_crewbook_<timestamp>.zip)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    Restore { archive: PathBuf },
}
