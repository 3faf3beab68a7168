// NOTE: Command Organization
//
// One namespace per record type (company, crew, worker, sick, ppe, warning,
// accident, roster, backup). Each namespace has an `add`-style writer and a
// `list`/`history` reader, so the fourteen menu items of the record keeper
// map onto `<namespace> <verb>` pairs.

mod commands;
mod common;

pub use commands::*;
pub use common::*;

use clap::Parser;

use crate::types::{LogLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "crewbook")]
#[command(about = "Keep HR records for field crews", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (default: CREWBOOK_PATH, then the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}
