// NOTE: Command layout
//
// Each menu item of the record keeper is one stateless subcommand: parse the
// flags, call one workspace operation, render one result. Nothing survives
// between invocations except the store file itself.
//
// stdout carries the result (plain or JSON envelope); logs and errors go to
// stderr so JSON output can be piped straight into other tools.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{
    AccidentCommand, BackupCommand, Cli, Commands, CompanyCommand, CrewCommand, PpeCommand,
    RosterCommand, SickCommand, WarningCommand, WorkerCommand,
};
pub use commands::run;
pub use logging::init_logging;
pub use presentation::render_error;
pub use types::{LogLevel, OutputFormat};
