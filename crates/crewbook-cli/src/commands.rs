use super::args::{
    AccidentCommand, BackupCommand, Cli, Commands, CompanyCommand, CrewCommand, PpeCommand,
    RosterCommand, SickCommand, WarningCommand, WorkerCommand,
};
use super::handlers::{self, HandlerContext};
use anyhow::Result;
use crewbook_runtime::{Workspace, resolve_data_dir};
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let ctx = HandlerContext::new(cli.format);
    debug!(data_dir = %data_dir.display(), "resolved data directory");

    // Init must run before the store is opened so the seed copy is reported.
    if let Commands::Init = cli.command {
        return handlers::init::handle(&data_dir, &ctx);
    }

    let workspace = Workspace::open(data_dir)?;
    let ws = &workspace;

    match cli.command {
        Commands::Init => handlers::init::handle(ws.data_dir(), &ctx),

        Commands::Status => handlers::status::handle(ws, &ctx),

        Commands::Company { command } => match command {
            CompanyCommand::Add { name } => handlers::company::add(ws, &name, &ctx),
            CompanyCommand::List => handlers::company::list(ws, &ctx),
        },

        Commands::Crew { command } => match command {
            CrewCommand::Add {
                company,
                code,
                foreman,
            } => handlers::crew::add(ws, company, &code, &foreman, &ctx),
            CrewCommand::List { company } => handlers::crew::list(ws, company, &ctx),
        },

        Commands::Worker { command } => match command {
            WorkerCommand::Add {
                company,
                crew,
                name,
                start,
                gloves_issued,
                sleeves_issued,
            } => handlers::worker::add(
                ws,
                handlers::worker::AddArgs {
                    company_id: company,
                    crew_id: crew,
                    name,
                    start,
                    gloves_issued,
                    sleeves_issued,
                },
                &ctx,
            ),
            WorkerCommand::List {
                name,
                by_name,
                limit,
            } => handlers::worker::list(ws, name.as_deref(), by_name, limit, &ctx),
            WorkerCommand::Show { id } => handlers::worker::show(ws, id, &ctx),
            WorkerCommand::Update {
                id,
                name,
                start,
                notes,
                active,
            } => handlers::worker::update(
                ws,
                id,
                handlers::worker::UpdateArgs {
                    name,
                    start,
                    notes,
                    active,
                },
                &ctx,
            ),
            WorkerCommand::Deactivate { id, date } => {
                handlers::worker::deactivate(ws, id, date, &ctx)
            }
            WorkerCommand::Delete { id, confirm } => {
                handlers::worker::delete(ws, id, &confirm, &ctx)
            }
        },

        Commands::Sick { command } => match command {
            SickCommand::Add {
                worker,
                date,
                hours,
                notes,
            } => handlers::sick::add(ws, worker, date, hours, notes, &ctx),
            SickCommand::History(args) => handlers::sick::history(ws, &args, &ctx),
        },

        Commands::Ppe { command } => match command {
            PpeCommand::Set { worker, fields } => handlers::ppe::set(ws, worker, &fields, &ctx),
            PpeCommand::Log {
                worker,
                item,
                action,
                date,
                qty,
                size,
                notes,
            } => handlers::ppe::log(
                ws,
                handlers::ppe::LogArgs {
                    worker_id: worker,
                    item,
                    action,
                    date,
                    qty,
                    size,
                    notes,
                },
                &ctx,
            ),
            PpeCommand::History {
                history,
                item,
                action,
            } => handlers::ppe::history(ws, &history, item, action, &ctx),
        },

        Commands::Warning { command } => match command {
            WarningCommand::Add {
                worker,
                warn_type,
                date,
                notes,
            } => handlers::warning::add(ws, worker, warn_type, date, notes, &ctx),
            WarningCommand::History(args) => handlers::warning::history(ws, &args, &ctx),
        },

        Commands::Accident { command } => match command {
            AccidentCommand::Add {
                worker,
                injury,
                description,
                date,
                notes,
            } => handlers::accident::add(
                ws,
                handlers::accident::AddArgs {
                    worker_id: worker,
                    injury,
                    description,
                    date,
                    notes,
                },
                &ctx,
            ),
            AccidentCommand::History(args) => handlers::accident::history(ws, &args, &ctx),
        },

        Commands::Roster { command } => match command {
            RosterCommand::History {
                company,
                crew,
                status,
                from,
                to,
                csv,
            } => handlers::roster::history(
                ws,
                handlers::roster::HistoryArgs {
                    company_id: company,
                    crew_id: crew,
                    status,
                    from,
                    to,
                    csv: csv.as_deref(),
                },
                &ctx,
            ),
            RosterCommand::Print { company, crew, csv } => {
                handlers::roster::print(ws, company, crew, csv.as_deref(), &ctx)
            }
        },

        Commands::Backup { command } => match command {
            BackupCommand::Create { output } => {
                handlers::backup::create(ws, output.as_deref(), &ctx)
            }
            BackupCommand::Restore { archive } => handlers::backup::restore(ws, &archive, &ctx),
        },

        Commands::Export { dir } => handlers::export::handle(ws, &dir, &ctx),
    }
}
