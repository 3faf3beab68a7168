use clap::Parser;
use crewbook_cli::{Cli, OutputFormat, init_logging, render_error, run};

fn main() {
    // Reset SIGPIPE to default behavior to prevent panic on broken pipe
    // (e.g., when piping to `head` or `less` that exits early)
    #[cfg(unix)]
    reset_sigpipe();

    let cli = Cli::parse();
    init_logging(cli.log_level);
    let format = cli.format;

    if let Err(e) = run(cli) {
        if format == OutputFormat::Json {
            render_error(&e);
        }
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
