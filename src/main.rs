use colored::Colorize;
use protocols::{run, ProtocolsError, Scenario};
use std::io;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Diagnostics go to stderr so stdout only carries the scenario lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> Result<(), ProtocolsError> {
    let args: Vec<String> = std::env::args().collect();

    let scenario = match args.get(1) {
        Some(path) => Scenario::load(Path::new(path))?,
        None => Scenario::default(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&scenario, &mut out)
}
