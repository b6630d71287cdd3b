//! Meridian command line tool.
//!
//! Converts FHIR R4 resources between JSON and XML and checks that they
//! survive a round trip through the typed model.

mod commands;
mod config;

use clap::Parser;
use config::Cli;
use tracing::debug;

/// Logs go to standard error; standard output carries converted resources.
fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("meridian={0},meridian_serde={0}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if let Err(errors) = cli.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(2);
    }

    debug!(command = ?cli.command, "Starting meridian");
    commands::run(&cli.command)
}
