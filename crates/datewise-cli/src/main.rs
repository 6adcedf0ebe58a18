//! Datewise command-line entry point.

use std::process::ExitCode;

use clap::Parser;
use datewise_cli::cli::Cli;
use datewise_cli::commands;
use datewise_cli::config::{Config, LogFormat};
use datewise_cli::error::CliError;
use datewise_core::SystemClock;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<(), CliError> {
    let cli = Cli::parse();

    // Read configuration from environment.
    let config = Config::from_env()?;

    // Initialize tracing subscriber on stderr so stdout stays machine-readable.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match config.log_format {
        LogFormat::Text => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }

    let output = commands::run(&cli, &config, &SystemClock)?;
    println!("{output}");

    Ok(())
}
