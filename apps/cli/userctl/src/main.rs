use userctl::cli::Cli;
use userctl::logger::initialize as LoggerInitialize;

use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // Before parsing, so env-backed flags see .env values
    let dotenv_path = dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Err(e) = LoggerInitialize(level, cli.log_file.as_deref()) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    if let Some(path) = dotenv_path {
        info!("Loaded environment from {}", path.display());
    }

    let config = match userctl::load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match userctl::run(&config, &cli.command).await {
        Ok(outcome) => {
            println!("{outcome}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
