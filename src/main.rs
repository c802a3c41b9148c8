use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use csvpad::cli::CliArgs;
use csvpad::commands::execute;
use csvpad::config::Config;
use csvpad::config_paths;

fn main() -> ExitCode {
    csvpad::tracing::init();

    let args = CliArgs::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config_file = args.config.clone().or_else(config_paths::config_file);

    let report = execute(&args.command, &config, config_file.as_deref())?;
    println!("{report}");
    Ok(())
}
