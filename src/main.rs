// cppcfg - VS Code C/C++ properties generator
// Main CLI entry point

use clap::Parser;
use cppcfg::cli::{Cli, CliDispatcher};
use cppcfg::utils::error::UserError;
use std::process;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(if verbose { "debug" } else { "warn" }),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.verbose) {
        eprintln!("Warning: {:#}", err);
    }

    let result = CliDispatcher::execute(cli.command);

    if let Err(err) = result {
        let user_error = UserError::from_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
