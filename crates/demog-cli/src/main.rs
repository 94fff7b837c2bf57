//! Demographics dashboard CLI.

use clap::Parser;
use demog_cli::logging::init_logging;

mod cli;
mod commands;

use crate::cli::{Cli, Command};
use crate::commands::{load_config, run_check, run_export, run_panels, run_show, run_watch};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Command::Panels => run_panels(),
        Command::Show(args) => run_show(&load_config(cli)?, args)?,
        Command::Export(args) => run_export(&load_config(cli)?, args)?,
        Command::Watch => {
            let summary = run_watch(&load_config(cli)?)?;
            eprintln!(
                "{} update(s), {} rejected",
                summary.updated, summary.rejected
            );
        }
        Command::Check => run_check(&load_config(cli)?)?,
    }
    Ok(())
}
