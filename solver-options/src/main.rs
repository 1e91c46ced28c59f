use anyhow::Result;
use clap::Parser;
use log::info;

use solver_options::cli::Cli;
use solver_options::cli::app::Commands;
use solver_options::cli::commands::{handle_get_command, handle_show_command};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    let cli = Cli::parse();
    info!("Starting solver-options");

    match cli.command {
        Commands::Show(show_args) => handle_show_command(show_args)?,
        Commands::Get(get_args) => handle_get_command(get_args)?,
    }

    Ok(())
}
