use super::commands::get::GetCommands;
use super::commands::show::ShowCommands;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "solver-options")]
#[command(about = "Inspect and validate solver option schemas")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print all options, or only the modified ones
    Show(ShowCommands),
    /// Print the value of a single option
    Get(GetCommands),
}
