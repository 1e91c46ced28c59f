use super::SourceArgs;
use anyhow::Result;
use clap::Args;
use log::info;

#[derive(Args)]
pub struct GetCommands {
    /// Option name (case-insensitive unless --case-sensitive is given)
    pub name: String,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Get the value of a single option
///
/// # Returns
/// * `Ok(())` - Value displayed successfully
/// * `Err(anyhow::Error)` - Schema error or unknown option (with suggestions)
pub fn handle_get_command(cmd: GetCommands) -> Result<()> {
    info!("Getting option: {}", cmd.name);

    let solver = cmd.source.build_solver()?;
    let value = solver.get_option(&cmd.name)?;

    if cmd.json {
        println!("{}", serde_json::to_string(value)?);
    } else {
        println!("{}", value);
    }
    Ok(())
}
