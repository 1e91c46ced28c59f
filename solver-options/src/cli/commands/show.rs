use super::SourceArgs;
use crate::config::options::OptionMap;
use anyhow::Result;
use clap::Args;
use colored::Colorize;

#[derive(Args)]
pub struct ShowCommands {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Only show options that differ from their defaults
    #[arg(short, long)]
    pub modified: bool,

    /// Print as JSON
    #[arg(long, conflicts_with = "plain")]
    pub json: bool,

    /// Print the uncoloured table exactly as the solver renders it
    #[arg(long)]
    pub plain: bool,
}

/// Handle show command
pub fn handle_show_command(cmd: ShowCommands) -> Result<()> {
    let solver = cmd.source.build_solver()?;

    if cmd.plain {
        if cmd.modified {
            solver.print_modified_options()?;
        } else {
            solver.print_options()?;
        }
        return Ok(());
    }

    let options = if cmd.modified {
        solver.get_modified_options()
    } else {
        solver.get_options().clone()
    };

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    let heading = if cmd.modified { "Modified options" } else { "Options" };
    println!("{} {}", heading.bold(), format!("({})", solver.name).dimmed());
    if !solver.category.is_empty() {
        println!("{}", solver.category.dimmed());
    }
    print_table(&solver, &options);
    Ok(())
}

fn print_table(solver: &crate::solver::BaseSolver, options: &OptionMap) {
    if options.is_empty() {
        println!("  {}", "(none)".dimmed());
        return;
    }

    let width = options.names().map(|n| n.chars().count()).max().unwrap_or(0);
    let registry = solver.registry();
    for (name, value) in options.iter() {
        let padded = format!("{:<width$}", name);
        let mut line = format!("  {} : {}", padded.cyan(), value);
        if registry.is_immutable(name) {
            line.push_str(&format!(" {}", "(immutable)".yellow()));
        }
        if registry.spec(name).is_none() {
            line.push_str(&format!(" {}", "(undeclared)".magenta()));
        }
        println!("{}", line);
    }
}
