pub mod get;
pub mod show;

pub use get::{GetCommands, handle_get_command};
pub use show::{ShowCommands, handle_show_command};

use crate::config::options::registrations::demo::{DEMO_CATEGORY, DEMO_NAME};
use crate::config::options::registrations::demo_schema;
use crate::config::options::{OptionValue, RegistryConfig};
use crate::config::{SchemaFile, load_overrides};
use crate::solver::BaseSolver;
use anyhow::{Context, Result};
use clap::Args;
use log::debug;
use std::path::PathBuf;

/// Where the schema and option values come from
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Schema file (TOML); the built-in demo schema is used when omitted
    #[arg(short, long)]
    pub schema: Option<PathBuf>,

    /// Options file (TOML table of name = value) applied at construction
    #[arg(short, long)]
    pub options: Option<PathBuf>,

    /// Set an option after construction, e.g. --set intOption=2 (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub assignments: Vec<String>,

    /// Match option names exactly
    #[arg(long)]
    pub case_sensitive: bool,

    /// Accept option names the schema does not declare
    #[arg(long)]
    pub no_check: bool,
}

impl SourceArgs {
    /// Build the solver described by these arguments
    pub fn build_solver(&self) -> Result<BaseSolver> {
        let (name, category, schema, mut config, informs) = match &self.schema {
            Some(path) => {
                let file = SchemaFile::load(path)?;
                (
                    file.name.clone(),
                    file.category.clone(),
                    file.to_schema()?,
                    file.registry_config(),
                    file.informs()?,
                )
            }
            None => (
                DEMO_NAME.to_string(),
                DEMO_CATEGORY.to_string(),
                demo_schema()?,
                RegistryConfig::default(),
                Default::default(),
            ),
        };

        if self.case_sensitive {
            config.case_sensitive = true;
        }
        if self.no_check {
            config.check_default_options = false;
        }

        let overrides = match &self.options {
            Some(path) => load_overrides(path)?,
            None => Vec::new(),
        };
        debug!("Building solver '{}' with {} constructor options", name, overrides.len());

        let mut solver = BaseSolver::new(&name, &category, schema, overrides, config)?.with_informs(informs);

        for assignment in &self.assignments {
            let (option, value) = parse_assignment(assignment)?;
            solver
                .set_option(&option, value)
                .with_context(|| format!("Failed to apply --set {}", assignment))?;
        }

        Ok(solver)
    }
}

/// Parse `NAME=VALUE`; the value is read as JSON, falling back to a plain string
pub fn parse_assignment(assignment: &str) -> Result<(String, OptionValue)> {
    let (name, raw) = assignment
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Expected NAME=VALUE, got '{}'", assignment))?;

    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Option name is empty in '{}'", assignment);
    }

    let value = match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json) => OptionValue::try_from(json)?,
        Err(_) => OptionValue::String(raw.to_string()),
    };
    Ok((name.to_string(), value))
}
