//! File-based configuration for solver options
//!
//! This module provides:
//! - Schema files: declared options, immutable/deprecated names, policy flags and informs
//! - Overlay files: flat `name = value` tables applied at construction
//! - The options system itself (`options`)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

pub mod options;

use options::{OptionValue, OptionsSchema, RegistryConfig, ValueKind};

/// On-disk schema description
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaFile {
    /// Solver name shown in option tables
    pub name: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub case_sensitive: bool,

    #[serde(default = "default_true")]
    pub check_default_options: bool,

    #[serde(default)]
    pub immutable: Vec<String>,

    /// Retired name -> replacement hint
    #[serde(default)]
    pub deprecated: BTreeMap<String, String>,

    /// Exit code -> message, keyed by the code as a string
    #[serde(default)]
    pub informs: BTreeMap<String, String>,

    #[serde(default, rename = "option")]
    pub options: Vec<OptionEntry>,
}

/// One `[[option]]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionEntry {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: TypeField,

    pub default: Option<toml::Value>,

    /// Enumerated values; the first one is the default
    pub choices: Option<Vec<toml::Value>>,
}

/// `type = "int"` or `type = ["str", "dict"]`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TypeField {
    One(String),
    Many(Vec<String>),
}

impl TypeField {
    fn kinds(&self) -> Result<Vec<ValueKind>> {
        match self {
            TypeField::One(name) => Ok(vec![name.parse()?]),
            TypeField::Many(names) => names.iter().map(|n| n.parse()).collect(),
        }
    }
}

fn default_true() -> bool {
    true
}

impl SchemaFile {
    /// Load a schema file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read schema file: {:?}", path))?;
        let file = Self::from_toml_str(&text)
            .with_context(|| format!("Failed to parse schema file: {:?}", path))?;
        log::debug!("Loaded schema '{}' with {} options from {:?}", file.name, file.options.len(), path);
        Ok(file)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid schema TOML")
    }

    /// Convert the declarations into an [`OptionsSchema`]
    pub fn to_schema(&self) -> Result<OptionsSchema> {
        let mut builder = OptionsSchema::builder();

        for entry in &self.options {
            let kinds = entry
                .ty
                .kinds()
                .with_context(|| format!("Invalid type for option '{}'", entry.name))?;

            builder = match (&entry.default, &entry.choices) {
                (Some(_), Some(_)) => anyhow::bail!(
                    "Option '{}' sets both 'default' and 'choices'; the first choice is the default",
                    entry.name
                ),
                (None, None) => anyhow::bail!("Option '{}' needs a 'default' or 'choices'", entry.name),
                (Some(default), None) => {
                    let default = OptionValue::try_from(default.clone())
                        .with_context(|| format!("Invalid default for option '{}'", entry.name))?;
                    builder.option_any_of(&entry.name, kinds, default)
                }
                (None, Some(choices)) => {
                    let &[kind] = kinds.as_slice() else {
                        anyhow::bail!("Option '{}' with 'choices' must declare exactly one type", entry.name);
                    };
                    let values = choices
                        .iter()
                        .cloned()
                        .map(OptionValue::try_from)
                        .collect::<Result<Vec<_>>>()
                        .with_context(|| format!("Invalid choices for option '{}'", entry.name))?;
                    builder.choices(&entry.name, kind, values)
                }
            };
        }

        for name in &self.immutable {
            builder = builder.immutable(name);
        }
        for (name, hint) in &self.deprecated {
            builder = builder.deprecated(name, hint);
        }

        Ok(builder.build()?)
    }

    pub fn registry_config(&self) -> RegistryConfig {
        RegistryConfig {
            case_sensitive: self.case_sensitive,
            check_default_options: self.check_default_options,
        }
    }

    /// Informs table with integer codes
    pub fn informs(&self) -> Result<BTreeMap<i32, String>> {
        self.informs
            .iter()
            .map(|(code, message)| {
                let code = code
                    .parse::<i32>()
                    .with_context(|| format!("Inform code '{}' is not an integer", code))?;
                Ok((code, message.clone()))
            })
            .collect()
    }
}

/// Load an overlay file of `name = value` pairs, in file order
pub fn load_overrides(path: &Path) -> Result<Vec<(String, OptionValue)>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read options file: {:?}", path))?;
    parse_overrides(&text).with_context(|| format!("Failed to parse options file: {:?}", path))
}

pub fn parse_overrides(text: &str) -> Result<Vec<(String, OptionValue)>> {
    let table: toml::Table = toml::from_str(text).context("Invalid options TOML")?;
    table
        .into_iter()
        .map(|(name, value)| {
            let value = OptionValue::try_from(value)
                .with_context(|| format!("Invalid value for option '{}'", name))?;
            Ok((name, value))
        })
        .collect()
}
