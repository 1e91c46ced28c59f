//! Options registry owned by a solver

use super::builder::OptionsSchema;
use super::store::{OptionMap, canonical_name};
use super::suggest::{MAX_SUGGESTIONS, suggest};
use super::types::{OptionSpec, OptionValue};
use crate::error::{ConstructionError, OptionsError};
use log::debug;
use std::collections::{HashMap, HashSet};

/// Name-matching and schema-checking policy, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Require exact spelling of option names
    pub case_sensitive: bool,
    /// Reject caller-supplied names that the schema does not declare
    pub check_default_options: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            check_default_options: true,
        }
    }
}

/// Declared options plus their current values.
///
/// The schema, immutable set and deprecated set never change after
/// construction; current values change only through [`set_option`](Self::set_option).
#[derive(Debug, Clone)]
pub struct OptionsRegistry {
    config: RegistryConfig,
    specs: Vec<OptionSpec>,
    spec_index: HashMap<String, usize>,
    immutable: HashSet<String>,
    deprecated: HashMap<String, String>,
    values: OptionMap,
}

impl OptionsRegistry {
    /// Build a registry from `schema`, overlaying the caller's `options`.
    ///
    /// Caller values are type-checked against the schema but are not subject to
    /// the immutable or deprecated rules. With `check_default_options` off,
    /// undeclared names are stored as they are.
    pub fn new<I, K, V>(schema: OptionsSchema, options: I, config: RegistryConfig) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<OptionValue>,
    {
        let case_sensitive = config.case_sensitive;
        let OptionsSchema { specs, immutable, deprecated } = schema;

        let mut spec_index = HashMap::with_capacity(specs.len());
        let mut values = OptionMap::new(case_sensitive);
        for (pos, spec) in specs.iter().enumerate() {
            let key = canonical_name(&spec.name, case_sensitive);
            if let Some(&existing) = spec_index.get(&key) {
                let first: &OptionSpec = &specs[existing];
                return Err(ConstructionError::DuplicateOption {
                    first: first.name.clone(),
                    second: spec.name.clone(),
                }
                .into());
            }
            spec_index.insert(key, pos);
            values.insert(&spec.name, spec.default.clone());
        }

        let immutable = immutable
            .into_iter()
            .map(|name| {
                let key = canonical_name(&name, case_sensitive);
                if spec_index.contains_key(&key) {
                    Ok(key)
                } else {
                    Err(ConstructionError::UndeclaredImmutable { name })
                }
            })
            .collect::<Result<HashSet<_>, _>>()?;

        // folded name -> (declared spelling, hint)
        let mut entries: HashMap<String, (String, String)> = HashMap::with_capacity(deprecated.len());
        for (name, hint) in deprecated {
            let key = canonical_name(&name, case_sensitive);
            if let Some(&pos) = spec_index.get(&key) {
                return Err(ConstructionError::DeprecatedDeclared {
                    name,
                    declared: specs[pos].name.clone(),
                }
                .into());
            }
            if let Some((first, _)) = entries.get(&key) {
                return Err(ConstructionError::DuplicateDeprecated {
                    first: first.clone(),
                    second: name,
                }
                .into());
            }
            entries.insert(key, (name, hint));
        }
        let deprecated = entries.into_iter().map(|(key, (_, hint))| (key, hint)).collect();

        let mut registry = Self {
            config,
            specs,
            spec_index,
            immutable,
            deprecated,
            values,
        };

        for (name, value) in options {
            registry.merge(name.as_ref(), value.into())?;
        }

        debug!(
            "Initialized options registry with {} declared options ({} modified)",
            registry.specs.len(),
            registry.get_modified_options().len()
        );
        Ok(registry)
    }

    /// Construction-time merge: type checks only
    fn merge(&mut self, name: &str, value: OptionValue) -> Result<(), OptionsError> {
        match self.spec(name) {
            Some(spec) => {
                spec.validate(&value)?;
                let declared = spec.name.clone();
                self.values.insert(&declared, value);
            }
            None if self.config.check_default_options => return Err(self.unknown(name)),
            None => {
                debug!("Accepting undeclared option '{}' at construction", name);
                self.values.insert(name, value);
            }
        }
        Ok(())
    }

    /// Current value of an option
    pub fn get_option(&self, name: &str) -> Result<&OptionValue, OptionsError> {
        self.values.get(name).ok_or_else(|| self.unknown(name))
    }

    /// Assign an option after construction.
    ///
    /// Checks run in order: deprecated, undeclared, immutable, type/value.
    /// The registry is untouched when any check fails.
    pub fn set_option(&mut self, name: &str, value: impl Into<OptionValue>) -> Result<(), OptionsError> {
        let value = value.into();
        let key = self.canonical(name);

        if let Some(hint) = self.deprecated.get(&key) {
            return Err(OptionsError::Deprecated {
                name: name.to_string(),
                hint: hint.clone(),
            });
        }

        let Some(&pos) = self.spec_index.get(&key) else {
            if self.config.check_default_options {
                return Err(self.unknown(name));
            }
            debug!("Set undeclared option {} = {}", name, value);
            self.values.insert(name, value);
            return Ok(());
        };

        let spec = &self.specs[pos];
        if self.immutable.contains(&key) {
            return Err(OptionsError::Immutable {
                name: spec.name.clone(),
            });
        }

        spec.validate(&value)?;

        debug!("Set option {} = {}", spec.name, value);
        let declared = spec.name.clone();
        self.values.insert(&declared, value);
        Ok(())
    }

    /// All current values, declared options first in declaration order, then
    /// undeclared ones in the order they were first set
    pub fn get_options(&self) -> &OptionMap {
        &self.values
    }

    /// Options whose current value differs from the declared default.
    ///
    /// Undeclared options have no default and are always included.
    pub fn get_modified_options(&self) -> OptionMap {
        let mut modified = OptionMap::new(self.config.case_sensitive);
        for (name, value) in self.values.iter() {
            let changed = match self.spec(name) {
                Some(spec) => !spec.default.same_as(value),
                None => true,
            };
            if changed {
                modified.insert(name, value.clone());
            }
        }
        modified
    }

    /// Declared default of an option
    pub fn default_value(&self, name: &str) -> Option<&OptionValue> {
        self.spec(name).map(|spec| &spec.default)
    }

    /// Schema entry for an option, if declared
    pub fn spec(&self, name: &str) -> Option<&OptionSpec> {
        self.spec_index
            .get(&self.canonical(name))
            .map(|&pos| &self.specs[pos])
    }

    /// Declared options in declaration order
    pub fn specs(&self) -> &[OptionSpec] {
        &self.specs
    }

    pub fn is_immutable(&self, name: &str) -> bool {
        self.immutable.contains(&self.canonical(name))
    }

    /// Replacement hint for a deprecated name
    pub fn deprecation_hint(&self, name: &str) -> Option<&str> {
        self.deprecated.get(&self.canonical(name)).map(String::as_str)
    }

    pub fn config(&self) -> RegistryConfig {
        self.config
    }

    fn canonical(&self, name: &str) -> String {
        canonical_name(name, self.config.case_sensitive)
    }

    /// Unknown-option error with suggestions drawn from declared names only
    fn unknown(&self, name: &str) -> OptionsError {
        let case_sensitive = self.config.case_sensitive;
        OptionsError::Unknown {
            name: name.to_string(),
            suggestions: suggest(
                name,
                self.specs.iter().map(|spec| spec.name.as_str()),
                |s| canonical_name(s, case_sensitive),
                MAX_SUGGESTIONS,
            ),
        }
    }
}
