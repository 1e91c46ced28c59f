//! Fluent builder API for declaring an options schema

use super::types::{OptionSpec, OptionType, OptionValue, ValueKind};
use crate::error::ConstructionError;

/// Declared defaults, immutable names and deprecated names for one solver.
///
/// Built once with [`SchemaBuilder`] and handed to
/// [`OptionsRegistry::new`](super::OptionsRegistry::new).
#[derive(Debug, Clone, Default)]
pub struct OptionsSchema {
    pub(crate) specs: Vec<OptionSpec>,
    pub(crate) immutable: Vec<String>,
    pub(crate) deprecated: Vec<(String, String)>,
}

impl OptionsSchema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Declared options in declaration order
    pub fn specs(&self) -> &[OptionSpec] {
        &self.specs
    }

    pub fn immutable(&self) -> &[String] {
        &self.immutable
    }

    /// Deprecated names paired with their replacement hint
    pub fn deprecated(&self) -> &[(String, String)] {
        &self.deprecated
    }
}

enum Declaration {
    Plain {
        name: String,
        kinds: Vec<ValueKind>,
        default: OptionValue,
    },
    Choices {
        name: String,
        kind: ValueKind,
        values: Vec<OptionValue>,
    },
}

/// Builder for an [`OptionsSchema`]
#[derive(Default)]
pub struct SchemaBuilder {
    declarations: Vec<Declaration>,
    immutable: Vec<String>,
    deprecated: Vec<(String, String)>,
}

impl SchemaBuilder {
    /// Declare an option accepting any value of `kind`
    pub fn option(self, name: &str, kind: ValueKind, default: impl Into<OptionValue>) -> Self {
        self.option_any_of(name, vec![kind], default)
    }

    /// Declare an option accepting any value of one of `kinds`
    pub fn option_any_of(
        mut self,
        name: &str,
        kinds: Vec<ValueKind>,
        default: impl Into<OptionValue>,
    ) -> Self {
        self.declarations.push(Declaration::Plain {
            name: name.to_string(),
            kinds,
            default: default.into(),
        });
        self
    }

    /// Declare an option restricted to `values`; the first value is the default
    pub fn choices<V: Into<OptionValue>>(mut self, name: &str, kind: ValueKind, values: Vec<V>) -> Self {
        self.declarations.push(Declaration::Choices {
            name: name.to_string(),
            kind,
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Mark an option as settable only at construction
    pub fn immutable(mut self, name: &str) -> Self {
        self.immutable.push(name.to_string());
        self
    }

    /// Retire an option name, pointing callers at its replacement
    pub fn deprecated(mut self, name: &str, hint: &str) -> Self {
        self.deprecated.push((name.to_string(), hint.to_string()));
        self
    }

    /// Build the schema
    ///
    /// Returns an error if a declaration is inconsistent with itself
    pub fn build(self) -> Result<OptionsSchema, ConstructionError> {
        let mut specs = Vec::with_capacity(self.declarations.len());

        for declaration in self.declarations {
            let spec = match declaration {
                Declaration::Plain { name, kinds, default } => {
                    let ty = OptionType::any_of(kinds)?;
                    OptionSpec { name, ty, default }
                }
                Declaration::Choices { name, kind, values } => {
                    if let Some(value) = values.iter().find(|v| v.kind() != kind) {
                        return Err(ConstructionError::MismatchedChoice {
                            name,
                            value: value.to_string(),
                            kind,
                        });
                    }
                    let default = values
                        .first()
                        .cloned()
                        .ok_or_else(|| ConstructionError::EmptyChoices { name: name.clone() })?;
                    OptionSpec {
                        name,
                        ty: OptionType::choices(kind, values),
                        default,
                    }
                }
            };

            spec.validate(&spec.default)
                .map_err(|e| ConstructionError::InvalidDefault {
                    name: spec.name.clone(),
                    reason: e.to_string(),
                })?;
            specs.push(spec);
        }

        Ok(OptionsSchema {
            specs,
            immutable: self.immutable,
            deprecated: self.deprecated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choices_default_is_first_value() {
        let schema = OptionsSchema::builder()
            .choices("strOption", ValueKind::Str, vec!["str1", "str2", "str3"])
            .build()
            .unwrap();

        let spec = &schema.specs()[0];
        assert_eq!(spec.name, "strOption");
        assert_eq!(spec.default, OptionValue::from("str1"));
        assert_eq!(spec.ty.allowed_values().unwrap().len(), 3);
    }

    #[test]
    fn test_declaration_order_kept() {
        let schema = OptionsSchema::builder()
            .option("zeta", ValueKind::Bool, true)
            .option("alpha", ValueKind::Float, 1.0)
            .build()
            .unwrap();

        let names: Vec<&str> = schema.specs().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_empty_choices_rejected() {
        let result = OptionsSchema::builder()
            .choices::<i64>("intOption", ValueKind::Int, vec![])
            .build();

        assert!(matches!(result, Err(ConstructionError::EmptyChoices { .. })));
    }

    #[test]
    fn test_default_must_match_type() {
        let result = OptionsSchema::builder()
            .option("floatOption", ValueKind::Float, 10)
            .build();

        assert!(matches!(result, Err(ConstructionError::InvalidDefault { .. })));
    }

    #[test]
    fn test_choices_of_wrong_kind_rejected() {
        let result = OptionsSchema::builder()
            .choices("intOption", ValueKind::Int, vec!["1", "2"])
            .build();

        assert!(matches!(result, Err(ConstructionError::MismatchedChoice { .. })));
    }

    #[test]
    fn test_missing_type() {
        let result = OptionsSchema::builder()
            .option_any_of("multiOption", vec![], "value")
            .build();

        assert!(matches!(result, Err(ConstructionError::NoAcceptedTypes)));
    }

    #[test]
    fn test_immutable_and_deprecated_recorded() {
        let schema = OptionsSchema::builder()
            .option("boolOption", ValueKind::Bool, true)
            .immutable("boolOption")
            .deprecated("oldOption", "Use boolOption instead.")
            .build()
            .unwrap();

        assert_eq!(schema.immutable(), &["boolOption".to_string()]);
        assert_eq!(
            schema.deprecated(),
            &[("oldOption".to_string(), "Use boolOption instead.".to_string())]
        );
    }
}
