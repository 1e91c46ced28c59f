//! Error types for option ingestion, lookup and assignment

use crate::config::options::types::{OptionValue, ValueKind};

/// Failure raised by an options registry operation.
///
/// Every variant is reported synchronously from the call that triggered it. A failed
/// `set_option` never leaves the registry partially updated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptionsError {
    /// The name matches no declared option.
    #[error("'{name}' is not a valid option.{}", suggestion_hint(.suggestions))]
    Unknown {
        /// Name as supplied by the caller.
        name: String,
        /// Closest declared names, best first.
        suggestions: Vec<String>,
    },

    /// The name was retired; the hint names its replacement.
    #[error("Option '{name}' is deprecated. {hint}")]
    Deprecated { name: String, hint: String },

    /// The option may only be supplied when the registry is constructed.
    #[error("Option '{name}' is immutable and cannot be changed after initialization.")]
    Immutable { name: String },

    /// The value's type is not one the option accepts.
    #[error("Option '{name}' expects type {}, but received a value of type {found}.", kind_list(.expected))]
    Type {
        name: String,
        expected: Vec<ValueKind>,
        found: ValueKind,
    },

    /// The value has the right type but is not one of the enumerated choices.
    #[error("Value {value} for option '{name}' is not valid. Accepted values are: {}.", value_list(.allowed))]
    Value {
        name: String,
        value: OptionValue,
        allowed: Vec<OptionValue>,
    },

    /// The schema itself is malformed.
    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

/// Problems with a declared schema, detected when the registry is built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConstructionError {
    #[error("Options '{first}' and '{second}' collide when option names are case-insensitive.")]
    DuplicateOption { first: String, second: String },

    #[error("Deprecated names '{first}' and '{second}' collide when option names are case-insensitive.")]
    DuplicateDeprecated { first: String, second: String },

    #[error("Deprecated name '{name}' matches the declared option '{declared}'.")]
    DeprecatedDeclared { name: String, declared: String },

    #[error("Option '{name}' declares an empty list of accepted values; at least one is required.")]
    EmptyChoices { name: String },

    #[error("Option '{name}' lists {value} as an accepted value, but it is not of type {kind}.")]
    MismatchedChoice {
        name: String,
        value: String,
        kind: ValueKind,
    },

    #[error("An option type must accept at least one value type.")]
    NoAcceptedTypes,

    #[error("Default for option '{name}' is invalid: {reason}")]
    InvalidDefault { name: String, reason: String },

    #[error("Immutable option '{name}' is not declared in the schema.")]
    UndeclaredImmutable { name: String },
}

impl OptionsError {
    /// Name of the option the error refers to, if any
    pub fn option_name(&self) -> Option<&str> {
        match self {
            OptionsError::Unknown { name, .. }
            | OptionsError::Deprecated { name, .. }
            | OptionsError::Immutable { name }
            | OptionsError::Type { name, .. }
            | OptionsError::Value { name, .. } => Some(name),
            OptionsError::Construction(_) => None,
        }
    }
}

fn suggestion_hint(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return String::new();
    }
    let quoted: Vec<String> = suggestions.iter().map(|s| format!("'{}'", s)).collect();
    format!(" Did you mean: {}?", quoted.join(", "))
}

fn kind_list(kinds: &[ValueKind]) -> String {
    let names: Vec<&str> = kinds.iter().map(|k| k.name()).collect();
    names.join(" or ")
}

fn value_list(values: &[OptionValue]) -> String {
    let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    rendered.join(", ")
}
