//! Core types for the options system

use crate::error::{ConstructionError, OptionsError};
use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A dynamically-typed option value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<OptionValue>),
    Dict(BTreeMap<String, OptionValue>),
}

impl OptionValue {
    /// The runtime kind of this value, used for type validation
    pub fn kind(&self) -> ValueKind {
        match self {
            OptionValue::Bool(_) => ValueKind::Bool,
            OptionValue::Int(_) => ValueKind::Int,
            OptionValue::Float(_) => ValueKind::Float,
            OptionValue::String(_) => ValueKind::Str,
            OptionValue::List(_) => ValueKind::List,
            OptionValue::Dict(_) => ValueKind::Dict,
        }
    }

    /// Structural equality where floats compare by bit pattern, so a NaN
    /// matches an identical NaN
    pub fn same_as(&self, other: &OptionValue) -> bool {
        match (self, other) {
            (OptionValue::Float(a), OptionValue::Float(b)) => a.to_bits() == b.to_bits(),
            (OptionValue::List(a), OptionValue::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_as(y))
            }
            (OptionValue::Dict(a), OptionValue::Dict(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|((ka, va), (kb, vb))| ka == kb && va.same_as(vb))
            }
            _ => self == other,
        }
    }

    /// Get as bool, returning error if wrong type
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            OptionValue::Bool(v) => Ok(*v),
            _ => anyhow::bail!("Expected bool, got {}", self.kind()),
        }
    }

    /// Get as int, returning error if wrong type
    pub fn as_int(&self) -> Result<i64> {
        match self {
            OptionValue::Int(v) => Ok(*v),
            _ => anyhow::bail!("Expected int, got {}", self.kind()),
        }
    }

    /// Get as float, returning error if wrong type
    pub fn as_float(&self) -> Result<f64> {
        match self {
            OptionValue::Float(v) => Ok(*v),
            _ => anyhow::bail!("Expected float, got {}", self.kind()),
        }
    }

    /// Get as string slice, returning error if wrong type
    pub fn as_str(&self) -> Result<&str> {
        match self {
            OptionValue::String(v) => Ok(v),
            _ => anyhow::bail!("Expected str, got {}", self.kind()),
        }
    }

    /// Get as list, returning error if wrong type
    pub fn as_list(&self) -> Result<&[OptionValue]> {
        match self {
            OptionValue::List(v) => Ok(v),
            _ => anyhow::bail!("Expected list, got {}", self.kind()),
        }
    }

    /// Get as dict, returning error if wrong type
    pub fn as_dict(&self) -> Result<&BTreeMap<String, OptionValue>> {
        match self {
            OptionValue::Dict(v) => Ok(v),
            _ => anyhow::bail!("Expected dict, got {}", self.kind()),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(v) => write!(f, "{}", v),
            OptionValue::Int(v) => write!(f, "{}", v),
            // Debug keeps the trailing ".0" so floats stay distinguishable from ints
            OptionValue::Float(v) => write!(f, "{:?}", v),
            OptionValue::String(v) => write!(f, "{:?}", v),
            OptionValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            OptionValue::Dict(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        OptionValue::Int(v)
    }
}

impl From<i32> for OptionValue {
    fn from(v: i32) -> Self {
        OptionValue::Int(v as i64)
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        OptionValue::Float(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::String(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue::String(v)
    }
}

impl<T: Into<OptionValue>> From<Vec<T>> for OptionValue {
    fn from(v: Vec<T>) -> Self {
        OptionValue::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, OptionValue>> for OptionValue {
    fn from(v: BTreeMap<String, OptionValue>) -> Self {
        OptionValue::Dict(v)
    }
}

impl TryFrom<toml::Value> for OptionValue {
    type Error = anyhow::Error;

    fn try_from(value: toml::Value) -> Result<Self> {
        Ok(match value {
            toml::Value::Boolean(v) => OptionValue::Bool(v),
            toml::Value::Integer(v) => OptionValue::Int(v),
            toml::Value::Float(v) => OptionValue::Float(v),
            toml::Value::String(v) => OptionValue::String(v),
            toml::Value::Array(items) => OptionValue::List(
                items
                    .into_iter()
                    .map(OptionValue::try_from)
                    .collect::<Result<Vec<_>>>()?,
            ),
            toml::Value::Table(table) => OptionValue::Dict(
                table
                    .into_iter()
                    .map(|(k, v)| Ok((k, OptionValue::try_from(v)?)))
                    .collect::<Result<BTreeMap<_, _>>>()?,
            ),
            toml::Value::Datetime(dt) => {
                anyhow::bail!("Datetime values are not supported as options: {}", dt)
            }
        })
    }
}

impl TryFrom<serde_json::Value> for OptionValue {
    type Error = anyhow::Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        Ok(match value {
            serde_json::Value::Bool(v) => OptionValue::Bool(v),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    OptionValue::Int(i)
                } else if let Some(f) = n.as_f64() {
                    OptionValue::Float(f)
                } else {
                    anyhow::bail!("Number {} does not fit an int or float option", n)
                }
            }
            serde_json::Value::String(v) => OptionValue::String(v),
            serde_json::Value::Array(items) => OptionValue::List(
                items
                    .into_iter()
                    .map(OptionValue::try_from)
                    .collect::<Result<Vec<_>>>()?,
            ),
            serde_json::Value::Object(map) => OptionValue::Dict(
                map.into_iter()
                    .map(|(k, v)| Ok((k, OptionValue::try_from(v)?)))
                    .collect::<Result<BTreeMap<_, _>>>()?,
            ),
            serde_json::Value::Null => anyhow::bail!("null is not a valid option value"),
        })
    }
}

/// Runtime type tag of an option value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    Str,
    List,
    Dict,
}

impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Str => "str",
            ValueKind::List => "list",
            ValueKind::Dict => "dict",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bool" => Ok(ValueKind::Bool),
            "int" => Ok(ValueKind::Int),
            "float" => Ok(ValueKind::Float),
            "str" | "string" => Ok(ValueKind::Str),
            "list" => Ok(ValueKind::List),
            "dict" => Ok(ValueKind::Dict),
            other => anyhow::bail!(
                "Unknown option type '{}'. Valid types: bool, int, float, str, list, dict",
                other
            ),
        }
    }
}

/// Accepted kinds for an option, optionally narrowed to an enumerated set of values
#[derive(Debug, Clone, PartialEq)]
pub struct OptionType {
    kinds: Vec<ValueKind>,
    choices: Option<Vec<OptionValue>>,
}

impl OptionType {
    /// A plain type accepting any value of one or more kinds
    pub fn any_of(kinds: Vec<ValueKind>) -> Result<Self, ConstructionError> {
        if kinds.is_empty() {
            return Err(ConstructionError::NoAcceptedTypes);
        }
        Ok(Self { kinds, choices: None })
    }

    /// A type whose only acceptable values are `choices`, all of kind `kind`
    pub fn choices(kind: ValueKind, choices: Vec<OptionValue>) -> Self {
        Self {
            kinds: vec![kind],
            choices: Some(choices),
        }
    }

    pub fn kinds(&self) -> &[ValueKind] {
        &self.kinds
    }

    pub fn allowed_values(&self) -> Option<&[OptionValue]> {
        self.choices.as_deref()
    }

    /// Check if a value's kind is accepted
    pub fn matches(&self, value: &OptionValue) -> bool {
        self.kinds.contains(&value.kind())
    }

    /// Validate a value for the option called `name`
    pub fn validate(&self, name: &str, value: &OptionValue) -> Result<(), OptionsError> {
        if !self.matches(value) {
            return Err(OptionsError::Type {
                name: name.to_string(),
                expected: self.kinds.clone(),
                found: value.kind(),
            });
        }

        if let Some(choices) = &self.choices {
            if !choices.contains(value) {
                return Err(OptionsError::Value {
                    name: name.to_string(),
                    value: value.clone(),
                    allowed: choices.clone(),
                });
            }
        }

        Ok(())
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kinds: Vec<&str> = self.kinds.iter().map(|k| k.name()).collect();
        if kinds.len() == 1 {
            write!(f, "{}", kinds[0])
        } else {
            write!(f, "({})", kinds.join(", "))
        }
    }
}

/// Declared option: name, accepted type and default value
#[derive(Debug, Clone)]
pub struct OptionSpec {
    /// Name as written in the schema
    pub name: String,

    /// Type definition with optional enumerated values
    pub ty: OptionType,

    /// Default value
    pub default: OptionValue,
}

impl OptionSpec {
    /// Validate that a value is valid for this option
    pub fn validate(&self, value: &OptionValue) -> Result<(), OptionsError> {
        self.ty.validate(&self.name, value)
    }
}
