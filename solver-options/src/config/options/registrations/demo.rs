//! Demo solver schema used by the CLI when no schema file is given

use crate::config::options::{OptionValue, OptionsSchema, ValueKind};
use crate::error::ConstructionError;
use std::collections::BTreeMap;

pub const DEMO_NAME: &str = "demo";
pub const DEMO_CATEGORY: &str = "Demo solver";

/// Six options covering every kind of type specification
pub fn demo_schema() -> Result<OptionsSchema, ConstructionError> {
    OptionsSchema::builder()
        .option("boolOption", ValueKind::Bool, true)
        .option("floatOption", ValueKind::Float, 10.0)
        .choices("intOption", ValueKind::Int, vec![1, 2, 3])
        .choices("strOption", ValueKind::Str, vec!["str1", "str2", "str3"])
        .option("listOption", ValueKind::List, Vec::<i64>::new())
        .option_any_of(
            "multiOption",
            vec![ValueKind::Str, ValueKind::Dict],
            OptionValue::Dict(BTreeMap::new()),
        )
        .immutable("strOption")
        .deprecated("oldOption", "Use boolOption instead.")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_schema_builds() {
        let schema = demo_schema().unwrap();
        assert_eq!(schema.specs().len(), 6);
        assert_eq!(schema.immutable(), &["strOption".to_string()]);
    }
}
