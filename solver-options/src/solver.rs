//! Base host object that owns an options registry

use crate::comm::Communicator;
use crate::config::options::{OptionMap, OptionValue, OptionsRegistry, OptionsSchema, RegistryConfig};
use crate::error::OptionsError;
use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

/// Common state of a solver: its name, category, options and collaborators.
///
/// Concrete solvers build one of these in their constructor and forward
/// option calls to it.
pub struct BaseSolver {
    pub name: String,
    pub category: String,
    options: OptionsRegistry,
    comm: Option<Box<dyn Communicator>>,
    informs: BTreeMap<i32, String>,
}

impl fmt::Debug for BaseSolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // communicators are opaque; report (rank, size)
        let comm = self.comm.as_ref().map(|c| (c.rank(), c.size()));
        f.debug_struct("BaseSolver")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("options", &self.options)
            .field("comm", &comm)
            .field("informs", &self.informs)
            .finish()
    }
}

impl BaseSolver {
    pub fn new<I, K, V>(
        name: &str,
        category: &str,
        schema: OptionsSchema,
        options: I,
        config: RegistryConfig,
    ) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<OptionValue>,
    {
        let options = OptionsRegistry::new(schema, options, config)?;
        log::debug!("Created solver '{}' ({})", name, category);
        Ok(Self {
            name: name.to_string(),
            category: category.to_string(),
            options,
            comm: None,
            informs: BTreeMap::new(),
        })
    }

    /// Attach a communicator; printing then happens on rank zero only
    pub fn with_comm(mut self, comm: impl Communicator + 'static) -> Self {
        self.comm = Some(Box::new(comm));
        self
    }

    pub fn with_informs(mut self, informs: BTreeMap<i32, String>) -> Self {
        self.informs = informs;
        self
    }

    pub fn comm(&self) -> Option<&dyn Communicator> {
        self.comm.as_deref()
    }

    pub fn informs(&self) -> &BTreeMap<i32, String> {
        &self.informs
    }

    /// Message for an exit code
    pub fn inform(&self, code: i32) -> Option<&str> {
        self.informs.get(&code).map(String::as_str)
    }

    pub fn registry(&self) -> &OptionsRegistry {
        &self.options
    }

    pub fn get_option(&self, name: &str) -> Result<&OptionValue, OptionsError> {
        self.options.get_option(name)
    }

    pub fn set_option(&mut self, name: &str, value: impl Into<OptionValue>) -> Result<(), OptionsError> {
        self.options.set_option(name, value)
    }

    pub fn get_options(&self) -> &OptionMap {
        self.options.get_options()
    }

    pub fn get_modified_options(&self) -> OptionMap {
        self.options.get_modified_options()
    }

    pub fn print_options(&self) -> io::Result<()> {
        self.options.print_options(&self.options_title(), self.comm())
    }

    pub fn print_modified_options(&self) -> io::Result<()> {
        self.options
            .print_modified_options(&self.modified_title(), self.comm())
    }

    /// Write the option table to `out` instead of stdout
    pub fn write_options<W: Write>(&self, out: &mut W) -> io::Result<bool> {
        self.options.write_options(&self.options_title(), self.comm(), out)
    }

    pub fn write_modified_options<W: Write>(&self, out: &mut W) -> io::Result<bool> {
        self.options
            .write_modified_options(&self.modified_title(), self.comm(), out)
    }

    fn options_title(&self) -> String {
        format!("All {} options:", self.name)
    }

    fn modified_title(&self) -> String {
        format!("Modified {} options:", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comm::StaticComm;
    use crate::config::options::registrations::demo_schema;

    fn solver() -> BaseSolver {
        BaseSolver::new(
            "test",
            "Solver for testing",
            demo_schema().unwrap(),
            [("floatOption", OptionValue::Float(200.0))],
            RegistryConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_informs_lookup() {
        let informs = BTreeMap::from([(0, "Success".to_string()), (1, "Failure 1".to_string())]);
        let solver = solver().with_informs(informs);
        assert_eq!(solver.inform(0), Some("Success"));
        assert_eq!(solver.inform(2), None);
    }

    #[test]
    fn test_write_without_comm() {
        let solver = solver();
        assert!(solver.comm().is_none());

        let mut out = Vec::new();
        assert!(solver.write_options(&mut out).unwrap());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("All test options:"));
        assert!(text.contains("floatOption : 200.0"));
    }

    #[test]
    fn test_write_on_non_root_rank() {
        let solver = solver().with_comm(StaticComm::new(1, 2));
        assert_eq!(solver.comm().map(|c| c.size()), Some(2));

        let mut out = Vec::new();
        assert!(!solver.write_modified_options(&mut out).unwrap());
        assert!(out.is_empty());
    }

    #[test]
    fn test_debug_output() {
        let text = format!("{:?}", solver().with_comm(StaticComm::new(1, 2)));
        assert!(text.starts_with("BaseSolver"));
        assert!(text.contains("name: \"test\""));
        assert!(text.contains("comm: Some((1, 2))"));

        let err = BaseSolver::new(
            "test",
            "",
            demo_schema().unwrap(),
            [("intOption", 4)],
            RegistryConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, OptionsError::Value { .. }));
    }

    #[test]
    fn test_modified_title() {
        let mut solver = solver();
        solver.set_option("boolOption", false).unwrap();

        let mut out = Vec::new();
        solver.write_modified_options(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Modified test options:"));
        assert!(text.contains("boolOption"));
        assert!(!text.contains("intOption"));
    }
}
