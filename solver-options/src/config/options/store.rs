//! Insertion-ordered option value map with a configurable name-folding policy

use super::types::OptionValue;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Fold an option name into its lookup key.
///
/// Case-insensitive registries compare names in lowercase; case-sensitive ones
/// use the name untouched.
pub fn canonical_name(name: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        name.to_string()
    } else {
        name.to_lowercase()
    }
}

/// Ordered name → value map.
///
/// Entries keep the spelling they were first inserted with. Lookups go through
/// [`canonical_name`], so a case-insensitive map answers `intoption`,
/// `INTOPTION` and `intOption` alike.
#[derive(Debug, Clone, Default)]
pub struct OptionMap {
    case_sensitive: bool,
    entries: Vec<(String, OptionValue)>,
    index: HashMap<String, usize>,
}

impl OptionMap {
    /// Create an empty map with the given case policy
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            case_sensitive,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Insert or overwrite a value.
    ///
    /// Overwriting keeps the entry's original spelling and position.
    /// Returns the previous value, if any.
    pub fn insert(&mut self, name: &str, value: OptionValue) -> Option<OptionValue> {
        let key = canonical_name(name, self.case_sensitive);
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((name.to_string(), value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.index
            .get(&canonical_name(name, self.case_sensitive))
            .map(|&pos| &self.entries[pos].1)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.index.contains_key(&canonical_name(name, self.case_sensitive))
    }

    /// Spelling the entry was stored under
    pub fn stored_name(&self, name: &str) -> Option<&str> {
        self.index
            .get(&canonical_name(name, self.case_sensitive))
            .map(|&pos| self.entries[pos].0.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

/// Maps compare entry by entry, order included
impl PartialEq for OptionMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<'a> IntoIterator for &'a OptionMap {
    type Item = (&'a str, &'a OptionValue);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a OptionValue)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl Serialize for OptionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
